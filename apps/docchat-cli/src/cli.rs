use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docchat_core::config::RetrievalSettings;

#[derive(Debug, Parser)]
#[command(name = "docchat", version, about = "Ask questions about text documents, answered with page citations")]
pub struct Cli {
    /// Configuration environment (overrides RUST_ENV)
    #[arg(long = "config-env", global = true)]
    pub config_env: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Index documents and answer one question
    Ask {
        /// File or directory of .txt files (pages separated by form feeds)
        path: PathBuf,
        query: String,
        /// Document id to ask, defaults to the last one loaded
        #[arg(long)]
        doc: Option<String>,
        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Index documents and read questions from stdin
    Chat {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print index statistics for documents
    Inspect {
        path: PathBuf,
        /// Number of rarest terms to list per document
        #[arg(long, default_value_t = 10)]
        terms: usize,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    #[arg(long, global = true)]
    pub top_k: Option<usize>,
    #[arg(long, global = true)]
    pub min_score: Option<f64>,
    #[arg(long, global = true)]
    pub max_indexes: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut RetrievalSettings) {
        if let Some(top_k) = self.top_k {
            settings.top_k = top_k;
        }
        if let Some(min_score) = self.min_score {
            settings.min_score = min_score;
        }
        if let Some(max_indexes) = self.max_indexes {
            settings.max_indexes = max_indexes;
        }
    }
}
