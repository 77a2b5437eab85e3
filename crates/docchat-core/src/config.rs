use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_MAX_INDEXES: usize = 5;
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MIN_SCORE: f64 = 0.01;
pub const DEFAULT_SNIPPET_CHARS: usize = 500;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 100 * 1024 * 1024;

/// Knobs of the retrieval core, `[retrieval]` in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// Resident document indexes before the oldest is evicted.
    pub max_indexes: usize,
    pub top_k: usize,
    /// Pages must score strictly above this to be returned.
    pub min_score: f64,
    pub snippet_chars: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            max_indexes: DEFAULT_MAX_INDEXES,
            top_k: DEFAULT_TOP_K,
            min_score: DEFAULT_MIN_SCORE,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

impl RetrievalSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_indexes == 0 {
            return Err(Error::InvalidConfig("retrieval.max_indexes must be at least 1".into()));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("retrieval.top_k must be at least 1".into()));
        }
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "retrieval.min_score must be a non-negative number, got {}",
                self.min_score
            )));
        }
        if self.snippet_chars == 0 {
            return Err(Error::InvalidConfig("retrieval.snippet_chars must be at least 1".into()));
        }
        Ok(())
    }
}

/// `[ingest]` in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    pub max_file_bytes: u64,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self { max_file_bytes: DEFAULT_MAX_FILE_BYTES }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub retrieval: RetrievalSettings,
    pub ingest: IngestSettings,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("DOCCHAT_").split("__"));

        let config = Self::from_figment(figment);
        config.settings()?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    /// Typed view of the whole configuration, validated.
    pub fn settings(&self) -> Result<Settings> {
        let settings: Settings = self.figment.extract()?;
        settings.retrieval.validate()?;
        Ok(settings)
    }
}

/// Expand `~` and `$VAR`/`${VAR}` in a command-line path. If a variable is
/// unset the path is used as written.
pub fn expand_path(raw: &str) -> PathBuf {
    let with_vars = shellexpand::env(raw).unwrap_or(Cow::Borrowed(raw));
    PathBuf::from(shellexpand::tilde(&with_vars).into_owned())
}
