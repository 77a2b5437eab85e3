use anyhow::{bail, Context};
use clap::Parser;

use docchat_cli::chat::{render_response, run_chat};
use docchat_cli::cli::{Cli, Command};
use docchat_cli::logging::setup_tracing;
use docchat_cli::{ingest_paths, load_documents, load_settings};
use docchat_store::DocumentService;
use docchat_text::DocumentIndex;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    let settings = load_settings(cli.config_env.as_deref(), &cli.overrides)?;
    let service = DocumentService::new(&settings.retrieval);

    match cli.command {
        Command::Ask { path, query, doc, json } => {
            let receipts = ingest_paths(&service, &settings, &[path])?;
            let Some(last) = receipts.last() else { bail!("no documents found") };
            let id = doc.unwrap_or_else(|| last.id.clone());
            if !service.registry().contains(&id) && receipts.iter().any(|r| r.id == id) {
                tracing::warn!(id = %id, "requested document was evicted, raise --max-indexes to keep it");
            }
            let response = service.query(&id, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", render_response(&response));
            }
        }
        Command::Chat { paths } => {
            let receipts = ingest_paths(&service, &settings, &paths)?;
            for receipt in &receipts {
                tracing::info!(id = %receipt.id, pages = receipt.page_count, terms = receipt.term_count, "loaded");
            }
            let current = receipts.last().map(|r| r.id.clone());
            let stdin = std::io::stdin();
            run_chat(&service, current, stdin.lock(), std::io::stdout().lock()).context("chat session")?;
        }
        Command::Inspect { path, terms } => {
            // built outside the registry so capacity never hides a document
            for document in load_documents(&settings, &path)? {
                let index = DocumentIndex::build(document.meta, document.pages);
                println!("{} ({})", index.id(), index.meta().source_location);
                println!("  pages: {}  terms: {}", index.page_count(), index.term_count());
                let rare: Vec<String> =
                    index.rarest_terms(terms).iter().map(|(t, w)| format!("{t} ({w:.3})")).collect();
                println!("  rarest: {}", rare.join(", "));
            }
        }
    }
    Ok(())
}
