//! Command-line front end: load plain-text documents, index them in memory
//! and answer questions with page citations.
pub mod chat;
pub mod cli;
pub mod logging;

use std::path::{Path, PathBuf};

use anyhow::Context;
use docchat_core::config::{expand_path, Config, Settings};
use docchat_core::data_processor::{DataProcessor, LoadedDocument, PlainTextExtractor};
use docchat_core::types::{DocumentId, IngestReceipt};
use docchat_store::DocumentService;

use crate::cli::Overrides;

/// Load config for `env_name` (or `RUST_ENV`) and apply command-line overrides.
pub fn load_settings(env_name: Option<&str>, overrides: &Overrides) -> anyhow::Result<Settings> {
    let config = match env_name {
        Some(env_name) => Config::load_for_env(env_name),
        None => Config::load(),
    }
    .context("loading configuration")?;
    let mut settings = config.settings()?;
    overrides.apply(&mut settings.retrieval);
    settings.retrieval.validate()?;
    Ok(settings)
}

/// Load every document behind `paths` and ingest it. Receipts come back in
/// ingest order, so the last one is the most recently inserted.
pub fn ingest_paths(
    service: &DocumentService,
    settings: &Settings,
    paths: &[PathBuf],
) -> anyhow::Result<Vec<IngestReceipt>> {
    let mut receipts = Vec::new();
    for path in paths {
        for document in load_documents(settings, path)? {
            receipts.push(service.ingest(document.into()));
        }
    }
    let evicted = evicted_ids(service, &receipts);
    if !evicted.is_empty() {
        tracing::warn!(
            loaded = receipts.len(),
            capacity = service.registry().capacity(),
            evicted = ?evicted,
            "more documents than max_indexes, the oldest are no longer available"
        );
    }
    Ok(receipts)
}

/// Ids from `receipts` that later ingests pushed out of the registry, in
/// ingest order.
pub fn evicted_ids(service: &DocumentService, receipts: &[IngestReceipt]) -> Vec<DocumentId> {
    let mut evicted: Vec<DocumentId> = Vec::new();
    for receipt in receipts {
        if !service.registry().contains(&receipt.id) && !evicted.contains(&receipt.id) {
            evicted.push(receipt.id.clone());
        }
    }
    evicted
}

/// Read a file, or every `.txt` file below a directory, into pages.
/// `~` and `$VAR` in the path are expanded.
pub fn load_documents(settings: &Settings, path: &Path) -> anyhow::Result<Vec<LoadedDocument>> {
    let processor = DataProcessor::new(Box::new(PlainTextExtractor::new(&settings.ingest)));
    let path = expand_path(&path.to_string_lossy());
    processor.load_path(&path).with_context(|| format!("loading {}", path.display()))
}
