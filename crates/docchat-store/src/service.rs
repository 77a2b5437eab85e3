use std::sync::Arc;
use std::time::Instant;

use docchat_core::config::RetrievalSettings;
use docchat_core::traits::DocumentSearch;
use docchat_core::types::{Citation, DocumentId, IngestReceipt, IngestRequest, QueryResponse, ScoredPage};
use docchat_text::{format_response, DocumentIndex, SearchOptions};

use crate::registry::StoreRegistry;

pub const NOT_FOUND_TEXT: &str = "Document not found. Please upload it again.";

/// Ingest and query facade over a [`StoreRegistry`].
///
/// Indexes are built before they touch the registry, so a query sees either
/// the complete index or nothing.
pub struct DocumentService {
    registry: StoreRegistry,
    options: SearchOptions,
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new(&RetrievalSettings::default())
    }
}

impl DocumentService {
    pub fn new(settings: &RetrievalSettings) -> Self {
        Self { registry: StoreRegistry::new(settings.max_indexes), options: SearchOptions::from(settings) }
    }

    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn ingest(&self, request: IngestRequest) -> IngestReceipt {
        let IngestRequest { meta, pages } = request;
        let index = DocumentIndex::build(meta, pages);
        let receipt = IngestReceipt {
            id: index.id().to_string(),
            name: index.name().to_string(),
            source_location: index.meta().source_location.clone(),
            page_count: index.page_count(),
            term_count: index.term_count(),
        };
        self.registry.put(receipt.id.clone(), index);
        tracing::info!(id = %receipt.id, name = %receipt.name, pages = receipt.page_count, terms = receipt.term_count, "document indexed");
        receipt
    }

    pub fn get(&self, id: &str) -> Option<Arc<DocumentIndex>> {
        self.registry.get(id)
    }

    /// Ranked pages with snippets, or `None` if `id` is not resident.
    pub fn search(&self, id: &str, text: &str) -> Option<Vec<ScoredPage>> {
        let index = self.registry.get(id)?;
        Some(index.search(text, &self.options))
    }

    pub fn query(&self, id: &str, text: &str) -> QueryResponse {
        let started = Instant::now();
        let Some(index) = self.registry.get(id) else {
            tracing::debug!(id = %id, "query for unknown document");
            return QueryResponse {
                matched: false,
                response_text: NOT_FOUND_TEXT.to_string(),
                citations: Vec::new(),
                timing_millis: elapsed_millis(started),
            };
        };

        let hits = index.search(text, &self.options);
        let citations = hits.iter().map(|hit| Citation { page: hit.page_number() }).collect();
        let response_text = format_response(&hits);
        let timing_millis = elapsed_millis(started);
        tracing::debug!(id = %id, hits = hits.len(), timing_millis, "query processed");

        QueryResponse { matched: true, response_text, citations, timing_millis }
    }
}

fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl DocumentSearch for DocumentService {
    fn ingest(&self, request: IngestRequest) -> IngestReceipt {
        Self::ingest(self, request)
    }

    fn query(&self, id: &str, text: &str) -> QueryResponse {
        Self::query(self, id, text)
    }

    fn resident_ids(&self) -> Vec<DocumentId> {
        self.registry.ids()
    }
}
