use std::path::Path;

use crate::types::{DocumentId, IngestReceipt, IngestRequest, QueryResponse};

/// Turns a stored file into ordered page texts.
pub trait PageExtractor: Send + Sync {
    fn extract_pages(&self, path: &Path) -> crate::Result<Vec<String>>;
}

/// Ingest and query boundary of the retrieval core.
pub trait DocumentSearch: Send + Sync {
    fn ingest(&self, request: IngestRequest) -> IngestReceipt;
    fn query(&self, id: &str, text: &str) -> QueryResponse;
    fn resident_ids(&self) -> Vec<DocumentId>;
}
