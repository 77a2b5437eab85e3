//! Domain types shared by the retrieval engine, the registry and front ends.

use serde::{Deserialize, Serialize};

pub type DocumentId = String;

/// Identity of one uploaded document.
///
/// - `id`: opaque identifier chosen by the caller, unique per upload
/// - `name`: display name (usually the original file name)
/// - `source_location`: where the storage collaborator keeps the original
///   binary; never dereferenced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub id: DocumentId,
    pub name: String,
    pub source_location: String,
}

/// Everything the extraction collaborator hands over for one document.
/// `pages[i]` holds the text of page `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRequest {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub pages: Vec<String>,
}

/// Returned once a document is indexed and resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReceipt {
    pub id: DocumentId,
    pub name: String,
    pub source_location: String,
    pub page_count: usize,
    pub term_count: usize,
}

/// One ranked page. `page_index` is 0-based; `page_number()` is what users see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPage {
    pub page_index: usize,
    pub score: f64,
    pub snippet: String,
}

impl ScoredPage {
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// 1-based page number.
    pub page: usize,
}

/// Answer to a query against one document.
///
/// When `matched` is false the document was unknown or already evicted and
/// `citations` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub matched: bool,
    pub response_text: String,
    pub citations: Vec<Citation>,
    pub timing_millis: u64,
}
