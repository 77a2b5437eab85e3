use std::collections::HashMap;

use docchat_core::config::{RetrievalSettings, DEFAULT_MIN_SCORE, DEFAULT_SNIPPET_CHARS, DEFAULT_TOP_K};
use docchat_core::types::{DocumentMeta, ScoredPage};

use crate::query::{vectorize, weigh};
use crate::rank::rank;
use crate::snippet::snippet;
use crate::tokenize::term_counts;
use crate::{IdfTable, TermVector};

/// Build the idf table and one weighted vector per page.
///
/// `idf[t] = ln((1 + N) / (1 + df[t])) + 1` where `N` is the page count and
/// `df[t]` the number of pages containing `t`. Page weights are
/// `(tf / distinct_terms_in_page) * idf[t]`. An empty page gets an empty vector.
pub fn build_index(pages: &[String]) -> (IdfTable, Vec<TermVector>) {
    let page_counts: Vec<HashMap<String, usize>> = pages.iter().map(|p| term_counts(p)).collect();

    let mut df: HashMap<&str, usize> = HashMap::new();
    for counts in &page_counts {
        // keys are distinct: each page adds at most one to a term's df
        for term in counts.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = pages.len() as f64;
    let idf: IdfTable = df
        .into_iter()
        .map(|(term, dfi)| (term.to_string(), ((1.0 + n) / (1.0 + dfi as f64)).ln() + 1.0))
        .collect();

    let vectors = page_counts.iter().map(|counts| weigh(counts, &idf)).collect();
    (idf, vectors)
}

/// Ranking knobs for a single query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub top_k: usize,
    pub min_score: f64,
    pub snippet_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K, min_score: DEFAULT_MIN_SCORE, snippet_chars: DEFAULT_SNIPPET_CHARS }
    }
}

impl From<&RetrievalSettings> for SearchOptions {
    fn from(settings: &RetrievalSettings) -> Self {
        Self { top_k: settings.top_k, min_score: settings.min_score, snippet_chars: settings.snippet_chars }
    }
}

/// Complete retrieval structure for one document.
///
/// Built in one step and never mutated: `pages` and `vectors` are aligned
/// one-to-one and every vector term has an idf entry.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    meta: DocumentMeta,
    pages: Vec<String>,
    idf: IdfTable,
    vectors: Vec<TermVector>,
}

impl DocumentIndex {
    pub fn build(meta: DocumentMeta, pages: Vec<String>) -> Self {
        let (idf, vectors) = build_index(&pages);
        tracing::debug!(id = %meta.id, pages = pages.len(), terms = idf.len(), "built document index");
        Self { meta, pages, idf, vectors }
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }

    /// Number of distinct terms in the document.
    pub fn term_count(&self) -> usize {
        self.idf.len()
    }

    /// Terms with the highest idf, i.e. the rarest across pages. Ties are
    /// broken alphabetically.
    pub fn rarest_terms(&self, limit: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self.idf.iter().map(|(t, w)| (t.as_str(), *w)).collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(limit);
        terms
    }

    /// Rank pages against `query` and attach excerpts.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<ScoredPage> {
        let query_vector = vectorize(query, &self.idf);
        rank(&query_vector, &self.vectors, options.top_k, options.min_score)
            .into_iter()
            .map(|hit| ScoredPage {
                page_index: hit.page_index,
                score: hit.score,
                snippet: snippet(&self.pages[hit.page_index], options.snippet_chars),
            })
            .collect()
    }
}
