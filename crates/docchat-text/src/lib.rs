//! docchat-text
//!
//! TF-IDF page retrieval over a single document: `tokenize` produces terms,
//! `index` builds the idf table and per-page vectors, `query` weights a query
//! against an existing idf table, `rank` scores pages by cosine similarity and
//! `snippet` renders the excerpts returned to users.
pub mod index;
pub mod query;
pub mod rank;
pub mod snippet;
pub mod tokenize;

use std::collections::{BTreeMap, HashMap};

/// Sparse term weights. Ordered so that summations run in a fixed order.
pub type TermVector = BTreeMap<String, f64>;

/// Term to inverse document frequency.
pub type IdfTable = HashMap<String, f64>;

pub use index::{build_index, DocumentIndex, SearchOptions};
pub use query::vectorize;
pub use rank::{cosine_similarity, rank, RankedPage};
pub use snippet::{format_response, snippet};
pub use tokenize::{term_counts, tokenize};
