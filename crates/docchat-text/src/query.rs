use std::collections::HashMap;

use crate::tokenize::term_counts;
use crate::{IdfTable, TermVector};

/// Weight a free-text query against an existing idf table.
///
/// Uses the same formula as page vectors so the two are comparable. Terms the
/// document never contained get no weight and are left out.
pub fn vectorize(query: &str, idf: &IdfTable) -> TermVector {
    weigh(&term_counts(query), idf)
}

/// `(tf / distinct_terms) * idf[t]`, keeping only positive weights.
pub(crate) fn weigh(counts: &HashMap<String, usize>, idf: &IdfTable) -> TermVector {
    let distinct = counts.len() as f64;
    counts
        .iter()
        .filter_map(|(term, &tf)| {
            let weight = (tf as f64 / distinct) * idf.get(term).copied().unwrap_or(0.0);
            (weight > 0.0).then(|| (term.clone(), weight))
        })
        .collect()
}
