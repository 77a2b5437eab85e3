use std::collections::HashMap;

/// Shortest token kept as a term.
pub const MIN_TERM_LEN: usize = 2;

/// Split text into index terms.
///
/// Lowercases, turns everything outside `[a-z0-9]` and whitespace into a
/// space, splits on whitespace and drops tokens shorter than
/// [`MIN_TERM_LEN`]. Order of appearance and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() { c } else { ' ' })
        .collect();
    normalized
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

/// Raw occurrence count per distinct term.
pub fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in tokenize(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
