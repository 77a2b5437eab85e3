use crate::TermVector;

/// Position and score of one page; `page_index` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPage {
    pub page_index: usize,
    pub score: f64,
}

fn norm(v: &TermVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity of two sparse vectors, 0.0 if either has zero norm.
///
/// The dot product walks the smaller vector and looks terms up in the larger.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let (na, nb) = (norm(a), norm(b));
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = smaller
        .iter()
        .filter_map(|(term, v)| larger.get(term).map(|u| v * u))
        .sum();
    dot / (na * nb)
}

/// Score every page, order by score descending (lower page index first on
/// ties), keep scores above `min_score` and return at most `k`.
pub fn rank(query: &TermVector, pages: &[TermVector], k: usize, min_score: f64) -> Vec<RankedPage> {
    let mut scored: Vec<RankedPage> = pages
        .iter()
        .enumerate()
        .map(|(page_index, page)| RankedPage { page_index, score: cosine_similarity(query, page) })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.page_index.cmp(&b.page_index)));
    scored.retain(|p| p.score > min_score);
    scored.truncate(k);
    scored
}
