use docchat_core::types::ScoredPage;

pub const RESPONSE_HEADER: &str = "Here are the most relevant excerpts:";
pub const NO_MATCH_TEXT: &str = "I could not find relevant content. Try rephrasing your question.";

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render ranked pages as the reply shown to the user.
pub fn format_response(pages: &[ScoredPage]) -> String {
    if pages.is_empty() {
        return NO_MATCH_TEXT.to_string();
    }
    let excerpts: Vec<String> = pages
        .iter()
        .map(|p| format!("Page {}: {}", p.page_number(), p.snippet))
        .collect();
    format!("{RESPONSE_HEADER}\n\n{}", excerpts.join("\n\n"))
}
