use std::io::{BufRead, Write};

use docchat_core::types::QueryResponse;
use docchat_store::DocumentService;

pub const PROMPT: &str = "> ";

/// Render a response for a terminal: the text, then a citation footer.
pub fn render_response(response: &QueryResponse) -> String {
    if response.citations.is_empty() {
        return response.response_text.clone();
    }
    let pages: Vec<String> = response.citations.iter().map(|c| c.page.to_string()).collect();
    format!(
        "{}\n\n[pages {} | {} ms]",
        response.response_text,
        pages.join(", "),
        response.timing_millis
    )
}

/// Read questions line by line until EOF or `:quit`.
///
/// `:use <id>` switches the current document, `:list` prints resident ids
/// oldest first. Everything else is asked of the current document.
pub fn run_chat<R: BufRead, W: Write>(
    service: &DocumentService,
    mut current: Option<String>,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    if let Some(id) = &current {
        writeln!(output, "Chatting with {id}. Type :quit to leave.")?;
    }
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("", _) => {}
            (":quit" | ":q", _) => break,
            (":list", _) => {
                for id in service.registry().ids() {
                    let marker = if current.as_deref() == Some(id.as_str()) { '*' } else { ' ' };
                    writeln!(output, "{marker} {id}")?;
                }
            }
            (":use", id) if !id.is_empty() => {
                if service.registry().contains(id) {
                    writeln!(output, "Now chatting with {id}.")?;
                } else {
                    writeln!(output, "{id} is not loaded; later questions will report it missing.")?;
                }
                current = Some(id.to_string());
            }
            (":use", _) => writeln!(output, "Usage: :use <id>")?,
            _ => match &current {
                Some(id) => writeln!(output, "{}", render_response(&service.query(id, line)))?,
                None => writeln!(output, "No document selected. Use :use <id>.")?,
            },
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
