//! Console rendering of fetch outcomes.
//!
//! Every function here is pure and returns the text to print; callers decide
//! where it goes.

use colored::Colorize;

use crate::models::{ExtractedPage, FetchOutcome};

const PAGE_BANNER: &str = "==================== PAGE ====================";
const CLOSING_BANNER: &str = "==============================================";

/// Renders a successfully extracted page.
///
/// The snippet is cut to `snippet_chars` characters, with `...` appended when
/// anything was cut.
pub fn render_page(url: &str, page: &ExtractedPage, snippet_chars: usize) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&PAGE_BANNER.bold().to_string());
    out.push('\n');
    out.push_str(&format!("URL: {}\n", url.cyan()));
    let title = match &page.title {
        Some(title) => title.bold().to_string(),
        None => "(none)".dimmed().to_string(),
    };
    out.push_str(&format!("Title: {}\n\n", title));

    if !page.headings.is_empty() {
        out.push_str("# Headings (H1)\n");
        for heading in &page.headings {
            out.push_str(&format!("  - {}\n", heading));
        }
        out.push('\n');
    }

    out.push_str("Links:\n");
    if page.links.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, link) in page.links.iter().enumerate() {
        out.push_str(&format!(
            "  [{}] {} -> {}\n",
            i + 1,
            link.display_text(),
            link.href.blue()
        ));
    }

    out.push_str("\n--- Snippet ---\n");
    out.push_str(&truncate_chars(&page.snippet, snippet_chars));
    out.push('\n');
    out.push_str(&CLOSING_BANNER.bold().to_string());
    out.push('\n');
    out
}

/// Renders a failed URL as a single line.
pub fn render_failure(url: &str, reason: &str) -> String {
    format!("{} {} -> {}", "[ERROR]".red().bold(), url, reason)
}

/// Renders either kind of outcome in plain console form.
pub fn render_outcome(outcome: &FetchOutcome, snippet_chars: usize) -> String {
    match outcome {
        FetchOutcome::Success { url, page } => render_page(url, page, snippet_chars),
        FetchOutcome::Failure { url, reason, .. } => render_failure(url, reason),
    }
}

/// Renders an outcome as one JSON line.
pub fn render_json(outcome: &FetchOutcome) -> serde_json::Result<String> {
    serde_json::to_string(outcome)
}

/// First `max_chars` characters of `text`, plus `...` if it was longer.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
