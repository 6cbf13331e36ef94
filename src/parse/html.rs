//! Regex-based page scanning.
//!
//! This is deliberately not an HTML parser. Matching is case-insensitive and
//! non-greedy, so each element ends at its first closing tag; anything that
//! does not fit the expected shape is skipped.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ExtractedPage, Link};

const TITLE_PATTERN: &str = r"(?is)<title>(.*?)</title>";
const H1_PATTERN: &str = r"(?is)<h1>(.*?)</h1>";
// Group 1 is a double-quoted href, group 2 a single-quoted one, group 3 the inner HTML.
const ANCHOR_PATTERN: &str =
    r#"(?is)<a\s[^>]*?\bhref\s*=\s*(?:"([^"]+)"|'([^']+)')[^>]*>(.*?)</a\s*>"#;
const NESTED_ANCHOR_PATTERN: &str = r"(?i)<a\s";
const SCRIPT_PATTERN: &str = r"(?is)<script\b.*?</script\s*>";
const STYLE_PATTERN: &str = r"(?is)<style\b.*?</style\s*>";
const TAG_PATTERN: &str = r"<[^>]+>";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Helper function to compile a static regex pattern, panicking with a detailed error message
/// if compilation fails. Only used with the constant patterns above.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
static H1_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(H1_PATTERN, "H1_RE"));
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ANCHOR_PATTERN, "ANCHOR_RE"));
static NESTED_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NESTED_ANCHOR_PATTERN, "NESTED_ANCHOR_RE"));
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SCRIPT_PATTERN, "SCRIPT_RE"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(STYLE_PATTERN, "STYLE_RE"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TAG_PATTERN, "TAG_RE"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(WHITESPACE_PATTERN, "WHITESPACE_RE"));

/// Scans a response body for title, headings, links and text.
///
/// Never fails. Invalid UTF-8 is replaced with U+FFFD before scanning.
pub fn extract(body: &[u8]) -> ExtractedPage {
    let html = String::from_utf8_lossy(body);

    ExtractedPage {
        title: extract_title(&html),
        headings: extract_headings(&html),
        links: extract_links(&html),
        snippet: extract_text(&html),
    }
}

/// First `<title>` contents, whitespace collapsed. `None` when absent,
/// unclosed or blank.
pub fn extract_title(html: &str) -> Option<String> {
    let captured = TITLE_RE.captures(html)?.get(1)?.as_str();
    let title = collapse_whitespace(captured);
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Text of every closed `<h1>` in document order.
pub fn extract_headings(html: &str) -> Vec<String> {
    H1_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|inner| strip_tags(inner.as_str()))
        .collect()
}

/// Every closed anchor with a quoted, non-empty `href`, in document order.
///
/// An unclosed anchor is dropped rather than borrowing the next anchor's
/// `</a>`: when a match's inner HTML opens another anchor, scanning resumes
/// at that inner opening.
pub fn extract_links(html: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut start = 0;

    while let Some(caps) = ANCHOR_RE.captures_at(html, start) {
        let Some(whole) = caps.get(0) else { break };
        let inner = caps.get(3);

        let nested = inner.and_then(|m| {
            NESTED_ANCHOR_RE
                .find(m.as_str())
                .map(|n| m.start() + n.start())
        });
        if let Some(nested) = nested {
            start = nested;
            continue;
        }

        if let Some(href) = caps.get(1).or_else(|| caps.get(2)) {
            links.push(Link {
                text: strip_tags(inner.map_or("", |m| m.as_str())),
                href: href.as_str().to_string(),
            });
        }
        start = whole.end();
    }

    links
}

/// Visible text: script and style blocks dropped, tags removed, whitespace
/// collapsed.
pub fn extract_text(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, "");
    let without_styles = STYLE_RE.replace_all(&without_scripts, "");
    strip_tags(&without_styles)
}

fn strip_tags(fragment: &str) -> String {
    collapse_whitespace(&TAG_RE.replace_all(fragment, ""))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}
