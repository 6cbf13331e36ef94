//! HTML scanning and data extraction.
//!
//! This module pulls the pieces the renderer shows out of a page body:
//! - Title (first `<title>`)
//! - `<h1>` headings
//! - Anchor links with their text
//! - A plain-text snippet of the visible content
//!
//! All scanning is done with precompiled regular expressions; there is no DOM.

mod html;

// Re-export public API
pub use html::{extract, extract_headings, extract_links, extract_text, extract_title};
