//! Data produced by a page fetch.

use serde::Serialize;

use crate::error_handling::ErrorType;

/// An anchor found in a page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Tag-stripped anchor text. Empty means "show the href instead".
    pub text: String,
    pub href: String,
}

impl Link {
    /// The text to show for this link.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.href
        } else {
            &self.text
        }
    }
}

/// What the extractor found in a page body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedPage {
    pub title: Option<String>,
    /// Text of every `<h1>`, in document order.
    pub headings: Vec<String>,
    pub links: Vec<Link>,
    /// Tag-stripped, whitespace-collapsed body text. Not truncated.
    pub snippet: String,
}

/// Result of opening one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    Success {
        url: String,
        page: ExtractedPage,
    },
    Failure {
        url: String,
        reason: String,
        kind: ErrorType,
    },
}

impl FetchOutcome {
    /// The URL that was requested (before any redirect).
    pub fn url(&self) -> &str {
        match self {
            FetchOutcome::Success { url, .. } | FetchOutcome::Failure { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}
