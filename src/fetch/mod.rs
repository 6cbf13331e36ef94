//! Single-page fetch pipeline.
//!
//! URL string → [`url::parse`] → [`transport::connect_and_exchange`] →
//! [`response::decode`] → (3xx) [`redirects::fetch`] loops → HTML extraction.
//!
//! Everything here is blocking and owns its own socket and buffers, so
//! [`fetch_page`] can be called from any number of threads at once.

pub mod redirects;
pub mod response;
pub mod transport;
pub mod url;

use std::time::Duration;

use log::debug;

use crate::config::{
    Config, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
use crate::error_handling::{categorize_fetch_error, ErrorType};
use crate::models::FetchOutcome;
use crate::parse::extract;

pub use redirects::fetch;
pub use response::RawResponse;
pub use url::UrlParts;

/// Knobs for one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Connect timeout per address and read timeout per `read` call. Zero
    /// means the default.
    pub timeout: Duration,
    /// Redirects followed before the last response is returned as final.
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Config> for FetchOptions {
    fn from(config: &Config) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            max_redirects: config.max_redirects,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Fetches and extracts `url` with default options.
pub fn fetch_page(url: &str) -> FetchOutcome {
    fetch_page_with(url, &FetchOptions::default())
}

/// Fetches `url`, follows redirects, and extracts the final page.
///
/// Never fails: every error becomes a [`FetchOutcome::Failure`]. A final
/// status outside 2xx (including a redirect left over when the budget ran
/// out) is a failure of kind [`ErrorType::HttpStatus`].
pub fn fetch_page_with(url: &str, options: &FetchOptions) -> FetchOutcome {
    match fetch(url, options) {
        Ok(response) if response.is_success() => {
            let page = extract(&response.body);
            debug!(
                "Extracted {} from {}: {} heading(s), {} link(s)",
                page.title.as_deref().unwrap_or("(no title)"),
                url,
                page.headings.len(),
                page.links.len()
            );
            FetchOutcome::Success {
                url: url.to_string(),
                page,
            }
        }
        Ok(response) => FetchOutcome::Failure {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status_line()),
            kind: ErrorType::HttpStatus,
        },
        Err(e) => FetchOutcome::Failure {
            url: url.to_string(),
            reason: e.to_string(),
            kind: categorize_fetch_error(&e),
        },
    }
}

#[cfg(test)]
mod tests;
