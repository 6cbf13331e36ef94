//! mini_browser library: a from-scratch HTTP/1.1 page fetcher
//!
//! This library opens plain `http://` URLs over raw TCP, follows redirects,
//! de-chunks bodies and pulls the title, `<h1>` headings, links and a text
//! snippet out of each page. Pages can be fetched one at a time with
//! [`fetch_page`] or concurrently with [`open_many`].
//!
//! # Example
//!
//! ```no_run
//! use mini_browser::{fetch_page, FetchOutcome};
//!
//! match fetch_page("http://example.com/") {
//!     FetchOutcome::Success { page, .. } => {
//!         println!("{}", page.title.as_deref().unwrap_or("(none)"));
//!     }
//!     FetchOutcome::Failure { reason, .. } => eprintln!("{reason}"),
//! }
//! ```
//!
//! # Requirements
//!
//! [`fetch_page`] is blocking and needs no runtime. [`open_many`] and
//! [`run_tabs`] require a Tokio runtime.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod app;
pub mod config;
#[allow(missing_docs)]
pub mod error_handling;
#[allow(missing_docs)]
pub mod fetch;
pub mod initialization;
#[allow(missing_docs)]
pub mod models;
pub mod parse;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ErrorType, FetchError, ProcessingStats};
pub use fetch::{fetch_page, fetch_page_with, FetchOptions, RawResponse, UrlParts};
pub use models::{ExtractedPage, FetchOutcome, Link};
pub use run::{load_urls, open_many, parse_url_lines, run_tabs, TabReport};
