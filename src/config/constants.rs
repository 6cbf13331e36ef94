//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, buffer sizes, and other operational parameters.

use std::time::Duration;

/// Per-read socket timeout in milliseconds.
///
/// Applied to every individual read, not to the whole exchange: a slow peer
/// that keeps sending bytes can take longer than this in total.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Per-read socket timeout as a `Duration`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Maximum number of redirects to follow before returning the last response.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Maximum number of pages fetched at the same time.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "MiniBrowser/0.1";

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: &str = "80";

/// The only scheme the client speaks.
pub const HTTP_SCHEME: &str = "http";
/// Prefix every accepted URL starts with.
pub const HTTP_SCHEME_PREFIX: &str = "http://";

/// Size of the buffer used for each socket read.
pub const READ_BUFFER_SIZE: usize = 8192;

/// Number of snippet characters shown by the plain renderer.
pub const SNIPPET_PREVIEW_CHARS: usize = 400;

/// Status codes that are followed when a `Location` header is present.
///
/// 303 is deliberately absent: it is returned to the caller like any other
/// final response.
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 307, 308];

/// Pages opened when no URL is given on the command line.
pub const DEFAULT_URLS: &[&str] = &[
    "http://example.com/",
    "http://info.cern.ch/",
    "http://neverssl.com/",
];
