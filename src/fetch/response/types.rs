//! Response data structures.

use std::collections::BTreeMap;

use crate::config::REDIRECT_STATUS_CODES;

/// A decoded HTTP response, produced once per round-trip.
///
/// Header names are lower-cased; when a header appears more than once the
/// last value wins. `body` is already de-chunked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub http_version: String,
    pub status_code: u16,
    pub status_message: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// 301, 302, 307 or 308.
    pub fn is_redirect(&self) -> bool {
        REDIRECT_STATUS_CODES.contains(&self.status_code)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// `"<code> <message>"`, e.g. `"404 Not Found"`.
    pub fn status_line(&self) -> String {
        if self.status_message.is_empty() {
            self.status_code.to_string()
        } else {
            format!("{} {}", self.status_code, self.status_message)
        }
    }
}
