//! URL decomposition for plain `http://` URLs.
//!
//! Only the shape `http://host[:port][/path]` is understood. There is no
//! percent-decoding, no userinfo and no fragment handling; the query string
//! stays part of `path` and is sent verbatim.

use std::fmt;

use crate::config::{DEFAULT_PORT, HTTP_SCHEME, HTTP_SCHEME_PREFIX};
use crate::error_handling::ParseError;

/// The pieces of an absolute `http://` URL.
///
/// A value of this type always has scheme `http`, a non-empty host, a numeric
/// port and a path starting with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub port: String,
    pub path: String,
}

impl UrlParts {
    /// `http://host` plus `:port` when the port is not the default.
    pub fn origin(&self) -> String {
        if self.port == DEFAULT_PORT {
            format!("{}://{}", self.scheme, self.host)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    /// Value for the `Host` request header.
    pub fn host_header(&self) -> String {
        if self.port == DEFAULT_PORT {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// The port as a number. Always succeeds for values built by [`parse`].
    pub fn port_number(&self) -> Result<u16, ParseError> {
        self.port.parse::<u16>().map_err(|_| ParseError::InvalidPort {
            url: self.to_string(),
            port: self.port.clone(),
        })
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.path)
    }
}

/// Decomposes an absolute URL string.
///
/// # Errors
///
/// - `ParseError::UnsupportedScheme` unless the URL starts with `http://`
/// - `ParseError::MissingHost` when nothing precedes the port or path
/// - `ParseError::InvalidPort` when the port is not a number in `0..=65535`
pub fn parse(url: &str) -> Result<UrlParts, ParseError> {
    let url = url.trim();
    let rest = url
        .strip_prefix(HTTP_SCHEME_PREFIX)
        .ok_or_else(|| ParseError::UnsupportedScheme(url.to_string()))?;

    let (host_port, path) = match rest.find('/') {
        Some(slash) => (&rest[..slash], &rest[slash..]),
        None => (rest, "/"),
    };

    let (host, port) = match host_port.rfind(':') {
        Some(colon) => (&host_port[..colon], &host_port[colon + 1..]),
        None => (host_port, ""),
    };
    let port = if port.is_empty() { DEFAULT_PORT } else { port };

    if host.is_empty() {
        return Err(ParseError::MissingHost(url.to_string()));
    }
    if port.parse::<u16>().is_err() {
        return Err(ParseError::InvalidPort {
            url: url.to_string(),
            port: port.to_string(),
        });
    }

    Ok(UrlParts {
        scheme: HTTP_SCHEME.to_string(),
        host: host.to_string(),
        port: port.to_string(),
        path: path.to_string(),
    })
}
