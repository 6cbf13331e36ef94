//! Error type definitions.
//!
//! This module defines the error types raised by each stage of the fetch
//! pipeline, plus the `ErrorType` classification used for statistics.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A URL could not be decomposed. Raised before any network I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Anything not starting with `http://`, including `https://`.
    #[error("Only http:// URLs are supported. Bad URL: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("Invalid port '{port}' in URL: {url}")]
    InvalidPort { url: String, port: String },
}

/// The TCP exchange failed.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to resolve {host}:{port}: {reason}")]
    ResolutionFailed {
        host: String,
        port: String,
        reason: String,
    },

    /// Every resolved address refused or timed out.
    #[error("Connection failed to {host}:{port}")]
    ConnectionFailed { host: String, port: String },

    /// No byte arrived within the per-read timeout.
    #[error("Timed out after {timeout_ms}ms waiting for {host}:{port}")]
    Timeout {
        host: String,
        port: String,
        timeout_ms: u128,
    },

    #[error("Failed to send request to {host}:{port}: {source}")]
    SendFailed {
        host: String,
        port: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read response from {host}:{port}: {source}")]
    ReadFailed {
        host: String,
        port: String,
        #[source]
        source: std::io::Error,
    },
}

/// The received bytes are not a usable HTTP/1.1 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed status line: {0:?}")]
    MalformedStatusLine(String),

    #[error("Malformed chunk size line: {0:?}")]
    MalformedChunk(String),
}

/// Any failure of a single page fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Classification of every way a URL can end up as a failed outcome.
///
/// Used as the key of `ProcessingStats` counters and carried on
/// `FetchOutcome::Failure` so callers can group failures without matching
/// on message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    // URL errors
    UnsupportedScheme,
    MissingHost,
    InvalidPort,
    // Transport errors
    ResolutionFailed,
    ConnectionFailed,
    Timeout,
    SendFailed,
    ReadFailed,
    // Decode errors
    MalformedStatusLine,
    MalformedChunk,
    // Final response was not 2xx
    HttpStatus,
    // Worker task panicked
    TaskPanicked,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UnsupportedScheme => "Unsupported URL scheme",
            ErrorType::MissingHost => "URL without host",
            ErrorType::InvalidPort => "Invalid port",
            ErrorType::ResolutionFailed => "DNS resolution failed",
            ErrorType::ConnectionFailed => "Connection failed",
            ErrorType::Timeout => "Read timeout",
            ErrorType::SendFailed => "Request send failed",
            ErrorType::ReadFailed => "Response read failed",
            ErrorType::MalformedStatusLine => "Malformed status line",
            ErrorType::MalformedChunk => "Malformed chunked body",
            ErrorType::HttpStatus => "Non-success HTTP status",
            ErrorType::TaskPanicked => "Fetch task panicked",
        }
    }
}
