//! Error categorization.
//!
//! Maps pipeline errors onto the flat `ErrorType` classification.

use super::types::{DecodeError, ErrorType, FetchError, ParseError, TransportError};

/// Categorizes a fetch error into an `ErrorType`.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Parse(e) => match e {
            ParseError::UnsupportedScheme(_) => ErrorType::UnsupportedScheme,
            ParseError::MissingHost(_) => ErrorType::MissingHost,
            ParseError::InvalidPort { .. } => ErrorType::InvalidPort,
        },
        FetchError::Transport(e) => match e {
            TransportError::ResolutionFailed { .. } => ErrorType::ResolutionFailed,
            TransportError::ConnectionFailed { .. } => ErrorType::ConnectionFailed,
            TransportError::Timeout { .. } => ErrorType::Timeout,
            TransportError::SendFailed { .. } => ErrorType::SendFailed,
            TransportError::ReadFailed { .. } => ErrorType::ReadFailed,
        },
        FetchError::Decode(e) => match e {
            DecodeError::MalformedStatusLine(_) => ErrorType::MalformedStatusLine,
            DecodeError::MalformedChunk(_) => ErrorType::MalformedChunk,
        },
    }
}
