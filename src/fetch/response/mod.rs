//! HTTP/1.1 response decoding.
//!
//! This module handles:
//! - Splitting raw bytes into status line, headers and body
//! - Reassembling chunked transfer-encoded bodies
//! - The decoded `RawResponse` type

mod chunked;
mod decode;
mod types;

pub use chunked::decode_chunked;
pub use decode::decode;
pub use types::RawResponse;
