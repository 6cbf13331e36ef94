//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for each pipeline stage
//! - Failure classification (`ErrorType`) and categorization
//! - Processing statistics tracking (failure counters per type)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_fetch_error;
pub use stats::ProcessingStats;
pub use types::{
    DecodeError, ErrorType, FetchError, InitializationError, ParseError, TransportError,
};
