//! Main application modules.
//!
//! This module provides console rendering of fetch outcomes and the
//! statistics printed at the end of a run.

pub mod render;
pub mod statistics;

// Re-export public API
pub use render::{render_failure, render_json, render_outcome, render_page};
pub use statistics::{print_error_statistics, print_summary};
