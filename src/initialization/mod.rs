//! Application initialization and resource setup.
//!
//! This module provides the logger and the concurrency limiter used by the
//! fan-out. All initialization functions return proper error types.

mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// A count of zero is raised to one so that at least one fetch can run.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_semaphore_permits() {
        assert_eq!(init_semaphore(4).available_permits(), 4);
        assert_eq!(init_semaphore(0).available_permits(), 1);
    }
}
