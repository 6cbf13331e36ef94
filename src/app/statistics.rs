//! End-of-run statistics.

use log::info;

use crate::error_handling::ProcessingStats;

/// Prints a one-line summary of the run.
pub fn print_summary(total: usize, succeeded: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "✅ Opened {} tab{} ({} succeeded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        succeeded,
        failed,
        elapsed_seconds
    );
}

/// Prints failure counts per error type to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for (error_type, count) in error_stats.nonzero_errors() {
        info!("   {}: {}", error_type.as_str(), count);
    }
}
