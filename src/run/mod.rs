//! Opening a set of tabs.
//!
//! `run_tabs` is the application entry point: it gathers URLs, fetches them
//! concurrently, prints each page as it completes and reports totals.

mod init;
mod task;

use std::io::Write;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::{print_error_statistics, print_summary, render_json, render_outcome};
use crate::config::{Config, OutputFormat};
use crate::error_handling::ProcessingStats;
use crate::fetch::FetchOptions;
use crate::models::FetchOutcome;

pub use init::{load_urls, parse_url_lines};
pub use task::open_many;

/// Results of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct TabReport {
    /// Number of URLs opened
    pub total: usize,
    /// Pages fetched with a 2xx final status
    pub succeeded: usize,
    /// Everything else
    pub failed: usize,
    /// Wall-clock time for the whole run
    pub elapsed_seconds: f64,
    /// One outcome per URL, in input order
    pub outcomes: Vec<FetchOutcome>,
}

/// Opens every configured URL and prints each page as it arrives.
///
/// Individual URL failures are reported and counted, never returned as
/// errors.
///
/// # Errors
///
/// Returns an error if the URL file cannot be read or stdout cannot be
/// written.
pub async fn run_tabs(config: &Config) -> Result<TabReport> {
    let urls = load_urls(config).await?;
    let options = FetchOptions::from(config);
    let error_stats = ProcessingStats::new();
    let start_time = std::time::Instant::now();

    if config.output == OutputFormat::Plain {
        println!(
            "MiniBrowser: fetching {} page(s) concurrently...",
            urls.len()
        );
    }
    info!(
        "Opening {} tab(s), max concurrency {}, timeout {:?}, max redirects {}",
        urls.len(),
        config.max_concurrency,
        options.timeout,
        options.max_redirects
    );

    let mut write_result: Result<()> = Ok(());
    let outcomes = open_many(&urls, &options, config.max_concurrency, |_, outcome| {
        if let FetchOutcome::Failure { url, reason, kind } = outcome {
            warn!("Failed to open {}: {}", url, reason);
            error_stats.increment_error(*kind);
        }
        if write_result.is_ok() {
            write_result = print_outcome(outcome, config);
        }
    })
    .await;
    write_result?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    let total = outcomes.len();
    let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
    let failed = total - succeeded;

    print_error_statistics(&error_stats);
    print_summary(total, succeeded, failed, elapsed_seconds);

    Ok(TabReport {
        total,
        succeeded,
        failed,
        elapsed_seconds,
        outcomes,
    })
}

fn print_outcome(outcome: &FetchOutcome, config: &Config) -> Result<()> {
    let text = match config.output {
        OutputFormat::Plain => render_outcome(outcome, config.snippet_chars),
        OutputFormat::Json => render_json(outcome).context("Failed to serialize outcome")?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
    Ok(())
}
