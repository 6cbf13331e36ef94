//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
    SNIPPET_PREVIEW_CHARS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How fetched pages are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed, human-readable page summaries
    Plain,
    /// One JSON object per URL
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary, or built programmatically with
/// `..Default::default()` when the crate is used as a library.
///
/// # Examples
///
/// ```bash
/// # Open the built-in demo pages
/// mini_browser
///
/// # Open two pages with a short read timeout
/// mini_browser http://example.com/ http://info.cern.ch/ --timeout-ms 2000
///
/// # Read URLs from a file, print JSON
/// mini_browser --file urls.txt --output json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mini_browser",
    about = "Fetches http:// pages concurrently and prints their title, headings, links and text."
)]
pub struct Config {
    /// URLs to open (http:// only)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one URL per line (blank lines and lines starting with '#' are skipped)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Per-read socket timeout in milliseconds (at least 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Maximum number of redirects to follow per URL
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Number of snippet characters shown per page (plain output)
    #[arg(long, default_value_t = SNIPPET_PREVIEW_CHARS)]
    pub snippet_chars: usize,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            snippet_chars: SNIPPET_PREVIEW_CHARS,
            output: OutputFormat::Plain,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
