//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mini_browser` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mini_browser::initialization::init_logger_with;
use mini_browser::{run_tabs, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Machine-readable output must stay free of ANSI escapes
    if config.output == OutputFormat::Json {
        colored::control::set_override(false);
    }

    match run_tabs(&config).await {
        Ok(report) => {
            if config.output == OutputFormat::Plain {
                println!("\nDone. {} tab(s) processed.", report.total);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("mini_browser error: {:#}", e);
            process::exit(1);
        }
    }
}
