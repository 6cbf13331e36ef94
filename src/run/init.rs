//! URL list assembly.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::{Config, DEFAULT_URLS};

/// Collects the URLs to open: positional arguments first, then the lines of
/// `--file`. Falls back to the built-in demo URLs when both are empty.
///
/// # Errors
///
/// Returns an error if `--file` is given but cannot be read.
pub async fn load_urls(config: &Config) -> Result<Vec<String>> {
    let mut urls: Vec<String> = config
        .urls
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(path) = &config.file {
        let from_file = read_url_file(path).await?;
        info!("Read {} URL(s) from {}", from_file.len(), path.display());
        urls.extend(from_file);
    }

    if urls.is_empty() {
        info!("No URLs given, opening the demo pages");
        urls = DEFAULT_URLS.iter().map(|url| url.to_string()).collect();
    }

    Ok(urls)
}

async fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read URL file {}", path.display()))?;
    Ok(parse_url_lines(&contents))
}

/// One URL per line; blank lines and `#` comments are skipped.
pub fn parse_url_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
