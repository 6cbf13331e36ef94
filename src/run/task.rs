//! Concurrent page fetching.
//!
//! Each URL runs its blocking fetch on tokio's blocking pool. A semaphore
//! bounds how many fetches are in flight; completions are driven through a
//! `FuturesUnordered` so callers see outcomes as soon as they are ready.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};

use crate::error_handling::ErrorType;
use crate::fetch::{fetch_page_with, FetchOptions};
use crate::initialization::init_semaphore;
use crate::models::FetchOutcome;

/// Fetches every URL concurrently and returns the outcomes in input order.
///
/// At most `max_concurrency` fetches run at once (at least one). `on_outcome`
/// is called once per URL, in completion order, with the URL's index in
/// `urls`. A failing or panicking fetch only affects its own outcome.
pub async fn open_many<F>(
    urls: &[String],
    options: &FetchOptions,
    max_concurrency: usize,
    mut on_outcome: F,
) -> Vec<FetchOutcome>
where
    F: FnMut(usize, &FetchOutcome),
{
    let semaphore = init_semaphore(max_concurrency);
    let options = Arc::new(options.clone());
    let mut tasks = FuturesUnordered::new();

    for (index, url) in urls.iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let options = Arc::clone(&options);
        let url = url.clone();

        tasks.push(async move {
            // The semaphore is never closed, so acquisition only fails if that changes.
            let permit = semaphore.acquire_owned().await.ok();
            let task_url = url.clone();
            let joined = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                fetch_page_with(&task_url, &options)
            })
            .await;

            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    warn!("Fetch task for {} panicked: {:?}", url, join_error);
                    FetchOutcome::Failure {
                        url,
                        reason: format!("fetch task failed: {join_error}"),
                        kind: ErrorType::TaskPanicked,
                    }
                }
            };
            (index, outcome)
        });
    }

    let mut slots: Vec<Option<FetchOutcome>> = (0..urls.len()).map(|_| None).collect();
    while let Some((index, outcome)) = tasks.next().await {
        debug!(
            "Tab {} finished: {} ({})",
            index + 1,
            outcome.url(),
            if outcome.is_success() { "ok" } else { "failed" }
        );
        on_outcome(index, &outcome);
        slots[index] = Some(outcome);
    }

    slots.into_iter().flatten().collect()
}
