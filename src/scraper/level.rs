//! Per-level orchestration
//!
//! One risk level is a fixed dense page range. All pages are fetched
//! concurrently and consumed as they complete, so the aggregate entry order
//! is completion-dependent. A page whose retries are exhausted becomes a
//! [`SkipRecord`] and never aborts its siblings.

use crate::config::Config;
use crate::scraper::extractor::EntryExtractor;
use crate::scraper::fetcher::fetch_page;
use crate::scraper::retry::RetryPolicy;
use crate::scraper::Entry;
use reqwest::Client;
use serde::Serialize;
use tokio::task::JoinSet;

/// A page whose fetch permanently failed for one risk level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipRecord {
    /// Page number within the level
    pub page: u32,
    /// Description of the final error
    pub error: String,
}

/// Aggregate result of scraping one risk level
///
/// Partial success is success: `entries` holds everything the successful
/// pages produced even when `skipped` is non-empty.
#[derive(Debug, Default)]
pub struct LevelReport {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkipRecord>,
}

/// Scrapes every page of one risk level
///
/// Spawns one fetch task per page in `[1, max-pages-per-level]`, then drains
/// the set as tasks finish. Successful bodies are handed to the extractor in
/// the fan-in loop, so the skip list and the aggregate have a single writer
/// even though the fetches run in parallel. Returns only after every
/// launched task has completed.
pub async fn scrape_level(
    client: &Client,
    config: &Config,
    policy: &RetryPolicy,
    extractor: &EntryExtractor,
    level: u32,
) -> LevelReport {
    let mut tasks = JoinSet::new();

    for page in 1..=config.scraper.max_pages_per_level {
        let client = client.clone();
        let base_url = config.scraper.base_url.clone();
        let policy = policy.clone();
        tasks.spawn(async move { fetch_page(&client, &base_url, &policy, level, page).await });
    }

    let mut report = LevelReport::default();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(body)) => {
                report.entries.extend(extractor.extract(&body));
            }
            Ok(Err(failure)) => {
                tracing::warn!(
                    "Skipping page {} of level {} after {} attempts: {}",
                    failure.page,
                    level,
                    failure.attempts,
                    failure.error
                );
                report.skipped.push(SkipRecord {
                    page: failure.page,
                    error: failure.error,
                });
            }
            Err(join_error) => {
                // A panicked fetch task; the page is lost but the level goes on
                tracing::error!("Fetch task for level {} failed: {}", level, join_error);
            }
        }
    }

    tracing::debug!(
        "Level {} complete: {} entries, {} skipped pages",
        level,
        report.entries.len(),
        report.skipped.len()
    );

    report
}
