//! Scraper module for fetching and extracting listing pages
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching with bounded retry and backoff
//! - Entry extraction from listing markup
//! - Concurrent per-level page orchestration
//! - Sequential run control across risk levels

mod extractor;
mod fetcher;
mod level;
mod retry;
mod runner;

pub use extractor::{Entry, EntryExtractor};
pub use fetcher::{build_http_client, fetch_page, page_url, FetchFailure};
pub use level::{scrape_level, LevelReport, SkipRecord};
pub use retry::RetryPolicy;
pub use runner::{scrape, Runner};
