//! Run controller - drives the whole scrape
//!
//! Levels are processed strictly sequentially, so peak concurrency is one
//! level's page count and a failure is always attributable to the level
//! being worked. The controller performs no retries of its own; everything
//! transient is absorbed inside the fetcher, and exhausted pages surface
//! here only as already-collected skip records.

use crate::config::Config;
use crate::output::{CsvRecordSink, JsonSkipLog, OutputError, RecordSink, SkipLog, SkipLogSink};
use crate::scraper::extractor::EntryExtractor;
use crate::scraper::fetcher::build_http_client;
use crate::scraper::level::scrape_level;
use crate::scraper::retry::RetryPolicy;
use crate::ScrapeError;
use reqwest::Client;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main run controller
pub struct Runner {
    config: Config,
    client: Client,
    policy: RetryPolicy,
    extractor: EntryExtractor,
    records: Box<dyn RecordSink>,
    skip_log: Box<dyn SkipLogSink>,
}

impl Runner {
    /// Creates a runner with the standard file sinks
    ///
    /// The datasets directory is created here if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Runner)` - Ready to run
    /// * `Err(ScrapeError)` - Failed to build the client, extractor, or sinks
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let records = CsvRecordSink::new(Path::new(&config.output.datasets_dir))?;
        let skip_log = JsonSkipLog::new(PathBuf::from(&config.output.skipped_path));
        Self::with_sinks(config, Box::new(records), Box::new(skip_log))
    }

    /// Creates a runner with caller-provided sinks
    ///
    /// Used by tests to capture sink writes in memory.
    pub fn with_sinks(
        config: Config,
        records: Box<dyn RecordSink>,
        skip_log: Box<dyn SkipLogSink>,
    ) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.http)?;
        let policy = RetryPolicy::from_config(&config.retry);
        let extractor = EntryExtractor::new(&config.scraper.base_url)?;

        Ok(Self {
            config,
            client,
            policy,
            extractor,
            records,
            skip_log,
        })
    }

    /// Runs the full scrape
    ///
    /// For each configured risk level in order: orchestrate the level's page
    /// range, hand the aggregated entries to the record sink, and fold the
    /// level's skip records into the run-wide log. The skip log is written
    /// exactly once, after the last level.
    ///
    /// Sink write failures are logged and do not stop later levels; the
    /// first one is returned at the end so the process can exit non-zero.
    pub async fn run(&self) -> Result<(), ScrapeError> {
        let start_time = std::time::Instant::now();
        let mut skipped: SkipLog = BTreeMap::new();
        let mut sink_failure: Option<OutputError> = None;

        for &level in &self.config.scraper.risk_levels {
            tracing::info!("Starting scraping for risk level {}", level);

            let report = scrape_level(
                &self.client,
                &self.config,
                &self.policy,
                &self.extractor,
                level,
            )
            .await;

            tracing::info!(
                "Risk level {}: {} entries, {} skipped pages",
                level,
                report.entries.len(),
                report.skipped.len()
            );

            if let Err(e) = self.records.write_level(level, &report.entries) {
                tracing::error!("Error saving entries for level {}: {}", level, e);
                sink_failure.get_or_insert(e);
            }

            // Every configured level gets a key, even with nothing skipped
            skipped.insert(level, report.skipped);
        }

        if let Err(e) = self.skip_log.write(&skipped) {
            tracing::error!("Error saving skip log: {}", e);
            sink_failure.get_or_insert(e);
        }

        tracing::info!("Scraping completed in {:?}", start_time.elapsed());

        match sink_failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

/// Runs a complete scrape with the standard file sinks
///
/// # Arguments
///
/// * `config` - The validated scraper configuration
///
/// # Returns
///
/// * `Ok(())` - Run completed; partial page failures are in the skip log
/// * `Err(ScrapeError)` - Setup failed or a sink write failed
pub async fn scrape(config: Config) -> Result<(), ScrapeError> {
    Runner::new(config)?.run().await
}
