//! Output sink traits and types
//!
//! This module defines the trait interfaces the run controller writes
//! through, so the concrete persistence formats are swappable (and mockable
//! in tests).

use crate::scraper::{Entry, SkipRecord};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The run-wide skip log: risk level -> permanently failed pages
///
/// A BTreeMap keeps the persisted document ordered by level. Every
/// configured level is present, even with an empty list.
pub type SkipLog = BTreeMap<u32, Vec<SkipRecord>>;

/// Persists one risk level's aggregated entries
///
/// Called exactly once per level. Implementations must tolerate an empty
/// entry list without erroring.
pub trait RecordSink {
    fn write_level(&self, level: u32, entries: &[Entry]) -> OutputResult<()>;
}

/// Persists the run-wide skip log
///
/// Called exactly once, at end of run.
pub trait SkipLogSink {
    fn write(&self, skipped: &SkipLog) -> OutputResult<()>;
}
