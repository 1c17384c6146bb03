//! Output module for persisting scrape results
//!
//! This module handles:
//! - Writing per-level entry CSV files
//! - Writing the end-of-run JSON skip log
//! - The sink trait interfaces the run controller writes through

mod csv;
mod skipped;
mod traits;

pub use csv::CsvRecordSink;
pub use skipped::JsonSkipLog;
pub use traits::{OutputError, OutputResult, RecordSink, SkipLog, SkipLogSink};
