//! JSON skip log sink
//!
//! Persists the full map of risk level -> permanently failed pages as one
//! pretty-printed JSON document, written once at end of run.

use crate::output::traits::{OutputResult, SkipLog, SkipLogSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Skip log sink writing a single JSON file
#[derive(Debug)]
pub struct JsonSkipLog {
    path: PathBuf,
}

impl JsonSkipLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SkipLogSink for JsonSkipLog {
    fn write(&self, skipped: &SkipLog) -> OutputResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, skipped)?;
        writer.flush()?;

        tracing::info!("Saved skipped pages information to {}", self.path.display());
        Ok(())
    }
}
