//! CSV record sink
//!
//! Writes one `forti_lists_{level}.csv` per risk level into the datasets
//! directory, with a `title,link` header row. Fields containing the
//! separator, quotes, or newlines are quoted with doubled-quote escaping.

use crate::output::traits::{OutputResult, RecordSink};
use crate::scraper::Entry;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Record sink writing per-level CSV files
#[derive(Debug)]
pub struct CsvRecordSink {
    dir: PathBuf,
}

impl CsvRecordSink {
    /// Creates the sink, ensuring the datasets directory exists
    pub fn new(dir: &Path) -> io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the CSV file for one risk level
    pub fn level_path(&self, level: u32) -> PathBuf {
        self.dir.join(format!("forti_lists_{}.csv", level))
    }
}

impl RecordSink for CsvRecordSink {
    fn write_level(&self, level: u32, entries: &[Entry]) -> OutputResult<()> {
        if entries.is_empty() {
            tracing::warn!("No data to save for level {}", level);
            return Ok(());
        }

        let path = self.level_path(level);
        let mut writer = BufWriter::new(File::create(&path)?);

        write_row(&mut writer, &["title", "link"])?;
        for entry in entries {
            write_row(&mut writer, &[entry.title.as_str(), entry.link.as_str()])?;
        }
        writer.flush()?;

        tracing::info!("Saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes a single CSV row to any writer
fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
