//! Catalog file loading
//!
//! Lines are read front to back and handed to the [`Dispatcher`] one at a
//! time. A line that no parser accepts, or that is not valid UTF-8, is logged
//! and counted but never stops the load.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::models::Catalog;
use crate::app::services::record_parser::{DispatchOutcome, Dispatcher, LoadStats};
use crate::{Error, Result};

/// Records and statistics from one catalog load
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Successfully parsed records, in file order
    pub catalog: Catalog,

    /// Line-level statistics
    pub stats: LoadStats,

    /// True when the catalog file did not exist
    pub source_missing: bool,
}

/// Load a catalog file; a missing file is an [`Error::FileNotFound`]
pub fn load_catalog(path: &Path, dispatcher: &Dispatcher) -> Result<LoadResult> {
    info!("Loading catalog: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
        _ => Error::io(format!("Failed to open {}", path.display()), e),
    })?;

    let result = read_catalog(BufReader::new(file), dispatcher)?;

    info!(
        "Loaded {} records from {} lines ({} rejected)",
        result.stats.records_parsed, result.stats.total_lines, result.stats.lines_rejected
    );

    Ok(result)
}

/// Load a catalog file, treating a missing file as an empty catalog
pub fn load_or_empty(path: &Path, dispatcher: &Dispatcher) -> Result<LoadResult> {
    match load_catalog(path, dispatcher) {
        Err(Error::FileNotFound { path }) => {
            warn!("Catalog file not found: {}", path);
            Ok(LoadResult {
                source_missing: true,
                ..LoadResult::default()
            })
        }
        other => other,
    }
}

/// Read catalog lines from any buffered reader
pub fn read_catalog<R: BufRead>(reader: R, dispatcher: &Dispatcher) -> Result<LoadResult> {
    let mut catalog = Catalog::new();
    let mut stats = LoadStats::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        stats.total_lines += 1;

        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Line {}: not valid UTF-8, skipping", line_number);
                stats.record_rejected(line_number, "line is not valid UTF-8");
                continue;
            }
            Err(e) => {
                return Err(Error::io(
                    format!("Failed to read line {}", line_number),
                    e,
                ));
            }
        };

        let outcome = dispatcher.dispatch(&line);
        let summary = outcome.rejection_summary();

        match outcome {
            DispatchOutcome::Skipped => stats.skipped_lines += 1,
            DispatchOutcome::Parsed(record) => {
                debug!("Line {}: {} record '{}'", line_number, record.kind(), record.name());
                stats.record_parsed(record.kind());
                catalog.add(record);
            }
            DispatchOutcome::Rejected(_) => {
                let summary = summary.unwrap_or_default();
                warn!("Line {}: unparseable record ({})", line_number, summary);
                stats.record_rejected(line_number, summary);
            }
        }
    }

    Ok(LoadResult {
        catalog,
        stats,
        source_missing: false,
    })
}
