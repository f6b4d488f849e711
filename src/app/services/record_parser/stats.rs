//! Dispatch statistics for catalog loading
//!
//! Tracks how many lines were read, skipped, parsed per variant and rejected,
//! along with the rejection messages for reporting.

use crate::app::models::RecordKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Line-level statistics collected while loading a catalog
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Total number of lines read
    pub total_lines: usize,

    /// Blank and comment lines
    pub skipped_lines: usize,

    /// Lines turned into records
    pub records_parsed: usize,

    /// Lines no parser accepted (including unreadable lines)
    pub lines_rejected: usize,

    /// Parsed records per variant
    pub by_kind: BTreeMap<RecordKind, usize>,

    /// Rejection messages, prefixed with the line number
    pub errors: Vec<String>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parsed(&mut self, kind: RecordKind) {
        self.records_parsed += 1;
        *self.by_kind.entry(kind).or_insert(0) += 1;
    }

    pub fn record_rejected(&mut self, line_number: usize, message: impl AsRef<str>) {
        self.lines_rejected += 1;
        self.errors
            .push(format!("Line {}: {}", line_number, message.as_ref()));
    }

    /// Lines that reached the dispatcher (not blank, not comments)
    pub fn candidate_lines(&self) -> usize {
        self.records_parsed + self.lines_rejected
    }

    /// Percentage of candidate lines that produced a record
    pub fn success_rate(&self) -> f64 {
        let candidates = self.candidate_lines();
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// True when every candidate line produced a record
    pub fn is_clean(&self) -> bool {
        self.lines_rejected == 0
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
