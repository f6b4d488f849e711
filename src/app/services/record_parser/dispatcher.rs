//! Ordered parser selection for catalog lines
//!
//! Lines carry no type tag, so the dispatcher tries each registered parser in
//! priority order and keeps the first success. The default order is
//! habitable, mining, generic: the six-field variants go first so a line with
//! a bad value past the fourth field is not silently accepted as generic.
//!
//! A six-field line whose last two fields are numeric is claimed by the
//! habitable parser even when a mining record was intended; the order is kept
//! as-is for compatibility with existing catalog files.

use super::parsers::{parse_generic, parse_habitable, parse_mining};
use crate::app::models::{Record, RecordKind};
use crate::constants::is_ignorable_line;
use crate::error::InvalidRecordData;
use tracing::{debug, trace};

/// Signature shared by every variant parser
pub type ParseFn = fn(&str) -> Result<Record, InvalidRecordData>;

/// One parser registered with the dispatcher
#[derive(Debug, Clone, Copy)]
pub struct ParserEntry {
    pub kind: RecordKind,
    /// Lower values are tried first
    pub priority: u8,
    pub parse: ParseFn,
}

impl ParserEntry {
    pub fn new(kind: RecordKind, priority: u8, parse: ParseFn) -> Self {
        Self {
            kind,
            priority,
            parse,
        }
    }
}

/// Why one parser refused a line
#[derive(Debug, Clone, PartialEq)]
pub struct ParserFailure {
    pub kind: RecordKind,
    pub error: InvalidRecordData,
}

/// Result of dispatching one raw line
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Blank or comment line; no parser was run
    Skipped,
    /// The first parser (in priority order) that accepted the line
    Parsed(Record),
    /// Every parser failed; failures are listed in the order they were tried
    Rejected(Vec<ParserFailure>),
}

impl DispatchOutcome {
    pub fn record(self) -> Option<Record> {
        match self {
            DispatchOutcome::Parsed(record) => Some(record),
            _ => None,
        }
    }

    /// One-line description of all parser failures
    pub fn rejection_summary(&self) -> Option<String> {
        match self {
            DispatchOutcome::Rejected(failures) => Some(
                failures
                    .iter()
                    .map(|f| format!("{}: {}", f.kind, f.error))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        }
    }
}

/// Tries registered parsers in priority order against one line
#[derive(Debug, Clone)]
pub struct Dispatcher {
    entries: Vec<ParserEntry>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_entries(vec![
            ParserEntry::new(RecordKind::Habitable, 0, parse_habitable),
            ParserEntry::new(RecordKind::Mining, 1, parse_mining),
            ParserEntry::new(RecordKind::Generic, 2, parse_generic),
        ])
    }
}

impl Dispatcher {
    /// Build a dispatcher from arbitrary entries; ties keep insertion order
    pub fn with_entries(mut entries: Vec<ParserEntry>) -> Self {
        entries.sort_by_key(|entry| entry.priority);
        Self { entries }
    }

    /// Record kinds in the order they are tried
    pub fn order(&self) -> Vec<RecordKind> {
        self.entries.iter().map(|entry| entry.kind).collect()
    }

    /// Dispatch one raw line
    pub fn dispatch(&self, line: &str) -> DispatchOutcome {
        if is_ignorable_line(line) {
            return DispatchOutcome::Skipped;
        }

        let mut failures = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            match (entry.parse)(line) {
                Ok(record) => {
                    trace!("Line accepted by {} parser", entry.kind);
                    return DispatchOutcome::Parsed(record);
                }
                Err(error) => {
                    debug!("{} parser refused line: {}", entry.kind, error);
                    failures.push(ParserFailure {
                        kind: entry.kind,
                        error,
                    });
                }
            }
        }

        DispatchOutcome::Rejected(failures)
    }

    /// Dispatch one line and keep only the record, if any
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        self.dispatch(line).record()
    }
}
