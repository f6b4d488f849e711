//! Error handling for planet catalog operations.
//!
//! Record-level failures all funnel into [`InvalidRecordData`], distinguished
//! only by a [`ReasonCode`], so the dispatcher can catch-and-continue without
//! branching per error type. Everything outside a single record (files,
//! configuration, report output) is reported through [`Error`].

use std::fmt;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a line (or a set of constructor arguments) was not accepted as a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// The line could not be tokenized (unbalanced quotes)
    ParseError,
    /// Fewer tokens than the record variant requires
    InsufficientData,
    /// A numeric field was not a valid number
    NumberConversionError,
    /// Fields were well-formed but violate a record invariant
    InvalidValues,
}

impl ReasonCode {
    /// Machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            ReasonCode::ParseError => "parse_error",
            ReasonCode::InsufficientData => "insufficient_data",
            ReasonCode::NumberConversionError => "number_conversion_error",
            ReasonCode::InvalidValues => "invalid_values",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReasonCode::ParseError => "parse error",
            ReasonCode::InsufficientData => "insufficient data",
            ReasonCode::NumberConversionError => "number conversion error",
            ReasonCode::InvalidValues => "invalid values",
        };
        f.write_str(label)
    }
}

/// The single domain error for record parsing and construction
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{reason}: {detail}")]
pub struct InvalidRecordData {
    pub reason: ReasonCode,
    pub detail: String,
}

impl InvalidRecordData {
    pub fn new(reason: ReasonCode, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }

    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self::new(ReasonCode::ParseError, detail)
    }

    pub fn insufficient_data(detail: impl Into<String>) -> Self {
        Self::new(ReasonCode::InsufficientData, detail)
    }

    pub fn number_conversion(detail: impl Into<String>) -> Self {
        Self::new(ReasonCode::NumberConversionError, detail)
    }

    pub fn invalid_values(detail: impl Into<String>) -> Self {
        Self::new(ReasonCode::InvalidValues, detail)
    }
}

/// Errors raised outside the per-record pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Record rejected by validation
    #[error("Invalid record data: {0}")]
    InvalidRecord(#[from] InvalidRecordData),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The record-level reason code, if this error came from validation
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            Error::InvalidRecord(e) => Some(e.reason),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
