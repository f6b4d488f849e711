//! Planet Catalog Library
//!
//! Parses, validates and reports line-oriented catalogs of celestial bodies.
//!
//! This library provides tools for:
//! - Tokenizing catalog lines with shell-style quoting
//! - Recognizing generic, habitable and mining planet records by arity
//! - Validating discovery dates and physical quantities on construction
//! - Loading and saving catalog files with per-line load statistics
//! - Rendering human-readable and JSON reports

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_store;
        pub mod record_parser;
        pub mod report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Catalog, FieldMap, FieldValue, Record, RecordKind};
pub use config::{CatalogConfig, OutputFormat};
pub use error::{Error, InvalidRecordData, ReasonCode, Result};
