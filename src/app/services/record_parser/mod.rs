//! Record parser for planet catalog lines
//!
//! Turns one raw catalog line into a typed [`Record`](crate::app::models::Record)
//! or an [`InvalidRecordData`](crate::error::InvalidRecordData) explaining the
//! first rule the line broke.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Shell-like splitting with double-quoted spans
//! - [`validators`] - Date format, numeric conversion and range checks
//! - [`parsers`] - One parser per record variant
//! - [`dispatcher`] - Ordered parser selection for a single line
//! - [`stats`] - Dispatch statistics
//!
//! ## Usage
//!
//! ```rust
//! use planet_catalog::app::services::record_parser::{DispatchOutcome, Dispatcher};
//!
//! let dispatcher = Dispatcher::default();
//! match dispatcher.dispatch(r#""Earth" 0001.01.01 6371.0 5.97e24 15.0 0.9"#) {
//!     DispatchOutcome::Parsed(record) => println!("{} ({})", record.name(), record.kind()),
//!     DispatchOutcome::Rejected(failures) => println!("rejected by {} parsers", failures.len()),
//!     DispatchOutcome::Skipped => {}
//! }
//! ```

pub mod dispatcher;
pub mod parsers;
pub mod stats;
pub mod tokenizer;
pub mod validators;

#[cfg(test)]
pub mod tests;

pub use dispatcher::{DispatchOutcome, Dispatcher, ParserEntry};
pub use parsers::{parse_generic, parse_habitable, parse_mining};
pub use stats::LoadStats;
pub use tokenizer::{TokenizeError, tokenize};
pub use validators::is_valid_date;
