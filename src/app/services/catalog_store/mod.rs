//! Catalog file loading and saving
//!
//! - [`loader`] - Reads a catalog file line by line through the dispatcher
//! - [`persister`] - Appends or writes records in the same line format

pub mod loader;
pub mod persister;

#[cfg(test)]
pub mod tests;

pub use loader::{LoadResult, load_catalog, load_or_empty, read_catalog};
pub use persister::{append_record, format_record, save_catalog, write_catalog};
