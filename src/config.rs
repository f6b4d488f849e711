//! Configuration management and validation.
//!
//! Holds the settings a catalog session runs with: which file to read and
//! write, how reports are rendered and whether additions are saved right away.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered human-readable lines
    #[default]
    Human,
    /// JSON array of field projections
    Json,
}

/// Settings for one catalog session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file read on start and written after additions
    pub data_file: PathBuf,

    /// Report format for listings
    pub output_format: OutputFormat,

    /// Save the catalog immediately after a record is added
    pub save_on_add: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            output_format: OutputFormat::Human,
            save_on_add: true,
        }
    }
}

impl CatalogConfig {
    /// Use a different catalog file
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Use a different report format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Keep additions in memory only
    pub fn without_autosave(mut self) -> Self {
        self.save_on_add = false;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::configuration("Catalog file path cannot be empty"));
        }

        if self.data_file.is_dir() {
            return Err(Error::configuration(format!(
                "Catalog file path is a directory: {}",
                self.data_file.display()
            )));
        }

        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Catalog file directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
