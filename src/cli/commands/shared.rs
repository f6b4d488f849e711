//! Shared components for CLI commands
//!
//! Logging setup, the per-run summary returned to `main`, and catalog
//! loading with the user-facing "file not found" notice.

use crate::app::services::catalog_store::{LoadResult, load_or_empty};
use crate::app::services::record_parser::Dispatcher;
use crate::cli::args::Args;
use crate::config::CatalogConfig;
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Outcome of one command run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records held in the catalog when the command finished
    pub records: usize,
    /// Records added during the run
    pub records_added: usize,
    /// Catalog lines no parser accepted
    pub lines_rejected: usize,
    /// The command wants a non-zero exit status
    pub failed: bool,
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the `-v`/`--quiet` derived level.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("planet_catalog={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to set up logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configured catalog, telling the user when the file is missing
pub fn load_for_session(config: &CatalogConfig, dispatcher: &Dispatcher) -> Result<LoadResult> {
    let result = load_or_empty(config.data_file(), dispatcher)?;

    if result.source_missing {
        eprintln!(
            "{}",
            format!(
                "Catalog file {} not found, starting with an empty catalog",
                config.data_file().display()
            )
            .yellow()
        );
    }

    Ok(result)
}
