//! List command: print every record in the catalog

use super::shared::{RunSummary, load_for_session};
use crate::Result;
use crate::app::services::record_parser::Dispatcher;
use crate::app::services::report::{render_json, render_listing};
use crate::config::{CatalogConfig, OutputFormat};
use tracing::info;

pub fn run_list(config: &CatalogConfig) -> Result<RunSummary> {
    let loaded = load_for_session(config, &Dispatcher::default())?;

    info!(
        "Listing {} records as {:?}",
        loaded.catalog.len(),
        config.output_format
    );

    let report = match config.output_format {
        OutputFormat::Human => render_listing(&loaded.catalog),
        OutputFormat::Json => render_json(&loaded.catalog)?,
    };
    println!("{}", report);

    Ok(RunSummary {
        records: loaded.catalog.len(),
        lines_rejected: loaded.stats.lines_rejected,
        ..RunSummary::default()
    })
}
