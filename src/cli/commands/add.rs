//! Add command: validate one record and append it to the catalog

use super::shared::{RunSummary, load_for_session};
use crate::Result;
use crate::app::services::catalog_store::append_record;
use crate::app::services::record_parser::Dispatcher;
use crate::cli::args::AddArgs;
use crate::config::CatalogConfig;
use colored::*;
use tracing::{info, warn};

pub fn run_add(config: &CatalogConfig, args: &AddArgs) -> Result<RunSummary> {
    // validate before touching the file
    let record = args.to_record()?;
    if record.distance_to_sun().is_some() && config.save_on_add {
        warn!("Distance to the Sun is not stored in the catalog file");
    }

    let mut loaded = load_for_session(config, &Dispatcher::default())?;
    let name = record.name().to_string();
    let kind = record.kind();

    // append so comments and rejected lines already in the file are kept
    if config.save_on_add {
        append_record(config.data_file(), &record)?;
        info!("Catalog updated: {}", config.data_file().display());
    }
    loaded.catalog.add(record);

    println!(
        "{}",
        format!("Planet '{}' added ({} record)", name, kind).green()
    );

    Ok(RunSummary {
        records: loaded.catalog.len(),
        records_added: 1,
        lines_rejected: loaded.stats.lines_rejected,
        failed: false,
    })
}
