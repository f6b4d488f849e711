//! Command implementations for the planet catalog CLI
//!
//! Each command lives in its own module:
//! - `menu`: interactive list/add/exit loop (default)
//! - `list`: print the catalog report
//! - `add`: validate and append one record
//! - `check`: per-line parse outcomes and load statistics

pub mod add;
pub mod check;
pub mod list;
pub mod menu;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the selected subcommand
pub fn run(args: Args) -> Result<RunSummary> {
    let config = args.to_config();
    config.validate()?;

    match args.get_command() {
        Commands::Menu => menu::run_menu(config),
        Commands::List(_) => Ok(list::run_list(&config)?),
        Commands::Add(add_args) => Ok(add::run_add(&config, &add_args)?),
        Commands::Check => Ok(check::run_check(&config)?),
    }
}
