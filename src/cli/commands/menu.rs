//! Interactive text menu
//!
//! The session owns the catalog for its whole lifetime. Input and output are
//! generic so the loop can be driven from tests.

use super::shared::{RunSummary, load_for_session};
use crate::app::models::{Catalog, PlanetBase, Record};
use crate::app::services::catalog_store::append_record;
use crate::app::services::record_parser::Dispatcher;
use crate::app::services::report::render_listing;
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use colored::*;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const RULE: &str = "==============================";

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a loaded catalog
pub struct Session {
    catalog: Catalog,
    config: CatalogConfig,
    records_added: usize,
    lines_rejected: usize,
}

impl Session {
    pub fn new(catalog: Catalog, config: CatalogConfig) -> Self {
        Self {
            catalog,
            config,
            records_added: 0,
            lines_rejected: 0,
        }
    }

    /// Load the configured catalog file, starting empty when it is missing
    pub fn load(config: CatalogConfig) -> Result<Self> {
        let loaded = load_for_session(&config, &Dispatcher::default())
            .with_context(|| format!("Failed to load {}", config.data_file().display()))?;
        let mut session = Self::new(loaded.catalog, config);
        session.lines_rejected = loaded.stats.lines_rejected;
        Ok(session)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<RunSummary> {
        loop {
            print_menu(&mut output)?;

            let Some(choice) = prompt(&mut input, &mut output, "Choose an action: ")? else {
                debug!("Input ended, leaving menu");
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::List) => {
                    writeln!(output, "{}", render_listing(&self.catalog))?;
                }
                Some(MenuChoice::Add) => {
                    if !self.add_interactive(&mut input, &mut output)? {
                        break;
                    }
                }
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Goodbye")?;
                    break;
                }
                None => {
                    writeln!(output, "{}", "Invalid choice".red())?;
                }
            }
        }

        Ok(RunSummary {
            records: self.catalog.len(),
            records_added: self.records_added,
            lines_rejected: self.lines_rejected,
            failed: false,
        })
    }

    /// Prompt for a generic record and add it; returns false when input ended
    fn add_interactive<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        let mut answers = Vec::with_capacity(4);
        for label in [
            "Planet name: ",
            "Discovery date (YYYY.MM.DD): ",
            "Radius (km): ",
            "Mass (kg): ",
        ] {
            match prompt(input, output, label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(false),
            }
        }

        let (Ok(radius), Ok(mass)) = (answers[2].parse::<f64>(), answers[3].parse::<f64>()) else {
            writeln!(output, "{}", "Error: radius and mass must be numbers".red())?;
            return Ok(true);
        };

        let base = match PlanetBase::new(&answers[0], &answers[1], radius, mass) {
            Ok(base) => base,
            Err(e) => {
                writeln!(output, "{}", format!("Error: {}", e).red())?;
                return Ok(true);
            }
        };

        let name = base.name().to_string();
        let record = Record::Generic(base);

        if self.config.save_on_add {
            append_record(self.config.data_file(), &record).context("Failed to save catalog")?;
        } else {
            warn!("Autosave disabled, '{}' is kept in memory only", name);
        }

        self.catalog.add(record);
        self.records_added += 1;
        info!("Added '{}' from the menu", name);
        writeln!(output, "{}", format!("Planet '{}' added", name).green())?;

        Ok(true)
    }
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "{}", "PLANET CATALOG".bright_green().bold())?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "1. List all planets")?;
    writeln!(output, "2. Add a planet")?;
    writeln!(output, "3. Exit")?;
    writeln!(output, "{}", RULE)?;
    Ok(())
}

/// Write a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run_menu(config: CatalogConfig) -> Result<RunSummary> {
    let mut session = Session::load(config)?;
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())
}
