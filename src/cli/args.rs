//! Command-line argument definitions for the planet catalog
//!
//! This module defines the CLI interface using the clap derive API. Running
//! without a subcommand starts the interactive menu.

use crate::app::models::{HabitablePlanet, MiningPlanet, PlanetBase, Record};
use crate::app::services::record_parser::validators::ensure_finite;
use crate::constants::fields;
use crate::config::{CatalogConfig, OutputFormat};
use crate::error::InvalidRecordData;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the planet catalog
#[derive(Debug, Clone, Parser)]
#[command(
    name = "planet-catalog",
    version,
    about = "Parse, validate and report celestial body catalogs",
    long_about = "Reads a line-oriented catalog of celestial bodies (generic, habitable and \
                  mining planets), validates every record and prints a human-readable report. \
                  Run without a subcommand for the interactive menu."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to read and write
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        global = true,
        help = "Catalog file to read and write (default: planets.txt)"
    )]
    pub data_file: Option<PathBuf>,

    /// Verbose output (use multiple times for more verbosity)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Interactive menu: list, add, exit (default command)
    Menu,
    /// Print every record in the catalog
    List(ListArgs),
    /// Validate and append one record
    Add(AddArgs),
    /// Report how every catalog line is parsed
    Check,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the add command
///
/// Supplying `--temperature` and `--habitability` adds a habitable record,
/// `--resource` and `--difficulty` a mining record, neither a generic one.
#[derive(Debug, Clone, Parser)]
pub struct AddArgs {
    /// Planet name
    #[arg(long)]
    pub name: String,

    /// Discovery date as YYYY.MM.DD
    #[arg(long, value_name = "YYYY.MM.DD")]
    pub date: String,

    /// Radius in kilometers
    #[arg(long, allow_negative_numbers = true)]
    pub radius: f64,

    /// Mass in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub mass: f64,

    /// Distance to the Sun in kilometers (not stored in the catalog file)
    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Surface temperature in °C
    #[arg(long, allow_negative_numbers = true, requires = "habitability")]
    pub temperature: Option<f64>,

    /// Habitability score, conventionally 0..1
    #[arg(long, allow_negative_numbers = true, requires = "temperature")]
    pub habitability: Option<f64>,

    /// Main extractable resource
    #[arg(long, requires = "difficulty", conflicts_with_all = ["temperature", "habitability"])]
    pub resource: Option<String>,

    /// Extraction difficulty label
    #[arg(long, requires = "resource")]
    pub difficulty: Option<String>,

    /// Do not save the catalog file after adding
    #[arg(long = "no-save")]
    pub no_save: bool,
}

impl Args {
    /// The subcommand to run, defaulting to the interactive menu
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }

    /// Log level derived from `--quiet` and the `-v` count
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Session configuration from global arguments
    pub fn to_config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::default();
        if let Some(data_file) = &self.data_file {
            config = config.with_data_file(data_file);
        }
        if let Some(Commands::List(list_args)) = &self.command {
            config = config.with_output_format(list_args.format);
        }
        if let Some(Commands::Add(add_args)) = &self.command {
            if add_args.no_save {
                config = config.without_autosave();
            }
        }
        config
    }
}

impl AddArgs {
    /// Build the record these arguments describe, validating every field
    pub fn to_record(&self) -> Result<Record, InvalidRecordData> {
        let mut base = PlanetBase::new(&self.name, &self.date, self.radius, self.mass)?;
        if let Some(distance) = self.distance {
            ensure_finite(fields::DISTANCE, distance)?;
            base = base.with_distance_to_sun(distance);
        }

        match (
            self.temperature,
            self.habitability,
            &self.resource,
            &self.difficulty,
        ) {
            (Some(temperature), Some(habitability), None, None) => {
                ensure_finite(fields::TEMPERATURE, temperature)?;
                ensure_finite(fields::HABITABILITY, habitability)?;
                Ok(HabitablePlanet::new(base, temperature, habitability).into())
            }
            (None, None, Some(resource), Some(difficulty)) => {
                Ok(MiningPlanet::new(base, resource, difficulty)?.into())
            }
            (None, None, None, None) => Ok(Record::Generic(base)),
            _ => Err(InvalidRecordData::insufficient_data(
                "habitable records need --temperature and --habitability, \
                 mining records need --resource and --difficulty",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::RecordKind;
    use crate::error::ReasonCode;
    use std::path::Path;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn add_args(args: Args) -> AddArgs {
        match args.get_command() {
            Commands::Add(add) => add,
            other => panic!("expected add command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_menu() {
        let args = parse(&["planet-catalog"]);
        assert!(matches!(args.get_command(), Commands::Menu));
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.to_config(), CatalogConfig::default());
    }

    #[test]
    fn test_global_file_and_verbosity() {
        let args = parse(&["planet-catalog", "list", "-f", "data/moons.txt", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");
        assert_eq!(args.to_config().data_file(), Path::new("data/moons.txt"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["planet-catalog", "-q", "-v"]).is_err());
        assert_eq!(parse(&["planet-catalog", "-q"]).get_log_level(), "error");
    }

    #[test]
    fn test_list_format() {
        let args = parse(&["planet-catalog", "list", "--format", "json"]);
        assert_eq!(args.to_config().output_format, OutputFormat::Json);
    }

    #[test]
    fn test_add_generic() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "Mars", "--date", "1659.09.03",
            "--radius", "3389.5", "--mass", "6.42e23",
        ]);
        let record = add_args(args).to_record().unwrap();
        assert_eq!(record.kind(), RecordKind::Generic);
        assert_eq!(record.mass(), 6.42e23);
    }

    #[test]
    fn test_add_habitable_with_negative_temperature() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "Europa", "--date", "1610.01.08",
            "--radius", "1560.8", "--mass", "4.8e22", "--temperature", "-160",
            "--habitability", "0.3",
        ]);
        let record = add_args(args).to_record().unwrap();
        assert_eq!(record.kind(), RecordKind::Habitable);
        assert_eq!(record.fields().number("temperature"), Some(-160.0));
    }

    #[test]
    fn test_add_mining_with_distance() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "Ceres", "--date", "1801.01.01",
            "--radius", "946", "--mass", "9.4e20", "--resource", "water ice",
            "--difficulty", "easy", "--distance", "4.14e8", "--no-save",
        ]);
        assert!(!args.to_config().save_on_add);

        let record = add_args(args).to_record().unwrap();
        assert_eq!(record.kind(), RecordKind::Mining);
        assert_eq!(record.distance_to_sun(), Some(4.14e8));
    }

    #[test]
    fn test_add_rejects_mixed_variant_flags() {
        let result = Args::try_parse_from([
            "planet-catalog", "add", "--name", "X", "--date", "2000.01.01",
            "--radius", "1", "--mass", "1", "--temperature", "1",
            "--habitability", "1", "--resource", "a", "--difficulty", "b",
        ]);
        assert!(result.is_err());

        let result = Args::try_parse_from([
            "planet-catalog", "add", "--name", "X", "--date", "2000.01.01",
            "--radius", "1", "--mass", "1", "--temperature", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_validates_values() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "Mars", "--date", "1659-09-03",
            "--radius", "3389.5", "--mass", "6.42e23",
        ]);
        let err = add_args(args).to_record().unwrap_err();
        assert_eq!(err.reason, ReasonCode::InvalidValues);
    }

    #[test]
    fn test_add_rejects_non_finite_values() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "X", "--date", "2000.01.01",
            "--radius", "inf", "--mass", "1",
        ]);
        let err = add_args(args).to_record().unwrap_err();
        assert_eq!(err.reason, ReasonCode::InvalidValues);

        let args = parse(&[
            "planet-catalog", "add", "--name", "X", "--date", "2000.01.01",
            "--radius", "1", "--mass", "1", "--temperature", "NaN",
            "--habitability", "0.5",
        ]);
        let err = add_args(args).to_record().unwrap_err();
        assert!(err.detail.contains("temperature"));
    }

    #[test]
    fn test_add_rejects_multiline_name() {
        let args = parse(&[
            "planet-catalog", "add", "--name", "New\nWorld", "--date", "2000.01.01",
            "--radius", "1", "--mass", "1",
        ]);
        let err = add_args(args).to_record().unwrap_err();
        assert_eq!(err.reason, ReasonCode::InvalidValues);
        assert!(err.detail.contains("line breaks"));
    }
}
