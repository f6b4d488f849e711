use clap::Parser;
use planet_catalog::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::shared::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
        process::exit(1);
    }

    match commands::run(args) {
        Ok(summary) if summary.failed => process::exit(1),
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
