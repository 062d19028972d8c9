//! Iterum CLI - classical root-finding from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the built-in problems
//! iterum problems
//!
//! # Newton-Raphson on x^3 - x - 1
//! iterum solve newton --problem cubic --tolerance 1e-12
//!
//! # Müller from three real guesses to a complex root
//! iterum solve muller --problem unit-circle --format json
//!
//! # Closed-form quadratic
//! iterum quadratic 1 -3 2
//! ```
//!
//! The exit status is non-zero whenever a method ends without converging.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod problems;

use cli::{Cli, Commands};
use config::CliConfig;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);

    // Execute command
    match cli.command {
        Commands::Problems(args) => commands::problems::execute(args, format)?,
        Commands::Solve(args) => commands::solve::execute(args, &config, format)?,
        Commands::Quadratic(args) => commands::quadratic::execute(args, format)?,
    }

    Ok(())
}
