//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{ProblemsArgs, QuadraticArgs, SolveArgs};

/// Iterum - classical root-finding from the command line
#[derive(Parser)]
#[command(name = "iterum")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file. Defaults to ./iterum.toml when present.
    #[arg(short, long, global = true, env = "ITERUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every iterate
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in test problems
    Problems(ProblemsArgs),

    /// Run one iterative method on a built-in problem
    Solve(SolveArgs),

    /// Closed-form roots of a x^2 + b x + c
    Quadratic(QuadraticArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
