//! Problems command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{print_json, print_table};
use crate::problems::catalogue;

/// Arguments for the problems command.
#[derive(Args, Debug)]
pub struct ProblemsArgs {}

/// One catalogue entry.
#[derive(Debug, Serialize, Tabled)]
pub struct ProblemRow {
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "f(x)")]
    pub equation: &'static str,
    #[tabled(rename = "Bracket")]
    pub bracket: String,
    #[tabled(rename = "Guess")]
    pub guess: f64,
    #[tabled(rename = "Fixed-point form")]
    pub fixed_point: bool,
}

/// Execute the problems command.
pub fn execute(_args: ProblemsArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<ProblemRow> = catalogue()
        .iter()
        .map(|problem| ProblemRow {
            name: problem.name,
            equation: problem.equation,
            bracket: format!("[{}, {}]", problem.bracket.0, problem.bracket.1),
            guess: problem.guess,
            fixed_point: problem.g.is_some(),
        })
        .collect();

    match format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows)?,
    }
    Ok(())
}
