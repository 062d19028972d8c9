//! Output formatting utilities.

use colored::Colorize;
use iterum_math::solvers::Status;
use num_complex::Complex64;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints the final status line, colored by outcome.
pub fn print_status(method: &str, status: &Status, iterations: u32) {
    let line = format!("{method}: {status} after {iterations} iterations");
    match status {
        Status::Converged => println!("{} {}", "✓".green(), line),
        Status::Exhausted => println!("{} {}", "⚠".yellow(), line),
        Status::DomainError(_) => println!("{} {}", "✗".red(), line),
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Formats a real approximation.
pub fn format_real(value: f64) -> String {
    format!("{:.12}", value)
}

/// Formats a complex approximation as `re ± im i`.
pub fn format_complex(value: Complex64) -> String {
    let sign = if value.im.is_sign_negative() { '-' } else { '+' };
    format!("{:.12} {} {:.12}i", value.re, sign, value.im.abs())
}

/// Formats a convergence measure.
pub fn format_change(change: f64) -> String {
    format!("{:.3e}", change)
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
