//! CLI error types.

use std::path::PathBuf;

use iterum_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No problem with this name in the catalogue.
    #[error("Unknown problem: {0}. Run `iterum problems` to list them.")]
    UnknownProblem(String),

    /// The method needs a form the problem does not provide.
    #[error("Problem {problem} has no {form}, required by {method}")]
    Unsupported {
        /// Method that was requested.
        method: &'static str,
        /// Problem that was requested.
        problem: &'static str,
        /// Missing form, e.g. "fixed-point form".
        form: &'static str,
    },

    /// The method ran but did not meet its tolerance.
    #[error("{method} did not converge: {status}")]
    NotConverged {
        /// Method that was run.
        method: &'static str,
        /// Final status.
        status: String,
    },

    /// Rejected by the solver before iterating.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Configuration file could not be parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// File that failed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
