//! Error types for root-finding.
//!
//! Two layers:
//!
//! - [`MathError`]: the call could not run, or the caller asked for a hard
//!   failure via [`Solution::into_result`](crate::solvers::Solution::into_result).
//! - [`DomainError`]: a single step hit an undefined operation. These are
//!   carried inside [`Status::DomainError`](crate::solvers::Status::DomainError)
//!   so the trace and last approximation survive.

use serde::Serialize;
use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (last step: {last_step:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Size of the final step, or NaN when no step was taken.
        last_step: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// An iteration stopped on an undefined operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, last_step: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            last_step,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// A numerical fault hit while taking one step.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainError {
    /// The derivative vanished at the current approximation.
    #[error("Zero derivative at x = {x}")]
    ZeroDerivative {
        /// Where the derivative was evaluated.
        x: f64,
    },

    /// A difference quotient had a zero denominator.
    #[error("Zero in the denominator of the {context}")]
    ZeroDenominator {
        /// Which formula divided by zero.
        context: &'static str,
    },

    /// The step produced NaN or an infinity.
    #[error("Non-finite approximation at step {step}")]
    NonFinite {
        /// Step that produced the value.
        step: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: MathError = DomainError::ZeroDerivative { x: 0.0 }.into();
        assert_eq!(err.to_string(), "Zero derivative at x = 0");
    }

    #[test]
    fn test_domain_error_serializes_tagged() {
        let json = serde_json::to_string(&DomainError::ZeroDenominator {
            context: "secant step",
        })
        .unwrap();
        assert_eq!(json, r#"{"zero_denominator":{"context":"secant step"}}"#);
    }
}
