//! Root-finding algorithms.
//!
//! This module provides iterative solvers for scalar equations:
//!
//! - [`bisection`]: Bracket halving, guaranteed linear convergence
//! - [`fixed_point`]: Plain iteration of `p = g(p)`
//! - [`newton_raphson`]: Quadratic convergence when the derivative is available
//! - [`modified_newton`]: Newton on `f / f'`, restores quadratic convergence at multiple roots
//! - [`secant`]: Derivative-free two-point method
//! - [`regula_falsi`]: Secant update that keeps the root bracketed
//! - [`aitken`]: Δ² acceleration of a fixed-point sequence
//! - [`steffensen`]: Fixed-point iteration with Aitken's formula fused in
//! - [`muller`]: Quadratic interpolation over complex numbers
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Modified Newton | Quadratic at multiple roots | May diverge | Two derivatives |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Regula Falsi | Superlinear to linear | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Steffensen | Quadratic | May diverge | Fixed-point form |
//! | Müller | Superlinear | May diverge | Three guesses, complex `f` |
//!
//! # Outcomes
//!
//! Every solver returns `Err` only when the call itself is malformed (bad
//! tolerance, no sign change across a bracket). Everything that happens
//! while iterating is reported in the returned [`Solution`]:
//!
//! ```rust
//! use iterum_math::solvers::{newton_raphson, SolverConfig, Status};
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let solution = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-9, 30)).unwrap();
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//!
//! // The trace holds every intermediate approximation.
//! assert_eq!(solution.trace.len() as u32, solution.iterations);
//! ```

mod aitken;
mod bisection;
mod driver;
mod fixed_point;
mod modified_newton;
mod muller;
mod newton;
mod regula_falsi;
mod secant;
mod steffensen;

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

pub use aitken::{aitken, Accelerated, MAX_AITKEN_TERMS};
pub use bisection::{bisection, Bisection};
pub use driver::{drive, Advance, Iterates, Scheme};
pub use fixed_point::{fixed_point, FixedPoint};
pub use modified_newton::{modified_newton, ModifiedNewton};
pub use muller::{muller, Muller};
pub use newton::{newton_raphson, newton_raphson_numerical, Newton};
pub use regula_falsi::{regula_falsi, RegulaFalsi};
pub use secant::{secant, Secant};
pub use steffensen::{steffensen, Steffensen};

use crate::error::{DomainError, MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is a positive, finite number.
    ///
    /// A zero iteration budget is valid: solvers return their starting
    /// approximation as [`Status::Exhausted`].
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Scalar types the solvers iterate over.
pub trait Scalar: Copy + fmt::Debug {
    /// True when the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

impl Scalar for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Scalar for Complex64 {
    fn is_finite(self) -> bool {
        Complex64::is_finite(self)
    }
}

/// How an iterative solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The convergence measure dropped below the tolerance.
    Converged,
    /// The iteration budget ran out first.
    Exhausted,
    /// A step hit an undefined operation.
    DomainError(DomainError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged => write!(f, "converged"),
            Status::Exhausted => write!(f, "exhausted"),
            Status::DomainError(fault) => write!(f, "domain error: {fault}"),
        }
    }
}

/// One record of the trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Iterate<T> {
    /// 1-based step number.
    pub step: u32,
    /// Approximation produced by this step.
    pub value: T,
    /// Convergence measure compared against the tolerance: the step size for
    /// open methods, the bracket half-width for bisection.
    pub change: f64,
    /// Bracket retained after the step (bracketing methods only).
    pub bracket: Option<(T, T)>,
}

/// Result of an iterative solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution<T> {
    /// How the solve ended.
    pub status: Status,
    /// Last approximation. On a domain error this is the last finite value.
    pub root: T,
    /// Number of completed steps.
    pub iterations: u32,
    /// Every completed step, in order.
    pub trace: Vec<Iterate<T>>,
}

impl<T: Copy> Solution<T> {
    /// True when the solve met its tolerance.
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Convergence measure of the final step, NaN when no step completed.
    pub fn last_change(&self) -> f64 {
        self.trace.last().map_or(f64::NAN, |iterate| iterate.change)
    }

    /// Approximations in trace order.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.trace.iter().map(|iterate| iterate.value)
    }

    /// Collapses the solution into a plain root or an error.
    pub fn into_result(self) -> MathResult<T> {
        match self.status {
            Status::Converged => Ok(self.root),
            Status::Exhausted => Err(MathError::convergence_failed(
                self.iterations,
                self.last_change(),
            )),
            Status::DomainError(fault) => Err(fault.into()),
        }
    }
}
