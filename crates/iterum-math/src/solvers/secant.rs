//! Secant root-finding algorithm.

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Secant iteration state: the two most recent points and their values.
#[derive(Debug, Clone)]
pub struct Secant<F> {
    f: F,
    p0: f64,
    q0: f64,
    p1: f64,
    q1: f64,
}

impl<F> Secant<F>
where
    F: Fn(f64) -> f64,
{
    /// Starts from the two guesses `p0` and `p1`.
    pub fn new(f: F, p0: f64, p1: f64) -> Self {
        let q0 = f(p0);
        let q1 = f(p1);
        Self { f, p0, q0, p1, q1 }
    }
}

impl<F> Scheme for Secant<F>
where
    F: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "secant"
    }

    fn current(&self) -> f64 {
        self.p1
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        // Parallel secant line
        let denom = self.q1 - self.q0;
        if denom == 0.0 {
            return Err(DomainError::ZeroDenominator {
                context: "secant step",
            });
        }

        let p = self.p1 - self.q1 * (self.p1 - self.p0) / denom;
        let change = (p - self.p1).abs();

        self.p0 = self.p1;
        self.q0 = self.q1;
        self.p1 = p;
        self.q1 = (self.f)(p);

        Ok(Advance::open(p, change))
    }
}

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but approximates the derivative using
/// the slope through the two most recent iterates. Does not require
/// an analytical derivative or a bracketing interval.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
{
    drive(Secant::new(f, x0, x1), config)
}
