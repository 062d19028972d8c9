//! Newton-Raphson root-finding algorithm.

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Step size for the central-difference derivative.
const NUMERICAL_STEP: f64 = 1e-8;

/// Newton-Raphson iteration state.
#[derive(Debug, Clone)]
pub struct Newton<F, DF> {
    f: F,
    df: DF,
    p0: f64,
}

impl<F, DF> Newton<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    /// Starts from `p0`.
    pub fn new(f: F, df: DF, p0: f64) -> Self {
        Self { f, df, p0 }
    }
}

impl<F, DF> Scheme for Newton<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "newton_raphson"
    }

    fn current(&self) -> f64 {
        self.p0
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        let dfx = (self.df)(self.p0);

        // Check for zero derivative
        if dfx == 0.0 {
            return Err(DomainError::ZeroDerivative { x: self.p0 });
        }

        let p = self.p0 - (self.f)(self.p0) / dfx;
        let change = (p - self.p0).abs();
        self.p0 = p;
        Ok(Advance::open(p, change))
    }
}

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near a simple root but requires
/// the derivative of the function. A derivative that is exactly zero at an
/// iterate ends the solve with a [`DomainError::ZeroDerivative`] status.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    drive(Newton::new(f, df, initial_guess), config)
}

/// Newton-Raphson with numerical derivative estimation.
///
/// Uses central differences to estimate the derivative when
/// an analytical derivative is not available.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| {
        let f1 = f(x + NUMERICAL_STEP);
        let f2 = f(x - NUMERICAL_STEP);
        (f1 - f2) / (2.0 * NUMERICAL_STEP)
    };

    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Status;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-9, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.iterations < 10); // Should converge quickly
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_log_parabola() {
        let f = |x: f64| (x - 2.0).powi(2) - x.ln();
        let df = |x: f64| 2.0 * (x - 2.0) - 1.0 / x;

        let result = newton_raphson(f, df, 3.0, &SolverConfig::new(1e-5, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert!(f(result.root).abs() < 1e-8);
        assert_relative_eq!(result.root, 3.057_103_55, epsilon = 1e-8);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| x * x - 2.0;

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_derivative_error() {
        // f(x) = x^3 - 1 with initial guess at 0 has zero derivative
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();

        assert_eq!(
            result.status,
            Status::DomainError(DomainError::ZeroDerivative { x: 0.0 })
        );
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 0.0);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_never_exceeds_budget() {
        // Newton cycles between 0 and 1 on this cubic
        let f = |x: f64| x * x * x - 2.0 * x + 2.0;
        let df = |x: f64| 3.0 * x * x - 2.0;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::new(1e-10, 24)).unwrap();

        assert_eq!(result.status, Status::Exhausted);
        assert_eq!(result.iterations, 24);
        assert_eq!(result.trace.len(), 24);
        assert_eq!(result.root, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let f = |x: f64| x.exp() - 3.0 * x;
        let df = |x: f64| x.exp() - 3.0;
        let config = SolverConfig::new(1e-12, 50);

        let first = newton_raphson(f, df, 0.0, &config).unwrap();
        let second = newton_raphson(f, df, 0.0, &config).unwrap();

        assert_eq!(first, second);
    }
}
