//! Steffensen's method.

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Steffensen iteration state.
#[derive(Debug, Clone)]
pub struct Steffensen<G> {
    g: G,
    p0: f64,
}

impl<G> Steffensen<G>
where
    G: Fn(f64) -> f64,
{
    /// Starts from `p0`.
    pub fn new(g: G, p0: f64) -> Self {
        Self { g, p0 }
    }
}

impl<G> Scheme for Steffensen<G>
where
    G: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "steffensen"
    }

    fn current(&self) -> f64 {
        self.p0
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        let p0 = self.p0;
        let p1 = (self.g)(p0);
        let p2 = (self.g)(p1);

        let denom = p2 - 2.0 * p1 + p0;
        if denom == 0.0 {
            return Err(DomainError::ZeroDenominator {
                context: "Aitken extrapolation",
            });
        }

        let p = p0 - (p1 - p0).powi(2) / denom;
        let change = (p - p0).abs();
        self.p0 = p;
        Ok(Advance::open(p, change))
    }
}

/// Steffensen's method for fixed points.
///
/// Every step runs two fixed-point iterations `p1 = g(p0)`, `p2 = g(p1)`
/// and restarts from their Aitken Δ² extrapolation. Converges quadratically
/// without a derivative.
///
/// When an iterate lands exactly on the fixed point the Δ² denominator is
/// zero, so a very tight tolerance can end in a
/// [`DomainError::ZeroDenominator`] status whose `root` is still accurate.
///
/// # Arguments
///
/// * `g` - Fixed-point form of the equation
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{steffensen, SolverConfig};
///
/// let g = |x: f64| (x + 1.0).cbrt();
///
/// let result = steffensen(g, 1.5, &SolverConfig::new(1e-4, 30)).unwrap();
/// assert!(result.is_converged());
/// assert!((result.root - 1.324_717_957).abs() < 1e-9);
/// ```
pub fn steffensen<G>(g: G, initial_guess: f64, config: &SolverConfig) -> MathResult<Solution<f64>>
where
    G: Fn(f64) -> f64,
{
    drive(Steffensen::new(g, initial_guess), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{fixed_point, Status};
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic() {
        let g = |x: f64| (x + 1.0).cbrt();

        let result = steffensen(g, 1.5, &SolverConfig::new(1e-4, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 3);
        assert_relative_eq!(result.root, 1.324_717_957_244_746, epsilon = 1e-12);
    }

    #[test]
    fn test_faster_than_fixed_point() {
        let config = SolverConfig::new(1e-8, 100);

        let accelerated = steffensen(f64::cos, 1.0, &config).unwrap();
        let plain = fixed_point(f64::cos, 1.0, &config).unwrap();

        assert!(accelerated.is_converged());
        assert!(plain.is_converged());
        assert!(accelerated.iterations * 5 < plain.iterations);
        assert_relative_eq!(accelerated.root, 0.739_085_133_215_160_6, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_denominator_on_exact_fixed_point() {
        // Δ² is exact for a linear map, so the second step starts on the fixed point
        let g = |x: f64| 0.5 * x + 1.0;

        let result = steffensen(g, 0.0, &SolverConfig::new(1e-8, 30)).unwrap();

        assert_eq!(
            result.status,
            Status::DomainError(DomainError::ZeroDenominator {
                context: "Aitken extrapolation"
            })
        );
        assert_eq!(result.iterations, 1);
        assert_eq!(result.root, 2.0);
    }
}
