//! Regula falsi (false position) root-finding algorithm.

use crate::error::{DomainError, MathError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// False-position iteration state.
///
/// `(p1, q1)` is always the newest point; `(p0, q0)` is the most recent
/// point on the other side of the root, so `q0 * q1 <= 0` after every step.
#[derive(Debug, Clone)]
pub struct RegulaFalsi<F> {
    f: F,
    p0: f64,
    q0: f64,
    p1: f64,
    q1: f64,
}

impl<F> RegulaFalsi<F>
where
    F: Fn(f64) -> f64,
{
    /// Sets up a search between `p0` and `p1`, which must bracket a root.
    pub fn new(f: F, p0: f64, p1: f64) -> MathResult<Self> {
        let q0 = f(p0);
        let q1 = f(p1);

        let product = q0 * q1;
        if product > 0.0 || product.is_nan() {
            return Err(MathError::InvalidBracket {
                a: p0,
                b: p1,
                fa: q0,
                fb: q1,
            });
        }

        // An exact root starts as the newest point
        if q0 == 0.0 {
            return Ok(Self {
                f,
                p0: p1,
                q0: q1,
                p1: p0,
                q1: q0,
            });
        }

        Ok(Self { f, p0, q0, p1, q1 })
    }

    /// Retained bracket as `(older, newest)`.
    pub fn bracket(&self) -> (f64, f64) {
        (self.p0, self.p1)
    }
}

impl<F> Scheme for RegulaFalsi<F>
where
    F: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "regula_falsi"
    }

    fn current(&self) -> f64 {
        self.p1
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        // Already on a root: stay put
        if self.q1 == 0.0 {
            return Ok(Advance::bracketed(self.p1, 0.0, (self.p0, self.p1)));
        }

        let denom = self.q1 - self.q0;
        if denom == 0.0 {
            return Err(DomainError::ZeroDenominator {
                context: "false position step",
            });
        }

        let p = self.p1 - self.q1 * (self.p1 - self.p0) / denom;
        let q = (self.f)(p);
        let change = (p - self.p1).abs();

        // Sign change against the newest point: it becomes the far end
        if q * self.q1 < 0.0 {
            self.p0 = self.p1;
            self.q0 = self.q1;
        }
        self.p1 = p;
        self.q1 = q;

        Ok(Advance::bracketed(p, change, (self.p0, self.p1)))
    }
}

/// Regula falsi (method of false position).
///
/// Uses the secant update but keeps the root bracketed: the far endpoint is
/// only replaced when the new point changes sign against the newest one.
/// Safer than the secant method, but one endpoint can stay fixed for many
/// steps, slowing convergence to linear.
///
/// Requires: `f(x0) * f(x1) <= 0`
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - One end of the bracket
/// * `x1` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{regula_falsi, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = regula_falsi(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn regula_falsi<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
{
    drive(RegulaFalsi::new(f, x0, x1)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Status;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = regula_falsi(f, 1.0, 2.0, &SolverConfig::new(1e-9, 60)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_bracket_invariant() {
        let f = |x: f64| x * x - 2.0;

        let result = regula_falsi(f, 1.0, 2.0, &SolverConfig::new(1e-9, 60)).unwrap();

        for iterate in &result.trace {
            let (p0, p1) = iterate.bracket.unwrap();
            assert!(f(p0) * f(p1) <= 0.0, "lost bracket at step {}", iterate.step);
            assert_eq!(p1, iterate.value);
        }
    }

    #[test]
    fn test_stuck_endpoint() {
        // Convex on [1, 2]: the right endpoint is never replaced
        let f = |x: f64| x * x - 2.0;

        let result = regula_falsi(f, 1.0, 2.0, &SolverConfig::new(1e-9, 60)).unwrap();

        assert!(result
            .trace
            .iter()
            .all(|iterate| iterate.bracket.unwrap().0 == 2.0));
    }

    #[test]
    fn test_log_parabola() {
        let f = |x: f64| (x - 2.0).powi(2) - x.ln();

        let result = regula_falsi(f, std::f64::consts::E, 4.0, &SolverConfig::new(1e-6, 100))
            .unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_relative_eq!(result.root, 3.057_103_55, epsilon = 1e-5);
    }

    #[test]
    fn test_root_at_first_endpoint() {
        let f = |x: f64| x - 1.0;

        let result = regula_falsi(f, 1.0, 2.0, &SolverConfig::new(1e-9, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.root, 1.0);
        assert_eq!(result.trace[0].change, 0.0);
    }

    #[test]
    fn test_lands_exactly_on_root() {
        // The first chord through (0, -1) and (2, 1) hits the root of a line
        let f = |x: f64| x - 1.0;

        let result = regula_falsi(f, 0.0, 2.0, &SolverConfig::new(1e-9, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.root, 1.0);
    }

    #[test]
    fn test_nan_endpoint_value() {
        let f = |x: f64| if x < 0.5 { f64::NAN } else { x - 0.7 };

        let result = regula_falsi(f, 0.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = regula_falsi(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }
}
