//! Bisection root-finding algorithm.

use crate::error::{DomainError, MathError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Bracket-halving iteration state.
///
/// Keeps `f(lo)` so every step costs exactly one function evaluation.
/// The sign change between `lo` and `hi` holds after every step.
#[derive(Debug, Clone)]
pub struct Bisection<F> {
    f: F,
    lo: f64,
    hi: f64,
    f_lo: f64,
}

impl<F> Bisection<F>
where
    F: Fn(f64) -> f64,
{
    /// Sets up a search on the bracket `[a, b]` (either order).
    ///
    /// Fails with [`MathError::InvalidBracket`] when `f(a)` and `f(b)` share
    /// a sign. An endpoint that is an exact root is a valid bracket.
    pub fn new(f: F, a: f64, b: f64) -> MathResult<Self> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "bracket endpoints must be finite, got [{a}, {b}]"
            )));
        }

        let lo = a.min(b);
        let hi = a.max(b);
        let f_lo = f(lo);
        let f_hi = f(hi);

        // Check that root is bracketed; a NaN endpoint value fails too
        let product = f_lo * f_hi;
        if product > 0.0 || product.is_nan() {
            return Err(MathError::InvalidBracket {
                a: lo,
                b: hi,
                fa: f_lo,
                fb: f_hi,
            });
        }

        Ok(Self { f, lo, hi, f_lo })
    }

    /// Current bracket.
    pub fn bracket(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

impl<F> Scheme for Bisection<F>
where
    F: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "bisection"
    }

    fn current(&self) -> f64 {
        self.lo + (self.hi - self.lo) / 2.0
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        let half_width = (self.hi - self.lo) / 2.0;
        let mid = self.lo + half_width;
        let f_mid = (self.f)(mid);

        // Same sign as f(lo): the root lies in the upper half
        if self.f_lo * f_mid > 0.0 {
            self.lo = mid;
            self.f_lo = f_mid;
        } else {
            self.hi = mid;
        }

        let change = if f_mid == 0.0 { 0.0 } else { half_width };
        Ok(Advance::bracketed(mid, change, (self.lo, self.hi)))
    }
}

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and selecting the subinterval containing the root.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at endpoints)
///
/// Converges when the midpoint is an exact root or the bracket half-width
/// drops below the tolerance.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
{
    drive(Bisection::new(f, a, b)?, config)
}
