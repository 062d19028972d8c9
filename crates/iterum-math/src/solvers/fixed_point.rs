//! Fixed-point iteration.

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// State of `p = g(p)` iteration.
#[derive(Debug, Clone)]
pub struct FixedPoint<G> {
    g: G,
    p0: f64,
}

impl<G> FixedPoint<G>
where
    G: Fn(f64) -> f64,
{
    /// Starts iterating `g` from `p0`.
    pub fn new(g: G, p0: f64) -> Self {
        Self { g, p0 }
    }
}

impl<G> Scheme for FixedPoint<G>
where
    G: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "fixed_point"
    }

    fn current(&self) -> f64 {
        self.p0
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        let p = (self.g)(self.p0);
        let change = (p - self.p0).abs();
        self.p0 = p;
        Ok(Advance::open(p, change))
    }
}

/// Fixed-point iteration `p_{n+1} = g(p_n)`.
///
/// `g` must already be rearranged so that its fixed point is the wanted
/// root. Converges when `|p_{n+1} - p_n| < tolerance`; there is no guard
/// against divergence beyond the iteration budget.
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{fixed_point, SolverConfig};
///
/// // Babylonian square root of 3
/// let g = |x: f64| 0.5 * (x + 3.0 / x);
///
/// let result = fixed_point(g, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - 3.0_f64.sqrt()).abs() < 1e-10);
/// ```
pub fn fixed_point<G>(g: G, p0: f64, config: &SolverConfig) -> MathResult<Solution<f64>>
where
    G: Fn(f64) -> f64,
{
    drive(FixedPoint::new(g, p0), config)
}
