//! Aitken's Δ² acceleration of a fixed-point sequence.

use log::{debug, warn};
use serde::Serialize;

use crate::error::{DomainError, MathError, MathResult};
use crate::solvers::{Iterate, Solution, SolverConfig, Status};

/// Largest `max_iterations` [`aitken`] accepts. The whole base sequence is
/// held in memory, so the budget is bounded up front.
pub const MAX_AITKEN_TERMS: u32 = 1 << 20;

/// Output of [`aitken`]: the raw fixed-point sequence and its acceleration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accelerated {
    /// `g(p0), g(g(p0)), ...`, `max_iterations + 2` values.
    pub base: Vec<f64>,
    /// The accelerated sequence as a solution trace.
    pub solution: Solution<f64>,
}

/// Aitken's Δ² method.
///
/// First generates `n + 2` terms of the fixed-point sequence `x_{k+1} = g(x_k)`
/// starting from `p0`, with `n = config.max_iterations`. Then, for each
/// consecutive triple `(x_{k-1}, x_k, x_{k+1})` with `x_0 = p0`, produces
///
/// `x_{k-1} - (x_k - x_{k-1})^2 / (x_{k+1} - 2 x_k + x_{k-1})`
///
/// Unlike the other solvers this always computes exactly `n` accelerated
/// terms; the tolerance is only used afterwards to classify the result as
/// [`Status::Converged`] (last two accelerated terms closer than the
/// tolerance) or [`Status::Exhausted`]. A zero denominator stops early with
/// [`DomainError::ZeroDenominator`].
///
/// Budgets above [`MAX_AITKEN_TERMS`] are rejected with
/// [`MathError::InvalidInput`].
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{aitken, SolverConfig};
///
/// let result = aitken(f64::cos, 1.0, &SolverConfig::new(1e-3, 6)).unwrap();
/// assert_eq!(result.base.len(), 8);
/// assert_eq!(result.solution.trace.len(), 6);
/// assert!(result.solution.is_converged());
/// ```
pub fn aitken<G>(g: G, p0: f64, config: &SolverConfig) -> MathResult<Accelerated>
where
    G: Fn(f64) -> f64,
{
    config.validate()?;
    if config.max_iterations > MAX_AITKEN_TERMS {
        return Err(MathError::invalid_input(format!(
            "aitken keeps every base term, at most {} allowed, got {}",
            MAX_AITKEN_TERMS, config.max_iterations
        )));
    }
    let n = config.max_iterations as usize;

    let mut base = Vec::with_capacity(n + 2);
    let mut x = p0;
    for _ in 0..n + 2 {
        x = g(x);
        base.push(x);
    }

    let mut trace = Vec::with_capacity(n);
    let mut previous = p0;
    let mut x0 = p0;

    for (i, window) in base.windows(2).take(n).enumerate() {
        let step = i as u32 + 1;
        let (x1, x2) = (window[0], window[1]);

        let denom = x2 - 2.0 * x1 + x0;
        let fault = if denom == 0.0 {
            Some(DomainError::ZeroDenominator {
                context: "Aitken extrapolation",
            })
        } else {
            None
        };

        let value = x0 - (x1 - x0).powi(2) / denom;
        let fault = fault.or_else(|| (!value.is_finite()).then_some(DomainError::NonFinite { step }));

        if let Some(fault) = fault {
            warn!("aitken: stopped after {} iterations: {}", trace.len(), fault);
            return Ok(Accelerated {
                base,
                solution: Solution {
                    status: Status::DomainError(fault),
                    root: previous,
                    iterations: trace.len() as u32,
                    trace,
                },
            });
        }

        trace.push(Iterate {
            step,
            value,
            change: (value - previous).abs(),
            bracket: None,
        });
        previous = value;
        x0 = x1;
    }

    let status = match trace.last() {
        Some(last) if last.change < config.tolerance => Status::Converged,
        _ => Status::Exhausted,
    };
    debug!("aitken: {} after {} terms at {}", status, trace.len(), previous);

    Ok(Accelerated {
        base,
        solution: Solution {
            status,
            root: previous,
            iterations: trace.len() as u32,
            trace,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DOTTIE: f64 = 0.739_085_133_215_160_6;

    #[test]
    fn test_accelerates_cosine() {
        let result = aitken(f64::cos, 1.0, &SolverConfig::new(1e-3, 6)).unwrap();
        let solution = &result.solution;

        assert_eq!(result.base.len(), 8);
        assert_eq!(solution.iterations, 6);
        assert_eq!(solution.status, Status::Converged);

        // Each accelerated term beats the base term it was built from
        for (k, iterate) in solution.trace.iter().enumerate() {
            assert!((iterate.value - DOTTIE).abs() < (result.base[k] - DOTTIE).abs());
        }
        assert_relative_eq!(solution.root, 0.738_876_582_817_136, epsilon = 1e-12);
    }

    #[test]
    fn test_runs_all_terms_without_early_exit() {
        let g = |x: f64| (x + 1.0).cbrt();

        let result = aitken(g, 1.0, &SolverConfig::new(1.0, 6)).unwrap();

        // The first term is already within tolerance but all six are computed
        assert_eq!(result.solution.iterations, 6);
        assert_eq!(result.solution.status, Status::Converged);
        assert_relative_eq!(result.solution.root, 1.324_717_957_244_746, epsilon = 1e-9);
    }

    #[test]
    fn test_exhausted_when_terms_still_moving() {
        let result = aitken(f64::cos, 1.0, &SolverConfig::new(1e-12, 6)).unwrap();

        assert_eq!(result.solution.status, Status::Exhausted);
        assert_eq!(result.solution.iterations, 6);
    }

    #[test]
    fn test_zero_denominator() {
        // Constant map: the base sequence is flat from the first term
        let g = |_: f64| 2.0;

        let result = aitken(g, 2.0, &SolverConfig::new(1e-6, 4)).unwrap();

        assert_eq!(
            result.solution.status,
            Status::DomainError(DomainError::ZeroDenominator {
                context: "Aitken extrapolation"
            })
        );
        assert_eq!(result.solution.iterations, 0);
        assert_eq!(result.solution.root, 2.0);
    }

    #[test]
    fn test_oversized_budget_rejected() {
        let result = aitken(f64::cos, 1.0, &SolverConfig::new(1e-6, u32::MAX));
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));

        let at_limit = aitken(|_| 2.0, 2.0, &SolverConfig::new(1e-6, MAX_AITKEN_TERMS));
        assert!(at_limit.is_ok());
    }

    #[test]
    fn test_zero_budget() {
        let result = aitken(f64::cos, 1.0, &SolverConfig::new(1e-6, 0)).unwrap();

        assert_eq!(result.base.len(), 2);
        assert_eq!(result.solution.status, Status::Exhausted);
        assert_eq!(result.solution.root, 1.0);
    }
}
