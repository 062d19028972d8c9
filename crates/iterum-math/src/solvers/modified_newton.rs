//! Modified Newton's method for roots of higher multiplicity.

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Modified Newton iteration state.
#[derive(Debug, Clone)]
pub struct ModifiedNewton<F, DF, D2F> {
    f: F,
    df: DF,
    d2f: D2F,
    p0: f64,
}

impl<F, DF, D2F> ModifiedNewton<F, DF, D2F>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    D2F: Fn(f64) -> f64,
{
    /// Starts from `p0`.
    pub fn new(f: F, df: DF, d2f: D2F, p0: f64) -> Self {
        Self { f, df, d2f, p0 }
    }
}

impl<F, DF, D2F> Scheme for ModifiedNewton<F, DF, D2F>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    D2F: Fn(f64) -> f64,
{
    type Value = f64;

    fn name(&self) -> &'static str {
        "modified_newton"
    }

    fn current(&self) -> f64 {
        self.p0
    }

    fn advance(&mut self) -> Result<Advance<f64>, DomainError> {
        let x = self.p0;
        let fx = (self.f)(x);
        let dfx = (self.df)(x);

        if dfx == 0.0 {
            return Err(DomainError::ZeroDerivative { x });
        }

        // Newton on g = f / f', with g' = 1 - f f'' / f'^2
        let g = fx / dfx;
        let dg = 1.0 - fx * (self.d2f)(x) / (dfx * dfx);

        if dg == 0.0 {
            return Err(DomainError::ZeroDenominator {
                context: "modified Newton step",
            });
        }

        let p = x - g / dg;
        let change = (p - x).abs();
        self.p0 = p;
        Ok(Advance::open(p, change))
    }
}

/// Modified Newton's method.
///
/// Applies Newton-Raphson to `g(x) = f(x) / f'(x)`, which has only simple
/// roots. Where plain Newton slows to linear convergence at a root of
/// multiplicity greater than one, this keeps quadratic convergence, at
/// the cost of a second derivative.
///
/// `x_{n+1} = x_n - f f' / (f'^2 - f f'')`
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - First derivative
/// * `d2f` - Second derivative
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn modified_newton<F, DF, D2F>(
    f: F,
    df: DF,
    d2f: D2F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<Solution<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    D2F: Fn(f64) -> f64,
{
    drive(ModifiedNewton::new(f, df, d2f, initial_guess), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{newton_raphson, Status};
    use approx::assert_relative_eq;

    // (x - e^-x)^2 has a double root at the omega constant
    fn f(x: f64) -> f64 {
        (x - (-x).exp()).powi(2)
    }

    fn df(x: f64) -> f64 {
        2.0 * (x - (-x).exp()) * (1.0 + (-x).exp())
    }

    fn d2f(x: f64) -> f64 {
        2.0 * (1.0 + (-x).exp()).powi(2) - 2.0 * (x - (-x).exp()) * (-x).exp()
    }

    const OMEGA: f64 = 0.567_143_290_409_783_8;

    #[test]
    fn test_double_root() {
        let result = modified_newton(f, df, d2f, 0.5, &SolverConfig::new(1e-5, 30)).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 3);
        assert_relative_eq!(result.root, OMEGA, epsilon = 1e-12);
    }

    #[test]
    fn test_faster_than_newton_at_double_root() {
        let config = SolverConfig::new(1e-5, 30);

        let modified = modified_newton(f, df, d2f, 0.5, &config).unwrap();
        let plain = newton_raphson(f, df, 0.5, &config).unwrap();

        assert!(plain.is_converged());
        assert!(modified.iterations * 3 < plain.iterations);
        assert!((modified.root - OMEGA).abs() < (plain.root - OMEGA).abs());
    }

    #[test]
    fn test_simple_root() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let d2f = |_: f64| 2.0;

        let result = modified_newton(f, df, d2f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_first_derivative() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;
        let d2f = |_: f64| 2.0;

        let result = modified_newton(f, df, d2f, 0.0, &SolverConfig::default()).unwrap();

        assert_eq!(
            result.status,
            Status::DomainError(DomainError::ZeroDerivative { x: 0.0 })
        );
    }

    #[test]
    fn test_zero_modified_denominator() {
        // f f'' == f'^2 for the exponential, so g' vanishes everywhere
        let result =
            modified_newton(f64::exp, f64::exp, f64::exp, 1.0, &SolverConfig::default()).unwrap();

        assert!(matches!(
            result.status,
            Status::DomainError(DomainError::ZeroDenominator { .. })
        ));
        assert_eq!(result.root, 1.0);
    }
}
