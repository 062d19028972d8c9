//! Müller's method over the complex plane.

use num_complex::Complex64;

use crate::error::{DomainError, MathResult};
use crate::solvers::{drive, Advance, Scheme, Solution, SolverConfig};

/// Müller iteration state: three points and their function values.
#[derive(Debug, Clone)]
pub struct Muller<F> {
    f: F,
    p: [Complex64; 3],
    fp: [Complex64; 3],
}

impl<F> Muller<F>
where
    F: Fn(Complex64) -> Complex64,
{
    /// Starts from three distinct guesses.
    pub fn new(f: F, p0: Complex64, p1: Complex64, p2: Complex64) -> Self {
        let fp = [f(p0), f(p1), f(p2)];
        Self {
            f,
            p: [p0, p1, p2],
            fp,
        }
    }
}

fn is_zero(z: Complex64) -> bool {
    z.norm_sqr() == 0.0
}

impl<F> Scheme for Muller<F>
where
    F: Fn(Complex64) -> Complex64,
{
    type Value = Complex64;

    fn name(&self) -> &'static str {
        "muller"
    }

    fn current(&self) -> Complex64 {
        self.p[2]
    }

    fn advance(&mut self) -> Result<Advance<Complex64>, DomainError> {
        let [p0, p1, p2] = self.p;
        let [f0, f1, f2] = self.fp;

        let h1 = p1 - p0;
        let h2 = p2 - p1;
        if is_zero(h1) || is_zero(h2) || is_zero(h1 + h2) {
            return Err(DomainError::ZeroDenominator {
                context: "divided difference",
            });
        }

        let d1 = (f1 - f0) / h1;
        let d2 = (f2 - f1) / h2;
        let d = (d2 - d1) / (h2 + h1);

        // Parabola through the three points, centred on p2
        let b = d2 + h2 * d;
        let disc = (b * b - 4.0 * f2 * d).sqrt();

        // Larger-magnitude denominator picks the root closest to p2
        let e = if (b - disc).norm() < (b + disc).norm() {
            b + disc
        } else {
            b - disc
        };
        if is_zero(e) {
            return Err(DomainError::ZeroDenominator {
                context: "Müller step",
            });
        }

        let h = -2.0 * f2 / e;
        let p = p2 + h;

        self.p = [p1, p2, p];
        self.fp = [f1, f2, (self.f)(p)];

        Ok(Advance::open(p, h.norm()))
    }
}

/// Müller's method.
///
/// Fits a parabola through the three most recent points and steps to its
/// root nearest the newest one. Works in complex arithmetic throughout, so
/// real starting points can still reach complex roots. Convergence order is
/// about 1.84.
///
/// The convergence measure is the modulus of the step `|h|`.
///
/// # Arguments
///
/// * `f` - Complex function for which to find a root
/// * `p0`, `p1`, `p2` - Three distinct initial guesses
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use iterum_math::solvers::{muller, SolverConfig};
/// use num_complex::Complex64;
///
/// // z^2 + 1 has no real roots
/// let f = |z: Complex64| z * z + 1.0;
/// let start = |x: f64| Complex64::new(x, 0.0);
///
/// let result = muller(f, start(0.0), start(0.5), start(1.0), &SolverConfig::default()).unwrap();
/// assert!(result.is_converged());
/// assert!((result.root.im.abs() - 1.0).abs() < 1e-12);
/// ```
pub fn muller<F>(
    f: F,
    p0: Complex64,
    p1: Complex64,
    p2: Complex64,
    config: &SolverConfig,
) -> MathResult<Solution<Complex64>>
where
    F: Fn(Complex64) -> Complex64,
{
    drive(Muller::new(f, p0, p1, p2), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Status;
    use approx::assert_relative_eq;

    fn real(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    fn cubic(z: Complex64) -> Complex64 {
        z * z * z - z - 1.0
    }

    #[test]
    fn test_imaginary_unit() {
        let f = |z: Complex64| z * z + 1.0;

        let result = muller(f, real(0.0), real(0.5), real(1.0), &SolverConfig::default()).unwrap();

        // The parabola through three points of a quadratic is the quadratic itself
        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 2);
        assert_relative_eq!(result.root.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.root.im.abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.trace[0].change, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_real_root_of_cubic() {
        let result = muller(cubic, real(0.5), real(1.0), real(1.5), &SolverConfig::default()).unwrap();

        assert!(result.is_converged());
        assert_relative_eq!(result.root.re, 1.324_717_957_244_746, epsilon = 1e-10);
        assert!(result.root.im.abs() < 1e-10);
    }

    #[test]
    fn test_complex_root_from_real_guesses() {
        let result = muller(cubic, real(0.0), real(-0.5), real(-1.0), &SolverConfig::default()).unwrap();

        assert!(result.is_converged());
        assert_relative_eq!(result.root.re, -0.662_358_978_622_373, epsilon = 1e-10);
        assert_relative_eq!(result.root.im.abs(), 0.562_279_512_062_301, epsilon = 1e-10);
        assert!(cubic(result.root).norm() < 1e-10);
    }

    #[test]
    fn test_coincident_guesses() {
        let result = muller(cubic, real(1.0), real(1.0), real(2.0), &SolverConfig::default()).unwrap();

        assert_eq!(
            result.status,
            Status::DomainError(DomainError::ZeroDenominator {
                context: "divided difference"
            })
        );
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, real(2.0));
    }
}
