//! Closed-form roots of `a x^2 + b x + c = 0`.

use std::fmt;

use num_complex::Complex64;
use serde::Serialize;

use crate::error::{MathError, MathResult};

/// Nature of the two roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    /// Zero discriminant: both roots coincide.
    Repeated,
    /// Real coefficients, positive discriminant.
    DistinctReal,
    /// Real coefficients, negative discriminant.
    ComplexConjugate,
    /// Complex coefficients, nonzero discriminant.
    Distinct,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RootKind::Repeated => "repeated root",
            RootKind::DistinctReal => "two distinct real roots",
            RootKind::ComplexConjugate => "complex conjugate pair",
            RootKind::Distinct => "two distinct roots",
        };
        f.write_str(label)
    }
}

/// Both roots of a quadratic and their classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadraticRoots {
    /// Classification from the discriminant.
    pub kind: RootKind,
    /// `(-b + sqrt(d)) / 2a` and `(-b - sqrt(d)) / 2a`.
    pub roots: [Complex64; 2],
    /// The discriminant `b^2 - 4ac`.
    pub discriminant: Complex64,
}

fn roots_from(a: Complex64, b: Complex64, d: Complex64) -> [Complex64; 2] {
    let sqrt_d = d.sqrt();
    let two_a = 2.0 * a;
    [(-b + sqrt_d) / two_a, (-b - sqrt_d) / two_a]
}

/// Roots of a quadratic with real coefficients.
///
/// The sign of the discriminant decides the [`RootKind`]. Roots are always
/// returned as complex numbers; real roots have a zero imaginary part.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when `a == 0` or any coefficient is not finite.
///
/// # Example
///
/// ```rust
/// use iterum_math::quadratic::{quadratic, RootKind};
///
/// let result = quadratic(1.0, -3.0, 2.0).unwrap();
/// assert_eq!(result.kind, RootKind::DistinctReal);
/// assert_eq!(result.roots[0].re, 2.0);
/// assert_eq!(result.roots[1].re, 1.0);
/// ```
pub fn quadratic(a: f64, b: f64, c: f64) -> MathResult<QuadraticRoots> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(MathError::invalid_input("coefficients must be finite"));
    }
    if a == 0.0 {
        return Err(MathError::invalid_input(
            "leading coefficient is zero, not a quadratic",
        ));
    }

    let d = b * b - 4.0 * a * c;
    let kind = if d == 0.0 {
        RootKind::Repeated
    } else if d > 0.0 {
        RootKind::DistinctReal
    } else {
        RootKind::ComplexConjugate
    };

    let discriminant = Complex64::new(d, 0.0);
    Ok(QuadraticRoots {
        kind,
        roots: roots_from(a.into(), b.into(), discriminant),
        discriminant,
    })
}

/// Roots of a quadratic with complex coefficients.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when `a == 0` or any coefficient is not finite.
pub fn quadratic_complex(a: Complex64, b: Complex64, c: Complex64) -> MathResult<QuadraticRoots> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(MathError::invalid_input("coefficients must be finite"));
    }
    if a.norm_sqr() == 0.0 {
        return Err(MathError::invalid_input(
            "leading coefficient is zero, not a quadratic",
        ));
    }

    let d = b * b - 4.0 * a * c;
    let kind = if d.norm_sqr() == 0.0 {
        RootKind::Repeated
    } else {
        RootKind::Distinct
    };

    Ok(QuadraticRoots {
        kind,
        roots: roots_from(a, b, d),
        discriminant: d,
    })
}
