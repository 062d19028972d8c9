//! Built-in test problems.

use num_complex::Complex64;

use crate::error::{CliError, CliResult};

type Real = fn(f64) -> f64;
type Complex = fn(Complex64) -> Complex64;

/// An equation `f(x) = 0` with everything the methods may ask for.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub name: &'static str,
    pub equation: &'static str,
    pub f: Real,
    pub df: Real,
    pub d2f: Real,
    /// Fixed-point form `x = g(x)`, when one converges near the root.
    pub g: Option<Real>,
    pub fz: Complex,
    pub bracket: (f64, f64),
    pub guess: f64,
}

const PROBLEMS: &[Problem] = &[
    Problem {
        name: "cubic",
        equation: "x^3 - x - 1",
        f: |x| x * x * x - x - 1.0,
        df: |x| 3.0 * x * x - 1.0,
        d2f: |x| 6.0 * x,
        g: Some(|x| (x + 1.0).cbrt()),
        fz: |z| z * z * z - z - 1.0,
        bracket: (1.0, 2.0),
        guess: 1.5,
    },
    Problem {
        name: "babylonian",
        equation: "x^2 - 3",
        f: |x| x * x - 3.0,
        df: |x| 2.0 * x,
        d2f: |_| 2.0,
        g: Some(|x| 0.5 * (x + 3.0 / x)),
        fz: |z| z * z - 3.0,
        bracket: (1.0, 2.0),
        guess: 1.5,
    },
    Problem {
        name: "log-parabola",
        equation: "(x - 2)^2 - ln x",
        f: |x| (x - 2.0).powi(2) - x.ln(),
        df: |x| 2.0 * (x - 2.0) - 1.0 / x,
        d2f: |x| 2.0 + 1.0 / (x * x),
        g: Some(|x| 2.0 + x.ln().sqrt()),
        fz: |z| (z - 2.0).powi(2) - z.ln(),
        bracket: (std::f64::consts::E, 4.0),
        guess: 3.0,
    },
    Problem {
        name: "sqrt2",
        equation: "x^2 - 2",
        f: |x| x * x - 2.0,
        df: |x| 2.0 * x,
        d2f: |_| 2.0,
        g: Some(|x| x / 2.0 + 1.0 / x),
        fz: |z| z * z - 2.0,
        bracket: (1.0, 2.0),
        guess: 1.5,
    },
    Problem {
        name: "double-root",
        equation: "(x - e^-x)^2",
        f: |x| (x - (-x).exp()).powi(2),
        df: |x| 2.0 * (x - (-x).exp()) * (1.0 + (-x).exp()),
        d2f: |x| 2.0 * (1.0 + (-x).exp()).powi(2) - 2.0 * (x - (-x).exp()) * (-x).exp(),
        g: Some(|x| (-x).exp()),
        fz: |z| (z - (-z).exp()).powi(2),
        bracket: (0.0, 1.0),
        guess: 0.5,
    },
    Problem {
        name: "unit-circle",
        equation: "x^2 + 1",
        f: |x| x * x + 1.0,
        df: |x| 2.0 * x,
        d2f: |_| 2.0,
        g: None,
        fz: |z| z * z + 1.0,
        bracket: (0.0, 1.0),
        guess: 0.5,
    },
];

/// Every built-in problem.
pub fn catalogue() -> &'static [Problem] {
    PROBLEMS
}

/// Looks a problem up by name.
pub fn find(name: &str) -> CliResult<&'static Problem> {
    PROBLEMS
        .iter()
        .find(|problem| problem.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CliError::UnknownProblem(name.to_string()))
}
