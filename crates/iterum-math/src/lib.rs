//! # Iterum Math
//!
//! Classical iterative root-finding for scalar equations.
//!
//! This crate provides:
//!
//! - **Bracketing solvers**: Bisection and regula falsi
//! - **Open solvers**: Newton-Raphson, modified Newton, secant
//! - **Fixed-point solvers**: Plain iteration, Aitken Δ², Steffensen
//! - **Complex solvers**: Müller's method and the closed-form quadratic
//!
//! ## Design Philosophy
//!
//! - **Inspectable**: Every iterative solver returns its full trace
//! - **Explicit outcomes**: Convergence, exhaustion and numerical faults are
//!   values, not panics
//! - **Deterministic**: Identical inputs give identical traces

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod quadratic;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DomainError, MathError, MathResult};
    pub use crate::quadratic::{quadratic, quadratic_complex, QuadraticRoots, RootKind};
    pub use crate::solvers::{
        aitken, bisection, drive, fixed_point, modified_newton, muller, newton_raphson,
        newton_raphson_numerical, regula_falsi, secant, steffensen, Accelerated, Iterate, Scheme,
        Solution, SolverConfig, Status,
    };
}

pub use error::{DomainError, MathError, MathResult};
