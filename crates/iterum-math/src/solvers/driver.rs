//! Shared stepping machinery for the iterative methods.
//!
//! Every method is a [`Scheme`]: its state plus a single-step update. The
//! [`Iterates`] adapter turns a scheme into a lazy sequence of trace records,
//! and [`drive`] runs one to completion under a [`SolverConfig`].

use log::{debug, trace, warn};

use crate::error::{DomainError, MathResult};
use crate::solvers::{Iterate, Scalar, Solution, SolverConfig, Status};

/// Outcome of a single successful step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance<T> {
    /// The new approximation.
    pub value: T,
    /// Convergence measure compared against the tolerance.
    pub change: f64,
    /// Bracket retained after the step, for bracketing methods.
    pub bracket: Option<(T, T)>,
}

impl<T> Advance<T> {
    /// A step of an open method.
    pub fn open(value: T, change: f64) -> Self {
        Self {
            value,
            change,
            bracket: None,
        }
    }

    /// A step of a bracketing method.
    pub fn bracketed(value: T, change: f64, bracket: (T, T)) -> Self {
        Self {
            value,
            change,
            bracket: Some(bracket),
        }
    }
}

/// One iterative root-finding method.
///
/// Each call to [`advance`](Scheme::advance) is exactly one loop execution.
pub trait Scheme {
    /// Real or complex scalar the method iterates over.
    type Value: Scalar;

    /// Short method name used in logs.
    fn name(&self) -> &'static str;

    /// Best approximation held before the next step.
    fn current(&self) -> Self::Value;

    /// Performs one step.
    fn advance(&mut self) -> Result<Advance<Self::Value>, DomainError>;
}

/// Lazy, fused sequence of iterates produced by a [`Scheme`].
///
/// Yields `Ok` for every finite step and a single `Err` on the first fault.
/// The sequence itself is unbounded; limit it with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Iterates<S> {
    scheme: S,
    step: u32,
    done: bool,
}

impl<S: Scheme> Iterates<S> {
    /// Wraps a scheme.
    pub fn new(scheme: S) -> Self {
        Self {
            scheme,
            step: 0,
            done: false,
        }
    }

    /// The underlying scheme.
    pub fn scheme(&self) -> &S {
        &self.scheme
    }
}

impl<S: Scheme> Iterator for Iterates<S> {
    type Item = Result<Iterate<S::Value>, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.step += 1;

        let advance = match self.scheme.advance() {
            Ok(advance) => advance,
            Err(fault) => {
                self.done = true;
                return Some(Err(fault));
            }
        };

        if !advance.value.is_finite() {
            self.done = true;
            return Some(Err(DomainError::NonFinite { step: self.step }));
        }

        Some(Ok(Iterate {
            step: self.step,
            value: advance.value,
            change: advance.change,
            bracket: advance.bracket,
        }))
    }
}

/// Runs a scheme until it converges, faults, or uses up the iteration budget.
///
/// Never executes more than `config.max_iterations` steps. With a budget of
/// zero the scheme's starting approximation comes back as `Exhausted`.
pub fn drive<S: Scheme>(scheme: S, config: &SolverConfig) -> MathResult<Solution<S::Value>> {
    config.validate()?;

    let name = scheme.name();
    let mut root = scheme.current();
    let mut trace_log = Vec::new();

    debug!(
        "{}: start at {:?} (tolerance {:e}, max {} iterations)",
        name, root, config.tolerance, config.max_iterations
    );

    let mut steps = Iterates::new(scheme);
    for item in steps.by_ref().take(config.max_iterations as usize) {
        let iterate = match item {
            Ok(iterate) => iterate,
            Err(fault) => {
                warn!("{}: stopped after {} iterations: {}", name, trace_log.len(), fault);
                return Ok(Solution {
                    status: Status::DomainError(fault),
                    root,
                    iterations: trace_log.len() as u32,
                    trace: trace_log,
                });
            }
        };

        trace!(
            "{}: step {} -> {:?} (change {:e})",
            name,
            iterate.step,
            iterate.value,
            iterate.change
        );

        root = iterate.value;
        let converged = iterate.change < config.tolerance;
        trace_log.push(iterate);

        if converged {
            debug!("{}: converged to {:?} in {} iterations", name, root, trace_log.len());
            return Ok(Solution {
                status: Status::Converged,
                root,
                iterations: trace_log.len() as u32,
                trace: trace_log,
            });
        }
    }

    debug!("{}: exhausted {} iterations at {:?}", name, config.max_iterations, root);
    Ok(Solution {
        status: Status::Exhausted,
        root,
        iterations: trace_log.len() as u32,
        trace: trace_log,
    })
}
