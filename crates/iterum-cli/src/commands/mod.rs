//! CLI command implementations.

pub mod problems;
pub mod quadratic;
pub mod solve;

// Re-export submodules for convenience
pub use problems::ProblemsArgs;
pub use quadratic::QuadraticArgs;
pub use solve::SolveArgs;
