//! Backtracking search over pre-filtered candidate lists

/// Solver, outcomes and the end-to-end pipeline
pub mod backtrack;
/// Diagnostic hooks called on every recursive entry
pub mod observer;
/// Verified complete assignments
pub mod solution;
/// Fixed-capacity placement stack
pub mod stack;

pub use backtrack::{SearchOutcome, SearchStats, Solver, solve};
pub use solution::Solution;
