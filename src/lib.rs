//! Solver for a right-triangle placement puzzle on an 18x18 grid
//!
//! Each of the puzzle's cells needs one grid-aligned right triangle of a given
//! area that covers the cell's unit square. No two triangles may cross, and
//! none may contain another. The crate enumerates every candidate placement,
//! prunes candidates that cut through foreign squares, then backtracks over
//! the cells in a fixed order until the first consistent assignment appears.

#![forbid(unsafe_code)]

/// Board layouts, candidate generation and pre-filtering
pub mod board;
/// Planar primitives and geometric predicates
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Backtracking search and solutions
pub mod search;

pub use io::error::{Result, SolverError};
