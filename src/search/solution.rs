//! Complete assignments and their independent re-verification

use crate::board::Board;
use crate::geometry::GridTriangle;
use crate::geometry::predicates::{triangle_contains_triangle, triangles_cross};
use crate::io::error::{Result, SolverError};

/// One triangle per cell, in cell order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    triangles: Vec<GridTriangle>,
}

impl Solution {
    /// Wrap an assignment
    pub const fn new(triangles: Vec<GridTriangle>) -> Self {
        Self { triangles }
    }

    /// Chosen triangles in cell order
    pub fn triangles(&self) -> &[GridTriangle] {
        &self.triangles
    }

    /// Number of triangles
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the assignment is empty
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Check the assignment against every rule of the puzzle
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidSolution`] naming the first triangle that:
    /// - Has no matching cell, or a cell is left without a triangle
    /// - Leaves the board
    /// - Has the wrong area for its cell
    /// - Does not cover its cell's unit square
    /// - Crosses, contains or lies inside an earlier triangle
    pub fn verify(&self, board: &Board) -> Result<()> {
        if self.triangles.len() != board.len() {
            return Err(SolverError::InvalidSolution {
                index: self.triangles.len().min(board.len()),
                reason: format!(
                    "{} triangles for {} cells",
                    self.triangles.len(),
                    board.len()
                ),
            });
        }

        for (index, (triangle, cell)) in self.triangles.iter().zip(board.cells()).enumerate() {
            let reject = |reason: String| SolverError::InvalidSolution { index, reason };

            if !triangle.within(0, board.max_coordinate()) {
                return Err(reject("vertex off the board".to_string()));
            }

            let doubled_area = triangle.doubled_signed_area().abs();
            if doubled_area != 2 * cell.area() {
                return Err(reject(format!(
                    "area {}/2 does not match cell area {}",
                    doubled_area,
                    cell.area()
                )));
            }

            let square = cell.probe_square();
            if !square
                .corners()
                .iter()
                .all(|&corner| triangle.contains_point(corner))
            {
                return Err(reject(format!(
                    "does not cover its square at {}",
                    square.origin()
                )));
            }

            let earlier = self.triangles.get(..index).unwrap_or(&[]);
            if let Some(other) = earlier.iter().position(|e| triangles_cross(triangle, e)) {
                return Err(reject(format!("crosses triangle {other}")));
            }
            if let Some(other) = earlier.iter().position(|e| {
                triangle_contains_triangle(e, triangle) || triangle_contains_triangle(triangle, e)
            }) {
                return Err(reject(format!("nested with triangle {other}")));
            }
        }

        Ok(())
    }
}
