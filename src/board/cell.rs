//! Cells with their derived candidate lists, and the board that owns them

use crate::board::candidates::{DimensionCandidate, dimension_candidates, generate_candidates};
use crate::board::layout::{BoardLayout, CellSpec};
use crate::geometry::{GridPoint, GridTriangle, UnitSquare};
use bitvec::slice::BitSlice;

/// One puzzle cell and the placements still open to it
///
/// Area and anchor never change after construction. The candidate list only
/// shrinks, and only during pre-filtering.
#[derive(Debug, Clone)]
pub struct Cell {
    spec: CellSpec,
    dimensions: Vec<DimensionCandidate>,
    candidates: Vec<GridTriangle>,
}

impl Cell {
    /// Generate every on-board candidate for `spec`
    pub fn new(spec: CellSpec, max_coordinate: i32) -> Self {
        let dimensions = dimension_candidates(spec.area);
        let candidates = generate_candidates(spec.anchor, &dimensions, max_coordinate);
        Self {
            spec,
            dimensions,
            candidates,
        }
    }

    /// Required triangle area
    pub const fn area(&self) -> i32 {
        self.spec.area
    }

    /// Lower-left corner of the cell's unit square
    pub const fn anchor(&self) -> GridPoint {
        self.spec.anchor
    }

    /// The unit square every candidate must cover
    pub const fn probe_square(&self) -> UnitSquare {
        UnitSquare::new(self.spec.anchor)
    }

    /// Leg pairs and offsets the candidates were generated from
    pub fn dimensions(&self) -> &[DimensionCandidate] {
        &self.dimensions
    }

    /// Remaining candidates in generation order
    pub fn candidates(&self) -> &[GridTriangle] {
        &self.candidates
    }

    /// Keep the candidates whose bit is set, preserving order
    ///
    /// Candidates beyond the end of `keep` are dropped.
    pub fn retain_candidates(&mut self, keep: &BitSlice) {
        let mut flags = keep.iter().by_vals();
        self.candidates.retain(|_| flags.next().unwrap_or(false));
    }
}

/// All cells of a layout, in search order
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    max_coordinate: i32,
}

impl Board {
    /// Build every cell's candidate list
    pub fn from_layout(layout: &BoardLayout) -> Self {
        let max_coordinate = layout.max_coordinate();
        Self {
            cells: layout
                .cells()
                .iter()
                .map(|&spec| Cell::new(spec, max_coordinate))
                .collect(),
            max_coordinate,
        }
    }

    /// Cells in search order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access for filtering passes
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Largest valid coordinate on either axis
    pub const fn max_coordinate(&self) -> i32 {
        self.max_coordinate
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Candidates remaining across all cells
    pub fn candidate_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.candidates().len()).sum()
    }
}
