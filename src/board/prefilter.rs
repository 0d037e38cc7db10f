//! Static pruning of candidates that cut through another cell's square
//!
//! Each unit square must end up inside its own triangle only, so a candidate
//! whose edge crosses a foreign square can never appear in a solution. The pass
//! depends only on anchors, never on search state.

use crate::board::cell::Board;
use crate::geometry::{GridTriangle, UnitSquare};
use bitvec::prelude::*;

/// Candidate counts for one cell before and after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFilterSummary {
    /// Candidates produced by generation
    pub generated: usize,
    /// Candidates left after filtering
    pub retained: usize,
}

/// Result of a pre-filter pass, one entry per cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefilterReport {
    /// Per-cell counts, in search order
    pub cells: Vec<CellFilterSummary>,
}

impl PrefilterReport {
    /// Candidates before filtering
    pub fn generated(&self) -> usize {
        self.cells.iter().map(|c| c.generated).sum()
    }

    /// Candidates after filtering
    pub fn retained(&self) -> usize {
        self.cells.iter().map(|c| c.retained).sum()
    }

    /// Candidates discarded
    pub fn removed(&self) -> usize {
        self.generated() - self.retained()
    }
}

/// Whether any edge of `triangle` crosses a side or diagonal of `square`
pub fn crosses_square(triangle: &GridTriangle, square: &UnitSquare) -> bool {
    let segments = square.segments();
    triangle
        .edges()
        .iter()
        .any(|edge| segments.iter().any(|segment| edge.crosses(segment)))
}

/// First cell other than `owner` whose square `triangle` crosses
pub fn conflicting_cell(board: &Board, owner: usize, triangle: &GridTriangle) -> Option<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != owner)
        .find(|(_, cell)| crosses_square(triangle, &cell.probe_square()))
        .map(|(index, _)| index)
}

/// One bit per candidate of cell `owner`, set when the candidate survives
pub fn survivor_mask(board: &Board, owner: usize) -> BitVec {
    board.cells().get(owner).map_or_else(BitVec::new, |cell| {
        cell.candidates()
            .iter()
            .map(|triangle| conflicting_cell(board, owner, triangle).is_none())
            .collect()
    })
}

/// Drop every candidate that crosses another cell's square
pub fn prefilter(board: &mut Board) -> PrefilterReport {
    let masks: Vec<BitVec> = (0..board.len())
        .map(|owner| survivor_mask(board, owner))
        .collect();

    let mut report = PrefilterReport::default();
    for (cell, mask) in board.cells_mut().iter_mut().zip(&masks) {
        let generated = cell.candidates().len();
        cell.retain_candidates(mask);
        report.cells.push(CellFilterSummary {
            generated,
            retained: cell.candidates().len(),
        });
    }
    report
}
