//! Depth-first assignment of one candidate per cell with undo on failure
//!
//! Cells are visited in layout order and each cell's candidates in generation
//! order, so the first complete assignment found is fully determined by the
//! layout. The search stops at that first assignment.

use crate::board::Board;
use crate::board::layout::BoardLayout;
use crate::board::prefilter::prefilter;
use crate::geometry::GridTriangle;
use crate::geometry::predicates::{triangle_contains_triangle, triangles_cross};
use crate::io::error::Result;
use crate::search::observer::SearchObserver;
use crate::search::solution::Solution;
use crate::search::stack::PlacementStack;

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every cell received a mutually compatible triangle
    Solved(Solution),
    /// Every combination was tried without completing the board
    Exhausted,
}

impl SearchOutcome {
    /// The solution, if one was found
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted => None,
        }
    }

    /// Whether a solution was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive entries, including the final complete one
    pub nodes: u64,
    /// Cells whose candidates ran out, forcing a return to the previous cell
    pub backtracks: u64,
    /// Largest depth entered
    pub deepest: usize,
}

/// Whether `candidate` can join the triangles already placed
///
/// Rejects any edge crossing, and nesting in either direction.
pub fn compatible(candidate: &GridTriangle, placed: &[GridTriangle]) -> bool {
    placed.iter().all(|existing| {
        !triangles_cross(candidate, existing)
            && !triangle_contains_triangle(existing, candidate)
            && !triangle_contains_triangle(candidate, existing)
    })
}

/// Backtracking solver over a pre-filtered board
pub struct Solver<'a, O: SearchObserver> {
    board: &'a Board,
    stack: PlacementStack,
    stats: SearchStats,
    observer: O,
}

impl<'a, O: SearchObserver> Solver<'a, O> {
    /// Prepare a search over `board`, reporting to `observer`
    pub fn new(board: &'a Board, observer: O) -> Self {
        Self {
            board,
            stack: PlacementStack::new(board.len()),
            stats: SearchStats::default(),
            observer,
        }
    }

    /// Search for the first complete assignment
    ///
    /// Can be called again; each call starts from an empty assignment and
    /// fresh counters.
    ///
    /// # Errors
    ///
    /// Returns an error only if the observer fails
    pub fn run(&mut self) -> Result<SearchOutcome> {
        self.stack.clear();
        self.stats = SearchStats::default();

        let found = self.descend(0);
        self.observer.finish(&self.stats);

        Ok(if found? {
            SearchOutcome::Solved(Solution::new(self.stack.placed().to_vec()))
        } else {
            SearchOutcome::Exhausted
        })
    }

    /// Counters from the last run
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Release the observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn descend(&mut self, index: usize) -> Result<bool> {
        self.stats.nodes += 1;
        self.stats.deepest = self.stats.deepest.max(index);
        self.observer.enter(index, &self.stats)?;

        let board = self.board;
        let Some(cell) = board.cells().get(index) else {
            return Ok(true);
        };

        for candidate in cell.candidates() {
            if !compatible(candidate, self.stack.placed()) || !self.stack.push(*candidate) {
                continue;
            }
            if self.descend(index + 1)? {
                return Ok(true);
            }
            self.stack.pop();
        }

        self.stats.backtracks += 1;
        Ok(false)
    }
}

/// Build, pre-filter and search `layout`
///
/// # Errors
///
/// Returns an error only if the observer fails
pub fn solve<O: SearchObserver>(layout: &BoardLayout, observer: O) -> Result<SearchOutcome> {
    let mut board = Board::from_layout(layout);
    prefilter(&mut board);
    Solver::new(&board, observer).run()
}
