//! Board layouts: grid size plus the ordered list of cells to fill

use crate::geometry::GridPoint;
use crate::io::configuration::{BOARD_SIZE, PUZZLE_CELLS};
use crate::io::error::{Result, invalid_board, invalid_parameter};

/// Area and anchor of one cell, as given by the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    /// Required triangle area
    pub area: i32,
    /// Lower-left corner of the cell's unit square
    pub anchor: GridPoint,
}

impl CellSpec {
    /// Create a cell with `area` anchored at `(x, y)`
    pub const fn new(area: i32, x: i32, y: i32) -> Self {
        Self {
            area,
            anchor: GridPoint::new(x, y),
        }
    }
}

/// A square board and the cells placed on it, in search order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    size: i32,
    cells: Vec<CellSpec>,
}

impl BoardLayout {
    /// Validate and build a layout
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board is smaller than 2 (it must hold at least one unit square)
    /// - A cell has a non-positive area
    /// - A cell's unit square does not lie on the board
    pub fn new(size: i32, cells: Vec<CellSpec>) -> Result<Self> {
        if size < 2 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"board must span at least one unit square",
            ));
        }

        let max_coordinate = size - 1;
        for (index, cell) in cells.iter().enumerate() {
            if cell.area <= 0 {
                return Err(invalid_board(&format!(
                    "cell {index} has non-positive area {}",
                    cell.area
                )));
            }

            let GridPoint { x, y } = cell.anchor;
            if x < 0 || y < 0 || x + 1 > max_coordinate || y + 1 > max_coordinate {
                return Err(invalid_board(&format!(
                    "cell {index} anchored at {} has its unit square off the {size}x{size} board",
                    cell.anchor
                )));
            }
        }

        Ok(Self { size, cells })
    }

    /// The fixed 29-cell puzzle on the 18x18 grid
    pub fn puzzle() -> Self {
        Self {
            size: BOARD_SIZE,
            cells: PUZZLE_CELLS
                .iter()
                .map(|&(area, x, y)| CellSpec::new(area, x, y))
                .collect(),
        }
    }

    /// Number of grid points along each axis
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Largest valid coordinate on either axis
    pub const fn max_coordinate(&self) -> i32 {
        self.size - 1
    }

    /// Cells in search order
    pub fn cells(&self) -> &[CellSpec] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the layout has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
