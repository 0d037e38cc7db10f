//! Puzzle constants and runtime presentation defaults

// Board geometry
/// Side length of the puzzle grid; coordinates run from 0 to `BOARD_SIZE - 1`
pub const BOARD_SIZE: i32 = 18;

/// The puzzle's cells as `(area, x, y)`, in search order
///
/// `(x, y)` is the lower-left corner of the cell's unit square.
pub const PUZZLE_CELLS: [(i32, i32, i32); 29] = [
    (2, 3, 0),
    (18, 7, 0),
    (12, 2, 1),
    (4, 13, 1),
    (3, 4, 2),
    (7, 11, 2),
    (6, 16, 2),
    (6, 0, 3),
    (9, 3, 4),
    (11, 9, 4),
    (8, 14, 5),
    (4, 0, 6),
    (14, 5, 6),
    (18, 15, 6),
    (20, 8, 8),
    (7, 1, 10),
    (3, 11, 10),
    (3, 16, 10),
    (3, 2, 11),
    (7, 7, 12),
    (10, 13, 12),
    (5, 16, 13),
    (4, 0, 14),
    (10, 5, 14),
    (3, 12, 14),
    (12, 3, 15),
    (7, 14, 15),
    (8, 9, 16),
    (2, 13, 16),
];

// Candidate generation
/// Shortest leg that can hold a unit square
pub const MIN_LEG: i32 = 2;

/// Far corner of the anchor square when the right angle sits at the origin
pub const PROBE_POINT: (i32, i32) = (1, 1);

// Progress display
/// Nodes visited between spinner refreshes
pub const PROGRESS_REFRESH_NODES: u64 = 4096;
/// Spinner redraw interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

// PNG rendering
/// Pixels per grid unit
pub const IMAGE_CELL_PIXELS: u32 = 32;
/// Blank border around the board in pixels
pub const IMAGE_MARGIN_PIXELS: u32 = 16;
/// Background colour
pub const IMAGE_BACKGROUND: [u8; 3] = [255, 255, 255];
/// Grid line colour
pub const IMAGE_GRID: [u8; 3] = [225, 225, 225];
/// Fill colour for anchor squares
pub const IMAGE_ANCHOR: [u8; 3] = [150, 150, 150];
/// Outline colours, cycled per triangle
pub const IMAGE_PALETTE: [[u8; 3]; 6] = [
    [200, 40, 40],
    [40, 110, 200],
    [30, 150, 70],
    [190, 120, 20],
    [130, 50, 170],
    [20, 140, 150],
];
