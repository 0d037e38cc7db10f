//! Enumeration of every grid-aligned right triangle that can serve a cell
//!
//! Generation happens in three stages. Factor twice the area into integer legs,
//! find every translation of the upright triangle that still covers the unit
//! square at the origin, then turn each translation into the four quarter-turn
//! orientations around the cell's own square and keep the ones on the board.
//! The resulting order fixes the search order: legs by ascending base, offsets
//! in scan order, orientations upright, right, down, left.

use crate::geometry::{GridPoint, GridTriangle};
use crate::io::configuration::{MIN_LEG, PROBE_POINT};

/// Leg lengths of a right triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    /// Length of the leg along the first axis
    pub base: i32,
    /// Length of the leg along the second axis
    pub height: i32,
}

impl Dimension {
    /// Create a dimension from its legs
    pub const fn new(base: i32, height: i32) -> Self {
        Self { base, height }
    }

    /// Twice the area enclosed by the legs
    pub const fn doubled_area(&self) -> i32 {
        self.base * self.height
    }
}

/// Leg lengths together with every offset that keeps the anchor square covered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionCandidate {
    /// Leg lengths
    pub dimension: Dimension,
    /// Translations `(shift_x, shift_y)` of the upright triangle, both non-positive
    pub offsets: Vec<GridPoint>,
}

/// Orientation of a placed triangle, as quarter turns clockwise from upright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Right angle lower-left, base to the right, height upward
    Upright,
    /// Right angle upper-left, base downward, height to the right
    Right,
    /// Right angle upper-right, base to the left, height downward
    Down,
    /// Right angle lower-right, base upward, height to the left
    Left,
}

impl Rotation {
    /// Every orientation, in generation order
    pub const ALL: [Self; 4] = [Self::Upright, Self::Right, Self::Down, Self::Left];

    /// Rotate a vector by this orientation's quarter turns
    pub const fn turn(self, v: GridPoint) -> GridPoint {
        match self {
            Self::Upright => GridPoint::new(v.x, v.y),
            Self::Right => GridPoint::new(v.y, -v.x),
            Self::Down => GridPoint::new(-v.x, -v.y),
            Self::Left => GridPoint::new(-v.y, v.x),
        }
    }

    // Corner of the anchor square that the upright origin maps onto
    const fn pivot(self) -> GridPoint {
        match self {
            Self::Upright => GridPoint::new(0, 0),
            Self::Right => GridPoint::new(0, 1),
            Self::Down => GridPoint::new(1, 1),
            Self::Left => GridPoint::new(1, 0),
        }
    }
}

/// Every `(base, height)` with `base * height == 2 * area` and both legs at least 2
///
/// Ordered by ascending base. Areas below 2 have no such factorisation.
pub fn dimensions(area: i32) -> Vec<Dimension> {
    let doubled = area.saturating_mul(2);
    (MIN_LEG..doubled)
        .filter(|base| doubled % base == 0)
        .map(|base| Dimension::new(base, doubled / base))
        .filter(|dimension| dimension.height >= MIN_LEG)
        .collect()
}

/// Every translation of the upright triangle that keeps the origin's unit square inside it
///
/// The scan walks `shift_y` down from 0 for each `shift_x` from 0 downward,
/// stopping once `shift_y = 0` no longer covers the square.
pub fn valid_offsets(dimension: Dimension) -> Vec<GridPoint> {
    if dimension.base < 1 || dimension.height < 1 {
        return Vec::new();
    }

    let probe = GridPoint::new(PROBE_POINT.0, PROBE_POINT.1);
    let covers = |shift: GridPoint| {
        place(Rotation::Upright, GridPoint::origin(), dimension, shift).contains_point(probe)
    };

    let mut offsets = Vec::new();
    let mut shift_x = 0;
    while covers(GridPoint::new(shift_x, 0)) {
        let mut shift_y = 0;
        while covers(GridPoint::new(shift_x, shift_y)) {
            offsets.push(GridPoint::new(shift_x, shift_y));
            shift_y -= 1;
        }
        shift_x -= 1;
    }
    offsets
}

/// Dimensions of `area` paired with their offsets
pub fn dimension_candidates(area: i32) -> Vec<DimensionCandidate> {
    dimensions(area)
        .into_iter()
        .map(|dimension| DimensionCandidate {
            dimension,
            offsets: valid_offsets(dimension),
        })
        .collect()
}

/// Absolute triangle for one orientation, leg pair and offset around `anchor`
///
/// Vertices are the right-angle corner, the end of the base leg and the end of
/// the height leg.
pub fn place(
    rotation: Rotation,
    anchor: GridPoint,
    dimension: Dimension,
    offset: GridPoint,
) -> GridTriangle {
    let corner = anchor + rotation.pivot() + rotation.turn(offset);
    let base_end = corner + rotation.turn(GridPoint::new(dimension.base, 0));
    let height_end = corner + rotation.turn(GridPoint::new(0, dimension.height));
    GridTriangle::new(corner, base_end, height_end)
}

/// Expand a dimension table into every on-board triangle for `anchor`
pub fn generate_candidates(
    anchor: GridPoint,
    table: &[DimensionCandidate],
    max_coordinate: i32,
) -> Vec<GridTriangle> {
    let mut candidates = Vec::new();
    for entry in table {
        for &offset in &entry.offsets {
            for rotation in Rotation::ALL {
                let triangle = place(rotation, anchor, entry.dimension, offset);
                if triangle.within(0, max_coordinate) {
                    candidates.push(triangle);
                }
            }
        }
    }
    candidates
}
