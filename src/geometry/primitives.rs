//! Point, segment and triangle types shared by candidate generation and search
//!
//! Coordinates are generic so the predicates can be exercised with real-valued
//! operands, while the board itself works entirely on integer grid points.

use crate::geometry::predicates::{point_in_triangle, segments_intersect};
use num_traits::Num;
use std::fmt;
use std::ops::{Add, Sub};

/// Numeric type usable as a planar coordinate
pub trait Coordinate: Num + Copy + PartialOrd + fmt::Debug {}

impl<T> Coordinate for T where T: Num + Copy + PartialOrd + fmt::Debug {}

/// Planar point, copied freely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T = i32> {
    /// Horizontal coordinate
    pub x: T,
    /// Vertical coordinate
    pub y: T,
}

/// Integer point on the puzzle grid
pub type GridPoint = Point<i32>;

impl<T: Coordinate> Point<T> {
    /// Create a point from its coordinates
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The point at (0, 0)
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Coordinate> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coordinate> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Closed segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment<T = i32> {
    /// First endpoint
    pub start: Point<T>,
    /// Second endpoint
    pub end: Point<T>,
}

impl<T: Coordinate> Segment<T> {
    /// Create a segment from its endpoints
    pub const fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }

    /// Whether the two segments cross transversally
    ///
    /// Touching at an endpoint or overlapping collinearly does not count.
    pub fn crosses(&self, other: &Self) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

/// Triangle given by an ordered vertex triple
///
/// Candidate triangles keep the right-angle corner first, followed by the end
/// of the base leg and the end of the height leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Triangle<T = i32> {
    vertices: [Point<T>; 3],
}

/// Triangle with integer grid vertices
pub type GridTriangle = Triangle<i32>;

impl<T: Coordinate> Triangle<T> {
    /// Create a triangle from three vertices
    pub const fn new(a: Point<T>, b: Point<T>, c: Point<T>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Vertices in construction order
    pub const fn vertices(&self) -> [Point<T>; 3] {
        self.vertices
    }

    /// The three edges a-b, b-c and c-a
    pub const fn edges(&self) -> [Segment<T>; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Twice the signed area, positive for counter-clockwise vertex order
    pub fn doubled_signed_area(&self) -> T {
        let [a, b, c] = self.vertices;
        let ab = b - a;
        let ac = c - a;
        ab.x * ac.y - ab.y * ac.x
    }

    /// Boundary-inclusive point containment
    pub fn contains_point(&self, point: Point<T>) -> bool {
        let [a, b, c] = self.vertices;
        point_in_triangle(point, a, b, c)
    }

    /// Whether every vertex lies in `[min, max]` on both axes
    pub fn within(&self, min: T, max: T) -> bool {
        self.vertices
            .iter()
            .all(|v| v.x >= min && v.x <= max && v.y >= min && v.y <= max)
    }
}

/// The 1x1 square whose lower-left corner is a cell anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSquare {
    origin: GridPoint,
}

impl UnitSquare {
    /// Square with lower-left corner at `origin`
    pub const fn new(origin: GridPoint) -> Self {
        Self { origin }
    }

    /// Lower-left corner
    pub const fn origin(&self) -> GridPoint {
        self.origin
    }

    /// Corners in the order lower-left, upper-left, upper-right, lower-right
    pub const fn corners(&self) -> [GridPoint; 4] {
        let GridPoint { x, y } = self.origin;
        [
            GridPoint::new(x, y),
            GridPoint::new(x, y + 1),
            GridPoint::new(x + 1, y + 1),
            GridPoint::new(x + 1, y),
        ]
    }

    /// The four boundary sides
    pub const fn sides(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }

    /// Both corner-to-corner diagonals
    pub const fn diagonals(&self) -> [Segment; 2] {
        let [a, b, c, d] = self.corners();
        [Segment::new(a, c), Segment::new(b, d)]
    }

    /// Sides followed by diagonals
    ///
    /// An edge entering through one corner and leaving through the opposite one
    /// touches every side only at endpoints, so only a diagonal reports it.
    pub const fn segments(&self) -> [Segment; 6] {
        let [s0, s1, s2, s3] = self.sides();
        let [d0, d1] = self.diagonals();
        [s0, s1, s2, s3, d0, d1]
    }
}
