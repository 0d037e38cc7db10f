//! Planar primitives and the orientation-based predicates built on them

/// Points, segments, triangles and unit probe squares
pub mod primitives;
/// Orientation, crossing and containment tests
pub mod predicates;

pub use primitives::{GridPoint, GridTriangle, Point, Segment, Triangle, UnitSquare};
