//! Orientation, crossing and containment tests
//!
//! Segment crossing is strict: two triangles may share vertices or run along
//! each other, so any collinear triple means "no crossing". Point
//! containment is boundary-inclusive so a probe square may touch a hypotenuse.

use crate::geometry::primitives::{Coordinate, Point, Triangle};
use std::cmp::Ordering;

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line
    Collinear,
    /// The triple turns clockwise
    Clockwise,
    /// The triple turns counter-clockwise
    CounterClockwise,
}

/// Classify the turn p -> q -> r by the sign of the cross product (q - p) x (r - q)
///
/// An exactly zero cross product, or one that cannot be ordered, is collinear.
pub fn orientation<T: Coordinate>(p: Point<T>, q: Point<T>, r: Point<T>) -> Orientation {
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    match value.partial_cmp(&T::zero()) {
        Some(Ordering::Greater) => Orientation::Clockwise,
        Some(Ordering::Less) => Orientation::CounterClockwise,
        _ => Orientation::Collinear,
    }
}

fn between<T: Coordinate>(value: T, a: T, b: T) -> bool {
    (a <= value && value <= b) || (b <= value && value <= a)
}

/// Whether `q` falls inside the bounding box spanned by `p` and `r`
///
/// Only meaningful when the three points are already known to be collinear.
pub fn on_segment<T: Coordinate>(p: Point<T>, q: Point<T>, r: Point<T>) -> bool {
    between(q.x, p.x, r.x) && between(q.y, p.y, r.y)
}

/// Whether segments p1-q1 and p2-q2 cross transversally
///
/// Sharing an endpoint, touching a segment's interior with an endpoint and
/// collinear overlap all return false.
pub fn segments_intersect<T: Coordinate>(
    p1: Point<T>,
    q1: Point<T>,
    p2: Point<T>,
    q2: Point<T>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if [o1, o2, o3, o4].contains(&Orientation::Collinear) {
        return false;
    }

    o1 != o2 && o3 != o4
}

fn sign<T: Coordinate>(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> T {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Boundary-inclusive point-in-triangle test
///
/// The point is inside unless the three edge signs contain both a strictly
/// negative and a strictly positive value.
pub fn point_in_triangle<T: Coordinate>(
    pt: Point<T>,
    v1: Point<T>,
    v2: Point<T>,
    v3: Point<T>,
) -> bool {
    let signs = [sign(pt, v1, v2), sign(pt, v2, v3), sign(pt, v3, v1)];
    let zero = T::zero();

    let has_negative = signs.iter().any(|&d| d < zero);
    let has_positive = signs.iter().any(|&d| d > zero);

    !(has_negative && has_positive)
}

/// Whether every vertex of `inner` lies inside `outer`
pub fn triangle_contains_triangle<T: Coordinate>(outer: &Triangle<T>, inner: &Triangle<T>) -> bool {
    inner
        .vertices()
        .iter()
        .all(|&vertex| outer.contains_point(vertex))
}

/// Whether any edge of `a` crosses any edge of `b`
pub fn triangles_cross<T: Coordinate>(a: &Triangle<T>, b: &Triangle<T>) -> bool {
    let other_edges = b.edges();
    a.edges()
        .iter()
        .any(|edge| other_edges.iter().any(|other| edge.crosses(other)))
}
