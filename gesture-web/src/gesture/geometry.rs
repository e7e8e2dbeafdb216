//! Euclidean distance helpers over landmarks
//!
//! 2D variants ignore depth; MediaPipe's z is noisy, so planar comparisons
//! (finger extension, hand size) use them.

use super::skeleton::{Landmark, Point2};

/// Euclidean distance over x, y, z
pub fn distance_3d(a: Landmark, b: Landmark) -> f32 {
    (a.to_vector() - b.to_vector()).norm()
}

/// Euclidean distance over x, y only
pub fn distance_2d(a: Landmark, b: Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn midpoint_2d(a: Landmark, b: Landmark) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Signed area term for the turn a→b→c (positive = counter-clockwise in y-up)
pub(crate) fn cross_2d(a: Point2, b: Point2, c: Point2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True when segments p1-p2 and q1-q2 cross at a single interior point.
/// Touching endpoints and collinear overlap do not count.
pub(crate) fn segments_cross(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> bool {
    let d1 = cross_2d(q1, q2, p1);
    let d2 = cross_2d(q1, q2, p2);
    let d3 = cross_2d(p1, p2, q1);
    let d4 = cross_2d(p1, p2, q2);

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
