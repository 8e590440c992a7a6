//! Boxes and circles over `Vector2<f64>` points.

use nalgebra::Vector2;

/// Half the Euclidean distance between `p1` and `p2`.
///
/// Exactly 0 when the points coincide. The spanning circle of a chord uses
/// this as its radius (the chord is a diameter).
#[inline]
pub fn half_distance(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    (p2 - p1).norm() / 2.0
}

/// Circle as center plus radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    /// The circle whose diameter is the segment `p1..p2`: midpoint center,
    /// half-distance radius. Degenerates to a radius-0 circle at `p1 == p2`.
    #[inline]
    pub fn spanning(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self {
            center: (p1 + p2) / 2.0,
            radius: half_distance(p1, p2),
        }
    }
}

/// Axis-aligned box spanned by a lower-left and an upper-right corner.
///
/// Invariant (caller's responsibility, not validated): `lo.x <= hi.x` and
/// `lo.y <= hi.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2 {
    pub lo: Vector2<f64>,
    pub hi: Vector2<f64>,
}

impl Box2 {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            lo: Vector2::new(x1, y1),
            hi: Vector2::new(x2, y2),
        }
    }

    /// True iff `c` lies entirely within the box: the circle's extent on each
    /// axis must stay inside the corresponding pair of edges. Touching an edge
    /// counts as inside.
    #[inline]
    pub fn contains_circle(&self, c: &Circle) -> bool {
        c.center.x - c.radius >= self.lo.x
            && c.center.x + c.radius <= self.hi.x
            && c.center.y - c.radius >= self.lo.y
            && c.center.y + c.radius <= self.hi.y
    }
}
