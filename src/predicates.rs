//! Exact geometric predicates on integer lattice points.
//!
//! Orientation, segment intersection, and point-in-triangle tests are
//! computed in integer arithmetic and are exact. Angle and midpoint queries
//! lower to `f64`, since midpoints of integer segments are half-integral.
//!
//! # Example
//!
//! ```
//! use artgallery::{orientation, Orientation, Point};
//!
//! let p = Point::new(0i64, 0);
//! let q = Point::new(4, 4);
//! let r = Point::new(1, 2);
//!
//! assert_eq!(orientation(p, q, r), Orientation::CounterClockwise);
//! assert_eq!(orientation(p, r, q), Orientation::Clockwise);
//! ```

use crate::graph::Point;
use num_traits::{PrimInt, Signed};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points lie on a common line.
    Collinear,
    /// The turn p -> q -> r bends clockwise.
    Clockwise,
    /// The turn p -> q -> r bends counter-clockwise.
    CounterClockwise,
}

/// Computes the orientation of the turn `p -> q -> r`.
///
/// The sign of the cross product `(q.y - p.y) * (r.x - q.x) -
/// (q.x - p.x) * (r.y - q.y)` decides the result; zero means collinear.
/// Integer arithmetic makes the test exact.
#[inline]
pub fn orientation<I: PrimInt + Signed>(p: Point<I>, q: Point<I>, r: Point<I>) -> Orientation {
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if cross > I::zero() {
        Orientation::Clockwise
    } else if cross < I::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether `p` lies within the closed bounding box of `a` and `b`.
///
/// Only meaningful for points already known to be collinear with the segment;
/// used to disambiguate the collinear cases of [`segments_intersect`].
#[inline]
pub fn on_segment<I: PrimInt + Signed>(a: Point<I>, b: Point<I>, p: Point<I>) -> bool {
    p.x <= a.x.max(b.x) && p.x >= a.x.min(b.x) && p.y <= a.y.max(b.y) && p.y >= a.y.min(b.y)
}

/// Tests whether segment `a1-b1` crosses or touches segment `a2-b2`.
///
/// Segments that share an endpoint are never reported as intersecting:
/// consecutive edges of every polygon share a vertex by construction, so a
/// shared endpoint is contact, not a crossing.
///
/// ```
/// use artgallery::{segments_intersect, Point};
///
/// let a = Point::new(0i64, 0);
/// let b = Point::new(4, 4);
/// let c = Point::new(4, 0);
/// let d = Point::new(0, 4);
///
/// // The two diagonals of a square cross.
/// assert!(segments_intersect(a, b, c, d));
///
/// // Segments meeting only at a shared endpoint do not.
/// assert!(!segments_intersect(a, b, b, c));
/// ```
pub fn segments_intersect<I: PrimInt + Signed>(
    a1: Point<I>,
    b1: Point<I>,
    a2: Point<I>,
    b2: Point<I>,
) -> bool {
    // Shared endpoints are contact, not crossing.
    if a1 == a2 || a1 == b2 || b1 == a2 || b1 == b2 {
        return false;
    }

    let o1 = orientation(a1, b1, a2);
    let o2 = orientation(a1, b1, b2);
    let o3 = orientation(a2, b2, a1);
    let o4 = orientation(a2, b2, b1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases: an endpoint of one segment lies on the other.
    (o1 == Orientation::Collinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Collinear && on_segment(a1, b1, b2))
        || (o3 == Orientation::Collinear && on_segment(a2, b2, a1))
        || (o4 == Orientation::Collinear && on_segment(a2, b2, b1))
}

/// Tests whether the point `(x, y)` lies strictly inside the polygon `ring`.
///
/// Standard horizontal ray-casting parity test over the ordered boundary
/// vertex sequence. The query point is `f64` so callers can test midpoints of
/// integer segments. Points on the boundary may report either way.
pub fn point_in_polygon<I: PrimInt + Signed>(x: f64, y: f64, ring: &[Point<I>]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let n = ring.len();
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = to_f64(ring[i]);
        let (xj, yj) = to_f64(ring[j]);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Computes the interior angle at vertex `b` between rays `b -> a` and
/// `b -> c`, in degrees.
///
/// The raw dot-product/arccosine angle is always in `[0, 180]`; whether the
/// polygon opens on the convex or the reflex side is decided by testing the
/// midpoint of segment `a-c` against `ring`. An interior midpoint means the
/// convex angle, otherwise the reflex complement `360 - theta`.
pub fn interior_angle<I: PrimInt + Signed>(
    a: Point<I>,
    b: Point<I>,
    c: Point<I>,
    ring: &[Point<I>],
) -> f64 {
    let (ax, ay) = to_f64(a);
    let (bx, by) = to_f64(b);
    let (cx, cy) = to_f64(c);

    let (ux, uy) = (ax - bx, ay - by);
    let (vx, vy) = (cx - bx, cy - by);

    let dot = ux * vx + uy * vy;
    let norm = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    if norm == 0.0 {
        return 0.0;
    }

    let theta = (dot / norm).clamp(-1.0, 1.0).acos().to_degrees();

    let mx = (ax + cx) / 2.0;
    let my = (ay + cy) / 2.0;

    if point_in_polygon(mx, my, ring) {
        theta
    } else {
        360.0 - theta
    }
}

#[inline]
fn to_f64<I: PrimInt + Signed>(p: Point<I>) -> (f64, f64) {
    (
        p.x.to_f64().unwrap_or(f64::NAN),
        p.y.to_f64().unwrap_or(f64::NAN),
    )
}
