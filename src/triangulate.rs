//! Constrained polygon triangulation using ear clipping.
//!
//! Decomposes a validated simple polygon into triangles whose vertices are
//! boundary vertices only. Every triangle edge is either a boundary edge or a
//! diagonal strictly inside the polygon, so the triangles exactly cover the
//! interior.
//!
//! # Algorithm
//!
//! Maintain the boundary as a cyclic vertex sequence and repeatedly clip
//! ears: a vertex whose interior angle is convex and whose triangle contains
//! no other boundary vertex. The scan restarts after the last clipped vertex
//! and takes the first valid ear, which keeps the algorithm deterministic and
//! O(n²). A simple polygon with n vertices always yields exactly n - 2
//! triangles.
//!
//! # Example
//!
//! ```
//! use artgallery::{triangulate, Point};
//!
//! let ring = vec![
//!     Point::new(0i64, 0),
//!     Point::new(4, 0),
//!     Point::new(4, 4),
//!     Point::new(0, 4),
//! ];
//!
//! let triangles = triangulate(&ring).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

use crate::error::GalleryError;
use crate::graph::Point;
use crate::predicates::{interior_angle, orientation, Orientation};
use num_traits::{PrimInt, Signed};

/// One cell of the triangulation, drawn from the boundary vertex set.
///
/// For clipped ears, `b` is always the ear vertex and `a`/`c` its boundary
/// neighbors at clip time; guard selection relies on this when it replays the
/// removal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle<I> {
    /// First vertex (the ear's predecessor).
    pub a: Point<I>,
    /// Second vertex (the clipped ear).
    pub b: Point<I>,
    /// Third vertex (the ear's successor).
    pub c: Point<I>,
}

impl<I: PrimInt + Signed> Triangle<I> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point<I>, b: Point<I>, c: Point<I>) -> Self {
        Self { a, b, c }
    }

    /// The three vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Point<I>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns true if `p` is one of the triangle's vertices.
    #[inline]
    pub fn has_vertex(&self, p: Point<I>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Computes the area of the triangle.
    pub fn area(&self) -> f64 {
        let ab_x = (self.b.x - self.a.x).to_f64().unwrap_or(f64::NAN);
        let ab_y = (self.b.y - self.a.y).to_f64().unwrap_or(f64::NAN);
        let ac_x = (self.c.x - self.a.x).to_f64().unwrap_or(f64::NAN);
        let ac_y = (self.c.y - self.a.y).to_f64().unwrap_or(f64::NAN);
        (ab_x * ac_y - ac_x * ab_y).abs() / 2.0
    }

    /// Returns the centroid of the triangle.
    pub fn centroid(&self) -> (f64, f64) {
        let xs = (self.a.x + self.b.x + self.c.x).to_f64().unwrap_or(f64::NAN);
        let ys = (self.a.y + self.b.y + self.c.y).to_f64().unwrap_or(f64::NAN);
        (xs / 3.0, ys / 3.0)
    }
}

/// Triangulates a simple polygon given as a cyclic vertex sequence.
///
/// The ring must come from [`closed_ring`](crate::validate::closed_ring):
/// consecutive entries joined by boundary edges, last entry connecting back
/// to the first. Winding direction does not matter.
///
/// Returns the triangles in clip order; the last entry is the final
/// three-vertex remainder.
///
/// # Errors
///
/// [`GalleryError::TriangulationFailure`] if no ear can be found while more
/// than three vertices remain. For correctly validated input this never
/// happens; it signals an internal invariant violation, not bad user input.
pub fn triangulate<I: PrimInt + Signed>(
    ring: &[Point<I>],
) -> Result<Vec<Triangle<I>>, GalleryError> {
    let n = ring.len();
    if n < 3 {
        return Err(GalleryError::TriangulationFailure { remaining: n });
    }

    let mut remaining: Vec<Point<I>> = ring.to_vec();
    let mut triangles = Vec::with_capacity(n - 2);
    let mut start = 0usize;

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;

        for k in 0..m {
            let i = (start + k) % m;
            let prev = (i + m - 1) % m;
            let next = (i + 1) % m;

            if is_ear(&remaining, prev, i, next) {
                triangles.push(Triangle::new(remaining[prev], remaining[i], remaining[next]));
                remaining.remove(i);
                // Resume the scan right after the clipped vertex.
                start = i % remaining.len();
                clipped = true;
                break;
            }
        }

        if !clipped {
            return Err(GalleryError::TriangulationFailure {
                remaining: remaining.len(),
            });
        }
    }

    triangles.push(Triangle::new(remaining[0], remaining[1], remaining[2]));
    Ok(triangles)
}

/// Sums the areas of a triangle set.
///
/// For a correct triangulation this equals the polygon's area, which makes it
/// a cheap coverage check in tests.
pub fn triangulation_area<I: PrimInt + Signed>(triangles: &[Triangle<I>]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

/// Checks whether the vertex at `curr` is a clippable ear.
///
/// An ear vertex is strictly convex (interior angle below 180 degrees, not
/// collinear with its neighbors) and its triangle contains no other ring
/// vertex, inside or on the rim.
fn is_ear<I: PrimInt + Signed>(ring: &[Point<I>], prev: usize, curr: usize, next: usize) -> bool {
    let a = ring[prev];
    let b = ring[curr];
    let c = ring[next];

    // Collinear neighbors would clip a zero-area triangle.
    if orientation(a, b, c) == Orientation::Collinear {
        return false;
    }

    if interior_angle(a, b, c, ring) >= 180.0 {
        return false;
    }

    for (i, &v) in ring.iter().enumerate() {
        if i == prev || i == curr || i == next {
            continue;
        }
        if point_in_triangle(v, a, b, c) {
            return false;
        }
    }

    true
}

/// Tests if `p` lies inside triangle `abc`, counting the rim as inside.
fn point_in_triangle<I: PrimInt + Signed>(
    p: Point<I>,
    a: Point<I>,
    b: Point<I>,
    c: Point<I>,
) -> bool {
    let d1 = tri_sign(p, a, b);
    let d2 = tri_sign(p, b, c);
    let d3 = tri_sign(p, c, a);

    let has_neg = d1 < I::zero() || d2 < I::zero() || d3 < I::zero();
    let has_pos = d1 > I::zero() || d2 > I::zero() || d3 > I::zero();

    !(has_neg && has_pos)
}

#[inline]
fn tri_sign<I: PrimInt + Signed>(p1: Point<I>, p2: Point<I>, p3: Point<I>) -> I {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
