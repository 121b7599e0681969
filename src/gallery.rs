//! End-to-end guard placement pipeline.

use crate::error::GalleryError;
use crate::graph::{Edge, PlanarGraph, Point};
use crate::guard::select_guards;
use crate::triangulate::triangulate;
use crate::validate::closed_ring;
use num_traits::{PrimInt, Signed};
use std::fmt;

/// Computes camera placements for a gallery boundary.
///
/// Runs the full pipeline: builds the planar graph from the edge list,
/// validates it as a simple closed polygon, triangulates the interior by ear
/// clipping, and 3-colors the triangulation to pick the smallest guard set.
/// Each call works on fresh state; nothing is cached between invocations and
/// no references into caller data are retained.
///
/// The returned points are a subset of the boundary vertices, at most
/// floor(n / 3) of them, in boundary insertion order.
///
/// # Errors
///
/// * [`GalleryError::MalformedBoundary`] if the edges do not form one closed
///   cycle (open chain, branching, or disjoint loops).
/// * [`GalleryError::SelfIntersectingBoundary`] if two non-adjacent boundary
///   edges cross.
/// * [`GalleryError::TriangulationFailure`] only on an internal invariant
///   violation; validated input never triggers it.
///
/// # Example
///
/// ```
/// use artgallery::{solve, Edge, Point};
///
/// let boundary = [
///     Edge::new(Point::new(0i64, 0), Point::new(4, 0)),
///     Edge::new(Point::new(4, 0), Point::new(4, 4)),
///     Edge::new(Point::new(4, 4), Point::new(0, 4)),
///     Edge::new(Point::new(0, 4), Point::new(0, 0)),
/// ];
///
/// let guards = solve(&boundary).unwrap();
/// assert_eq!(guards.len(), 1);
/// ```
pub fn solve<I: PrimInt + Signed + fmt::Display>(
    edges: &[Edge<I>],
) -> Result<Vec<Point<I>>, GalleryError> {
    let mut graph = PlanarGraph::from_edges(edges);
    let ring = closed_ring(&graph)?;
    let triangles = triangulate(&ring)?;
    Ok(select_guards(&mut graph, &triangles))
}
