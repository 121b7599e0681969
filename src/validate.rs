//! Closed-polygon validation for the boundary graph.
//!
//! A graph is a valid gallery boundary iff it forms exactly one simple closed
//! cycle touching every vertex: every vertex has exactly two neighbors, the
//! cycle walk reaches the whole graph, and no two non-adjacent boundary edges
//! cross. Failures are reported, never repaired.
//!
//! # Example
//!
//! ```
//! use artgallery::{closed_ring, Edge, PlanarGraph, Point};
//!
//! let edges = [
//!     Edge::new(Point::new(0i64, 0), Point::new(4, 0)),
//!     Edge::new(Point::new(4, 0), Point::new(4, 4)),
//!     Edge::new(Point::new(4, 4), Point::new(0, 4)),
//!     Edge::new(Point::new(0, 4), Point::new(0, 0)),
//! ];
//!
//! let graph = PlanarGraph::from_edges(&edges);
//! let ring = closed_ring(&graph).unwrap();
//! assert_eq!(ring.len(), 4);
//! ```

use crate::error::GalleryError;
use crate::graph::{PlanarGraph, Point};
use crate::predicates::segments_intersect;
use num_traits::{PrimInt, Signed};
use std::fmt;

/// Validates the graph and returns its boundary as a cyclic vertex sequence.
///
/// The returned ring starts at the first-inserted vertex and follows the
/// boundary in the direction of its first adjacency entry; consecutive ring
/// entries are joined by boundary edges, and the last entry connects back to
/// the first.
///
/// # Errors
///
/// * [`GalleryError::MalformedBoundary`] if any vertex does not have exactly
///   two neighbors, the graph has fewer than three vertices, or the boundary
///   splits into more than one cycle.
/// * [`GalleryError::SelfIntersectingBoundary`] if two non-adjacent boundary
///   edges cross. Edges sharing an endpoint are exempt: consecutive edges of
///   every polygon touch by construction.
pub fn closed_ring<I: PrimInt + Signed + fmt::Display>(
    graph: &PlanarGraph<I>,
) -> Result<Vec<Point<I>>, GalleryError> {
    let n = graph.len();
    if n < 3 {
        return Err(GalleryError::MalformedBoundary {
            detail: format!("{n} boundary vertices, need at least 3"),
        });
    }

    for v in graph.vertices() {
        if v.dest.len() != 2 {
            return Err(GalleryError::MalformedBoundary {
                detail: format!(
                    "vertex {} has {} incident edges, expected 2",
                    v.src,
                    v.dest.len()
                ),
            });
        }
    }

    let ring = walk_cycle(graph)?;

    // Crossing check over boundary edges in walk order.
    for i in 0..n {
        let a1 = ring[i];
        let b1 = ring[(i + 1) % n];

        for j in (i + 1)..n {
            let a2 = ring[j];
            let b2 = ring[(j + 1) % n];

            // Edges sharing an endpoint touch by construction; skip them.
            if a1 == a2 || a1 == b2 || b1 == a2 || b1 == b2 {
                continue;
            }

            if segments_intersect(a1, b1, a2, b2) {
                return Err(GalleryError::SelfIntersectingBoundary {
                    edge_a: i,
                    edge_b: j,
                });
            }
        }
    }

    Ok(ring)
}

/// Returns true if the graph represents a single simple closed polygon.
pub fn is_closed<I: PrimInt + Signed + fmt::Display>(graph: &PlanarGraph<I>) -> bool {
    closed_ring(graph).is_ok()
}

/// Walks the boundary cycle from the first-inserted vertex.
///
/// Every vertex has degree 2 here, so the walk is deterministic: at each step
/// it continues to the neighbor that is not the previous vertex. A walk that
/// closes before touching every vertex means the degree check passed on two
/// or more disjoint cycles.
fn walk_cycle<I: PrimInt + Signed + fmt::Display>(
    graph: &PlanarGraph<I>,
) -> Result<Vec<Point<I>>, GalleryError> {
    let n = graph.len();
    let start = graph.vertices()[0].src;

    let mut ring = Vec::with_capacity(n);
    let mut prev = start;
    let mut current = start;

    loop {
        ring.push(current);
        if ring.len() > n {
            // Unreachable once degrees are 2, kept as a loop guard.
            return Err(GalleryError::MalformedBoundary {
                detail: "boundary walk does not close".to_string(),
            });
        }

        let vertex = match graph.find_vertex(current) {
            Some(i) => &graph.vertices()[i],
            None => {
                return Err(GalleryError::MalformedBoundary {
                    detail: format!("adjacency references unknown vertex {current}"),
                })
            }
        };

        let next = if ring.len() == 1 {
            vertex.dest[0]
        } else {
            match vertex.dest.iter().copied().find(|&d| d != prev) {
                Some(next) => next,
                None => {
                    return Err(GalleryError::MalformedBoundary {
                        detail: format!("vertex {current} has no onward neighbor"),
                    })
                }
            }
        };

        if next == start {
            break;
        }
        prev = current;
        current = next;
    }

    if ring.len() != n {
        return Err(GalleryError::MalformedBoundary {
            detail: format!(
                "boundary splits into multiple cycles: walked {} of {} vertices",
                ring.len(),
                n
            ),
        });
    }

    Ok(ring)
}
