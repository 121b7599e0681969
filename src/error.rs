//! Error types for gallery boundary processing.

use thiserror::Error;

/// Errors that can occur while validating or triangulating a gallery boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The edge list does not describe a single closed boundary.
    ///
    /// Raised when a vertex has the wrong number of incident edges (open
    /// chain or branching) or when the boundary splits into multiple cycles.
    #[error("malformed boundary: {detail}")]
    MalformedBoundary {
        /// Human-readable description of the defect.
        detail: String,
    },

    /// Two non-adjacent boundary edges cross each other.
    #[error("self-intersecting boundary: edge {edge_a} crosses edge {edge_b}")]
    SelfIntersectingBoundary {
        /// Index of the first edge, in boundary walk order.
        edge_a: usize,
        /// Index of the second edge, in boundary walk order.
        edge_b: usize,
    },

    /// Ear clipping could not find a valid ear.
    ///
    /// This indicates an internal invariant violation: a boundary that passed
    /// validation but is not actually a simple polygon. It never occurs for
    /// correctly validated input.
    #[error("triangulation failed: no ear among {remaining} remaining vertices")]
    TriangulationFailure {
        /// Number of vertices left in the boundary when the search gave up.
        remaining: usize,
    },
}
