//! artgallery - Camera placement for simple polygon galleries
//!
//! Solves a restricted instance of the Art Gallery Problem: given the closed
//! edge sequence of a simple polygon, compute a small set of boundary
//! vertices from which every interior point is visible.
//!
//! The pipeline runs strictly upward: edges build a [`PlanarGraph`], the
//! validator proves it is one simple closed cycle, ear clipping decomposes
//! the interior into triangles, and a 3-coloring of the triangulation picks
//! the smallest color class as the guard set, at most floor(n / 3) cameras
//! for an n-vertex gallery.
//!
//! # Example
//!
//! ```
//! use artgallery::{solve, Edge, Point};
//!
//! // An L-shaped gallery.
//! let corners = [
//!     Point::new(0i64, 0),
//!     Point::new(2, 0),
//!     Point::new(2, 1),
//!     Point::new(1, 1),
//!     Point::new(1, 2),
//!     Point::new(0, 2),
//! ];
//! let boundary: Vec<Edge<i64>> = (0..corners.len())
//!     .map(|i| Edge::new(corners[i], corners[(i + 1) % corners.len()]))
//!     .collect();
//!
//! let guards = solve(&boundary).unwrap();
//! assert!(!guards.is_empty());
//! assert!(guards.len() <= corners.len() / 3);
//! ```

pub mod error;
pub mod gallery;
pub mod graph;
pub mod guard;
pub mod predicates;
pub mod triangulate;
pub mod validate;

pub use error::GalleryError;
pub use gallery::solve;
pub use graph::{Color, Edge, PlanarGraph, Point, Vertex};
pub use guard::select_guards;
pub use predicates::{
    interior_angle, on_segment, orientation, point_in_polygon, segments_intersect, Orientation,
};
pub use triangulate::{triangulate, triangulation_area, Triangle};
pub use validate::{closed_ring, is_closed};
