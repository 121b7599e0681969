//! Planar adjacency structure over gallery boundary vertices.
//!
//! A [`PlanarGraph`] is built once from a directed edge list and read-only
//! thereafter: validation and triangulation never touch adjacency, guard
//! selection only annotates vertex colors. Boundary edges are undirected for
//! adjacency purposes, so linking an edge inserts both half-edges.
//!
//! # Example
//!
//! ```
//! use artgallery::{Edge, PlanarGraph, Point};
//!
//! let edges = [
//!     Edge::new(Point::new(0, 0), Point::new(4, 0)),
//!     Edge::new(Point::new(4, 0), Point::new(4, 4)),
//!     Edge::new(Point::new(4, 4), Point::new(0, 0)),
//! ];
//!
//! let graph = PlanarGraph::from_edges(&edges);
//! assert_eq!(graph.len(), 3);
//!
//! // Every vertex of a closed triangle has two neighbors.
//! for vertex in graph.vertices() {
//!     assert_eq!(vertex.dest.len(), 2);
//! }
//! ```

use num_traits::{PrimInt, Signed};
use std::fmt;

/// Guard palette used during 3-coloring.
///
/// The uncolored state is `Option::<Color>::None` on [`Vertex`], never a
/// palette member, so selection can never mistake an unvisited vertex for a
/// colored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// First palette color.
    Red,
    /// Second palette color.
    Yellow,
    /// Third palette color.
    Blue,
}

impl Color {
    /// The full palette, in tie-breaking order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

    /// Returns the palette member distinct from both arguments.
    ///
    /// With three colors and at most two exclusions a candidate always
    /// exists; when `a == b` the first remaining color in palette order is
    /// returned.
    #[inline]
    pub fn excluding(a: Color, b: Color) -> Color {
        Color::ALL
            .into_iter()
            .find(|&c| c != a && c != b)
            .unwrap_or(Color::Red)
    }
}

/// A boundary vertex position with exact integer coordinates.
///
/// Equality is exact coordinate equality; two edges sharing a coordinate
/// pair refer to the same logical vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<I> {
    /// X coordinate.
    pub x: I,
    /// Y coordinate.
    pub y: I,
}

impl<I: PrimInt + Signed> Point<I> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: I, y: I) -> Self {
        Self { x, y }
    }
}

impl<I: fmt::Display> fmt::Display for Point<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One directed boundary segment from `src` to `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<I> {
    /// Start point.
    pub src: Point<I>,
    /// End point.
    pub dest: Point<I>,
}

impl<I: PrimInt + Signed> Edge<I> {
    /// Creates a new directed edge.
    #[inline]
    pub fn new(src: Point<I>, dest: Point<I>) -> Self {
        Self { src, dest }
    }

    /// Returns the edge with its direction reversed.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
        }
    }
}

/// A boundary point together with its adjacency and coloring state.
///
/// For a valid closed polygon every vertex ends up with exactly two entries
/// in `dest`: its predecessor and successor along the boundary cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<I> {
    /// The vertex position.
    pub src: Point<I>,
    /// Adjacent points, in insertion order.
    pub dest: Vec<Point<I>>,
    /// Color assigned during guard selection; `None` until then.
    pub color: Option<Color>,
}

impl<I: fmt::Display> fmt::Display for Vertex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.src)?;
        for (i, d) in self.dest.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {d}")?;
        }
        Ok(())
    }
}

/// Adjacency-list graph over boundary vertices, keyed by coordinate equality.
///
/// Vertices are kept in insertion order so derived output (guard sets, the
/// diagnostic dump) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanarGraph<I> {
    vertices: Vec<Vertex<I>>,
}

impl<I: PrimInt + Signed> PlanarGraph<I> {
    /// Creates an empty graph.
    #[inline]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Builds a graph by linking each edge of a boundary list in sequence.
    pub fn from_edges(edges: &[Edge<I>]) -> Self {
        let mut graph = Self::new();
        for &edge in edges {
            graph.link(edge);
        }
        graph
    }

    /// Returns the number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<I>] {
        &self.vertices
    }

    /// Finds the vertex at `point` by linear scan.
    ///
    /// Returns the insertion index, or `None` if the point has not been seen
    /// yet. Callers treat `None` as "first occurrence", not as an error.
    pub fn find_vertex(&self, point: Point<I>) -> Option<usize> {
        self.vertices.iter().position(|v| v.src == point)
    }

    /// Links both directions of a boundary edge into the adjacency lists.
    ///
    /// The forward and reverse half-edges are inserted as two explicit steps;
    /// the reverse insertion is exactly one level deep, so no recursion is
    /// involved.
    pub fn link(&mut self, edge: Edge<I>) {
        self.insert_half_edge(edge.src, edge.dest);
        let rev = edge.reversed();
        self.insert_half_edge(rev.src, rev.dest);
    }

    /// Appends `dest` to the adjacency of `src`, creating the vertex if absent.
    fn insert_half_edge(&mut self, src: Point<I>, dest: Point<I>) {
        match self.find_vertex(src) {
            Some(i) => self.vertices[i].dest.push(dest),
            None => self.vertices.push(Vertex {
                src,
                dest: vec![dest],
                color: None,
            }),
        }
    }

    /// Returns the color of the vertex at `point`, if it exists and is colored.
    pub fn color_of(&self, point: Point<I>) -> Option<Color> {
        self.find_vertex(point)
            .and_then(|i| self.vertices[i].color)
    }

    /// Sets the color of the vertex at `point`.
    ///
    /// The point must already be in the graph; debug builds assert this,
    /// release builds ignore unknown points.
    pub fn set_color(&mut self, point: Point<I>, color: Color) {
        let found = self.find_vertex(point);
        debug_assert!(found.is_some(), "set_color on a point absent from the graph");
        if let Some(i) = found {
            self.vertices[i].color = Some(color);
        }
    }

    /// Clears all color annotations.
    pub fn clear_colors(&mut self) {
        for v in &mut self.vertices {
            v.color = None;
        }
    }
}

impl<I: fmt::Display> fmt::Display for PlanarGraph<I> {
    /// Renders each vertex with its adjacency, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vertices {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_edges() -> Vec<Edge<i64>> {
        vec![
            Edge::new(Point::new(0, 0), Point::new(4, 0)),
            Edge::new(Point::new(4, 0), Point::new(4, 4)),
            Edge::new(Point::new(4, 4), Point::new(0, 4)),
            Edge::new(Point::new(0, 4), Point::new(0, 0)),
        ]
    }

    #[test]
    fn test_point_equality() {
        let a: Point<i64> = Point::new(1, 2);
        let b = Point::new(1, 2);
        let c = Point::new(2, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_edge_equality_is_ordered() {
        let e: Edge<i64> = Edge::new(Point::new(0, 0), Point::new(1, 0));
        assert_eq!(e, Edge::new(Point::new(0, 0), Point::new(1, 0)));
        assert_ne!(e, e.reversed());
    }

    #[test]
    fn test_edge_reversed() {
        let e: Edge<i64> = Edge::new(Point::new(0, 0), Point::new(1, 2));
        let r = e.reversed();
        assert_eq!(r.src, Point::new(1, 2));
        assert_eq!(r.dest, Point::new(0, 0));
        assert_eq!(r.reversed(), e);
    }

    #[test]
    fn test_link_inserts_both_directions() {
        let mut graph = PlanarGraph::new();
        graph.link(Edge::new(Point::new(0i64, 0), Point::new(1, 0)));

        assert_eq!(graph.len(), 2);
        let a = graph.find_vertex(Point::new(0, 0)).unwrap();
        let b = graph.find_vertex(Point::new(1, 0)).unwrap();
        assert_eq!(graph.vertices()[a].dest, vec![Point::new(1, 0)]);
        assert_eq!(graph.vertices()[b].dest, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_from_edges_square_degrees() {
        let graph = PlanarGraph::from_edges(&square_edges());
        assert_eq!(graph.len(), 4);
        for v in graph.vertices() {
            assert_eq!(v.dest.len(), 2, "vertex {} has wrong degree", v.src);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let graph = PlanarGraph::from_edges(&square_edges());
        let order: Vec<Point<i64>> = graph.vertices().iter().map(|v| v.src).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(4, 4),
                Point::new(0, 4),
            ]
        );
    }

    #[test]
    fn test_find_vertex_absent() {
        let graph = PlanarGraph::from_edges(&square_edges());
        assert_eq!(graph.find_vertex(Point::new(7, 7)), None);
    }

    #[test]
    fn test_color_annotations() {
        let mut graph = PlanarGraph::from_edges(&square_edges());
        let p = Point::new(0i64, 0);
        assert_eq!(graph.color_of(p), None);

        graph.set_color(p, Color::Blue);
        assert_eq!(graph.color_of(p), Some(Color::Blue));

        graph.clear_colors();
        assert_eq!(graph.color_of(p), None);
    }

    #[test]
    fn test_color_excluding() {
        assert_eq!(Color::excluding(Color::Red, Color::Yellow), Color::Blue);
        assert_eq!(Color::excluding(Color::Blue, Color::Red), Color::Yellow);
        assert_eq!(Color::excluding(Color::Yellow, Color::Blue), Color::Red);
        // Degenerate call with equal arguments still returns a distinct color.
        assert_eq!(Color::excluding(Color::Red, Color::Red), Color::Yellow);
    }

    #[test]
    fn test_display_adjacency_dump() {
        let mut graph = PlanarGraph::new();
        graph.link(Edge::new(Point::new(0i64, 0), Point::new(4, 0)));
        graph.link(Edge::new(Point::new(4, 0), Point::new(4, 4)));

        let dump = graph.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "(0, 0) -> (4, 0)");
        assert_eq!(lines[1], "(4, 0) -> (0, 0), (4, 4)");
        assert_eq!(lines[2], "(4, 4) -> (4, 0)");
    }
}
