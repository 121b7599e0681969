//! Guard selection by 3-coloring the triangulation.
//!
//! The vertices of a triangulated simple polygon admit a proper 3-coloring in
//! which every triangle carries all three colors; the smallest color class
//! therefore sees every triangle and covers the polygon with at most
//! floor(n / 3) guards (Chvátal's art gallery bound via Fisk's proof).
//!
//! The coloring replays the ear-clipping removal order in reverse: the final
//! triangle seeds the three palette colors, and each ear, re-inserted between
//! two already-colored neighbors, takes the one color both exclude.

use crate::graph::{Color, PlanarGraph, Point};
use crate::triangulate::Triangle;
use num_traits::{PrimInt, Signed};

/// Colors the graph and returns the smallest color class as the guard set.
///
/// `triangles` must be the clip-ordered output of
/// [`triangulate`](crate::triangulate::triangulate) for the boundary stored
/// in `graph`. Previous color annotations are discarded.
///
/// Guards are returned in graph insertion order; ties between equally small
/// color classes resolve in palette order, so the result is deterministic.
///
/// # Panics
///
/// Panics if `triangles` references a vertex absent from `graph`; see
/// [`color_triangulation`].
pub fn select_guards<I: PrimInt + Signed>(
    graph: &mut PlanarGraph<I>,
    triangles: &[Triangle<I>],
) -> Vec<Point<I>> {
    color_triangulation(graph, triangles);

    let chosen = smallest_color_class(graph);

    graph
        .vertices()
        .iter()
        .filter(|v| v.color == Some(chosen))
        .map(|v| v.src)
        .collect()
}

/// Assigns a proper 3-coloring to the graph's vertices.
///
/// Walks the triangle list backwards: the last triangle is the ear clipper's
/// three-vertex remainder and seeds the palette; every earlier triangle has
/// its ear in the middle slot and both neighbors already colored.
///
/// # Panics
///
/// Panics if an ear's neighbor is uncolored when the ear is replayed, which
/// only happens when `triangles` is not the clip-ordered triangulation of the
/// boundary stored in `graph`.
pub fn color_triangulation<I: PrimInt + Signed>(
    graph: &mut PlanarGraph<I>,
    triangles: &[Triangle<I>],
) {
    graph.clear_colors();

    let Some((base, ears)) = triangles.split_last() else {
        return;
    };

    graph.set_color(base.a, Color::Red);
    graph.set_color(base.b, Color::Yellow);
    graph.set_color(base.c, Color::Blue);

    for tri in ears.iter().rev() {
        let ca = graph
            .color_of(tri.a)
            .expect("ear neighbor uncolored: triangulation does not match graph");
        let cc = graph
            .color_of(tri.c)
            .expect("ear neighbor uncolored: triangulation does not match graph");
        graph.set_color(tri.b, Color::excluding(ca, cc));
    }
}

/// Returns the least-populated palette color, breaking ties in palette order.
fn smallest_color_class<I: PrimInt + Signed>(graph: &PlanarGraph<I>) -> Color {
    Color::ALL
        .into_iter()
        .min_by_key(|&c| {
            graph
                .vertices()
                .iter()
                .filter(|v| v.color == Some(c))
                .count()
        })
        .unwrap_or(Color::Red)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::triangulate::{triangulate, Triangle};
    use crate::validate::closed_ring;

    fn p(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    fn ring_edges(points: &[Point<i64>]) -> Vec<Edge<i64>> {
        let n = points.len();
        (0..n)
            .map(|i| Edge::new(points[i], points[(i + 1) % n]))
            .collect()
    }

    fn guards_for(points: &[Point<i64>]) -> (PlanarGraph<i64>, Vec<Point<i64>>) {
        let mut graph = PlanarGraph::from_edges(&ring_edges(points));
        let ring = closed_ring(&graph).unwrap();
        let triangles = triangulate(&ring).unwrap();
        let guards = select_guards(&mut graph, &triangles);
        (graph, guards)
    }

    #[test]
    fn test_triangle_needs_one_guard() {
        let points = [p(0, 0), p(10, 0), p(5, 10)];
        let (_, guards) = guards_for(&points);
        assert_eq!(guards.len(), 1);
        assert!(points.contains(&guards[0]));
    }

    #[test]
    fn test_square_needs_one_guard() {
        let (_, guards) = guards_for(&[p(0, 0), p(4, 0), p(4, 4), p(0, 4)]);
        assert_eq!(guards.len(), 1);
    }

    #[test]
    fn test_l_shape_within_bound() {
        let points = [p(0, 0), p(2, 0), p(2, 1), p(1, 1), p(1, 2), p(0, 2)];
        let (_, guards) = guards_for(&points);
        assert!(!guards.is_empty());
        assert!(guards.len() <= 2); // floor(6 / 3)
    }

    #[test]
    fn test_star_within_bound() {
        let points = [
            p(0, 6),
            p(2, 2),
            p(6, 2),
            p(3, 0),
            p(4, -4),
            p(0, -1),
            p(-4, -4),
            p(-3, 0),
            p(-6, 2),
            p(-2, 2),
        ];
        let (_, guards) = guards_for(&points);
        assert!(!guards.is_empty());
        assert!(guards.len() <= 3); // floor(10 / 3)
    }

    #[test]
    fn test_coloring_is_proper() {
        let points = [p(0, 0), p(2, 0), p(2, 1), p(1, 1), p(1, 2), p(0, 2)];
        let mut graph = PlanarGraph::from_edges(&ring_edges(&points));
        let ring = closed_ring(&graph).unwrap();
        let triangles = triangulate(&ring).unwrap();
        color_triangulation(&mut graph, &triangles);

        // Every vertex is colored and every triangle carries three distinct
        // colors.
        for v in graph.vertices() {
            assert!(v.color.is_some(), "vertex {} left uncolored", v.src);
        }
        for t in &triangles {
            let ca = graph.color_of(t.a).unwrap();
            let cb = graph.color_of(t.b).unwrap();
            let cc = graph.color_of(t.c).unwrap();
            assert_ne!(ca, cb);
            assert_ne!(cb, cc);
            assert_ne!(ca, cc);
        }
    }

    #[test]
    #[should_panic(expected = "ear neighbor uncolored")]
    fn test_mismatched_triangulation_panics() {
        let points = [p(0, 0), p(4, 0), p(4, 4), p(0, 4)];
        let mut graph = PlanarGraph::from_edges(&ring_edges(&points));

        // Triangles from some other polygon: the ear's neighbors never get
        // colored, which must surface instead of producing a bogus coloring.
        let foreign = [
            Triangle::new(p(9, 9), p(12, 9), p(9, 12)),
            Triangle::new(p(0, 0), p(4, 0), p(4, 4)),
        ];
        color_triangulation(&mut graph, &foreign);
    }

    #[test]
    fn test_every_triangle_sees_a_guard() {
        let points = [
            p(0, 6),
            p(2, 2),
            p(6, 2),
            p(3, 0),
            p(4, -4),
            p(0, -1),
            p(-4, -4),
            p(-3, 0),
            p(-6, 2),
            p(-2, 2),
        ];
        let mut graph = PlanarGraph::from_edges(&ring_edges(&points));
        let ring = closed_ring(&graph).unwrap();
        let triangles = triangulate(&ring).unwrap();
        let guards = select_guards(&mut graph, &triangles);

        for t in &triangles {
            assert!(
                guards.iter().any(|&g| t.has_vertex(g)),
                "triangle {t:?} has no guard vertex"
            );
        }
    }

    #[test]
    fn test_guards_follow_insertion_order() {
        let points = [p(0, 0), p(2, 0), p(2, 1), p(1, 1), p(1, 2), p(0, 2)];
        let (graph, guards) = guards_for(&points);

        let positions: Vec<usize> = guards
            .iter()
            .map(|&g| graph.find_vertex(g).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_triangulation_yields_no_guards() {
        let mut graph: PlanarGraph<i64> = PlanarGraph::new();
        let guards = select_guards(&mut graph, &[]);
        assert!(guards.is_empty());
    }
}
