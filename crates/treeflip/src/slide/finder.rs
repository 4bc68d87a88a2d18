use crate::geometry::Point;
use crate::graph::{Graph, TwoPath};

use super::rule::is_slideable;

/// Points of `mv` in cyclic order `(a, i, b)`.
#[inline]
pub fn triangle(points: &[Point], mv: TwoPath) -> [Point; 3] {
    mv.vertices().map(|v| points[v])
}

/// All length-2 paths of `graph` that admit an improving slide.
///
/// Order follows `Graph::two_paths`, so repeated calls on an unmodified graph
/// return the same sequence.
pub fn slideable_two_paths(graph: &Graph, points: &[Point]) -> Vec<TwoPath> {
    graph
        .two_paths()
        .filter(|&mv| is_slideable(&triangle(points, mv)))
        .collect()
}
