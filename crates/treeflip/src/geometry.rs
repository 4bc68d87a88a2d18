//! Planar distances and tree length.
//!
//! Comparisons between edges always go through `distance_sq`; the square root
//! is only taken when reporting lengths.

use nalgebra::Vector2;

use crate::graph::Graph;

/// A vertex position in the plane.
pub type Point = Vector2<f64>;

/// Squared Euclidean distance between `a` and `b`.
#[inline]
pub fn distance_sq(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    distance_sq(a, b).sqrt()
}

/// Sum of edge lengths, each undirected edge counted once.
///
/// Pre: `points.len() == graph.vertex_count()`.
/// An edgeless graph yields `+0.0`; `Iterator::sum` over `f64` starts at `-0.0`.
pub fn total_length(graph: &Graph, points: &[Point]) -> f64 {
    graph
        .edges()
        .map(|(u, v)| distance(points[u], points[v]))
        .fold(0.0, |acc, d| acc + d)
}
