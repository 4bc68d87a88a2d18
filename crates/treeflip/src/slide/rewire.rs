use crate::error::{GraphError, SimError};
use crate::geometry::Point;
use crate::graph::{Graph, TwoPath};

use super::finder::triangle;
use super::rule::{longest_edge, CLOSING_EDGE};

/// Record of one applied slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub mv: TwoPath,
    /// Path edge that was dropped, as `(a, i)` or `(i, b)`.
    pub removed: (usize, usize),
    /// Closing edge `(a, b)` that replaced it.
    pub added: (usize, usize),
}

/// Replace the longest path edge of `mv` with the closing edge `a - b`.
///
/// Vertex and edge counts are unchanged. The graph is left untouched when the
/// move is not slideable or `a - b` already exists.
pub fn apply_slide(graph: &mut Graph, points: &[Point], mv: TwoPath) -> Result<Slide, SimError> {
    let TwoPath { a, i, b } = mv;
    let removed = match longest_edge(&triangle(points, mv)) {
        0 => (a, i),
        CLOSING_EDGE => return Err(SimError::NotSlideable { mv }),
        _ => (i, b),
    };
    if a == b {
        return Err(SimError::rewire(mv, GraphError::SelfLoop { vertex: a }));
    }
    if graph.has_edge(a, b) {
        return Err(SimError::rewire(mv, GraphError::DuplicateEdge { u: a, v: b }));
    }
    graph
        .remove_edge(removed.0, removed.1)
        .map_err(|e| SimError::rewire(mv, e))?;
    graph.add_edge(a, b).map_err(|e| SimError::rewire(mv, e))?;
    Ok(Slide {
        mv,
        removed,
        added: (a, b),
    })
}
