//! Output seam for the final tree.
//!
//! A renderer only draws: vertices as points, edges as segments. The CLI ships
//! an SVG implementation; headless runs simply never call one.

use crate::geometry::Point;
use crate::graph::Graph;

/// Consumes a graph and its embedding. Performs no algorithmic work.
pub trait Renderer {
    type Error;

    fn render(&mut self, graph: &Graph, points: &[Point]) -> Result<(), Self::Error>;
}
