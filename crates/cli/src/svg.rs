//! SVG output via plotters: the final tree and the sweep ratio curve.

use anyhow::{ensure, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use treeflip::render::Renderer;
use treeflip::{Graph, Point};

use crate::provenance::ensure_parent;

/// Draws vertices as red dots and edges as black segments on the unit square.
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (800, 800),
        }
    }
}

impl Renderer for SvgRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, graph: &Graph, points: &[Point]) -> Result<()> {
        ensure!(
            points.len() == graph.vertex_count(),
            "{} points for a graph on {} vertices",
            points.len(),
            graph.vertex_count()
        );
        ensure_parent(&self.path)?;
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;
        chart.draw_series(graph.edges().map(|(u, v)| {
            PathElement::new(vec![(points[u].x, points[u].y), (points[v].x, points[v].y)], BLACK)
        }))?;
        chart.draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 3, RED.filled())),
        )?;
        root.present()?;
        tracing::info!(path = %self.path.display(), edges = graph.edge_count(), "rendered");
        Ok(())
    }
}

/// Mean converged ratio against `n`.
pub fn ratio_figure(series: &[(f64, f64)], path: &Path) -> Result<()> {
    ensure!(!series.is_empty(), "no rows to plot");
    ensure_parent(path)?;
    let x_lo = series.iter().map(|&(n, _)| n).fold(f64::INFINITY, f64::min);
    let x_hi = series.iter().map(|&(n, _)| n).fold(f64::NEG_INFINITY, f64::max);
    let y_hi = series.iter().map(|&(_, r)| r).fold(0.0, f64::max) * 1.1;
    // single-size sweeps still need a non-empty x range
    let x_hi = if x_hi > x_lo { x_hi } else { x_lo + 1.0 };
    let y_hi = if y_hi > 0.0 { y_hi } else { 1.0 };

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_hi)?;
    chart.draw_series(LineSeries::new(series.iter().copied(), &BLUE))?;
    chart.draw_series(
        series
            .iter()
            .map(|&(n, r)| Circle::new((n, r), 4, BLUE.filled())),
    )?;
    root.present()?;
    Ok(())
}
