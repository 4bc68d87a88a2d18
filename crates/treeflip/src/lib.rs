//! Local triangle-improvement moves on a randomly embedded path.
//!
//! Start from the path `0-1-…-(n-1)` with a random point attached to every
//! vertex. A length-2 path `a-i-b` is *slideable* when the closing edge `ab` is
//! not the longest edge of the triangle `(a, i, b)`; sliding replaces the longer
//! of `ai`, `ib` with `ab`. Repeat on a uniformly chosen slideable path until
//! none remain and observe the total length of the resulting spanning tree.
//!
//! Layout
//! - `geometry`: distances and total tree length.
//! - `graph`: adjacency sets with checked edge mutation.
//! - `slide`: improvement rule, move finder and rewire step.
//! - `sim`: the convergence loop.
//! - `points`, `render`, `trial`: point sources, renderer seam, sweep helper.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod points;
pub mod render;
pub mod sim;
pub mod slide;
pub mod trial;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GraphError, SimError};
pub use geometry::Point;
pub use graph::{Graph, TwoPath};
pub use sim::{SimCfg, Simulation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GraphError, SimError};
    pub use crate::geometry::{distance, distance_sq, total_length, Point};
    pub use crate::graph::{Graph, TwoPath};
    pub use crate::points::{PointDist, PointSource, ReplayToken};
    pub use crate::render::Renderer;
    pub use crate::sim::{Observer, RunSummary, SimCfg, Simulation, Status, Step};
    pub use crate::slide::{apply_slide, is_slideable, longest_edge, slideable_two_paths, Slide};
    pub use crate::trial::{run_trial, TrialOutcome};
    pub use nalgebra::Vector2 as Vec2;
}
