//! Convergence loop: slide uniformly chosen improving moves until none remain.
//!
//! States
//! - `Running`: at least one enumeration has not come back empty yet.
//! - `Converged`: the last enumeration found no slideable two-path. Terminal;
//!   the graph is never mutated again.
//!
//! No bound on the number of moves is known, so `run` is unbounded unless the
//! caller sets `SimCfg::max_moves`. Hitting that cap is reported in the
//! summary, not as an error.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SimError;
use crate::geometry::{total_length, Point};
use crate::graph::Graph;
use crate::render::Renderer;
use crate::slide::{apply_slide, slideable_two_paths, Slide};

/// Loop configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimCfg {
    /// Optional safety cap on applied moves. `None` runs to convergence.
    pub max_moves: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Converged,
}

/// Outcome of a single transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// A slide was applied; `total_length` is measured after it.
    Moved { slide: Slide, total_length: f64 },
    Converged,
}

/// Receives `(moves_applied, total_length)` once before the first move and
/// after every move.
pub trait Observer {
    fn observe(&mut self, moves: u64, total_length: f64);
}

impl<F: FnMut(u64, f64)> Observer for F {
    fn observe(&mut self, moves: u64, total_length: f64) {
        self(moves, total_length)
    }
}

/// Summary returned by `Simulation::run`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub moves: u64,
    pub initial_length: f64,
    pub final_length: f64,
    /// False only when `max_moves` stopped the loop first.
    pub converged: bool,
}

/// Owns the point set, the current tree and the move-selection RNG.
#[derive(Debug)]
pub struct Simulation<R> {
    points: Vec<Point>,
    graph: Graph,
    rng: R,
    moves: u64,
    status: Status,
}

impl<R: Rng> Simulation<R> {
    /// Start from the path `0 - … - (n-1)` with `n = points.len()`.
    pub fn new(points: Vec<Point>, rng: R) -> Result<Self, SimError> {
        let graph = Graph::path(points.len()).map_err(|_| SimError::NoPoints)?;
        Ok(Self {
            points,
            graph,
            rng,
            moves: 0,
            status: Status::Running,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn total_length(&self) -> f64 {
        total_length(&self.graph, &self.points)
    }

    /// One transition: enumerate, then either slide a random candidate or converge.
    pub fn step(&mut self) -> Result<Step, SimError> {
        if self.status == Status::Converged {
            return Ok(Step::Converged);
        }
        let candidates = slideable_two_paths(&self.graph, &self.points);
        let Some(&mv) = candidates.choose(&mut self.rng) else {
            self.status = Status::Converged;
            tracing::info!(moves = self.moves, "converged");
            return Ok(Step::Converged);
        };
        let slide = apply_slide(&mut self.graph, &self.points, mv)?;
        debug_assert!(self.graph.is_tree());
        self.moves += 1;
        let total_length = self.total_length();
        tracing::debug!(
            moves = self.moves,
            candidates = candidates.len(),
            mv = %mv,
            removed = ?slide.removed,
            total_length,
            "slide"
        );
        Ok(Step::Moved {
            slide,
            total_length,
        })
    }

    /// Step until converged (or `cfg.max_moves` moves in this call), reporting
    /// every total length to `obs`.
    pub fn run<O: Observer + ?Sized>(
        &mut self,
        cfg: SimCfg,
        obs: &mut O,
    ) -> Result<RunSummary, SimError> {
        let initial_length = self.total_length();
        obs.observe(self.moves, initial_length);
        let mut final_length = initial_length;
        let mut applied = 0u64;
        loop {
            if cfg.max_moves.is_some_and(|cap| applied >= cap) {
                tracing::info!(moves = self.moves, cap = applied, "stopped at move cap");
                break;
            }
            match self.step()? {
                Step::Moved { total_length, .. } => {
                    applied += 1;
                    final_length = total_length;
                    obs.observe(self.moves, total_length);
                }
                Step::Converged => break,
            }
        }
        Ok(RunSummary {
            moves: self.moves,
            initial_length,
            final_length,
            converged: self.status == Status::Converged,
        })
    }

    /// Hand the current state to `renderer`.
    pub fn render<T: Renderer + ?Sized>(&self, renderer: &mut T) -> Result<(), T::Error> {
        renderer.render(&self.graph, &self.points)
    }
}
