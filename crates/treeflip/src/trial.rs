//! One replayable trial: draw points, run to convergence, summarise.
//!
//! Sweeps over `n` use this to estimate how the converged length scales. The
//! observed ratio `final_length / n` stays roughly constant in `n`, far from the
//! `O(sqrt n)` length of a true minimum tree.

use crate::error::SimError;
use crate::points::{PointSource, ReplayToken};
use crate::sim::{SimCfg, Simulation};

/// Result row of a single trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialOutcome {
    pub n: usize,
    pub seed: u64,
    pub index: u64,
    pub moves: u64,
    pub initial_length: f64,
    pub final_length: f64,
    pub converged: bool,
}

impl TrialOutcome {
    /// Converged length per vertex.
    pub fn ratio(&self) -> f64 {
        self.final_length / self.n as f64
    }
}

/// Points and move choices are both drawn from `tok`'s generator.
pub fn run_trial<S: PointSource>(
    n: usize,
    source: &S,
    tok: ReplayToken,
    cfg: SimCfg,
) -> Result<TrialOutcome, SimError> {
    let mut rng = tok.to_std_rng();
    let points = source.sample(n, &mut rng);
    let mut sim = Simulation::new(points, rng)?;
    let summary = sim.run(cfg, &mut |_: u64, _: f64| {})?;
    tracing::debug!(
        n,
        seed = tok.seed,
        index = tok.index,
        moves = summary.moves,
        final_length = summary.final_length,
        "trial"
    );
    Ok(TrialOutcome {
        n,
        seed: tok.seed,
        index: tok.index,
        moves: summary.moves,
        initial_length: summary.initial_length,
        final_length: summary.final_length,
        converged: summary.converged,
    })
}
