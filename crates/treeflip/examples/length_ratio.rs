//! Converged length per vertex for a few sizes.
//!
//! Purpose
//! - Give a quick, reproducible data point for "does the local rule approach
//!   a minimum spanning tree?". A true MST on uniform points has length
//!   `O(sqrt n)`, so `final_length / n` should fall with `n`; here it does not.
//!
//! Run: `cargo run --release -p treeflip --example length_ratio`

use std::time::Instant;

use treeflip::points::{PointDist, ReplayToken};
use treeflip::trial::run_trial;
use treeflip::SimCfg;

fn main() {
    let trials = 5u64;
    for n in [50usize, 100, 200, 400] {
        let start = Instant::now();
        let mut ratio_sum = 0.0;
        let mut moves_sum = 0u64;
        for index in 0..trials {
            let tok = ReplayToken::new(2024, index);
            let out = run_trial(n, &PointDist::Square, tok, SimCfg::default())
                .expect("trial on non-empty point set");
            ratio_sum += out.ratio();
            moves_sum += out.moves;
        }
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "n={n} mean_ratio={:.4} mean_moves={:.1} time_ms={elapsed:.1}",
            ratio_sum / trials as f64,
            moves_sum as f64 / trials as f64
        );
    }
}
