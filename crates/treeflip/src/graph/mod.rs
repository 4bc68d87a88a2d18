//! Undirected graph on `0..n` as owned adjacency sets.
//!
//! Purpose
//! - Hold the current spanning tree while the convergence loop rewires it.
//! - Route every mutation through `remove_edge` / `add_edge`, which keep the
//!   adjacency symmetric and refuse to drop a missing edge or add a present one.
//!
//! Note
//! - Neighbour sets are `BTreeSet`s, so enumeration order depends only on the
//!   graph itself. A seeded run therefore replays exactly.

mod adjacency;
mod types;

pub use adjacency::Graph;
pub use types::TwoPath;
