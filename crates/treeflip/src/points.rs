//! Random vertex placements and replayable seeds.
//!
//! Purpose
//! - Feed the simulation its fixed point set. The rewiring never looks at how
//!   the points were drawn, so distributions are pluggable via `PointSource`.
//! - Make each trial of a sweep replayable on its own: a `ReplayToken`
//!   `(seed, index)` is mixed into a single `StdRng`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Something that places `n` vertices in the plane.
pub trait PointSource {
    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Point>;
}

/// Built-in distributions, all supported inside `[0,1]²`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointDist {
    /// Uniform on the unit square.
    #[default]
    Square,
    /// Uniform on the disk of radius 1/2 centred at (1/2, 1/2).
    Disk,
}

impl PointSource for PointDist {
    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        match self {
            Self::Square => (0..n)
                .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
                .collect(),
            Self::Disk => (0..n)
                .map(|_| {
                    // sqrt keeps the density uniform in area
                    let r = 0.5 * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(0.5 + r * th.cos(), 0.5 + r * th.sin())
                })
                .collect(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Independent generator for this `(seed, index)` pair.
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}
