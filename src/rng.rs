// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! Every simulated path owns its random stream. A path's stream is a
//! `StdRng` seeded from `(base_seed, path_id)`, so:
//! 1. **Reproducibility**: same base seed → same terminal prices
//! 2. **Parallel safety**: no generator is shared between paths or threads
//! 3. **Order independence**: results do not depend on scheduling or thread count
//!
//! Normal draws come from `rand_distr::StandardNormal` (Ziggurat).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Mixes a path index into the base seed (splitmix64 finaliser).
///
/// Plain `base_seed + path_id` would make run `seed` path 1 and run
/// `seed + 1` path 0 share a stream.
fn mix_seed(base_seed: u64, path_id: u64) -> u64 {
    let mut z = base_seed ^ path_id.wrapping_mul(0x9e3779b97f4a7c15u64);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9u64);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111ebu64);
    z ^ (z >> 31)
}

/// RNG factory for reproducible parallel simulations
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Factory seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create the RNG owned by a specific path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(mix_seed(self.base_seed, path_id))
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
