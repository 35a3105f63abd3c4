//! Seedable simulation RNG.
//!
//! # Determinism strategy
//!
//! The only randomness in a run is the initial heading and the per-collision
//! perturbation angle.  Both are drawn from one explicit `SimRng` handle that
//! the caller passes down, never from thread-local or global state.  Two runs
//! built from the same seed therefore produce bit-identical trajectories.
//!
//! `SimRng` wraps `SmallRng`: fast, non-cryptographic, and reproducible for a
//! fixed `rand` version.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG handle.
///
/// Owned by the runner for the duration of one simulation and lent to the
/// motion engine for each step.  Not `Sync`; the simulation is single-threaded.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.  The same seed always yields the same stream.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (non-reproducible runs).
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
