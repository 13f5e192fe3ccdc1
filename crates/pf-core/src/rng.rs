//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one `SimRng`, seeded from `SimParams::seed`, and
//! every stochastic decision (spawn placement, movement sampling, candidate
//! noise, target reassignment) draws from it in a fixed order.  Because the
//! engine is single-threaded and agents are processed in ascending index
//! order, a run is a pure function of its seed.
//!
//! The RNG is injectable rather than ambient: nothing in this workspace
//! reaches for `rand::thread_rng()`, so tests can assert exact trajectories.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable simulation-level RNG wrapper around `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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

    /// Uniform draw in `[-0.5, 0.5)` — the noise term of the movement weight.
    #[inline]
    pub fn unit_centered(&mut self) -> f64 {
        self.0.r#gen::<f64>() - 0.5
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
