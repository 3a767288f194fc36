//! Deterministic RNG wrapper using PCG32.
//!
//! All randomness in the raster pipeline flows through this module so that
//! the same seed always produces byte-identical output.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating it in both halves.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Generate a random i32 in the inclusive range `[low, high]`.
    #[inline]
    pub fn gen_range_i32(&mut self, low: i32, high: i32) -> i32 {
        self.inner.gen_range(low..=high)
    }
}
