//! Random digit sources for the random number generator.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// RNG handle exposed to Luhn consumers.
///
/// [`RngHandle::from_seed`] yields a reproducible digit sequence for tests;
/// [`RngHandle::from_entropy`] draws a fresh seed from the operating system so
/// independent handles never share state.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a new RNG handle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Draws a uniform decimal digit character, `'0'..='9'`.
pub fn digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..=9u8))
}

/// Draws a uniform non-zero decimal digit character, `'1'..='9'`.
pub fn leading_digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(1..=9u8))
}
