//! Seeded dice backed by `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tavern_core::RandomSource;

/// A reproducible [`RandomSource`]: the same seed always yields the same rolls.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Create dice from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an existing generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl RandomSource for SeededDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Pick a uniform position in `0..len` with a `len`-sided roll.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot pick from an empty list");
    rng.roll(len as u32) as usize - 1
}
