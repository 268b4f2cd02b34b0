//! Randomness seam for random gesture throws.
//!
//! A player asks its `RandomSource` for an index and never touches an RNG
//! directly, so tests can pin the result without subclassing anything.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies indices in `[0, bound)`.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Any `FnMut(bound) -> index` closure is a random source.
impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, bound: usize) -> usize {
        self(bound)
    }
}

/// Thread-local RNG. The default for new players.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Reproducible sequence from a `u64` seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Always returns the same index, whatever the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn next_index(&mut self, _bound: usize) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
