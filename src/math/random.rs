//! Injectable source of uniform random draws
//!
//! Every random choice the generator makes is derived from
//! [`RandomSource::next_unit`], so replaying the same draws replays the same
//! floor.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Capability to produce uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// Uniform integer in the inclusive range `[low, high]`
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.index(high - low + 1)
    }

    /// `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded random source for reproducible generation
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seed used to build this source, if it was seeded explicitly
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted
///
/// Useful for pinning individual choices in tests.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source that yields `values` in order; values are clamped into `[0, 1)`
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self
            .values
            .get(self.cursor % self.values.len().max(1))
            .copied()
            .unwrap_or(0.0);
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
