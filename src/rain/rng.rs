//! Explicit random source for the rain model.
//!
//! Defaults to OS entropy; tests and `--seed` runs use a seeded generator so a
//! layout can be reproduced.

use std::ops::RangeInclusive;

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RainRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl RainRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform draw from an inclusive range. The range must not be empty.
    pub fn in_range<T>(&mut self, range: RangeInclusive<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.inner.random_range(range)
    }

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    pub fn below(&mut self, n: u32) -> u32 {
        self.inner.random_range(0..n)
    }
}

impl Default for RainRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/rng.rs"]
mod tests;
