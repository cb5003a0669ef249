use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Explicit, seedable random number handle.
///
/// Every consumer that needs randomness owns one of these; there is no process-wide generator, so
/// two handles built from the same seed always yield the same sequence.
#[derive(Clone, Debug)]
pub struct FxRng {
    inner: Xoshiro256PlusPlus,
}

impl FxRng {
    /// Create a generator from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Uniform `f64` in `[lo, hi)`; returns `lo` for empty ranges.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..hi)
    }

    /// Uniform byte.
    pub fn byte(&mut self) -> u8 {
        self.inner.random::<u8>()
    }

    /// Shuffle `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/rng.rs"]
mod tests;
