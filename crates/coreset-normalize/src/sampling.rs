use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::{NormalizeError, Result};

/// Seed used when no other seed is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Number of positive examples carved out of every dataset.
pub const EXAMPLE_COUNT: usize = 2;

/// Seeded source of positive-example draws.
///
/// One sampler is meant to live for a whole run: datasets converted one
/// after another continue the same pseudo-random sequence, so a run over
/// the same inputs always produces the same examples.
#[derive(Debug, Clone)]
pub struct ExampleSampler {
    seed: u64,
    rng: StdRng,
}

impl ExampleSampler {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split `pool` into [`EXAMPLE_COUNT`] drawn items and the rest.
    ///
    /// Drawn items come back in draw order; the rest keep their relative
    /// order.
    pub fn draw<T>(&mut self, pool: Vec<T>) -> Result<(Vec<T>, Vec<T>)> {
        if pool.len() < EXAMPLE_COUNT {
            return Err(NormalizeError::InsufficientData {
                available: pool.len(),
            });
        }
        let picked = index::sample(&mut self.rng, pool.len(), EXAMPLE_COUNT).into_vec();
        let mut slots: Vec<Option<T>> = pool.into_iter().map(Some).collect();
        let drawn = picked.iter().filter_map(|&idx| slots[idx].take()).collect();
        let rest = slots.into_iter().flatten().collect();
        Ok((drawn, rest))
    }
}

impl Default for ExampleSampler {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}
