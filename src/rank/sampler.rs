// src/rank/sampler.rs
//! Weighted choice of one page from a distribution.

use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::corpus::Page;
use crate::distribution::Distribution;
use crate::error::{PageRankError, Result};

/// Draws one page with probability proportional to its weight.
pub trait CategoricalSampler {
    /// # Errors
    /// `InvalidInput` if the weights cannot be sampled (empty, negative, all zero).
    fn choose(&mut self, weights: &Distribution) -> Result<Page>;
}

/// [`CategoricalSampler`] backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Reproducible sampler: the same seed yields the same walk.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CategoricalSampler for RandomSampler<R> {
    fn choose(&mut self, weights: &Distribution) -> Result<Page> {
        let index = WeightedIndex::new(weights.iter().map(|(_, w)| w))
            .map_err(|e| PageRankError::invalid(format!("cannot sample from weights: {e}")))?;
        let pick = index.sample(&mut self.rng);
        weights
            .iter()
            .nth(pick)
            .map(|(page, _)| page.clone())
            .ok_or_else(|| PageRankError::invalid("weighted index out of range"))
    }
}
