// src/rank/sampling.rs
//! Monte-Carlo PageRank: one long random-surfer walk.

use std::collections::BTreeMap;

use log::debug;

use super::sampler::{CategoricalSampler, RandomSampler};
use super::transition::transition;
use crate::corpus::{Corpus, Page};
use crate::distribution::Distribution;
use crate::error::{PageRankError, Result};

/// Estimates PageRank from the visit frequencies of an `n`-step walk.
///
/// Uses an entropy-seeded RNG; see [`sample_pagerank_with`] for reproducible runs.
///
/// # Errors
/// `InvalidInput` for an empty corpus, `n == 0`, or damping outside `[0,1]`.
pub fn sample_pagerank(corpus: &Corpus, damping: f64, n: usize) -> Result<Distribution> {
    sample_pagerank_with(corpus, damping, n, &mut RandomSampler::from_entropy())
}

/// [`sample_pagerank`] with an injected sampler.
///
/// The walk starts on a uniformly chosen page. Each step records a visit to
/// the current page and then draws the next page from its transition model.
/// The result is `visits / n`, so it always partitions to 1.
///
/// # Errors
/// `InvalidInput` for an empty corpus, `n == 0`, or damping outside `[0,1]`.
#[allow(clippy::cast_precision_loss)]
pub fn sample_pagerank_with<S>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    sampler: &mut S,
) -> Result<Distribution>
where
    S: CategoricalSampler + ?Sized,
{
    corpus.ensure_non_empty()?;
    super::validate_damping(damping)?;
    if n == 0 {
        return Err(PageRankError::invalid("sample count must be at least 1"));
    }

    let mut visits: BTreeMap<Page, usize> = corpus.pages().map(|p| (p.clone(), 0)).collect();
    let mut current = sampler.choose(&Distribution::uniform(corpus))?;
    debug!("random surfer starts on {current}");

    for _ in 0..n {
        *visits.entry(current.clone()).or_default() += 1;
        let next_hop = transition(corpus, &current, damping)?;
        current = sampler.choose(&next_hop)?;
    }

    let total = n as f64;
    Ok(Distribution::from_map(
        visits
            .into_iter()
            .map(|(page, count)| (page, count as f64 / total))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the heaviest page (first by name on ties).
    struct Greedy;

    impl CategoricalSampler for Greedy {
        fn choose(&mut self, weights: &Distribution) -> Result<Page> {
            weights
                .ranked()
                .into_iter()
                .next()
                .map(|(p, _)| p)
                .ok_or_else(|| PageRankError::invalid("empty"))
        }
    }

    fn cycle() -> Corpus {
        Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])])
    }

    #[test]
    fn injected_sampler_drives_the_walk() {
        // a -> b -> c -> a ... visits each page in turn
        let ranks = sample_pagerank_with(&cycle(), 0.85, 6, &mut Greedy).unwrap();
        for (_, r) in ranks.iter() {
            assert!((r - 2.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn single_sample_is_one_hot() {
        let ranks = sample_pagerank_with(&cycle(), 0.85, 1, &mut RandomSampler::seeded(3)).unwrap();
        let ones = ranks.iter().filter(|(_, r)| *r == 1.0).count();
        let zeros = ranks.iter().filter(|(_, r)| *r == 0.0).count();
        assert_eq!(ones, 1);
        assert_eq!(zeros, 2);
    }

    #[test]
    fn zero_samples_is_invalid() {
        let err = sample_pagerank(&cycle(), 0.85, 0).unwrap_err();
        assert!(matches!(err, PageRankError::InvalidInput(_)));
    }

    #[test]
    fn empty_corpus_is_invalid() {
        assert!(sample_pagerank(&Corpus::default(), 0.85, 10).is_err());
    }

    #[test]
    fn counts_partition_the_samples() {
        let ranks = sample_pagerank_with(&cycle(), 0.85, 997, &mut RandomSampler::seeded(11)).unwrap();
        assert_eq!(ranks.len(), 3);
        assert!((ranks.total() - 1.0).abs() < 1e-12);
    }
}
