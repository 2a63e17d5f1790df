// src/rank/iterate.rs
//! Iterative PageRank: apply the recurrence until every page is stable.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::corpus::{Corpus, Page};
use crate::distribution::Distribution;
use crate::error::{PageRankError, Result};

/// Largest per-page change between passes accepted as converged.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Pass cap guarding against numerical non-termination.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            damping: super::DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// # Errors
    /// `InvalidInput` for damping outside `[0,1]`, a non-positive tolerance, or a zero cap.
    pub fn validate(&self) -> Result<()> {
        super::validate_damping(self.damping)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(PageRankError::invalid("tolerance must be finite and > 0"));
        }
        if self.max_iterations == 0 {
            return Err(PageRankError::invalid("max_iterations must be > 0"));
        }
        Ok(())
    }
}

/// Converged ranks plus how they were reached.
#[derive(Debug, Clone)]
pub struct IterationRun {
    pub ranks: Distribution,
    /// Number of recurrence passes performed.
    pub iterations: usize,
    /// Largest per-page change in the final pass.
    pub max_delta: f64,
}

/// Iterative PageRank with the default tolerance and pass cap.
///
/// # Errors
/// `InvalidInput` for an empty corpus or bad damping, `NonConvergence` if the cap is hit.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Distribution> {
    let config = SolverConfig::default().with_damping(damping);
    iterate_pagerank_run(corpus, &config).map(|run| run.ranks)
}

/// Iterative PageRank with convergence reporting.
///
/// Starts from `1/N` everywhere and repeatedly computes
/// `(1 - d)/N + d * sum(rank[L] / fan_out(L))` over the inbound pages `L` of
/// each page, where every sink counts as inbound to every page. A pass is
/// fully computed before it is checked; iteration stops only once every page
/// moved by at most `tolerance` in the same pass.
///
/// # Errors
/// `InvalidInput` for an empty corpus or invalid config, `NonConvergence` if
/// `max_iterations` passes do not settle.
#[allow(clippy::cast_precision_loss)]
pub fn iterate_pagerank_run(corpus: &Corpus, config: &SolverConfig) -> Result<IterationRun> {
    corpus.ensure_non_empty()?;
    config.validate()?;

    let n = corpus.len() as f64;
    let teleport = (1.0 - config.damping) / n;
    let inbound = inbound_sets(corpus);
    let fan_out: BTreeMap<&Page, f64> = corpus
        .pages()
        .map(|p| (p, corpus.fan_out(p).unwrap_or(corpus.len()) as f64))
        .collect();

    let mut ranks: BTreeMap<Page, f64> = corpus.pages().map(|p| (p.clone(), 1.0 / n)).collect();
    let mut max_delta = f64::INFINITY;

    for pass in 1..=config.max_iterations {
        let next: BTreeMap<Page, f64> = inbound
            .iter()
            .map(|(&page, sources)| {
                let incoming: f64 = sources
                    .iter()
                    .map(|src| ranks[*src] / fan_out[*src])
                    .sum();
                (page.clone(), teleport + config.damping * incoming)
            })
            .collect();

        max_delta = largest_change(&ranks, &next);
        ranks = next;
        debug!("pass {pass}: largest change {max_delta:.6}");

        if max_delta <= config.tolerance {
            info!("iteration converged after {pass} passes");
            return Ok(IterationRun {
                ranks: Distribution::from_map(ranks),
                iterations: pass,
                max_delta,
            });
        }
    }

    Err(PageRankError::NonConvergence {
        iterations: config.max_iterations,
        max_delta,
    })
}

/// Page -> pages linking to it. Sinks link to every page, themselves included.
fn inbound_sets(corpus: &Corpus) -> BTreeMap<&Page, Vec<&Page>> {
    let mut inbound: BTreeMap<&Page, Vec<&Page>> = corpus.pages().map(|p| (p, Vec::new())).collect();
    let sinks: Vec<&Page> = corpus.pages().filter(|p| corpus.is_sink(p)).collect();

    for (source, targets) in corpus.iter() {
        for target in targets {
            if let Some(list) = inbound.get_mut(target) {
                list.push(source);
            }
        }
    }
    for list in inbound.values_mut() {
        list.extend(sinks.iter().copied());
    }
    inbound
}

fn largest_change(old: &BTreeMap<Page, f64>, new: &BTreeMap<Page, f64>) -> f64 {
    new.iter()
        .map(|(page, rank)| (rank - old.get(page).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_includes_every_sink() {
        let corpus = Corpus::from_links([("a", vec![]), ("b", vec!["a"]), ("c", vec!["b"])]);
        let inbound = inbound_sets(&corpus);
        let of = |p: &str| {
            let mut v: Vec<String> = inbound[&p.to_string()].iter().map(|s| s.to_string()).collect();
            v.sort_unstable();
            v
        };
        assert_eq!(of("a"), vec!["a", "b"]);
        assert_eq!(of("b"), vec!["a", "c"]);
        assert_eq!(of("c"), vec!["a"]);
    }

    #[test]
    fn mutual_pair_splits_evenly() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!((ranks.get("A").unwrap() - 0.5).abs() < 1e-9);
        assert!((ranks.get("B").unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn sink_outranks_its_only_referrer() {
        let corpus = Corpus::from_links([("A", vec![]), ("B", vec!["A"])]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        let a = ranks.get("A").unwrap();
        let b = ranks.get("B").unwrap();
        assert!(a > 0.0 && b > 0.0);
        assert!(a > b, "A={a} B={b}");
        assert!((ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn single_page_gets_everything() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]);
        let run = iterate_pagerank_run(&corpus, &SolverConfig::default()).unwrap();
        assert!((run.ranks.get("A").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(run.iterations, 1);
    }

    #[test]
    fn pass_cap_reports_non_convergence() {
        // a -> b -> c -> d: ranks start uniform and shift noticeably on the first pass
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["d"]), ("d", vec![])]);
        let config = SolverConfig {
            max_iterations: 1,
            tolerance: 1e-12,
            ..SolverConfig::default()
        };
        let err = iterate_pagerank_run(&corpus, &config).unwrap_err();
        assert!(matches!(err, PageRankError::NonConvergence { iterations: 1, .. }));
    }

    #[test]
    fn every_page_must_settle_in_the_same_pass() {
        let corpus = Corpus::from_links([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("d", vec!["c"]),
        ]);
        let config = SolverConfig::default();
        let run = iterate_pagerank_run(&corpus, &config).unwrap();
        assert!(run.max_delta <= config.tolerance);

        let exact = iterate_pagerank_run(
            &corpus,
            &SolverConfig {
                tolerance: 1e-12,
                ..config
            },
        )
        .unwrap();
        assert!(run.ranks.max_abs_diff(&exact.ranks) < 0.03);
        assert!(exact.iterations > run.iterations);
    }

    #[test]
    fn rejects_bad_config() {
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
        let zero_cap = SolverConfig {
            max_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            iterate_pagerank_run(&corpus, &zero_cap),
            Err(PageRankError::InvalidInput(_))
        ));
        assert!(iterate_pagerank(&corpus, 2.0).is_err());
        assert!(iterate_pagerank(&Corpus::default(), 0.85).is_err());
    }
}
