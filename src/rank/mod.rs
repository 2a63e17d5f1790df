// src/rank/mod.rs
//! PageRank estimators over a [`Corpus`](crate::corpus::Corpus).
//!
//! Both estimators consume the same transition model and share no state:
//! - [`sampling`] walks a random surfer and counts visits.
//! - [`iterate`] applies the PageRank recurrence until every page is stable.

pub mod iterate;
pub mod sampler;
pub mod sampling;
pub mod transition;

pub use iterate::{iterate_pagerank, iterate_pagerank_run, IterationRun, SolverConfig};
pub use sampler::{CategoricalSampler, RandomSampler};
pub use sampling::{sample_pagerank, sample_pagerank_with};
pub use transition::transition;

use crate::error::{PageRankError, Result};

/// Probability of following a link rather than jumping to a random page.
pub const DEFAULT_DAMPING: f64 = 0.85;

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(PageRankError::invalid(format!(
            "damping factor must be in [0,1], got {damping}"
        )));
    }
    Ok(())
}
