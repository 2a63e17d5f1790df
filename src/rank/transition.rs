// src/rank/transition.rs
//! Next-hop distribution for a random surfer standing on one page.

use std::collections::BTreeMap;

use crate::corpus::Corpus;
use crate::distribution::Distribution;
use crate::error::Result;

/// Returns the probability of moving from `page` to every page of `corpus`.
///
/// Every page receives the jump share `(1 - d) / N`. The remaining `d` is
/// split evenly across the page's links; a sink spreads it over all pages.
///
/// # Errors
/// `InvalidInput` if the corpus is empty, `page` is not in it, or `damping`
/// is outside `[0,1]`.
#[allow(clippy::cast_precision_loss)]
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    corpus.ensure_non_empty()?;
    corpus.ensure_page(page)?;
    super::validate_damping(damping)?;

    let n = corpus.len() as f64;
    let base = (1.0 - damping) / n;
    let mut probs: BTreeMap<String, f64> = corpus.pages().map(|p| (p.clone(), base)).collect();

    let fan_out = corpus.fan_out(page).unwrap_or(corpus.len()) as f64;
    let share = damping / fan_out;
    match corpus.links(page) {
        Some(targets) if !targets.is_empty() => {
            for target in targets {
                if let Some(p) = probs.get_mut(target) {
                    *p += share;
                }
            }
        }
        _ => probs.values_mut().for_each(|p| *p += share),
    }

    Ok(Distribution::from_map(probs))
}
