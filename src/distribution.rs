// src/distribution.rs
//! Closed-world probability distributions over the pages of a corpus.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::{Corpus, Page};

/// Page -> non-negative weight, one entry per corpus page.
///
/// Produced fresh by every computation and never mutated once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    values: BTreeMap<Page, f64>,
}

impl Distribution {
    pub(crate) fn from_map(values: BTreeMap<Page, f64>) -> Self {
        Self { values }
    }

    /// `1/N` for every page of a non-empty corpus.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(corpus: &Corpus) -> Self {
        let share = 1.0 / corpus.len() as f64;
        Self::from_map(corpus.pages().map(|p| (p.clone(), share)).collect())
    }

    #[must_use]
    pub fn get(&self, page: &str) -> Option<f64> {
        self.values.get(page).copied()
    }

    /// Entries in ascending page order.
    pub fn iter(&self) -> impl Iterator<Item = (&Page, f64)> {
        self.values.iter().map(|(p, v)| (p, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Entries by descending weight, ties broken by page name.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Page, f64)> {
        let mut ranked: Vec<_> = self.values.iter().map(|(p, v)| (p.clone(), *v)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }

    /// Largest per-page absolute difference; a page missing on one side counts as 0.0.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|p| (self.get(p).unwrap_or(0.0) - other.get(p).unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<Page, f64> {
        self.values
    }
}
