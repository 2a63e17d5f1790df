// src/corpus.rs
//! The closed hyperlink corpus: pages and their outbound links.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PageRankError, Result};

/// A page identifier, unique within its corpus.
pub type Page = String;

/// Page -> outbound links.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. A page with no outbound links is a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl Corpus {
    /// Builds a corpus from raw link lists, dropping self-links and links to unknown pages.
    pub fn from_links<I, P, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator,
        L::Item: Into<Page>,
    {
        let raw: BTreeMap<Page, BTreeSet<Page>> = raw
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let known: BTreeSet<Page> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept = targets
                    .into_iter()
                    .filter(|t| *t != page && known.contains(t))
                    .collect();
                (page, kept)
            })
            .collect();

        Self { links }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in ascending name order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    /// Outbound links of `page`, or `None` if the page is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Page, &BTreeSet<Page>)> {
        self.links.iter()
    }

    #[must_use]
    pub fn is_sink(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Effective outbound fan-out: the corpus size for a sink, the out-degree otherwise.
    ///
    /// A sink is modelled as linking to every page, itself included.
    #[must_use]
    pub fn fan_out(&self, page: &str) -> Option<usize> {
        self.links.get(page).map(|targets| {
            if targets.is_empty() {
                self.len()
            } else {
                targets.len()
            }
        })
    }

    /// Errors with `InvalidInput` if the corpus has no pages.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PageRankError::invalid("corpus contains no pages"));
        }
        Ok(())
    }

    /// Errors with `InvalidInput` if `page` is not a key of the corpus.
    pub fn ensure_page(&self, page: &str) -> Result<()> {
        if !self.contains(page) {
            return Err(PageRankError::invalid(format!(
                "page `{page}` is not in the corpus"
            )));
        }
        Ok(())
    }
}
