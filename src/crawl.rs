// src/crawl.rs
//! Corpus ingestion: a directory of markup pages and the links between them.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::corpus::{Corpus, Page};
use crate::error::{PageRankError, Result};

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Builds a corpus from the pages directly inside `dir`.
///
/// A page is a regular file named `*.<extension>`; its identifier is the file
/// name. Self-links and links to files outside the corpus are dropped.
///
/// # Errors
/// `Io` if `dir` or a page cannot be read, `Walk` if the listing fails.
pub fn crawl(dir: &Path, extension: &str) -> Result<Corpus> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut pages: Vec<(Page, BTreeSet<Page>)> = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(PageRankError::io(source, dir));
            }
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(&suffix) {
            debug!("ignoring {name}: not a .{extension} page");
            continue;
        }

        let content = fs::read_to_string(entry.path()).map_err(|e| PageRankError::io(e, entry.path()))?;
        pages.push((name, extract_links(&content)));
    }

    let corpus = Corpus::from_links(pages);
    info!("crawled {} pages from {}", corpus.len(), dir.display());
    Ok(corpus)
}

/// Targets of every `<a ... href="...">` in `content`.
#[must_use]
pub fn extract_links(content: &str) -> BTreeSet<Page> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
