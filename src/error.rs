// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageRankError {
    /// A precondition was violated by the caller (empty corpus, bad damping, unknown page...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("iteration did not converge after {iterations} passes (largest change {max_delta:.6})")]
    NonConvergence { iterations: usize, max_delta: f64 },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("directory walk failed: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, PageRankError>;

impl PageRankError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to PageRankError::Io with unknown path.
impl From<std::io::Error> for PageRankError {
    fn from(source: std::io::Error) -> Self {
        PageRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for PageRankError {
    fn from(e: walkdir::Error) -> Self {
        PageRankError::Walk(e.to_string())
    }
}

impl From<toml::de::Error> for PageRankError {
    fn from(e: toml::de::Error) -> Self {
        PageRankError::Config(e.to_string())
    }
}
