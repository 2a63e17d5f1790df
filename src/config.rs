// src/config.rs
//! Run configuration: defaults, `pagerank.toml`, then command-line overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PageRankError, Result};
use crate::rank::iterate::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::rank::{SolverConfig, DEFAULT_DAMPING};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "pagerank.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fixed RNG seed for a reproducible sampling walk.
    #[serde(default)]
    pub seed: Option<u64>,
    /// File extension (without the dot) of corpus pages.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
            extension: default_extension(),
        }
    }
}

const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_samples() -> usize { 10_000 }
const fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }
fn default_extension() -> String { "html".to_string() }

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TOML; missing keys keep their defaults.
    ///
    /// # Errors
    /// `Config` if the text is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path`.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `Config` if it does not parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PageRankError::io(e, path))?;
        Self::from_toml_str(&content)
    }

    /// Loads `pagerank.toml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    /// Same as [`Config::load_from`] when the file exists.
    pub fn load_local(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// # Errors
    /// `InvalidInput` naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        self.solver().validate()?;
        if self.samples == 0 {
            return Err(PageRankError::invalid("samples must be at least 1"));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(PageRankError::invalid("extension must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub fn solver(&self) -> SolverConfig {
        SolverConfig {
            damping: self.damping,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let c = Config::default();
        assert!((c.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(c.samples, 10_000);
        assert!((c.tolerance - 0.001).abs() < f64::EPSILON);
        assert_eq!(c.max_iterations, 10_000);
        assert_eq!(c.seed, None);
        assert_eq!(c.extension, "html");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = Config::from_toml_str("samples = 500\nseed = 9\n").unwrap();
        assert_eq!(c.samples, 500);
        assert_eq!(c.seed, Some(9));
        assert!((c.damping - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Config::from_toml_str("samples = \"many\"").unwrap_err();
        assert!(matches!(err, PageRankError::Config(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            Config { damping: 1.2, ..Config::default() },
            Config { samples: 0, ..Config::default() },
            Config { tolerance: 0.0, ..Config::default() },
            Config { max_iterations: 0, ..Config::default() },
            Config { extension: ".".into(), ..Config::default() },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(PageRankError::InvalidInput(_))), "{c:?}");
        }
    }

    #[test]
    fn load_local_reads_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_local(dir.path()).unwrap(), Config::default());

        fs::write(dir.path().join(CONFIG_FILE), "damping = 0.5\nextension = \"htm\"\n").unwrap();
        let c = Config::load_local(dir.path()).unwrap();
        assert!((c.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(c.extension, "htm");
    }
}
