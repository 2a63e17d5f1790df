//! The ranking pipeline behind the `pagerank` binary.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::args::Cli;
use crate::config::Config;
use crate::crawl;
use crate::rank::{self, RandomSampler};
use crate::report::{IterationResult, Report, SamplingResult};

/// Resolves configuration, crawls the corpus, and prints both estimates.
///
/// # Errors
/// Returns error if configuration, ingestion, or either estimator fails.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let report = build_report(&cli.corpus, &config)?;
    print!("{}", report.render(cli.format, cli.compare));
    Ok(())
}

/// Defaults, then the TOML file, then command-line flags.
///
/// # Errors
/// Returns error if the config file cannot be loaded or the result is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_local(Path::new("."))?,
    };
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Runs both estimators over the corpus in `dir`.
///
/// # Errors
/// Returns error if the corpus cannot be read or either estimator rejects it.
pub fn build_report(dir: &Path, config: &Config) -> Result<Report> {
    let corpus = crawl::crawl(dir, &config.extension)
        .with_context(|| format!("reading corpus {}", dir.display()))?;

    let mut sampler = match config.seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::from_entropy(),
    };
    let sampled = rank::sample_pagerank_with(&corpus, config.damping, config.samples, &mut sampler)?;
    info!("sampled {} steps over {} pages", config.samples, corpus.len());

    let run = rank::iterate_pagerank_run(&corpus, &config.solver())?;

    Ok(Report {
        sampling: SamplingResult {
            samples: config.samples,
            ranks: sampled,
        },
        iteration: IterationResult {
            iterations: run.iterations,
            ranks: run.ranks,
        },
    })
}
