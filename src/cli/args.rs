use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pagerank", version, about = "Rank the pages of a hyperlink corpus")]
pub struct Cli {
    /// Directory holding the corpus pages
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(long)]
    pub damping: Option<f64>,
    /// Number of random-surfer steps
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Seed the random surfer for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
    /// Read settings from this TOML file instead of ./pagerank.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also print the largest per-page difference between the two methods
    #[arg(long)]
    pub compare: bool,
    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
