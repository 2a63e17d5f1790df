use clap::Parser;
use pagerank_core::cli::{self, Cli};
use pagerank_core::exit::PageRankExit;

fn main() -> PageRankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    PageRankExit::from(cli::dispatch::execute(&cli))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
