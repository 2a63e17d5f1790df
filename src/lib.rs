//! PageRank for a closed hyperlink corpus, estimated two independent ways:
//! a Monte-Carlo random surfer and an iterative fixed-point solver.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod crawl;
pub mod distribution;
pub mod error;
pub mod exit;
pub mod rank;
pub mod report;

pub use corpus::{Corpus, Page};
pub use distribution::Distribution;
pub use error::{PageRankError, Result};
pub use rank::{iterate_pagerank, sample_pagerank, transition};
