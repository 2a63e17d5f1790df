// src/exit.rs
//! Standardized process exit codes for `pagerank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use colored::Colorize;

use crate::error::PageRankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PageRankExit {
    /// Both estimators ran and results were printed.
    Success = 0,
    /// Generic error (e.g. IO, unreadable corpus directory).
    Error = 1,
    /// Bad arguments, bad config, or a corpus the estimators cannot rank.
    InvalidInput = 2,
    /// The iterative solver hit its pass cap.
    NonConvergence = 3,
}

impl PageRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for PageRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&PageRankError> for PageRankExit {
    fn from(err: &PageRankError) -> Self {
        match err {
            PageRankError::InvalidInput(_) | PageRankError::Config(_) => Self::InvalidInput,
            PageRankError::NonConvergence { .. } => Self::NonConvergence,
            PageRankError::Io { .. } | PageRankError::Regex(_) | PageRankError::Walk(_) => {
                Self::Error
            }
        }
    }
}

impl From<anyhow::Result<()>> for PageRankExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                e.downcast_ref::<PageRankError>()
                    .map_or(Self::Error, Self::from)
            }
        }
    }
}
