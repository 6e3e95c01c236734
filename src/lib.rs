pub mod alphabet;
pub mod candidates;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod metrics;
pub mod output;
pub mod progress;

pub use crate::alphabet::Alphabet;
pub use crate::candidates::Candidates;
pub use crate::cli::{Cli, Commands};
pub use crate::config::Config;
pub use crate::engine::{SearchConfig, SearchEngine, SearchOutcome, TargetKind};
pub use crate::error::{HashseekError, Result};
pub use crate::hasher::{HashAlgorithm, Hasher};
pub use crate::metrics::Metrics;
pub use crate::output::{OutputFormat, SearchReport};
pub use crate::progress::ProgressReporter;
pub use clap::Parser;
