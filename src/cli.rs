use crate::engine::TargetKind;
use crate::hasher::HashAlgorithm;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,

    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for the string whose digest (or text) equals the target
    Search {
        target: String,

        #[clap(long, value_parser, default_value_t = TargetKind::Digest)]
        kind: TargetKind,

        #[clap(long, value_parser, default_value_t = HashAlgorithm::Sha256)]
        hash: HashAlgorithm,

        #[clap(long, value_parser)]
        alphabet: Option<String>,

        #[clap(long, value_parser, default_value = "")]
        prefix: String,

        #[clap(long, value_parser)]
        max_len: Option<usize>,

        #[clap(long, value_parser, default_value_t = false)]
        copy: bool,

        #[clap(long, value_parser, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,

        #[clap(long, value_parser, default_value_t = false)]
        stats: bool,

        #[clap(long, value_parser, default_value_t = false)]
        no_progress: bool,
    },
    /// Print the digest of a string, in the form search targets are written
    Digest {
        input: String,

        #[clap(long, value_parser, default_value_t = HashAlgorithm::Sha256)]
        hash: HashAlgorithm,

        #[clap(long, value_parser)]
        alphabet: Option<String>,
    },
    /// Generate shell completions
    Completions {
        #[clap(value_parser)]
        shell: Shell,
    },
}
