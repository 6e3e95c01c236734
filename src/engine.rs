//! Core search engine: enumerate, hash, compare, halt.
use crate::alphabet::Alphabet;
use crate::candidates::Candidates;
use crate::error::{HashseekError, Result};
use crate::hasher::{HashAlgorithm, Hasher};
use crate::metrics::Metrics;
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the target is matched against the candidate text itself or
/// against the candidate's digest.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Plain,
    #[default]
    Digest,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Plain => write!(f, "plain"),
            TargetKind::Digest => write!(f, "digest"),
        }
    }
}

/// Immutable description of one search. Validated on construction; the
/// engine re-checks the parts that depend on the digest algorithm.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub target: String,
    pub kind: TargetKind,
    pub alphabet: Alphabet,
    pub prefix: String,
    pub max_len: Option<usize>,
}

impl SearchConfig {
    pub fn build(
        target: &str,
        kind: TargetKind,
        alphabet: &str,
        prefix: &str,
        max_len: Option<usize>,
    ) -> Result<Self> {
        let alphabet = Alphabet::parse(alphabet)?;
        if max_len == Some(0) {
            return Err(HashseekError::InvalidConfig(
                "a maximum length of 0 leaves no candidates to try".to_string(),
            ));
        }
        // Hex digests are conventionally written either case; normalize once
        // so the hot loop compares verbatim.
        let target = match kind {
            TargetKind::Digest => target.to_ascii_lowercase(),
            TargetKind::Plain => target.to_string(),
        };
        Ok(Self {
            target,
            kind,
            alphabet,
            prefix: prefix.to_string(),
            max_len,
        })
    }
}

/// Terminal outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { candidate: String, index: u64 },
    Exhausted,
    Cancelled,
}

impl SearchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOutcome::Found { .. } => "found",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::Cancelled => "cancelled",
        }
    }
}

/// Mutable bookkeeping for one run. Owned exclusively by `run` and dropped
/// when it returns; the odometer inside `Candidates` is the only memory the
/// enumeration needs.
struct SearchState {
    generated: u64,
    candidates: Candidates,
}

type Observer = Box<dyn FnMut(u64, &str)>;

/// Single-threaded, blocking search engine.
///
/// The cancel flag is the one piece of state shared across threads: a signal
/// handler (or a test) raises it and the engine notices at the next
/// candidate boundary.
pub struct SearchEngine {
    hasher: Hasher,
    metrics: Arc<Metrics>,
    cancel: Arc<AtomicBool>,
    observer: Option<Observer>,
}

impl SearchEngine {
    pub fn new(hasher: Hasher, metrics: Arc<Metrics>) -> Self {
        Self {
            hasher,
            metrics,
            cancel: Arc::new(AtomicBool::new(false)),
            observer: None,
        }
    }

    /// Shared handle to the cooperative cancellation flag, polled once per
    /// generated candidate.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Install a callback invoked after each candidate is generated with the
    /// running count and the candidate itself. Drives progress reporting.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(u64, &str) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    fn validate(&self, config: &SearchConfig) -> Result<()> {
        if config.alphabet.is_empty() {
            return Err(HashseekError::InvalidConfig(
                "alphabet must contain at least one character".to_string(),
            ));
        }
        if config.max_len == Some(0) {
            return Err(HashseekError::InvalidConfig(
                "a maximum length of 0 leaves no candidates to try".to_string(),
            ));
        }
        if config.kind == TargetKind::Digest
            && self.hasher.algorithm() == HashAlgorithm::Poly37
            && !config.prefix.chars().all(|c| config.alphabet.contains(c))
        {
            return Err(HashseekError::InvalidConfig(
                "prefix contains characters outside the alphabet, which a poly37 target can never match"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Run the search to completion: first match, exhaustion of a bounded
    /// space, or cancellation. Blocks the calling thread.
    pub fn run(&mut self, config: &SearchConfig) -> Result<SearchOutcome> {
        self.validate(config)?;
        self.metrics.searches_started.inc();

        let mut state = SearchState {
            generated: 0,
            candidates: Candidates::new(&config.alphabet, &config.prefix, config.max_len),
        };
        debug!(
            "Starting {} search over alphabet \"{}\" (prefix: \"{}\", max length: {:?})",
            config.kind, config.alphabet, config.prefix, config.max_len
        );

        loop {
            if self.cancel.load(Ordering::SeqCst) {
                info!(
                    "Search cancelled after {} candidates",
                    state.generated
                );
                return Ok(SearchOutcome::Cancelled);
            }

            let Some(candidate) = state.candidates.next() else {
                info!(
                    "Candidate space exhausted after {} candidates",
                    state.generated
                );
                return Ok(SearchOutcome::Exhausted);
            };
            let index = state.generated;
            state.generated += 1;
            self.metrics.candidates_generated.inc();
            if let Some(observer) = self.observer.as_mut() {
                observer(state.generated, &candidate);
            }

            let matched = match config.kind {
                TargetKind::Plain => candidate == config.target,
                TargetKind::Digest => {
                    self.metrics.digests_computed.inc();
                    self.hasher.digest(&candidate) == config.target
                }
            };

            if matched {
                self.metrics.matches_found.inc();
                info!("Match found at index {index}: \"{candidate}\"");
                return Ok(SearchOutcome::Found { candidate, index });
            }
        }
    }
}
