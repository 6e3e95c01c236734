use crate::engine::{SearchConfig, SearchOutcome, TargetKind};
use crate::error::Result;
use crate::hasher::HashAlgorithm;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Final report for one search run, renderable as colored text or JSON.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub target: String,
    pub kind: TargetKind,
    pub algorithm: HashAlgorithm,
    pub alphabet: String,
    pub prefix: String,
    pub max_len: Option<usize>,
    pub outcome: &'static str,
    pub candidate: Option<String>,
    pub index: Option<u64>,
    pub candidates_tested: u64,
    pub elapsed_ms: u128,
}

impl SearchReport {
    pub fn new(
        config: &SearchConfig,
        algorithm: HashAlgorithm,
        outcome: &SearchOutcome,
        candidates_tested: u64,
        elapsed: Duration,
    ) -> Self {
        let (candidate, index) = match outcome {
            SearchOutcome::Found { candidate, index } => {
                (Some(candidate.clone()), Some(*index))
            }
            _ => (None, None),
        };
        Self {
            target: config.target.clone(),
            kind: config.kind,
            algorithm,
            alphabet: config.alphabet.to_string(),
            prefix: config.prefix.clone(),
            max_len: config.max_len,
            outcome: outcome.as_str(),
            candidate,
            index,
            candidates_tested,
            elapsed_ms: elapsed.as_millis(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> String {
        let mut output = String::new();
        match (&self.candidate, self.index) {
            (Some(candidate), Some(index)) => {
                output.push_str(&format!(
                    "{} {} {}\n",
                    "Found".green().bold(),
                    candidate.yellow().bold(),
                    format!("(index {index})").dimmed()
                ));
            }
            _ if self.outcome == "cancelled" => {
                output.push_str(&format!("{}\n", "Search cancelled".yellow()));
            }
            _ => {
                output.push_str(&format!(
                    "{}\n",
                    format!(
                        "No match within maximum length {}",
                        self.max_len.map_or_else(|| "?".to_string(), |m| m.to_string())
                    )
                    .yellow()
                ));
            }
        }
        output.push_str(&format!(
            "{}: {} {} in {} ms\n",
            "Tested".cyan(),
            self.candidates_tested,
            "candidates".cyan(),
            self.elapsed_ms
        ));
        output
    }
}
