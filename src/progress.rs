use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::time::Instant;

/// Spinner update cadence in candidates. Updating every candidate would cost
/// more than the hashing itself on short alphabets.
const UPDATE_EVERY: u64 = 4096;

#[derive(Debug, Clone)]
pub struct ProgressStats {
    pub candidates: u64,
    pub start_time: Instant,
}

pub struct ProgressReporter {
    pub spinner: ProgressBar,
    stats: Mutex<ProgressStats>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner().with_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.set_message("Searching...");

        Self {
            spinner,
            stats: Mutex::new(ProgressStats {
                candidates: 0,
                start_time: Instant::now(),
            }),
        }
    }

    /// Observer hook for the engine: called once per generated candidate,
    /// redraws only at the update cadence.
    pub fn update(&self, generated: u64, candidate: &str) {
        let mut stats = self.stats.lock();
        stats.candidates = generated;
        if generated % UPDATE_EVERY != 0 {
            return;
        }

        let elapsed = stats.start_time.elapsed();
        let rate = if elapsed.as_secs_f64() > 0.0 {
            generated as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        self.spinner.set_message(format!(
            "{generated} candidates tried ({rate:.0}/s) | current length {}",
            candidate.chars().count()
        ));
    }

    pub fn finish(&self) -> ProgressStats {
        let stats = self.stats.lock().clone();
        self.spinner.finish_and_clear();
        stats
    }
}
