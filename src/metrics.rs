use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use std::sync::Arc;

#[derive(Clone)]
pub struct Metrics {
    pub searches_started: IntCounter,
    pub candidates_generated: IntCounter,
    pub digests_computed: IntCounter,
    pub matches_found: IntCounter,
    registry: Arc<Registry>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let searches_started =
            IntCounter::with_opts(Opts::new("searches_started", "Number of searches started"))
                .unwrap();
        let candidates_generated = IntCounter::with_opts(Opts::new(
            "candidates_generated",
            "Number of candidate strings generated",
        ))
        .unwrap();
        let digests_computed = IntCounter::with_opts(Opts::new(
            "digests_computed",
            "Number of candidate digests computed",
        ))
        .unwrap();
        let matches_found =
            IntCounter::with_opts(Opts::new("matches_found", "Number of matches found")).unwrap();

        registry.register(Box::new(searches_started.clone())).ok();
        registry
            .register(Box::new(candidates_generated.clone()))
            .ok();
        registry.register(Box::new(digests_computed.clone())).ok();
        registry.register(Box::new(matches_found.clone())).ok();

        Metrics {
            searches_started,
            candidates_generated,
            digests_computed,
            matches_found,
            registry: Arc::new(registry),
        }
    }

    pub fn gather(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap_or_default()
    }
}
