use hashseek::{
    Alphabet, HashAlgorithm, Hasher, HashseekError, Metrics, SearchConfig, SearchEngine,
    SearchOutcome, TargetKind,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

fn engine(algorithm: HashAlgorithm, alphabet: &str) -> SearchEngine {
    let alphabet = Alphabet::parse(alphabet).unwrap();
    SearchEngine::new(
        Hasher::new(algorithm, &alphabet),
        Arc::new(Metrics::new()),
    )
}

fn digest_of(algorithm: HashAlgorithm, alphabet: &str, input: &str) -> String {
    let alphabet = Alphabet::parse(alphabet).unwrap();
    Hasher::new(algorithm, &alphabet).digest(input)
}

mod found {
    use super::*;

    #[test]
    fn test_digest_target_ba_found_at_index_4() {
        // Enumeration must be "a","b","aa","ab","ba","bb"; indices are 0-based.
        let target = digest_of(HashAlgorithm::Sha256, "ab", "ba");
        let config =
            SearchConfig::build(&target, TargetKind::Digest, "ab", "", Some(2)).unwrap();
        let outcome = engine(HashAlgorithm::Sha256, "ab").run(&config).unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Found {
                candidate: "ba".to_string(),
                index: 4
            }
        );
    }

    #[test]
    fn test_shorter_candidates_win_ties() {
        let config =
            SearchConfig::build("b", TargetKind::Plain, "ab", "", Some(3)).unwrap();
        let outcome = engine(HashAlgorithm::Sha256, "ab").run(&config).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                candidate: "b".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn test_prefix_prepended_to_every_candidate() {
        let config =
            SearchConfig::build("xba", TargetKind::Plain, "ab", "x", Some(2)).unwrap();
        let outcome = engine(HashAlgorithm::Sha256, "ab").run(&config).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                candidate: "xba".to_string(),
                index: 4
            }
        );
    }

    #[test]
    fn test_poly37_target_found_by_position() {
        // poly37("ac") = (7 * 37 + 0) * 37 + 1 = 9584; "ac" sits after the
        // 16 single-character candidates and "aa".
        let alphabet = "acdegilmnoprstuw";
        let config =
            SearchConfig::build("9584", TargetKind::Digest, alphabet, "", Some(2)).unwrap();
        let outcome = engine(HashAlgorithm::Poly37, alphabet).run(&config).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                candidate: "ac".to_string(),
                index: 17
            }
        );
    }

    #[test]
    fn test_no_hashing_after_match() {
        let target = digest_of(HashAlgorithm::Sha256, "ab", "ba");
        let config =
            SearchConfig::build(&target, TargetKind::Digest, "ab", "", Some(2)).unwrap();

        let metrics = Arc::new(Metrics::new());
        let alphabet = Alphabet::parse("ab").unwrap();
        let mut engine = SearchEngine::new(
            Hasher::new(HashAlgorithm::Sha256, &alphabet),
            Arc::clone(&metrics),
        );
        let outcome = engine.run(&config).unwrap();

        assert!(matches!(outcome, SearchOutcome::Found { index: 4, .. }));
        // "bb" exists in the space but must never be generated or hashed.
        assert_eq!(metrics.candidates_generated.get(), 5);
        assert_eq!(metrics.digests_computed.get(), 5);
    }
}

mod exhausted {
    use super::*;

    #[test]
    fn test_unreachable_target_exhausts_bounded_space() {
        let config =
            SearchConfig::build("zzz", TargetKind::Plain, "ab", "", Some(2)).unwrap();
        let outcome = engine(HashAlgorithm::Sha256, "ab").run(&config).unwrap();
        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn test_exhaustion_visits_whole_space_once() {
        let config =
            SearchConfig::build("zzz", TargetKind::Plain, "ab", "", Some(3)).unwrap();

        let metrics = Arc::new(Metrics::new());
        let alphabet = Alphabet::parse("ab").unwrap();
        let mut engine = SearchEngine::new(
            Hasher::new(HashAlgorithm::Sha256, &alphabet),
            Arc::clone(&metrics),
        );
        let outcome = engine.run(&config).unwrap();

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(metrics.candidates_generated.get(), 2 + 4 + 8);
    }
}

mod invalid_config {
    use super::*;

    #[test]
    fn test_empty_alphabet_rejected_before_any_candidate() {
        let result = SearchConfig::build("x", TargetKind::Digest, "", "", None);
        assert!(matches!(result, Err(HashseekError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_space_bound_rejected() {
        let result = SearchConfig::build("x", TargetKind::Plain, "ab", "", Some(0));
        assert!(matches!(result, Err(HashseekError::InvalidConfig(_))));
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn test_cancel_after_three_candidates_generates_exactly_three() {
        // Unbounded search, unreachable plain target: only cancellation stops it.
        let config = SearchConfig::build("zzz", TargetKind::Plain, "ab", "", None).unwrap();

        let mut engine = engine(HashAlgorithm::Sha256, "ab");
        let cancel = engine.cancel_flag();
        let seen = Arc::new(AtomicU64::new(0));
        let seen_in_observer = Arc::clone(&seen);
        engine.set_observer(move |generated, _| {
            seen_in_observer.store(generated, Ordering::SeqCst);
            if generated == 3 {
                cancel.store(true, Ordering::SeqCst);
            }
        });

        let outcome = engine.run(&config).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_pre_cancelled_run_generates_nothing() {
        let config = SearchConfig::build("zzz", TargetKind::Plain, "ab", "", None).unwrap();

        let metrics = Arc::new(Metrics::new());
        let alphabet = Alphabet::parse("ab").unwrap();
        let mut engine = SearchEngine::new(
            Hasher::new(HashAlgorithm::Sha256, &alphabet),
            Arc::clone(&metrics),
        );
        engine.cancel_flag().store(true, Ordering::SeqCst);

        let outcome = engine.run(&config).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(metrics.candidates_generated.get(), 0);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_identical_configs_produce_identical_sequences() {
        let config =
            SearchConfig::build("zzz", TargetKind::Plain, "abc", "", Some(3)).unwrap();

        let record_run = || {
            let recorded = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&recorded);
            let mut engine = engine(HashAlgorithm::Sha256, "abc");
            engine.set_observer(move |_, candidate| {
                sink.lock().unwrap().push(candidate.to_string());
            });
            let outcome = engine.run(&config).unwrap();
            drop(engine);
            let sequence = Arc::try_unwrap(recorded).unwrap().into_inner().unwrap();
            (outcome, sequence)
        };

        let (first_outcome, first_sequence) = record_run();
        let (second_outcome, second_sequence) = record_run();

        assert_eq!(first_outcome, second_outcome);
        assert_eq!(first_sequence, second_sequence);
        assert_eq!(first_sequence.len(), 3 + 9 + 27);
    }
}
