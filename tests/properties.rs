use hashseek::{Alphabet, Candidates};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn no_duplicates_in_any_run_prefix(
        alpha in "[a-z]{1,6}",
        prefix in "[a-z]{0,3}",
        take in 1usize..300,
    ) {
        let alphabet = Alphabet::parse(&alpha).unwrap();
        let candidates: Vec<String> =
            Candidates::new(&alphabet, &prefix, None).take(take).collect();

        let unique: HashSet<&String> = candidates.iter().collect();
        prop_assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn lengths_are_non_decreasing(
        alpha in "[a-z]{1,6}",
        take in 1usize..300,
    ) {
        let alphabet = Alphabet::parse(&alpha).unwrap();
        let candidates: Vec<String> =
            Candidates::new(&alphabet, "", None).take(take).collect();

        prop_assert!(
            candidates
                .windows(2)
                .all(|pair| pair[0].chars().count() <= pair[1].chars().count())
        );
    }

    #[test]
    fn every_candidate_starts_with_the_prefix(
        alpha in "[a-z]{1,4}",
        prefix in "[a-z0-9]{0,4}",
    ) {
        let alphabet = Alphabet::parse(&alpha).unwrap();
        prop_assert!(
            Candidates::new(&alphabet, &prefix, None)
                .take(100)
                .all(|candidate| candidate.starts_with(&prefix))
        );
    }

    #[test]
    fn identical_configs_enumerate_identically(
        alpha in "[a-z]{1,5}",
        prefix in "[a-z]{0,2}",
    ) {
        let alphabet = Alphabet::parse(&alpha).unwrap();
        let first: Vec<String> =
            Candidates::new(&alphabet, &prefix, None).take(200).collect();
        let second: Vec<String> =
            Candidates::new(&alphabet, &prefix, None).take(200).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn bounded_space_has_exact_size(
        alpha in "[a-z]{1,5}",
        max_len in 1usize..4,
    ) {
        let alphabet = Alphabet::parse(&alpha).unwrap();
        let base = alphabet.len();
        let expected: usize = (1..=max_len).map(|k| base.pow(k as u32)).sum();
        prop_assert_eq!(
            Candidates::new(&alphabet, "", Some(max_len)).count(),
            expected
        );
    }
}
