mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use test_context::test_context;

use common::{UsingLogger, FRUITS, NO_CLUES};
use vocabclu::game::{generate_dga, normalize_words};
use vocabclu::model::{ConstraintKind, GenerationFailure};
use vocabclu::solver::simulate_elimination;

const SCENARIO: [&str; 6] = ["apple", "apply", "apron", "berry", "beret", "below"];

#[test_context(UsingLogger)]
#[test]
fn test_clues_match_word_bank_one_to_one(_: &mut UsingLogger) {
    let entries = normalize_words(&FRUITS, NO_CLUES);
    for seed in 0..20 {
        let result = generate_dga(&entries, 10, &mut StdRng::seed_from_u64(seed));
        assert!(result.success, "seed {}: {:?}", seed, result.message);
        assert_eq!(result.word_bank.len(), 10);
        assert_eq!(result.clues.len(), result.word_bank.len());

        let targets: BTreeSet<&str> = result.clues.iter().map(|c| c.word.as_str()).collect();
        let bank: BTreeSet<&str> = result.word_bank.iter().map(|w| w.as_str()).collect();
        assert_eq!(targets, bank);

        for clue in &result.clues {
            assert_eq!(clue.kind.reveal_in(&clue.word), Some(clue.revealed_char));
        }
        assert!(result.ambiguous_count() <= 3);
        assert!(simulate_elimination(&result.clues, &result.word_bank).is_solved());
    }
}

#[test]
fn test_scenario_reaches_three_ambiguous_clues() {
    let entries = normalize_words(&SCENARIO, NO_CLUES);
    let result = generate_dga(&entries, 10, &mut StdRng::seed_from_u64(77));
    assert!(result.success);
    assert_eq!(result.ambiguous_count(), 3);

    let outcome = simulate_elimination(&result.clues, &result.word_bank);
    assert_eq!(outcome.resolved.len(), 6);
    assert!(outcome.deadlocked.is_empty());
}

#[test]
fn test_duplicates_count_once() {
    let words = ["apple", "APPLE", "apply", "apron", "berry", "beret"];
    let entries = normalize_words(&words, NO_CLUES);
    let result = generate_dga(&entries, 10, &mut StdRng::seed_from_u64(0));
    assert!(!result.success);
    assert!(result.message.is_some());
}

/// Words in `bank` for which every revealable letter is shared with another
/// bank word.
fn without_unique_clue(bank: &[String]) -> usize {
    bank.iter()
        .filter(|word| {
            ConstraintKind::all().into_iter().all(|kind| match kind.reveal_in(word) {
                Some(ch) => bank
                    .iter()
                    .any(|other| other != *word && kind.reveal_in(other) == Some(ch)),
                None => true,
            })
        })
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_pools_give_solvable_chains(
        words in prop::collection::vec("[A-Z]{3,8}", 4..12),
        seed in any::<u64>(),
    ) {
        let entries = normalize_words(&words, NO_CLUES);
        let result = generate_dga(&entries, 10, &mut StdRng::seed_from_u64(seed));

        if entries.len() < 6 {
            prop_assert!(
                matches!(result.failure, Some(GenerationFailure::InsufficientInput { .. })),
                "expected insufficient input failure"
            );
            return Ok(());
        }
        if !result.success {
            prop_assert!(result.clues.is_empty());
            prop_assert!(
                matches!(result.failure, Some(GenerationFailure::NoSolvableAssignment { .. })),
                "unexpected failure kind"
            );
            return Ok(());
        }

        let targets: Vec<&str> = result.clues.iter().map(|c| c.word.as_str()).collect();
        let distinct: BTreeSet<&str> = targets.iter().copied().collect();
        let bank: BTreeSet<&str> = result.word_bank.iter().map(|w| w.as_str()).collect();
        prop_assert_eq!(distinct.len(), targets.len());
        prop_assert_eq!(distinct, bank);

        for clue in &result.clues {
            prop_assert_eq!(clue.kind.reveal_in(&clue.word), Some(clue.revealed_char));
        }
        prop_assert!(simulate_elimination(&result.clues, &result.word_bank).is_solved());

        let limit = 3.max(without_unique_clue(&result.word_bank));
        prop_assert!(result.ambiguous_count() <= limit);
        prop_assert!(result.message.is_some());
    }
}
