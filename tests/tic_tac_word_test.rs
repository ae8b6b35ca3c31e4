mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use test_context::test_context;

use common::UsingLogger;
use vocabclu::game::{generate_tic_tac_word, normalize_word_pos_pairs};
use vocabclu::model::{Difficulty, GenerationFailure, BOARD_CELLS};

const WORDS: [&str; 12] = [
    "bake", "bloom", "basket", "balloon", "cloud", "candle", "curious", "cook", "carry", "brave",
    "cheer", "bright",
];
const CLUES: [&str; 12] = [
    "v. to cook in an oven",
    "v. to flower",
    "n. a woven container",
    "n. a rubber bag of air",
    "n. water vapour in the sky",
    "n. wax with a wick",
    "adj. eager to know",
    "v. to prepare food",
    "v. to hold and move",
    "adj. without fear",
    "n. a shout of joy",
    "adj. full of light",
];

#[test_context(UsingLogger)]
#[test]
fn test_boards_have_distinct_valid_solutions(_: &mut UsingLogger) {
    let entries = normalize_word_pos_pairs(&WORDS, &CLUES);
    let texts: BTreeSet<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    for difficulty in Difficulty::all() {
        for seed in 0..5 {
            let result =
                generate_tic_tac_word(&entries, difficulty, &mut StdRng::seed_from_u64(seed));
            assert!(result.success, "{} seed {}: {:?}", difficulty, seed, result.message);
            assert_eq!(result.grids.len(), 4);
            for board in &result.grids {
                let solutions: BTreeSet<&str> = board.solutions().into_iter().collect();
                assert_eq!(solutions.len(), BOARD_CELLS);
                assert!(solutions.is_subset(&texts));

                let keys: BTreeSet<&str> = board.cells.iter().map(|c| c.key.as_str()).collect();
                assert_eq!(keys.len(), BOARD_CELLS);

                for cell in &board.cells {
                    assert!(cell.matching_words.contains(&cell.solution));
                    assert_eq!(cell.ambiguity, cell.matching_words.len());
                }
            }
        }
    }
}

#[test]
fn test_insufficient_words() {
    let entries = normalize_word_pos_pairs(&WORDS[..5], &CLUES[..5]);
    let result = generate_tic_tac_word(&entries, Difficulty::Easy, &mut StdRng::seed_from_u64(0));
    assert!(!result.success);
    assert!(result.grids.is_empty());
    assert_eq!(
        result.failure,
        Some(GenerationFailure::InsufficientInput {
            required: 9,
            supplied: 5
        })
    );
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_random_lists_give_distinct_cell_solutions(
        pairs in prop::collection::vec(
            ("[A-Z]{3,8}", prop_oneof![Just("n."), Just("v."), Just("adj.")]),
            9..16,
        ),
        difficulty in difficulty(),
        seed in any::<u64>(),
    ) {
        let words: Vec<&str> = pairs.iter().map(|(w, _)| w.as_str()).collect();
        let clues: Vec<String> = pairs.iter().map(|(_, pos)| format!("{} a word", pos)).collect();
        let entries = normalize_word_pos_pairs(&words, &clues);
        let result = generate_tic_tac_word(&entries, difficulty, &mut StdRng::seed_from_u64(seed));

        if !result.success {
            prop_assert!(result.grids.is_empty());
            prop_assert!(result.failure.is_some());
            return Ok(());
        }
        prop_assert_eq!(result.grids.len(), 4);
        for board in &result.grids {
            prop_assert_eq!(board.cells.len(), BOARD_CELLS);
            let solutions: BTreeSet<&str> = board.solutions().into_iter().collect();
            prop_assert_eq!(solutions.len(), BOARD_CELLS);

            for cell in &board.cells {
                prop_assert!(cell.matching_words.contains(&cell.solution));
                let attrs = &cell.attributes;
                let fits = entries.iter().any(|e| {
                    e.text == cell.solution
                        && attrs.length.map_or(true, |l| l == e.length)
                        && attrs.start.map_or(true, |c| c == e.start_char)
                        && attrs.end.map_or(true, |c| c == e.end_char)
                        && attrs.pos.as_ref().map_or(true, |p| e.pos_tag.as_ref() == Some(p))
                });
                prop_assert!(fits, "{} does not satisfy {}", cell.solution, cell.key);
            }
        }
    }
}
