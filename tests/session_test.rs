mod common;

use serial_test::serial;

use common::{FRUITS, NO_CLUES};
use vocabclu::game::{GeneratorSettings, PuzzleSession};
use vocabclu::model::Difficulty;

const WORDS: [&str; 10] = [
    "bake", "bloom", "basket", "balloon", "cloud", "candle", "curious", "cook", "carry", "brave",
];
const CLUES: [&str; 10] = [
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
];

#[test]
#[serial]
fn test_fixed_seed_is_deterministic_for_every_engine() {
    std::env::remove_var("SEED");
    let run = || {
        let mut session = PuzzleSession::with_seed(2024);
        (
            session.generate_crossword(&FRUITS, NO_CLUES),
            session.generate_dga(&FRUITS, NO_CLUES),
            session.generate_tic_tac_word(&WORDS, &CLUES, Some(Difficulty::Medium)),
        )
    };
    assert_eq!(run(), run());
}

#[test]
#[serial]
fn test_regenerating_leaves_earlier_copies_alone() {
    std::env::remove_var("SEED");
    let mut session = PuzzleSession::with_seed(8);
    let first = session.generate_crossword(&FRUITS, NO_CLUES);
    let held = session.crossword().unwrap();
    assert_eq!(held, first);

    session.generate_crossword(&["plum", "pear"], NO_CLUES);
    assert_eq!(held, first);
    assert_ne!(session.crossword().unwrap(), first);
}

#[test]
#[serial]
fn test_settings_flow_into_engines() {
    std::env::remove_var("SEED");
    let settings = GeneratorSettings {
        dga_clue_count: 6,
        difficulty: Difficulty::Hard,
        crossword_min_grid: 20,
        seed: Some(5),
        ..Default::default()
    };
    let mut session = PuzzleSession::new(settings);
    assert_eq!(session.seed(), 5);

    assert_eq!(session.generate_dga(&FRUITS, NO_CLUES).word_bank.len(), 6);
    assert_eq!(session.generate_crossword(&FRUITS, NO_CLUES).grid_size, 20);
    let boards = session.generate_tic_tac_word(&WORDS, &CLUES, None);
    assert_eq!(boards.difficulty, Difficulty::Hard);
}

#[test]
#[serial]
fn test_results_serialize_to_json() {
    std::env::remove_var("SEED");
    let mut session = PuzzleSession::with_seed(1);
    let result = session.generate_dga(&FRUITS, NO_CLUES);
    let json = serde_json::to_string(&result).unwrap();
    let back: vocabclu::model::DgaResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
