mod board_candidates;
mod board_profile;
pub mod crossword_generator;
mod crossword_grid;
mod dga_constraints;
pub mod dga_generator;
pub mod normalizer;
mod puzzle_session;
pub mod random;
pub mod retry;
pub mod settings;
pub mod tic_tac_word_generator;
pub mod word_list;

pub use board_candidates::build_candidates;
pub use board_profile::DifficultyProfile;
pub use crossword_generator::{generate_crossword, grid_size_for};
pub use dga_generator::{generate_dga, DgaGenerator};
pub use normalizer::{normalize_word_pos_pairs, normalize_words, parse_pos_tag};
pub use puzzle_session::PuzzleSession;
pub use settings::GeneratorSettings;
pub use tic_tac_word_generator::{generate_tic_tac_word, TicTacWordGenerator};
pub use word_list::{parse_word_list, read_word_list, WordList};
