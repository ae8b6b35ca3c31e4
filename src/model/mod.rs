mod crossword;
mod dga;
mod difficulty;
mod failure;
mod tic_tac_word;
mod word_entry;

pub use crossword::{Cell, CrosswordResult, Grid, Orientation, PlacedWord};
pub use dga::{Constraint, ConstraintKind, DgaClue, DgaResult, VisualSpec};
pub use difficulty::Difficulty;
pub use failure::{GenerationFailure, VocabError};
pub use tic_tac_word::{
    Band, Board, BoardCell, CandidateAttributes, CandidateKind, ConstraintCandidate,
    TicTacWordResult, BOARD_CELLS, BOARD_WIDTH,
};
pub use word_entry::WordEntry;
