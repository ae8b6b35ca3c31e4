use log::{info, trace};
use rand::rngs::StdRng;

use super::crossword_generator::{generate_crossword, grid_size_for};
use super::dga_generator::DgaGenerator;
use super::normalizer::{normalize_word_pos_pairs, normalize_words};
use super::random::{fresh_seed, seeded_rng};
use super::settings::GeneratorSettings;
use super::tic_tac_word_generator::TicTacWordGenerator;
use crate::model::{CrosswordResult, DgaResult, Difficulty, TicTacWordResult};

/// Owns the generator settings and random source, and keeps the latest
/// result of each engine.
///
/// Getters hand out owned copies; regenerating never changes a copy a caller
/// already holds.
#[derive(Debug)]
pub struct PuzzleSession {
    settings: GeneratorSettings,
    seed: u64,
    rng: StdRng,
    crossword: Option<CrosswordResult>,
    dga: Option<DgaResult>,
    tic_tac_word: Option<TicTacWordResult>,
}

impl PuzzleSession {
    pub fn new(settings: GeneratorSettings) -> Self {
        let seed = settings.effective_seed().unwrap_or_else(fresh_seed);
        info!(target: "session", "Starting session with seed {}", seed);
        Self {
            settings,
            seed,
            rng: seeded_rng(Some(seed)),
            crossword: None,
            dga: None,
            tic_tac_word: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorSettings {
            seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate_crossword<S: AsRef<str>, C: AsRef<str>>(
        &mut self,
        words: &[S],
        clues: &[C],
    ) -> CrosswordResult {
        let entries = normalize_words(words, clues);
        let grid_size = grid_size_for(&entries, self.settings.crossword_min_grid);
        let result = generate_crossword(&entries, grid_size, &mut self.rng);
        trace!(target: "session", "Retaining crossword:\n{}", result);
        self.crossword = Some(result.clone());
        result
    }

    pub fn generate_dga<S: AsRef<str>, C: AsRef<str>>(
        &mut self,
        words: &[S],
        clues: &[C],
    ) -> DgaResult {
        let entries = normalize_words(words, clues);
        let result = DgaGenerator::new(self.settings.dga_clue_count)
            .with_time_budget(self.settings.time_budget())
            .generate(&entries, &mut self.rng);
        self.dga = Some(result.clone());
        result
    }

    /// Uses the configured difficulty unless `difficulty` overrides it.
    pub fn generate_tic_tac_word<S: AsRef<str>, C: AsRef<str>>(
        &mut self,
        words: &[S],
        clues: &[C],
        difficulty: Option<Difficulty>,
    ) -> TicTacWordResult {
        let entries = normalize_word_pos_pairs(words, clues);
        let difficulty = difficulty.unwrap_or(self.settings.difficulty);
        let result = TicTacWordGenerator::new(difficulty)
            .with_time_budget(self.settings.time_budget())
            .generate(&entries, &mut self.rng);
        self.tic_tac_word = Some(result.clone());
        result
    }

    pub fn crossword(&self) -> Option<CrosswordResult> {
        self.crossword.clone()
    }

    pub fn dga(&self) -> Option<DgaResult> {
        self.dga.clone()
    }

    pub fn tic_tac_word(&self) -> Option<TicTacWordResult> {
        self.tic_tac_word.clone()
    }
}
