use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use log::{debug, info, trace};
use rand::{seq::SliceRandom, Rng};

use super::board_candidates::build_candidates;
use super::board_profile::DifficultyProfile;
use super::random::choose_weighted_index;
use super::retry::{BoundedSearch, SearchOutcome};
use crate::model::{
    Board, BoardCell, CandidateKind, ConstraintCandidate, Difficulty, GenerationFailure,
    TicTacWordResult, WordEntry, BOARD_CELLS,
};
use crate::solver::{find_distinct_assignment, DEFAULT_NODE_LIMIT};

pub const MIN_BOARD_WORDS: usize = 9;
pub const BOARD_COUNT: usize = 4;
pub const BOARD_ATTEMPTS: usize = 400;
const CENTER_CELL: usize = 4;
const NOVELTY_BONUS: usize = 2;

/// Draws nine distinct eligible candidates, respecting per-kind caps and
/// favouring candidates that bring in words the pool does not cover yet.
fn sample_pool<'a, R: Rng + ?Sized>(
    candidates: &'a [ConstraintCandidate],
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Option<Vec<&'a ConstraintCandidate>> {
    let mut pool: Vec<&ConstraintCandidate> = Vec::with_capacity(BOARD_CELLS);
    let mut chosen_keys: BTreeSet<&str> = BTreeSet::new();
    let mut per_kind: BTreeMap<CandidateKind, usize> = BTreeMap::new();
    let mut covered: BTreeSet<&str> = BTreeSet::new();

    while pool.len() < BOARD_CELLS {
        let index = choose_weighted_index(rng, candidates, |c| {
            if chosen_keys.contains(c.key.as_str())
                || per_kind.get(&c.kind).copied().unwrap_or(0) >= profile.cap(c.kind)
            {
                return 0;
            }
            let novelty = if c.matching_words.iter().any(|w| !covered.contains(w.as_str())) {
                NOVELTY_BONUS
            } else {
                1
            };
            profile.weight(c) * novelty
        });
        let Some(index) = index else {
            trace!(target: "tic_tac_word", "Ran out of eligible candidates at {}", pool.len());
            return None;
        };
        let candidate = &candidates[index];
        chosen_keys.insert(candidate.key.as_str());
        *per_kind.entry(candidate.kind).or_default() += 1;
        covered.extend(candidate.matching_words.iter().map(|w| w.as_str()));
        pool.push(candidate);
    }
    Some(pool)
}

/// Builds four independent 3x3 boards of attribute constraints, each solvable
/// with nine different words.
#[derive(Debug, Clone)]
pub struct TicTacWordGenerator {
    pub difficulty: Difficulty,
    pub board_attempts: usize,
    pub node_limit: usize,
    pub time_budget: Option<Duration>,
}

impl TicTacWordGenerator {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            board_attempts: BOARD_ATTEMPTS,
            node_limit: DEFAULT_NODE_LIMIT,
            time_budget: None,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    fn build_board<R: Rng + ?Sized>(
        &self,
        candidates: &[ConstraintCandidate],
        profile: &DifficultyProfile,
        max_length: usize,
        rng: &mut R,
    ) -> Option<Board> {
        let pool = sample_pool(candidates, profile, rng)?;
        let options: Vec<Vec<String>> = pool
            .iter()
            .map(|c| {
                let mut words = c.matching_words.clone();
                words.shuffle(rng);
                words
            })
            .collect();
        let Some(solutions) = find_distinct_assignment(&options, self.node_limit) else {
            trace!(
                target: "tic_tac_word",
                "No distinct assignment for {:?}",
                pool.iter().map(|c| c.key.as_str()).collect::<Vec<_>>()
            );
            return None;
        };

        let mut cells: Vec<BoardCell> = pool
            .iter()
            .zip(solutions.iter())
            .map(|(candidate, solution)| BoardCell::new(candidate, solution))
            .collect();

        if self.difficulty == Difficulty::Easy {
            if let Some(longest) = cells
                .iter()
                .position(|c| c.attributes.length == Some(max_length))
            {
                cells.swap(longest, CENTER_CELL);
            }
        }
        Some(Board { cells })
    }

    pub fn generate<R: Rng + ?Sized>(&self, entries: &[WordEntry], rng: &mut R) -> TicTacWordResult {
        if entries.len() < MIN_BOARD_WORDS {
            info!(
                target: "tic_tac_word",
                "Only {} unique words; need {}",
                entries.len(),
                MIN_BOARD_WORDS
            );
            return TicTacWordResult::failed(
                self.difficulty,
                GenerationFailure::InsufficientInput {
                    required: MIN_BOARD_WORDS,
                    supplied: entries.len(),
                },
            );
        }

        let profile = DifficultyProfile::for_difficulty(self.difficulty);
        let candidates: Vec<ConstraintCandidate> = build_candidates(entries)
            .into_iter()
            .filter(|c| profile.is_eligible(c))
            .collect();
        let max_length = entries.iter().map(|e| e.length).max().unwrap_or(0);
        debug!(
            target: "tic_tac_word",
            "{} eligible candidates for {} words at {}",
            candidates.len(),
            entries.len(),
            self.difficulty
        );

        let search = BoundedSearch::new("tic_tac_word", self.board_attempts)
            .with_time_budget(self.time_budget);
        let mut grids = Vec::with_capacity(BOARD_COUNT);
        for board_index in 0..BOARD_COUNT {
            let outcome = search.run(|_| self.build_board(&candidates, &profile, max_length, rng));
            match outcome {
                SearchOutcome::Found { value, attempts } => {
                    debug!(
                        target: "tic_tac_word",
                        "Board {} built after {} attempts",
                        board_index + 1,
                        attempts
                    );
                    grids.push(value);
                }
                SearchOutcome::Exhausted { attempts } => {
                    info!(target: "tic_tac_word", "Board {} failed", board_index + 1);
                    return TicTacWordResult::failed(
                        self.difficulty,
                        GenerationFailure::NoSolvableAssignment { attempts },
                    );
                }
                SearchOutcome::TimedOut { attempts } => {
                    info!(target: "tic_tac_word", "Board {} timed out", board_index + 1);
                    return TicTacWordResult::failed(
                        self.difficulty,
                        GenerationFailure::BudgetExhausted { attempts },
                    );
                }
            }
        }

        info!(target: "tic_tac_word", "Generated {} boards", grids.len());
        TicTacWordResult {
            grids,
            success: true,
            difficulty: self.difficulty,
            failure: None,
            message: None,
        }
    }
}

pub fn generate_tic_tac_word<R: Rng + ?Sized>(
    entries: &[WordEntry],
    difficulty: Difficulty,
    rng: &mut R,
) -> TicTacWordResult {
    TicTacWordGenerator::new(difficulty).generate(entries, rng)
}
