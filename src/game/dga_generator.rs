use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, info, trace};
use rand::{seq::SliceRandom, Rng};

use super::dga_constraints::ConstraintSpace;
use super::random::random_subset;
use super::retry::{degrade, BoundedSearch, SearchOutcome};
use crate::model::{Constraint, DgaClue, DgaResult, GenerationFailure, WordEntry};
use crate::solver::simulate_elimination;

pub const MIN_DGA_WORDS: usize = 6;
pub const MAX_AMBIGUOUS_CLUES: usize = 3;
pub const DGA_ATTEMPTS: usize = 200;
pub const DEFAULT_CLUE_COUNT: usize = 10;

/// Source of choices during selection. The randomized pass draws from the
/// injected generator; the fallback pass always takes the first option.
trait Picker {
    fn pick(&mut self, n: usize) -> usize;

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}

struct RandomPicker<'a, R: ?Sized>(&'a mut R);

impl<R: Rng + ?Sized> Picker for RandomPicker<'_, R> {
    fn pick(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}

struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&mut self, _: usize) -> usize {
        0
    }

    fn shuffle<T>(&mut self, _: &mut [T]) {}
}

struct DgaGeneratorState {
    space: ConstraintSpace,
    component_of: Vec<usize>,
    component_sizes: Vec<usize>,
    /// Words with no unique constraint; they are ambiguous whatever we pick.
    inherent: Vec<usize>,
}

impl DgaGeneratorState {
    fn new(space: ConstraintSpace) -> Self {
        let components = space.ambiguity_components();
        let mut component_of = vec![0; space.len()];
        for (c, members) in components.iter().enumerate() {
            for &word in members {
                component_of[word] = c;
            }
        }
        let inherent = (0..space.len())
            .filter(|&w| space.unique_options(w).is_empty())
            .collect();
        Self {
            component_sizes: components.iter().map(|c| c.len()).collect(),
            component_of,
            inherent,
            space,
        }
    }

    fn ambiguous_cap(&self) -> usize {
        MAX_AMBIGUOUS_CLUES.max(self.inherent.len())
    }

    /// Words that will receive an ambiguous clue: the inherently ambiguous ones
    /// plus extra picks until `target` is met. Each component keeps at least
    /// one word out of the forced set.
    fn forced_words(&self, target: usize, picker: &mut impl Picker) -> Vec<usize> {
        let mut forced = self.inherent.clone();
        let mut forced_per_component = vec![0; self.component_sizes.len()];
        for &word in &forced {
            forced_per_component[self.component_of[word]] += 1;
        }

        let mut eligible: Vec<usize> = (0..self.space.len())
            .filter(|w| !self.inherent.contains(w))
            .filter(|&w| !self.space.ambiguous_options(w).is_empty())
            .collect();
        picker.shuffle(&mut eligible);

        for word in eligible {
            if forced.len() >= target {
                break;
            }
            let component = self.component_of[word];
            if forced_per_component[component] + 1 < self.component_sizes[component] {
                forced_per_component[component] += 1;
                forced.push(word);
            }
        }
        forced
    }

    /// One constraint per word, indexed like the word pool.
    fn select(&self, target: usize, picker: &mut impl Picker) -> Vec<Constraint> {
        let forced = self.forced_words(target, picker);
        let forced_set: BTreeSet<usize> = forced.iter().copied().collect();

        (0..self.space.len())
            .map(|word| {
                let options = if forced_set.contains(&word) {
                    let ambiguous = self.space.ambiguous_options(word);
                    let isolated: Vec<&Constraint> = ambiguous
                        .iter()
                        .copied()
                        .filter(|c| {
                            self.space
                                .bucket_members(c)
                                .iter()
                                .all(|m| *m == word || !forced_set.contains(m))
                        })
                        .collect();
                    if isolated.is_empty() {
                        ambiguous
                    } else {
                        isolated
                    }
                } else {
                    let unique = self.space.unique_options(word);
                    if unique.is_empty() {
                        self.space.ambiguous_options(word)
                    } else {
                        unique
                    }
                };
                let options = if options.is_empty() {
                    self.space.options[word].iter().collect()
                } else {
                    options
                };
                options[picker.pick(options.len())].clone()
            })
            .collect()
    }

    fn accept(&self, selection: &[Constraint], target: usize) -> bool {
        let ambiguous = selection.iter().filter(|c| c.is_ambiguous()).count();
        if ambiguous < target || ambiguous > self.ambiguous_cap() {
            trace!(
                target: "dga",
                "Rejected selection with {} ambiguous clues (target {})",
                ambiguous,
                target
            );
            return false;
        }
        let outcome = simulate_elimination(selection, &self.space.words);
        if !outcome.is_solved() {
            trace!(
                target: "dga",
                "Rejected selection deadlocking on {:?}",
                outcome.deadlocked
            );
        }
        outcome.is_solved()
    }

    fn into_clues<R: Rng + ?Sized>(&self, selection: Vec<Constraint>, rng: &mut R) -> Vec<DgaClue> {
        let mut clues: Vec<DgaClue> = selection
            .into_iter()
            .map(|c| DgaClue {
                id: 0,
                matching_words: self.space.matching_words(&c),
                is_ambiguous: c.is_ambiguous(),
                word: c.target_word,
                kind: c.kind,
                revealed_char: c.revealed_char,
                visual_spec: c.visual_spec,
            })
            .collect();
        clues.shuffle(rng);
        for (i, clue) in clues.iter_mut().enumerate() {
            clue.id = i + 1;
        }
        clues
    }
}

/// Builds letter-reveal deduction chains ("DGA" puzzles).
#[derive(Debug, Clone)]
pub struct DgaGenerator {
    pub clue_count_limit: usize,
    pub max_attempts: usize,
    pub time_budget: Option<Duration>,
}

impl Default for DgaGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CLUE_COUNT)
    }
}

impl DgaGenerator {
    pub fn new(clue_count_limit: usize) -> Self {
        Self {
            clue_count_limit,
            max_attempts: DGA_ATTEMPTS,
            time_budget: None,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, entries: &[WordEntry], rng: &mut R) -> DgaResult {
        if entries.len() < MIN_DGA_WORDS {
            info!(
                target: "dga",
                "Only {} unique words; need {}",
                entries.len(),
                MIN_DGA_WORDS
            );
            return DgaResult::failed(GenerationFailure::InsufficientInput {
                required: MIN_DGA_WORDS,
                supplied: entries.len(),
            });
        }

        let limit = self.clue_count_limit.max(MIN_DGA_WORDS);
        let pool = if entries.len() > limit {
            debug!(target: "dga", "Sampling {} of {} words", limit, entries.len());
            random_subset(rng, entries, limit)
        } else {
            entries.to_vec()
        };

        let state = DgaGeneratorState::new(ConstraintSpace::build(&pool));
        let target = MAX_AMBIGUOUS_CLUES.min(state.space.feasible_ambiguous_max());
        debug!(
            target: "dga",
            "{} words, ambiguous target {}, {} inherently ambiguous",
            state.space.len(),
            target,
            state.inherent.len()
        );

        let search = BoundedSearch::new("dga", self.max_attempts).with_time_budget(self.time_budget);
        let outcome = search.run(|_| {
            let selection = state.select(target, &mut RandomPicker(&mut *rng));
            state.accept(&selection, target).then_some(selection)
        });
        let attempts = outcome.attempts();

        let (achieved_target, selection) = match outcome {
            SearchOutcome::Found { value, .. } => (target, value),
            _ => {
                debug!(target: "dga", "Randomized selection failed; degrading target");
                let fallback = degrade((0..=target).rev(), |t| {
                    let selection = state.select(t, &mut FirstPicker);
                    state.accept(&selection, t).then_some(selection)
                });
                match fallback {
                    Some(found) => found,
                    None => {
                        info!(target: "dga", "No solvable clue set after {} attempts", attempts);
                        return DgaResult::failed(GenerationFailure::NoSolvableAssignment {
                            attempts,
                        });
                    }
                }
            }
        };

        let clues = state.into_clues(selection, rng);
        let mut word_bank = state.space.words.clone();
        word_bank.sort();

        let ambiguous = clues.iter().filter(|c| c.is_ambiguous).count();
        info!(
            target: "dga",
            "Generated {} clues ({} ambiguous) after {} attempts",
            clues.len(),
            ambiguous,
            attempts
        );
        let message = summary_message(ambiguous, target, achieved_target, state.inherent.len());

        DgaResult {
            clues,
            word_bank,
            success: true,
            failure: None,
            message: Some(message),
        }
    }
}

/// How many ambiguous clues were achieved, whether the target had to be
/// relaxed, and whether words without a unique clue pushed the count past
/// the usual limit.
fn summary_message(ambiguous: usize, target: usize, achieved: usize, inherent: usize) -> String {
    let mut message = format!("{} ambiguous clues (target {})", ambiguous, target);
    if achieved < target {
        message.push_str(&format!("; target relaxed to {}", achieved));
    }
    if ambiguous > MAX_AMBIGUOUS_CLUES {
        message.push_str(&format!(
            "; exceeds the limit of {} because {} words have no unique clue",
            MAX_AMBIGUOUS_CLUES, inherent
        ));
    }
    message
}

pub fn generate_dga<R: Rng + ?Sized>(
    entries: &[WordEntry],
    clue_count_limit: usize,
    rng: &mut R,
) -> DgaResult {
    DgaGenerator::new(clue_count_limit).generate(entries, rng)
}
