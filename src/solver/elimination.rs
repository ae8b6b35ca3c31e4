use std::collections::BTreeSet;

use log::trace;

use crate::model::{Constraint, ConstraintKind, DgaClue};

/// Anything that reveals one letter of a target word.
pub trait LetterReveal {
    fn kind(&self) -> ConstraintKind;
    fn revealed_char(&self) -> char;
    fn target_word(&self) -> &str;

    fn matches(&self, word: &str) -> bool {
        self.kind().reveal_in(word) == Some(self.revealed_char())
    }
}

impl LetterReveal for Constraint {
    fn kind(&self) -> ConstraintKind {
        self.kind
    }

    fn revealed_char(&self) -> char {
        self.revealed_char
    }

    fn target_word(&self) -> &str {
        &self.target_word
    }
}

impl LetterReveal for DgaClue {
    fn kind(&self) -> ConstraintKind {
        self.kind
    }

    fn revealed_char(&self) -> char {
        self.revealed_char
    }

    fn target_word(&self) -> &str {
        &self.word
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationOutcome {
    /// Words in the order a solver can pin them down.
    pub resolved: Vec<String>,
    /// Words left when no clue singled out a remaining word.
    pub deadlocked: Vec<String>,
}

impl EliminationOutcome {
    pub fn is_solved(&self) -> bool {
        self.deadlocked.is_empty()
    }
}

/// Plays the puzzle the way a solver would: repeatedly find a clue that
/// matches exactly one still-unresolved word, resolve that word and retire
/// its clue. Stops when every word is resolved or no clue narrows to one word.
pub fn simulate_elimination<C: LetterReveal>(clues: &[C], words: &[String]) -> EliminationOutcome {
    let mut unresolved: BTreeSet<&str> = words.iter().map(|w| w.as_str()).collect();
    let mut open_clues: Vec<&C> = clues.iter().collect();
    let mut resolved = Vec::new();

    // each pass resolves one word, so this is bounded by the word count
    while !unresolved.is_empty() {
        let step = open_clues.iter().enumerate().find_map(|(i, clue)| {
            let mut matching = unresolved.iter().filter(|w| clue.matches(w));
            match (matching.next(), matching.next()) {
                (Some(word), None) => Some((i, *word)),
                _ => None,
            }
        });
        let Some((clue_index, word)) = step else {
            break;
        };
        trace!(
            target: "elimination",
            "Clue {:?}{} resolves {}",
            open_clues[clue_index].kind(),
            open_clues[clue_index].revealed_char(),
            word
        );
        unresolved.remove(word);
        resolved.push(word.to_string());
        open_clues.retain(|c| c.target_word() != word);
    }

    let deadlocked: Vec<String> = unresolved.into_iter().map(|w| w.to_string()).collect();
    if !deadlocked.is_empty() {
        trace!(target: "elimination", "Deadlocked on {:?}", deadlocked);
    }
    EliminationOutcome {
        resolved,
        deadlocked,
    }
}
