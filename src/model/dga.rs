use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{GenerationFailure, WordEntry};

/// Which letter a clue reveals: the 1st/2nd/3rd from the start or the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Prefix1,
    Prefix2,
    Prefix3,
    Suffix1,
    Suffix2,
    Suffix3,
}

impl ConstraintKind {
    pub fn all() -> [ConstraintKind; 6] {
        [
            ConstraintKind::Prefix1,
            ConstraintKind::Prefix2,
            ConstraintKind::Prefix3,
            ConstraintKind::Suffix1,
            ConstraintKind::Suffix2,
            ConstraintKind::Suffix3,
        ]
    }

    /// Zero-based distance of the revealed letter from the anchored end.
    pub fn offset(&self) -> usize {
        match self {
            ConstraintKind::Prefix1 | ConstraintKind::Suffix1 => 0,
            ConstraintKind::Prefix2 | ConstraintKind::Suffix2 => 1,
            ConstraintKind::Prefix3 | ConstraintKind::Suffix3 => 2,
        }
    }

    pub fn from_end(&self) -> bool {
        matches!(
            self,
            ConstraintKind::Suffix1 | ConstraintKind::Suffix2 | ConstraintKind::Suffix3
        )
    }

    /// Shortest word this kind may be applied to.
    pub fn min_length(&self) -> usize {
        match self.offset() {
            0 => 1,
            1 => 4,
            _ => 5,
        }
    }

    /// The letter this kind reveals in `entry`, if the word is long enough.
    pub fn reveal(&self, entry: &WordEntry) -> Option<char> {
        if entry.length < self.min_length() {
            return None;
        }
        if self.from_end() {
            entry.char_from_end(self.offset())
        } else {
            entry.char_from_start(self.offset())
        }
    }

    /// Same as [`reveal`](Self::reveal) on a bare word, used when checking
    /// clues against a word bank.
    pub fn reveal_in(&self, word: &str) -> Option<char> {
        let length = word.chars().count();
        if length < self.min_length() {
            return None;
        }
        if self.from_end() {
            word.chars().rev().nth(self.offset())
        } else {
            word.chars().nth(self.offset())
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::Prefix1 => "1st letter",
            ConstraintKind::Prefix2 => "2nd letter",
            ConstraintKind::Prefix3 => "3rd letter",
            ConstraintKind::Suffix1 => "last letter",
            ConstraintKind::Suffix2 => "2nd to last letter",
            ConstraintKind::Suffix3 => "3rd to last letter",
        }
    }
}

/// How a clue is drawn: the revealed letter, the fixed blanks between it and
/// the anchored end of the word, and an open run of unknown length on the
/// other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct VisualSpec {
    pub anchor: char,
    pub fixed_blanks: usize,
    pub from_end: bool,
}

impl VisualSpec {
    pub fn new(kind: ConstraintKind, anchor: char) -> Self {
        Self {
            anchor,
            fixed_blanks: kind.offset(),
            from_end: kind.from_end(),
        }
    }
}

impl Display for VisualSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let blanks = "_".repeat(self.fixed_blanks);
        if self.from_end {
            write!(f, "…{}{}", self.anchor, blanks)
        } else {
            write!(f, "{}{}…", blanks, self.anchor)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub revealed_char: char,
    pub visual_spec: VisualSpec,
    pub target_word: String,
    /// Number of words in the pool sharing this (kind, revealed_char) pair.
    pub overlap_score: usize,
}

impl Constraint {
    pub fn is_ambiguous(&self) -> bool {
        self.overlap_score >= 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DgaClue {
    pub id: usize,
    pub word: String,
    pub kind: ConstraintKind,
    pub revealed_char: char,
    pub visual_spec: VisualSpec,
    /// Fixed when the clue is selected, against the full word bank.
    pub is_ambiguous: bool,
    /// Every word in the bank matching this clue, sorted.
    pub matching_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DgaResult {
    pub clues: Vec<DgaClue>,
    pub word_bank: Vec<String>,
    pub success: bool,
    pub failure: Option<GenerationFailure>,
    pub message: Option<String>,
}

impl DgaResult {
    pub fn failed(failure: GenerationFailure) -> Self {
        Self {
            message: Some(failure.to_string()),
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn ambiguous_count(&self) -> usize {
        self.clues.iter().filter(|c| c.is_ambiguous).count()
    }
}

impl Display for DgaResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.success {
            return writeln!(
                f,
                "No puzzle: {}",
                self.message.as_deref().unwrap_or("generation failed")
            );
        }
        writeln!(f, "Word bank: {}", self.word_bank.join(", "))?;
        for clue in &self.clues {
            writeln!(
                f,
                "{:>2}. {:<8} ({}: {}){}",
                clue.id,
                clue.visual_spec.to_string(),
                clue.kind.label(),
                clue.revealed_char,
                if clue.is_ambiguous { " *" } else { "" }
            )?;
        }
        Ok(())
    }
}
