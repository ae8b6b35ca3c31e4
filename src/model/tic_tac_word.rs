use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Difficulty, GenerationFailure};
use crate::helpers::Capitalize;

pub const BOARD_CELLS: usize = 9;
pub const BOARD_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Length,
    Start,
    End,
    StartEnd,
    LengthStart,
    LengthEnd,
    Pos,
    PosStart,
    PosEnd,
    PosLength,
}

impl CandidateKind {
    pub fn all() -> [CandidateKind; 10] {
        [
            CandidateKind::Length,
            CandidateKind::Start,
            CandidateKind::End,
            CandidateKind::StartEnd,
            CandidateKind::LengthStart,
            CandidateKind::LengthEnd,
            CandidateKind::Pos,
            CandidateKind::PosStart,
            CandidateKind::PosEnd,
            CandidateKind::PosLength,
        ]
    }

    pub fn needs_pos(&self) -> bool {
        matches!(
            self,
            CandidateKind::Pos
                | CandidateKind::PosStart
                | CandidateKind::PosEnd
                | CandidateKind::PosLength
        )
    }

    pub fn is_compound(&self) -> bool {
        !matches!(
            self,
            CandidateKind::Length | CandidateKind::Start | CandidateKind::End | CandidateKind::Pos
        )
    }

    pub fn token(&self) -> &'static str {
        match self {
            CandidateKind::Length => "length",
            CandidateKind::Start => "start",
            CandidateKind::End => "end",
            CandidateKind::StartEnd => "start+end",
            CandidateKind::LengthStart => "length+start",
            CandidateKind::LengthEnd => "length+end",
            CandidateKind::Pos => "pos",
            CandidateKind::PosStart => "pos+start",
            CandidateKind::PosEnd => "pos+end",
            CandidateKind::PosLength => "pos+length",
        }
    }
}

/// Qualitative ambiguity of a candidate: how many words satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    pub fn from_ambiguity(ambiguity: usize) -> Band {
        match ambiguity {
            0 | 1 => Band::Low,
            2 | 3 => Band::Medium,
            _ => Band::High,
        }
    }
}

/// The attribute tuple a candidate constrains. Unused slots stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct CandidateAttributes {
    pub length: Option<usize>,
    pub start: Option<char>,
    pub end: Option<char>,
    pub pos: Option<String>,
}

impl CandidateAttributes {
    pub fn key_fragment(&self) -> String {
        let mut parts = Vec::new();
        if let Some(pos) = &self.pos {
            parts.push(pos.clone());
        }
        if let Some(length) = self.length {
            parts.push(length.to_string());
        }
        if let Some(start) = self.start {
            parts.push(start.to_string());
        }
        if let Some(end) = self.end {
            parts.push(end.to_string());
        }
        parts.join(",")
    }

    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(pos) = &self.pos {
            parts.push(pos_name(pos).to_string());
        }
        if let Some(length) = self.length {
            parts.push(format!("{} letters", length));
        }
        if let Some(start) = self.start {
            parts.push(format!("starts with {}", start));
        }
        if let Some(end) = self.end {
            parts.push(format!("ends with {}", end));
        }
        parts.join(" · ").capitalize()
    }
}

fn pos_name(tag: &str) -> &str {
    match tag {
        "n" => "noun",
        "v" | "vb" => "verb",
        "adj" => "adjective",
        "adv" => "adverb",
        "prep" => "preposition",
        "pron" => "pronoun",
        "conj" => "conjunction",
        "int" | "intj" => "interjection",
        "art" => "article",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConstraintCandidate {
    pub key: String,
    pub label: String,
    pub attributes: CandidateAttributes,
    pub kind: CandidateKind,
    /// Sorted, distinct words satisfying the candidate.
    pub matching_words: Vec<String>,
    pub ambiguity: usize,
    pub band: Band,
}

impl ConstraintCandidate {
    pub fn new(
        kind: CandidateKind,
        attributes: CandidateAttributes,
        matching_words: Vec<String>,
    ) -> Self {
        let ambiguity = matching_words.len();
        Self {
            key: format!("{}:{}", kind.token(), attributes.key_fragment()),
            label: attributes.label(),
            attributes,
            kind,
            matching_words,
            ambiguity,
            band: Band::from_ambiguity(ambiguity),
        }
    }
}

/// A candidate placed on a board together with its assigned solution word,
/// which is always listed first in `matching_words`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardCell {
    pub key: String,
    pub label: String,
    pub attributes: CandidateAttributes,
    pub kind: CandidateKind,
    pub matching_words: Vec<String>,
    pub ambiguity: usize,
    pub band: Band,
    pub solution: String,
}

impl BoardCell {
    pub fn new(candidate: &ConstraintCandidate, solution: &str) -> Self {
        let mut matching_words = vec![solution.to_string()];
        matching_words.extend(
            candidate
                .matching_words
                .iter()
                .filter(|w| w.as_str() != solution)
                .cloned(),
        );
        Self {
            key: candidate.key.clone(),
            label: candidate.label.clone(),
            attributes: candidate.attributes.clone(),
            kind: candidate.kind,
            matching_words,
            ambiguity: candidate.ambiguity,
            band: candidate.band,
            solution: solution.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Board {
    pub cells: Vec<BoardCell>,
}

impl Board {
    pub fn solutions(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.solution.as_str()).collect()
    }

    pub fn render(&self, show_solution: bool) -> String {
        let mut output = String::new();
        for row in self.cells.chunks(BOARD_WIDTH) {
            output.push('|');
            for cell in row {
                if show_solution {
                    output.push_str(&format!(" {} = {} |", cell.label, cell.solution));
                } else {
                    output.push_str(&format!(" {} |", cell.label));
                }
            }
            output.push('\n');
        }
        output
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TicTacWordResult {
    pub grids: Vec<Board>,
    pub success: bool,
    pub difficulty: Difficulty,
    pub failure: Option<GenerationFailure>,
    pub message: Option<String>,
}

impl TicTacWordResult {
    pub fn failed(difficulty: Difficulty, failure: GenerationFailure) -> Self {
        Self {
            grids: Vec::new(),
            success: false,
            difficulty,
            message: Some(failure.to_string()),
            failure: Some(failure),
        }
    }
}

impl Display for TicTacWordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.success {
            return writeln!(
                f,
                "No boards: {}",
                self.message.as_deref().unwrap_or("generation failed")
            );
        }
        for (i, board) in self.grids.iter().enumerate() {
            writeln!(f, "Board {} ({})", i + 1, self.difficulty)?;
            write!(f, "{}", board)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_ambiguity(1), Band::Low);
        assert_eq!(Band::from_ambiguity(2), Band::Medium);
        assert_eq!(Band::from_ambiguity(3), Band::Medium);
        assert_eq!(Band::from_ambiguity(4), Band::High);
    }

    #[test]
    fn test_candidate_key_and_label() {
        let attributes = CandidateAttributes {
            length: Some(5),
            start: Some('B'),
            ..Default::default()
        };
        let candidate = ConstraintCandidate::new(
            CandidateKind::LengthStart,
            attributes,
            vec!["BERET".to_string(), "BERRY".to_string()],
        );
        assert_eq!(candidate.key, "length+start:5,B");
        assert_eq!(candidate.label, "5 letters · starts with B");
        assert_eq!(candidate.band, Band::Medium);

        let pos = CandidateAttributes {
            pos: Some("adj".to_string()),
            ..Default::default()
        };
        assert_eq!(pos.label(), "Adjective");
    }

    #[test]
    fn test_board_cell_lists_solution_first() {
        let candidate = ConstraintCandidate::new(
            CandidateKind::Start,
            CandidateAttributes {
                start: Some('B'),
                ..Default::default()
            },
            vec!["BELOW".to_string(), "BERET".to_string(), "BERRY".to_string()],
        );
        let cell = BoardCell::new(&candidate, "BERET");
        assert_eq!(cell.matching_words, vec!["BERET", "BELOW", "BERRY"]);
        assert_eq!(cell.solution, "BERET");
    }
}
