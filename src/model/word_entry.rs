use serde::{Deserialize, Serialize};

/// A normalized vocabulary word with the attributes every engine keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct WordEntry {
    pub text: String,
    pub length: usize,
    pub start_char: char,
    pub end_char: char,
    pub pos_tag: Option<String>,
    /// The clue exactly as supplied (may be empty).
    pub clue: String,
}

impl WordEntry {
    /// Builds an entry from already-cleaned uppercase text. Returns `None` for
    /// an empty word.
    pub fn new(text: String, clue: String, pos_tag: Option<String>) -> Option<Self> {
        let start_char = text.chars().next()?;
        let end_char = text.chars().last()?;
        let length = text.chars().count();
        Some(Self {
            text,
            length,
            start_char,
            end_char,
            pos_tag,
            clue,
        })
    }

    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// `offset` counts from zero at the first letter.
    pub fn char_from_start(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    /// `offset` counts from zero at the last letter.
    pub fn char_from_end(&self, offset: usize) -> Option<char> {
        self.text.chars().rev().nth(offset)
    }
}

impl std::fmt::Display for WordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.pos_tag {
            Some(tag) => write!(f, "{} ({}.)", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_attributes() {
        let entry = WordEntry::new(
            "APRON".to_string(),
            "n. worn in kitchens".to_string(),
            Some("n".to_string()),
        )
        .unwrap();
        assert_eq!(entry.length, 5);
        assert_eq!(entry.start_char, 'A');
        assert_eq!(entry.end_char, 'N');
        assert_eq!(entry.char_from_start(2), Some('R'));
        assert_eq!(entry.char_from_end(1), Some('O'));
        assert_eq!(entry.char_from_end(5), None);
        assert_eq!(entry.to_string(), "APRON (n.)");
    }

    #[test]
    fn test_empty_word_is_rejected() {
        assert!(WordEntry::new(String::new(), String::new(), None).is_none());
    }
}
