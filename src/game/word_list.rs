use std::fs;
use std::path::Path;

use log::debug;

use crate::model::VocabError;

/// Raw words and their clues, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordList {
    pub words: Vec<String>,
    pub clues: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses one entry per line, either `WORD` or `WORD<TAB>clue`. Blank lines
/// and lines starting with `#` are skipped. Words without a clue get an empty
/// clue so the two lists stay aligned.
pub fn parse_word_list(text: &str) -> WordList {
    let mut list = WordList::default();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let (word, clue) = line.split_once('\t').unwrap_or((line, ""));
        list.words.push(word.trim().to_string());
        list.clues.push(clue.trim().to_string());
    }
    list
}

pub fn read_word_list(path: &Path) -> Result<WordList, VocabError> {
    let text = fs::read_to_string(path)?;
    let list = parse_word_list(&text);
    debug!(target: "word_list", "Read {} entries from {}", list.len(), path.display());
    Ok(list)
}
