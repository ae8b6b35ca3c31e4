use std::collections::BTreeSet;

use log::debug;

use crate::model::WordEntry;

const MAX_POS_TAG_LEN: usize = 4;

/// Parses a leading part-of-speech abbreviation such as `n.` or `adv.` from a
/// clue. The tag must be 1-4 lowercase letters directly followed by a period.
pub fn parse_pos_tag(clue: &str) -> Option<String> {
    let trimmed = clue.trim_start();
    let tag: String = trimmed
        .chars()
        .take_while(|c| c.is_lowercase())
        .collect();
    let tag_len = tag.chars().count();
    if tag_len == 0 || tag_len > MAX_POS_TAG_LEN {
        return None;
    }
    match trimmed[tag.len()..].chars().next() {
        Some('.') => Some(tag.to_lowercase()),
        _ => None,
    }
}

/// Uppercases and strips every non-letter character.
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

fn entries<S: AsRef<str>, C: AsRef<str>>(words: &[S], clues: &[C]) -> Vec<WordEntry> {
    words
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let clue = clues
                .get(i)
                .map(|c| c.as_ref().trim().to_string())
                .unwrap_or_default();
            let pos_tag = parse_pos_tag(&clue);
            WordEntry::new(clean_word(raw.as_ref()), clue, pos_tag)
        })
        .collect()
}

/// Cleans raw words and pairs them with their clues (the clue list may be
/// shorter). The first occurrence of each word wins; input order is kept.
pub fn normalize_words<S: AsRef<str>, C: AsRef<str>>(words: &[S], clues: &[C]) -> Vec<WordEntry> {
    let mut seen = BTreeSet::new();
    let normalized: Vec<WordEntry> = entries(words, clues)
        .into_iter()
        .filter(|entry| seen.insert(entry.text.clone()))
        .collect();
    debug!(
        target: "normalizer",
        "Normalized {} raw words into {} unique words",
        words.len(),
        normalized.len()
    );
    normalized
}

/// Like [`normalize_words`] but keeps one entry per distinct (word, POS tag)
/// pair, so a word listed as both noun and verb survives twice.
pub fn normalize_word_pos_pairs<S: AsRef<str>, C: AsRef<str>>(
    words: &[S],
    clues: &[C],
) -> Vec<WordEntry> {
    let mut seen = BTreeSet::new();
    let normalized: Vec<WordEntry> = entries(words, clues)
        .into_iter()
        .filter(|entry| seen.insert((entry.text.clone(), entry.pos_tag.clone())))
        .collect();
    debug!(
        target: "normalizer",
        "Normalized {} raw words into {} unique (word, pos) pairs",
        words.len(),
        normalized.len()
    );
    normalized
}
