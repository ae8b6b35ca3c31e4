use std::collections::BTreeSet;

use log::{debug, info, trace};
use rand::Rng;

use super::crossword_grid::WorkingGrid;
use crate::model::{CrosswordResult, GenerationFailure, Orientation, PlacedWord, WordEntry};

pub const MIN_GRID_SIZE: usize = 15;
pub const GRID_MARGIN: usize = 5;

/// Grid side length for a word list: the longest word plus a margin, never
/// below `min_size`.
pub fn grid_size_for(entries: &[WordEntry], min_size: usize) -> usize {
    let longest = entries.iter().map(|e| e.length).max().unwrap_or(0);
    min_size.max(longest + GRID_MARGIN)
}

struct CrosswordGeneratorState {
    grid: WorkingGrid,
    placed: Vec<(WordEntry, usize, usize, Orientation)>,
}

impl CrosswordGeneratorState {
    fn new(grid_size: usize) -> Self {
        Self {
            grid: WorkingGrid::new(grid_size),
            placed: Vec::new(),
        }
    }

    fn place(&mut self, entry: &WordEntry, row: usize, col: usize, orientation: Orientation) {
        self.grid.place(&entry.letters(), row, col, orientation);
        self.placed.push((entry.clone(), row, col, orientation));
    }

    /// First valid crossing for `entry`: walks the placed words in placement
    /// order and each of their letters in reading order, trying every matching
    /// letter of `entry` perpendicular to the placed word.
    fn find_placement(&self, entry: &WordEntry) -> Option<(usize, usize, Orientation)> {
        let letters = entry.letters();
        for (placed, row, col, placed_orientation) in &self.placed {
            let orientation = placed_orientation.perpendicular();
            let (dr, dc) = placed_orientation.step();
            let (nr, nc) = orientation.step();
            for (j, placed_letter) in placed.text.chars().enumerate() {
                let cell_row = *row as isize + dr * j as isize;
                let cell_col = *col as isize + dc * j as isize;
                for (i, &letter) in letters.iter().enumerate() {
                    if letter != placed_letter {
                        continue;
                    }
                    let start_row = cell_row - nr * i as isize;
                    let start_col = cell_col - nc * i as isize;
                    if self.grid.can_place(&letters, start_row, start_col, orientation) {
                        return Some((start_row as usize, start_col as usize, orientation));
                    }
                }
            }
        }
        None
    }

    /// Numbers distinct start cells in row-major order; across and down words
    /// starting on the same cell share a number.
    fn number_words(&self) -> (Vec<PlacedWord>, Vec<((usize, usize), u32)>) {
        let starts: BTreeSet<(usize, usize)> =
            self.placed.iter().map(|(_, row, col, _)| (*row, *col)).collect();
        let numbers: Vec<((usize, usize), u32)> = starts
            .into_iter()
            .zip(1..)
            .collect();

        let mut placed_words: Vec<PlacedWord> = self
            .placed
            .iter()
            .map(|(entry, row, col, orientation)| {
                let clue_number = numbers
                    .iter()
                    .find(|(cell, _)| *cell == (*row, *col))
                    .map(|(_, n)| *n)
                    .unwrap_or_default();
                PlacedWord {
                    word: entry.text.clone(),
                    clue: entry.clue.clone(),
                    row: *row,
                    col: *col,
                    orientation: *orientation,
                    clue_number,
                }
            })
            .collect();
        placed_words.sort_by_key(|w| (w.clue_number, w.orientation));
        (placed_words, numbers)
    }
}

/// Lays out `entries` on a square grid of side `grid_size`.
///
/// One word, chosen at random, is anchored horizontally in the middle. The
/// rest are tried longest first and each goes to the first valid crossing
/// found. Words with no valid crossing end up in `unused_words`; only an
/// anchor longer than the grid fails the whole call.
pub fn generate_crossword<R: Rng + ?Sized>(
    entries: &[WordEntry],
    grid_size: usize,
    rng: &mut R,
) -> CrosswordResult {
    if entries.is_empty() {
        debug!(target: "crossword", "No words supplied; returning an empty grid");
        return CrosswordResult::failed(
            grid_size,
            Vec::new(),
            GenerationFailure::InsufficientInput {
                required: 1,
                supplied: 0,
            },
        );
    }

    debug!(
        target: "crossword",
        "{} unique words on a {}x{} grid",
        entries.len(),
        grid_size,
        grid_size
    );

    let anchor_index = rng.random_range(0..entries.len());
    let anchor = &entries[anchor_index];
    if anchor.length > grid_size {
        info!(
            target: "crossword",
            "Anchor {} is longer than the {}x{} grid",
            anchor.text,
            grid_size,
            grid_size
        );
        return CrosswordResult::failed(
            grid_size,
            entries.iter().map(|e| e.text.clone()).collect(),
            GenerationFailure::UnplaceableAnchor {
                word: anchor.text.clone(),
                grid_size,
            },
        );
    }

    let mut remaining: Vec<&WordEntry> = entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor_index)
        .map(|(_, e)| e)
        .collect();
    remaining.sort_by(|a, b| b.length.cmp(&a.length));

    let mut state = CrosswordGeneratorState::new(grid_size);
    let anchor_row = grid_size / 2;
    let anchor_col = (grid_size - anchor.length) / 2;
    state.place(anchor, anchor_row, anchor_col, Orientation::Across);
    trace!(target: "crossword", "Anchored {} at ({}, {})", anchor.text, anchor_row, anchor_col);

    let mut unused_words = Vec::new();
    for entry in remaining {
        match state.find_placement(entry) {
            Some((row, col, orientation)) => {
                trace!(
                    target: "crossword",
                    "Placed {} {:?} at ({}, {})",
                    entry.text,
                    orientation,
                    row,
                    col
                );
                state.place(entry, row, col, orientation);
            }
            None => {
                trace!(target: "crossword", "No crossing found for {}", entry.text);
                unused_words.push(entry.text.clone());
            }
        }
    }

    let (placed_words, numbers) = state.number_words();
    let grid = state.grid.to_grid(&numbers);
    info!(
        target: "crossword",
        "Placed {} of {} words on a {}x{} grid",
        placed_words.len(),
        entries.len(),
        grid_size,
        grid_size
    );
    trace!(target: "crossword", "Grid: {:?}", state.grid);

    CrosswordResult {
        grid,
        placed_words,
        unused_words,
        grid_size,
        failure: None,
    }
}
