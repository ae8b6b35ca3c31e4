use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::GenerationFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn perpendicular(&self) -> Orientation {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// (row, col) step taken when walking along a word.
    pub fn step(&self) -> (isize, isize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub is_active: bool,
    pub number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<Vec<Cell>>, // [row][col]
}

impl Grid {
    pub fn inactive(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn active_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_active)
            .count()
    }

    /// Text preview. Inactive cells print as `#`; active cells print their
    /// letter, or `_` when the solution is hidden.
    pub fn render(&self, show_solution: bool) -> String {
        let mut output = String::new();
        for row in &self.cells {
            output.push('|');
            for cell in row {
                let symbol = match (cell.is_active, cell.letter) {
                    (false, _) => '#',
                    (true, Some(letter)) if show_solution => letter,
                    (true, _) => '_',
                };
                output.push(symbol);
                output.push('|');
            }
            output.push('\n');
        }
        output
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub clue_number: u32,
}

impl PlacedWord {
    /// Grid coordinates covered by this word, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.orientation.step();
        (0..self.word.chars().count())
            .map(|i| {
                (
                    (self.row as isize + dr * i as isize) as usize,
                    (self.col as isize + dc * i as isize) as usize,
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CrosswordResult {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
    pub unused_words: Vec<String>,
    pub grid_size: usize,
    pub failure: Option<GenerationFailure>,
}

impl CrosswordResult {
    pub fn failed(grid_size: usize, unused_words: Vec<String>, failure: GenerationFailure) -> Self {
        Self {
            grid: Grid::inactive(grid_size),
            placed_words: Vec::new(),
            unused_words,
            grid_size,
            failure: Some(failure),
        }
    }

    pub fn across(&self) -> Vec<&PlacedWord> {
        self.clues_for(Orientation::Across)
    }

    pub fn down(&self) -> Vec<&PlacedWord> {
        self.clues_for(Orientation::Down)
    }

    fn clues_for(&self, orientation: Orientation) -> Vec<&PlacedWord> {
        let mut words: Vec<&PlacedWord> = self
            .placed_words
            .iter()
            .filter(|w| w.orientation == orientation)
            .collect();
        words.sort_by_key(|w| w.clue_number);
        words
    }

    /// Grid preview followed by the numbered clue lists and any leftovers.
    pub fn render(&self, show_solution: bool) -> String {
        let mut output = self.grid.render(show_solution);
        for (heading, words) in [("Across", self.across()), ("Down", self.down())] {
            if words.is_empty() {
                continue;
            }
            output.push_str(&format!("{}:\n", heading));
            for word in words {
                if show_solution {
                    output.push_str(&format!(
                        "  {}. {} ({})\n",
                        word.clue_number, word.clue, word.word
                    ));
                } else {
                    output.push_str(&format!("  {}. {}\n", word.clue_number, word.clue));
                }
            }
        }
        if !self.unused_words.is_empty() {
            output.push_str(&format!("Unused: {}\n", self.unused_words.join(", ")));
        }
        output
    }
}

impl Display for CrosswordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_word_cells() {
        let word = PlacedWord {
            word: "CAT".to_string(),
            clue: String::new(),
            row: 2,
            col: 4,
            orientation: Orientation::Down,
            clue_number: 1,
        };
        assert_eq!(word.cells(), vec![(2, 4), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_render_hides_letters() {
        let mut grid = Grid::inactive(2);
        grid.cells[0][1] = Cell {
            letter: Some('A'),
            is_active: true,
            number: Some(1),
        };
        assert_eq!(grid.render(true), "|#|A|\n|#|#|\n");
        assert_eq!(grid.render(false), "|#|_|\n|#|#|\n");
    }
}
