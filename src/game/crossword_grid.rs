use std::fmt::Display;

use crate::model::{Cell, Grid, Orientation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WorkingCell {
    letter: Option<char>,
    across: bool,
    down: bool,
}

impl WorkingCell {
    fn covered_in(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Across => self.across,
            Orientation::Down => self.down,
        }
    }
}

/// In-progress crossword: a square arena of cells indexed by (row, col).
#[derive(Clone, PartialEq, Eq)]
pub struct WorkingGrid {
    size: usize,
    cells: Vec<WorkingCell>,
}

impl WorkingGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![WorkingCell::default(); size * size],
        }
    }

    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let size = self.size as isize;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(row as usize * self.size + col as usize)
    }

    pub fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.index(row, col).and_then(|i| self.cells[i].letter)
    }

    fn is_empty(&self, row: isize, col: isize) -> bool {
        self.letter_at(row, col).is_none()
    }

    /// Checks whether `letters` may be written starting at (row, col):
    /// - every cell lies inside the grid
    /// - the cells just before and after the run are empty
    /// - filled cells already hold the same letter and belong to a word
    ///   running the other way
    /// - every newly filled cell has empty neighbours on both perpendicular sides
    pub fn can_place(&self, letters: &[char], row: isize, col: isize, orientation: Orientation) -> bool {
        let (dr, dc) = orientation.step();
        let (pr, pc) = orientation.perpendicular().step();
        let len = letters.len() as isize;
        if len == 0 {
            return false;
        }

        for i in 0..len {
            if self.index(row + dr * i, col + dc * i).is_none() {
                return false;
            }
        }
        if !self.is_empty(row - dr, col - dc) || !self.is_empty(row + dr * len, col + dc * len) {
            return false;
        }

        for (i, &letter) in letters.iter().enumerate() {
            let r = row + dr * i as isize;
            let c = col + dc * i as isize;
            let Some(index) = self.index(r, c) else {
                return false;
            };
            let cell = self.cells[index];
            match cell.letter {
                Some(existing) => {
                    if existing != letter || cell.covered_in(orientation) {
                        return false;
                    }
                }
                None => {
                    if !self.is_empty(r + pr, c + pc) || !self.is_empty(r - pr, c - pc) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Writes a word whose placement was accepted by [`can_place`](Self::can_place).
    pub fn place(&mut self, letters: &[char], row: usize, col: usize, orientation: Orientation) {
        let (dr, dc) = orientation.step();
        for (i, &letter) in letters.iter().enumerate() {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            if let Some(index) = self.index(r, c) {
                let cell = &mut self.cells[index];
                cell.letter = Some(letter);
                match orientation {
                    Orientation::Across => cell.across = true,
                    Orientation::Down => cell.down = true,
                }
            }
        }
    }

    /// Converts the arena into the output grid, attaching clue numbers to the
    /// given start cells.
    pub fn to_grid(&self, numbers: &[((usize, usize), u32)]) -> Grid {
        let mut grid = Grid::inactive(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                let working = self.cells[row * self.size + col];
                grid.cells[row][col] = Cell {
                    letter: working.letter,
                    is_active: working.letter.is_some(),
                    number: None,
                };
            }
        }
        for &((row, col), number) in numbers {
            grid.cells[row][col].number = Some(number);
        }
        grid
    }

    #[cfg(test)]
    /// Parses a grid of the form produced by `Display`: one row per line,
    /// `#` for empty cells. Orientation flags are inferred from neighbours.
    pub fn parse(input: &str) -> Self {
        let rows: Vec<Vec<char>> = input
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| l.split('|').filter(|s| !s.is_empty()).map(|s| s.chars().next().unwrap()).collect())
            .collect();
        let size = rows.len();
        let mut grid = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            for (c, &symbol) in row.iter().enumerate() {
                if symbol != '#' {
                    grid.cells[r * size + c].letter = Some(symbol);
                }
            }
        }
        for r in 0..size as isize {
            for c in 0..size as isize {
                if let Some(index) = grid.index(r, c) {
                    if grid.cells[index].letter.is_none() {
                        continue;
                    }
                    let across = !grid.is_empty(r, c - 1) || !grid.is_empty(r, c + 1);
                    let down = !grid.is_empty(r - 1, c) || !grid.is_empty(r + 1, c);
                    grid.cells[index].across = across;
                    grid.cells[index].down = down;
                }
            }
        }
        grid
    }
}

impl Display for WorkingGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            write!(f, "|")?;
            for col in 0..self.size {
                let symbol = self.cells[row * self.size + col].letter.unwrap_or('#');
                write!(f, "{}|", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for WorkingGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{}", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    /// Maximal runs of two or more filled cells as (row, col, length).
    fn runs(grid: &WorkingGrid, orientation: Orientation) -> BTreeSet<(usize, usize, usize)> {
        let size = grid.size() as isize;
        let filled = |a: isize, b: isize| match orientation {
            Orientation::Across => grid.letter_at(a, b).is_some(),
            Orientation::Down => grid.letter_at(b, a).is_some(),
        };
        let mut found = BTreeSet::new();
        for a in 0..size {
            let mut b = 0;
            while b < size {
                let start = b;
                while b < size && filled(a, b) {
                    b += 1;
                }
                if b - start >= 2 {
                    let (row, col) = match orientation {
                        Orientation::Across => (a, start),
                        Orientation::Down => (start, a),
                    };
                    found.insert((row as usize, col as usize, (b - start) as usize));
                }
                b += 1;
            }
        }
        found
    }

    proptest! {
        #[test]
        fn test_accepted_placements_never_touch_silently(
            placements in prop::collection::vec(
                ("[A-D]{2,5}", 0isize..8, 0isize..8, any::<bool>()),
                1..40,
            )
        ) {
            let mut grid = WorkingGrid::new(8);
            let mut placed: BTreeSet<(usize, usize, usize, Orientation)> = BTreeSet::new();
            for (word, row, col, across) in placements {
                let orientation = if across { Orientation::Across } else { Orientation::Down };
                let word = letters(&word);
                if !grid.can_place(&word, row, col, orientation) {
                    continue;
                }
                grid.place(&word, row as usize, col as usize, orientation);
                placed.insert((row as usize, col as usize, word.len(), orientation));

                for orientation in [Orientation::Across, Orientation::Down] {
                    let expected: BTreeSet<(usize, usize, usize)> = placed
                        .iter()
                        .filter(|p| p.3 == orientation)
                        .map(|p| (p.0, p.1, p.2))
                        .collect();
                    prop_assert_eq!(runs(&grid, orientation), expected, "{:?}", grid);
                }
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let input = "
        |#|#|#|#|#|
        |A|P|P|L|E|
        |#|#|#|#|#|
        |#|#|#|#|#|
        |#|#|#|#|#|";
        let grid = WorkingGrid::parse(input);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.letter_at(1, 0), Some('A'));
        assert_eq!(grid.letter_at(1, 4), Some('E'));
        assert_eq!(grid.letter_at(0, 0), None);
    }

    #[test]
    fn test_crossing_on_shared_letter() {
        let grid = WorkingGrid::parse(
            "
            |#|#|#|#|#|
            |A|P|P|L|E|
            |#|#|#|#|#|
            |#|#|#|#|#|
            |#|#|#|#|#|",
        );
        // APE down through the first P
        assert!(grid.can_place(&letters("APE"), 0, 1, Orientation::Down));
        // mismatched letter at the crossing
        assert!(!grid.can_place(&letters("OAK"), 0, 1, Orientation::Down));
    }

    #[test]
    fn test_rejects_run_touching_existing_word() {
        let grid = WorkingGrid::parse(
            "
            |#|#|#|#|#|
            |A|P|P|L|E|
            |#|#|#|#|#|
            |#|#|#|#|#|
            |#|#|#|#|#|",
        );
        // flush against APPLE on the row below
        assert!(!grid.can_place(&letters("PEA"), 2, 0, Orientation::Across));
        // starts directly under E, so the cell before the run is filled
        assert!(!grid.can_place(&letters("EAR"), 2, 4, Orientation::Down));
        // same direction overlap
        assert!(!grid.can_place(&letters("PLE"), 1, 2, Orientation::Across));
        // out of bounds
        assert!(!grid.can_place(&letters("EARTH"), 1, 4, Orientation::Down));
    }

    #[test]
    fn test_place_and_convert() {
        let mut grid = WorkingGrid::new(5);
        grid.place(&letters("CAT"), 1, 1, Orientation::Across);
        grid.place(&letters("ARM"), 1, 2, Orientation::Down);
        let output = grid.to_grid(&[((1, 1), 1), ((1, 2), 2)]);
        assert_eq!(output.active_cell_count(), 5);
        assert_eq!(output.cells[3][2].letter, Some('M'));
        assert_eq!(output.cells[1][1].number, Some(1));
        assert_eq!(output.cells[1][2].number, Some(2));
        assert!(!output.cells[0][0].is_active);
    }
}
