/*
grid_configuration.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordwalk.

Wordwalk is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordwalk is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordwalk. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generated grid and hints.
//!
//! The [`GridConfiguration`] object gives the character of every cell, and the order in which
//! the path visits the cells (the solution).
//! A [`Hint`] gives the cell where a word starts. Hints are shown to the player from the beginning
//! of the game.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::path::Path;

/// Cell and its character.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub index: usize,
    pub character: char,
}

/// Starting cell of a word.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Hint {
    /// Position of the word in the selected word list.
    pub word: usize,

    /// Grid index of the first character of the word.
    pub index: usize,
}

/// Characters of the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridConfiguration {
    /// Number of cells in a row.
    width: usize,

    /// Cells, sorted by index.
    cells: Vec<Cell>,

    /// Grid indexes in path order.
    path: Vec<usize>,
}

impl GridConfiguration {
    /// Create a [`GridConfiguration`] object from a path.
    pub fn from_path(width: usize, path: &Path) -> Self {
        let mut cells: Vec<Cell> = path
            .steps()
            .iter()
            .map(|s| Cell {
                index: s.index,
                character: s.character,
            })
            .collect();
        cells.sort_unstable_by_key(|c| c.index);

        Self {
            width,
            cells,
            path: path.indexes(),
        }
    }

    /// Number of cells in a row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the cells, sorted by index.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return the grid indexes in path order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Return the character of the given cell.
    pub fn character_at(&self, index: usize) -> Option<char> {
        self.cells
            .binary_search_by_key(&index, |c| c.index)
            .ok()
            .map(|i| self.cells[i].character)
    }

    /// Return the characters in path order.
    pub fn path_text(&self) -> String {
        self.path
            .iter()
            .filter_map(|i| self.character_at(*i))
            .collect()
    }

    /// Return the grid as text, one row per line.
    pub fn render(&self) -> String {
        let mut s: String = String::with_capacity(self.cells.len() * 2);

        for row in self.cells.chunks(self.width.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.character.to_string()).collect();
            s.push_str(&line.join(" "));
            s.push('\n');
        }
        s
    }

    /// Verify that the path covers the grid and does not cross itself.
    ///
    /// # Errors
    ///
    /// The method returns an error message describing the first problem found.
    pub fn verify(&self) -> Result<(), String> {
        let grid: Grid = Grid::new(self.width);
        let size: usize = grid.size();

        if self.path.len() != size {
            return Err(format!(
                "Wrong length: {} instead of {}: {:?}",
                self.path.len(),
                size,
                self.path
            ));
        }
        if self.cells.len() != size || self.cells.iter().enumerate().any(|(i, c)| c.index != i) {
            return Err(format!("The cells do not cover the {size} grid indexes"));
        }

        // Position of each cell in the path
        let mut position: Vec<Option<usize>> = vec![None; size];
        for (p, index) in self.path.iter().enumerate() {
            match position.get_mut(*index) {
                Some(None) => position[*index] = Some(p),
                Some(Some(_)) => return Err(format!("Duplicated cell {index} in path")),
                None => return Err(format!("Cell {index} is outside the grid")),
            }
        }

        for pair in self.path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let direction = match grid.direction_between(from, to) {
                Some(d) => d,
                None => return Err(format!("Cells {from} and {to} are not adjacent")),
            };
            if !direction.is_diagonal() {
                continue;
            }

            // The two cells that the diagonal passes between
            let corner1: usize = grid.row(from) * self.width + grid.column(to);
            let corner2: usize = grid.row(to) * self.width + grid.column(from);
            if let (Some(p1), Some(p2)) = (position[corner1], position[corner2])
                && p1.abs_diff(p2) == 1
            {
                return Err(format!(
                    "Segment {from}-{to} crosses segment {corner1}-{corner2}"
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration(width: usize, order: &[usize], text: &str) -> GridConfiguration {
        let mut path = Path::new(width * width);
        for (index, character) in order.iter().zip(text.chars()) {
            path.push(*index, character);
        }
        GridConfiguration::from_path(width, &path)
    }

    #[test]
    fn test_cells_sorted_by_index() {
        let config = configuration(2, &[3, 2, 0, 1], "abcd");

        assert_eq!(config.path(), &[3, 2, 0, 1]);
        assert_eq!(config.character_at(0), Some('c'));
        assert_eq!(config.character_at(3), Some('a'));
        assert_eq!(config.character_at(4), None);
        assert_eq!(config.path_text(), "abcd");
        assert_eq!(config.render(), "c d\nb a\n");
        assert_eq!(config.verify(), Ok(()));
    }

    #[test]
    fn test_verify_rejects_crossing() {
        // In a 2x2 grid, 0 -> 3 and 1 -> 2 cross
        let config = configuration(2, &[0, 3, 1, 2], "abcd");
        let err = config.verify().unwrap_err();
        assert!(err.contains("crosses"), "{err}");

        let config = configuration(2, &[0, 1, 2, 3], "abcd");
        assert_eq!(config.verify(), Ok(()));
    }

    #[test]
    fn test_verify_rejects_gaps() {
        let config = configuration(3, &[0, 1, 2, 5, 4, 3, 6, 7], "abcdefgh");
        assert!(config.verify().unwrap_err().starts_with("Wrong length"));

        let config = configuration(3, &[0, 1, 2, 5, 4, 3, 6, 8, 7], "abcdefghi");
        assert!(config.verify().unwrap_err().contains("not adjacent"));
    }
}
