/*
puzzle.rs

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

//! Puzzle generation from an identifier.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::grid_configuration::{GridConfiguration, Hint};
use super::random_path::{PathOptions, RandomPath, RandomPathError};
use super::seed::puzzle_seed;
use super::seeded_stream::SeededStream;
use super::words::{SelectionError, Word, select_words};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PuzzleError {
    /// The words cannot fill the grid.
    Selection(SelectionError),

    /// No path found for the words.
    Path(RandomPathError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::Selection(e) => write!(f, "cannot select the words: {e}"),
            PuzzleError::Path(e) => write!(f, "cannot generate the path: {e}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PuzzleError::Selection(e) => Some(e),
            PuzzleError::Path(e) => Some(e),
        }
    }
}

impl From<SelectionError> for PuzzleError {
    fn from(e: SelectionError) -> Self {
        PuzzleError::Selection(e)
    }
}

impl From<RandomPathError> for PuzzleError {
    fn from(e: RandomPathError) -> Self {
        PuzzleError::Path(e)
    }
}

/// Generated puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Puzzle identifier. Empty when the puzzle was generated directly from a seed.
    pub identifier: String,

    /// Number of cells in a row.
    pub width: usize,

    /// Seed of the random stream.
    pub seed: u32,

    /// Hidden words, in path order.
    pub words: Vec<Word>,

    /// Grid and solution.
    pub grid: GridConfiguration,

    /// Starting cell of each word.
    pub hints: Vec<Hint>,
}

impl Puzzle {
    /// Generate the puzzle for the given identifier and grid width.
    ///
    /// The same identifier, width, and corpus always give the same puzzle.
    ///
    /// # Errors
    ///
    /// The method returns an error if the corpus cannot fill the grid, or if no path is found.
    pub fn generate(identifier: &str, width: usize, corpus: &[Word]) -> Result<Self, PuzzleError> {
        Self::generate_with_options(identifier, width, corpus, PathOptions::default())
    }

    /// Generate the puzzle with the given path generation options.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::generate`].
    pub fn generate_with_options(
        identifier: &str,
        width: usize,
        corpus: &[Word],
        options: PathOptions,
    ) -> Result<Self, PuzzleError> {
        let seed: u32 = puzzle_seed(identifier, width);
        debug!("Puzzle {identifier:?}  width = {width}  seed = {seed}");
        let mut random_path: RandomPath = RandomPath::with_options(width, options);
        let mut puzzle: Puzzle = Self::build(seed, corpus, &mut random_path)?;
        puzzle.identifier = identifier.to_string();
        Ok(puzzle)
    }

    /// Generate the puzzle for the given seed.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::generate`].
    pub fn from_seed(seed: u32, width: usize, corpus: &[Word]) -> Result<Self, PuzzleError> {
        Self::build(seed, corpus, &mut RandomPath::new(width))
    }

    /// Select the words and lay them out with the same random stream.
    ///
    /// The caller can read the statistics of the search in `random_path` afterwards.
    pub fn build(
        seed: u32,
        corpus: &[Word],
        random_path: &mut RandomPath,
    ) -> Result<Self, PuzzleError> {
        let mut stream: SeededStream = SeededStream::new(seed);
        let words: Vec<Word> = select_words(&mut stream, corpus, random_path.num_cells)?;
        debug!("Words = {words:?}");
        let (grid, hints) = random_path.generate(&mut stream, &words)?;

        Ok(Self {
            identifier: String::new(),
            width: random_path.width,
            seed,
            words,
            grid,
            hints,
        })
    }

    /// Verify the grid, and that the hints point to the first character of each word.
    ///
    /// # Errors
    ///
    /// The method returns an error message describing the first problem found.
    pub fn verify(&self) -> Result<(), String> {
        if self.grid.width() != self.width {
            return Err(format!(
                "Grid width {} instead of {}",
                self.grid.width(),
                self.width
            ));
        }
        self.grid.verify()?;

        let text: String = self.words.iter().map(|w| w.as_str()).collect();
        if self.grid.path_text() != text {
            return Err("The path does not spell the words".to_string());
        }

        if self.hints.len() != self.words.len() {
            return Err(format!(
                "{} hints for {} words",
                self.hints.len(),
                self.words.len()
            ));
        }
        let mut boundary: usize = 0;
        for (i, (hint, word)) in self.hints.iter().zip(&self.words).enumerate() {
            if hint.word != i || self.grid.path().get(boundary) != Some(&hint.index) {
                return Err(format!("Wrong hint for word {i} ({word})"));
            }
            boundary += word.len();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().filter_map(|w| Word::new(w)).collect()
    }

    #[test]
    fn test_from_seed() {
        let corpus = words(&["cat", "dog", "sun"]);
        let puzzle = Puzzle::from_seed(12345, 3, &corpus).unwrap();

        assert_eq!(puzzle.words, words(&["sun", "cat", "dog"]));
        assert_eq!(puzzle.grid.path_text(), "suncatdog");
        assert_eq!(puzzle.hints.len(), 3);
        assert_eq!(puzzle.verify(), Ok(()));
    }

    #[test]
    fn test_corpus_insufficient() {
        let corpus = words(&["cat"]);
        let err = Puzzle::from_seed(12345, 3, &corpus).unwrap_err();
        assert!(matches!(err, PuzzleError::Selection(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_verify_detects_tampering() {
        let corpus = words(&["cat", "dog", "sun"]);
        let mut puzzle = Puzzle::from_seed(12345, 3, &corpus).unwrap();
        puzzle.hints.swap(0, 1);
        assert!(puzzle.verify().unwrap_err().starts_with("Wrong hint"));

        let mut puzzle = Puzzle::from_seed(12345, 3, &corpus).unwrap();
        puzzle.words.reverse();
        assert_eq!(
            puzzle.verify(),
            Err("The path does not spell the words".to_string())
        );
    }
}
