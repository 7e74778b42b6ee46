/*
puzzles.rs

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

//! Save generated puzzles to a file, and load them back.
//!
//! The saved object is a serialization of a list of [`Puzzle`] objects in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use wordwalk::Puzzle;

/// Object to save and load puzzles.
pub struct SaverPuzzles {
    /// Path to the file.
    save_file: PathBuf,
}

impl SaverPuzzles {
    /// Create a [`SaverPuzzles`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        SaverPuzzles { save_file }
    }

    /// Load the puzzles from the file.
    pub fn get_puzzles(&self) -> Result<Vec<Puzzle>, Box<dyn Error>> {
        let file: File = File::open(&self.save_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let puzzles: Vec<Puzzle> = serde_json::from_reader(reader)?;
        Ok(puzzles)
    }

    /// Save the provided puzzles.
    pub fn save_puzzles(&self, puzzles: &[Puzzle]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, puzzles)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wordwalk::Word;

    #[test]
    fn test_save_and_load() {
        let corpus: Vec<Word> = ["cat", "dog", "sun"]
            .iter()
            .filter_map(|w| Word::new(w))
            .collect();
        let puzzle = Puzzle::from_seed(12345, 3, &corpus).unwrap();

        let mut file = std::env::temp_dir();
        file.push(format!("wordwalk-saver-{}.json", std::process::id()));
        let saver = SaverPuzzles::new(file.clone());
        saver.save_puzzles(std::slice::from_ref(&puzzle)).unwrap();
        let loaded = saver.get_puzzles();
        let _ = fs::remove_file(&file);

        let loaded = loaded.unwrap();
        assert_eq!(loaded, vec![puzzle]);
        assert_eq!(loaded[0].verify(), Ok(()));
    }
}
