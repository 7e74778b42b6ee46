/*
dictionary.rs

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

//! Load word lists from files.
//!
//! A word list file contains one word per line. Empty lines and lines starting with `#` are
//! ignored. Each file becomes a source in the corpus, named after the file (without extension).

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use wordwalk::Corpus;

/// Read the words from the reader and add them to the corpus as the `name` source.
///
/// Return the number of words added.
pub fn load_source<R: BufRead>(
    corpus: &mut Corpus,
    name: &str,
    reader: R,
) -> Result<usize, Box<dyn Error>> {
    let mut words: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line: String = line?;
        let word: &str = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(corpus.add_source(name, words))
}

/// Add the words from the given file to the corpus.
///
/// Return the number of words added.
pub fn load_file(corpus: &mut Corpus, file: &Path) -> Result<usize, Box<dyn Error>> {
    let name: String = match file.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => file.to_string_lossy().into_owned(),
    };
    debug!("Loading word list {file:?} as source {name}");
    let reader: BufReader<File> = BufReader::new(File::open(file)?);
    load_source(corpus, &name, reader)
}
