/*
words.rs

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

//! Word corpus and word selection.
//!
//! The [`Corpus`] object stores the words that can be hidden in a puzzle.
//! The words come from named sources (word lists), and each source owns a contiguous range of
//! the shared word list.
//!
//! [`select_words`] picks words from a pool until their lengths add up exactly to the number of
//! cells in the grid.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::ops::Range;

use super::seeded_stream::{SeededStream, random_index_inclusive};

/// Minimum number of characters in a word.
pub const MIN_WORD_LENGTH: usize = 3;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SelectionError {
    /// No word in the pool fits the remaining number of characters.
    CorpusInsufficient {
        /// Number of characters already selected.
        accumulated: usize,

        /// Number of characters left to fill.
        residual: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::CorpusInsufficient {
                accumulated,
                residual,
            } => write!(
                f,
                "the corpus has no word to fill the remaining {residual} characters \
                 (after {accumulated} characters)"
            ),
        }
    }
}

impl Error for SelectionError {}

/// Word of at least [`MIN_WORD_LENGTH`] characters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a [`Word`] object.
    ///
    /// Return [`None`] if the word is too short.
    pub fn new(text: &str) -> Option<Self> {
        if text.chars().count() < MIN_WORD_LENGTH {
            None
        } else {
            Some(Self(text.to_string()))
        }
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the word text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return an iterator over the characters of the word.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl TryFrom<String> for Word {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Word::new(&text)
            .ok_or_else(|| format!("\"{text}\" has fewer than {MIN_WORD_LENGTH} characters"))
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named word list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    /// Name of the source.
    pub name: String,

    /// Range of the source words in [`Corpus::words`].
    pub range: Range<usize>,
}

/// Deduplicated word corpus.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    /// All the words, grouped by source.
    words: Vec<Word>,

    /// Word membership, to skip duplicates between sources.
    known: HashSet<String>,

    /// Sources, in the order they were added.
    sources: Vec<Source>,
}

impl Corpus {
    /// Create an empty [`Corpus`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source.
    ///
    /// The words are trimmed and lower-cased.
    /// Words that are too short, that contain non-alphabetic characters, or that are already in
    /// the corpus are skipped.
    ///
    /// Return the number of words added.
    pub fn add_source<I, S>(&mut self, name: &str, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start: usize = self.words.len();

        for w in words {
            let text: String = w.as_ref().trim().to_lowercase();
            if !text.chars().all(char::is_alphabetic) || self.known.contains(&text) {
                continue;
            }
            if let Some(word) = Word::new(&text) {
                self.known.insert(text);
                self.words.push(word);
            }
        }

        let end: usize = self.words.len();
        debug!("Source {name}: {} words added", end - start);
        self.sources.push(Source {
            name: name.to_string(),
            range: start..end,
        });
        end - start
    }

    /// Return all the words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Return the words of the given source, or [`None`] if the source does not exist.
    pub fn source(&self, name: &str) -> Option<&[Word]> {
        self.sources
            .iter()
            .find(|s| s.name == name)
            .map(|s| &self.words[s.range.clone()])
    }

    /// Return the sources.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Whether the word is in the corpus.
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(&word.to_lowercase())
    }

    /// Number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Select words whose lengths add up exactly to `target_length`.
///
/// While there is room for at least one more word after the current one, the current word is
/// drawn among the words that leave that room. Otherwise, the word must fill the remaining
/// characters exactly. A word is never selected twice.
///
/// The selected words are shuffled before being returned, so that the last (often shortest) word
/// does not always end the path.
///
/// # Errors
///
/// The function returns [`SelectionError::CorpusInsufficient`] if, at some point, no word fits
/// the remaining number of characters.
pub fn select_words(
    stream: &mut SeededStream,
    corpus: &[Word],
    target_length: usize,
) -> Result<Vec<Word>, SelectionError> {
    let mut remaining_pool: Vec<&Word> = corpus.iter().collect();
    let mut selection: Vec<Word> = Vec::new();
    let mut accumulated: usize = 0;

    while accumulated < target_length {
        let residual: usize = target_length - accumulated;

        // Positions, in the remaining pool, of the words that fit
        let candidates: Vec<usize> = if residual >= 2 * MIN_WORD_LENGTH {
            remaining_pool
                .iter()
                .enumerate()
                .filter(|(_, w)| w.len() <= residual - MIN_WORD_LENGTH)
                .map(|(i, _)| i)
                .collect()
        } else {
            // Last word
            remaining_pool
                .iter()
                .enumerate()
                .filter(|(_, w)| w.len() == residual)
                .map(|(i, _)| i)
                .collect()
        };

        if candidates.is_empty() {
            debug!("No word for the remaining {residual} characters");
            return Err(SelectionError::CorpusInsufficient {
                accumulated,
                residual,
            });
        }

        let pick: usize = candidates[random_index_inclusive(stream, candidates.len() - 1, 0)];
        let word: &Word = remaining_pool.remove(pick);
        debug!("Selecting {word} ({residual} characters left)");
        accumulated += word.len();
        selection.push(word.clone());
    }

    // Fisher-Yates
    for i in (1..selection.len()).rev() {
        let j: usize = random_index_inclusive(stream, i, 0);
        selection.swap(i, j);
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().filter_map(|w| Word::new(w)).collect()
    }

    #[test]
    fn test_word_min_length() {
        assert!(Word::new("at").is_none());
        assert_eq!(Word::new("cat").map(|w| w.len()), Some(3));
        assert_eq!(Word::new("été").map(|w| w.len()), Some(3));
    }

    #[test]
    fn test_word_json() {
        let word: Word = serde_json::from_str("\"owl\"").unwrap();
        assert_eq!(word.as_str(), "owl");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"owl\"");

        let err = serde_json::from_str::<Word>("\"ox\"").unwrap_err();
        assert!(err.to_string().contains("fewer than 3 characters"));
    }

    #[test]
    fn test_only_exact_combination() {
        let pool = words(&["cat", "dog", "sun"]);
        let mut stream = SeededStream::new(12345);
        let selection = select_words(&mut stream, &pool, 9).unwrap();

        assert_eq!(selection, words(&["sun", "cat", "dog"]));
    }

    #[test]
    fn test_any_seed_gives_permutation() {
        let pool = words(&["cat", "dog", "sun"]);
        for seed in 0..50 {
            let mut stream = SeededStream::new(seed);
            let mut selection: Vec<String> = select_words(&mut stream, &pool, 9)
                .unwrap()
                .iter()
                .map(|w| w.to_string())
                .collect();
            selection.sort();
            assert_eq!(selection, vec!["cat", "dog", "sun"]);
        }
    }

    #[test]
    fn test_corpus_insufficient() {
        let pool = words(&["cat"]);
        let mut stream = SeededStream::new(12345);
        assert_eq!(
            select_words(&mut stream, &pool, 10),
            Err(SelectionError::CorpusInsufficient {
                accumulated: 3,
                residual: 7
            })
        );
    }

    #[test]
    fn test_no_exact_last_word() {
        // 4 characters left, but no 4-letter word
        let pool = words(&["tree", "owl"]);
        let mut stream = SeededStream::new(1);
        let err = select_words(&mut stream, &pool, 5).unwrap_err();
        assert_eq!(
            err,
            SelectionError::CorpusInsufficient {
                accumulated: 0,
                residual: 5
            }
        );
        assert!(err.to_string().contains("remaining 5 characters"));
    }

    #[test]
    fn test_single_word_fills_small_target() {
        let pool = words(&["owl", "tree", "river"]);
        let mut stream = SeededStream::new(3);
        assert_eq!(select_words(&mut stream, &pool, 4).unwrap(), words(&["tree"]));
    }

    #[test]
    fn test_corpus_sources() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.add_source("animals", ["Cat", " dog ", "ox", "cat", "gnu"]), 3);
        assert_eq!(corpus.add_source("sky", ["sun", "moon", "dog", "star2"]), 2);

        assert_eq!(corpus.len(), 5);
        assert!(corpus.contains("DOG"));
        assert!(!corpus.contains("ox"));
        assert!(!corpus.contains("star2"));

        let animals: Vec<&str> = corpus
            .source("animals")
            .unwrap()
            .iter()
            .map(|w| w.as_str())
            .collect();
        assert_eq!(animals, vec!["cat", "dog", "gnu"]);

        let sky: Vec<&str> = corpus
            .source("sky")
            .unwrap()
            .iter()
            .map(|w| w.as_str())
            .collect();
        assert_eq!(sky, vec!["sun", "moon"]);
        assert_eq!(corpus.sources()[1].range, 3..5);
        assert!(corpus.source("plants").is_none());
    }
}
