/*
mod.rs

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

//! Word lists shared across integration tests.

#![allow(dead_code)]

use wordwalk::{Corpus, Word};

/// Animal names, from 3 to 7 letters.
pub const ANIMALS: [&str; 67] = [
    "ant", "bat", "cat", "cow", "dog", "eel", "elk", "emu", "fox", "gnu", "hen", "owl", "pig",
    "rat", "yak", "bear", "crab", "deer", "duck", "frog", "goat", "hare", "ibis", "lion", "lynx",
    "mole", "seal", "swan", "toad", "wolf", "bison", "camel", "crane", "eagle", "heron", "horse",
    "koala", "llama", "moose", "otter", "panda", "shark", "sheep", "skunk", "snake", "stoat",
    "tiger", "whale", "badger", "beaver", "donkey", "ferret", "jaguar", "monkey", "parrot",
    "rabbit", "turtle", "walrus", "buffalo", "cheetah", "dolphin", "giraffe", "hamster",
    "leopard", "panther", "penguin", "raccoon",
];

/// Corpus with the [`ANIMALS`] source.
pub fn animal_corpus() -> Corpus {
    let mut corpus = Corpus::new();
    corpus.add_source("animals", ANIMALS);
    corpus
}

/// Build words from a list.
pub fn words(list: &[&str]) -> Vec<Word> {
    list.iter().filter_map(|w| Word::new(w)).collect()
}

/// Build `per_length` distinct words for each length from 3 to 8.
///
/// The words are spelled in base 26 (`aaa`, `aab`, ...), so they are all different.
pub fn synthetic_corpus(per_length: usize) -> Vec<Word> {
    let mut list = Vec::new();
    for length in 3..=8 {
        for n in 0..per_length {
            let mut text = vec![b'a'; length];
            let mut rest = n;
            for c in text.iter_mut().rev() {
                *c = b'a' + (rest % 26) as u8;
                rest /= 26;
            }
            if let Some(word) = Word::new(&String::from_utf8_lossy(&text)) {
                list.push(word);
            }
        }
    }
    list
}
