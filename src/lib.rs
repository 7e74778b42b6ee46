/*
lib.rs

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

//! Word puzzles where the words are hidden along a single path that visits every cell of a
//! square grid.

pub mod generator;

pub use generator::grid_configuration::{Cell, GridConfiguration, Hint};
pub use generator::puzzle::{Puzzle, PuzzleError};
pub use generator::random_path::{PathOptions, RandomPath, RandomPathError, generate_path};
pub use generator::seed::puzzle_seed;
pub use generator::seeded_stream::SeededStream;
pub use generator::words::{Corpus, SelectionError, Word, select_words};
