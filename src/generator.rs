/*
generator.rs

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

//! Select words and hide them along a random path in the grid.
//!
//! A puzzle is built in two parts, both driven by the same [`seeded_stream::SeededStream`]
//! object. The stream seed comes from the puzzle identifier (see [`seed::puzzle_seed`]), so the
//! same identifier always gives the same puzzle.
//!
//! * A list of words whose lengths add up to the number of cells in the grid.
//!   You get this list with [`words::select_words`], from the words of a [`words::Corpus`]
//!   object.
//!   If the corpus does not have words of the right lengths, then the function returns an error.
//!
//! * A random path that visits every cell once, represented by a
//!   [`grid_configuration::GridConfiguration`] object.
//!   You create this object by creating a [`random_path::RandomPath`] object and by using its
//!   [`random_path::RandomPath::generate`] method.
//!   The characters of the words are assigned to the cells in path order, and the first cell of
//!   each word is returned as a [`grid_configuration::Hint`].
//!   If it takes too many tries to generate the path, then the method returns an error.
//!
//! [`puzzle::Puzzle::generate`] runs both parts.

pub mod grid;
pub mod grid_configuration;
pub mod path;
pub mod puzzle;
pub mod random_path;
pub mod seed;
pub mod seeded_stream;
pub mod words;
