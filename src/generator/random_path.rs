/*
random_path.rs

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

//! Generate a random path that visits every cell of the grid.
//!
//! The search is a randomized backtracking walk. Each try either adds one cell to the path or
//! removes the last one:
//!
//! * A neighbor of the last cell is eligible when it is free, when going there does not cross a
//!   path segment, and when the remaining free cells still form a single group afterwards.
//! * When no neighbor is eligible, the last cell is removed, and the walk remembers that this
//!   cell is a dead end after that exact path prefix.
//! * Every `2 * cells` tries, the walk starts over from an empty path and forgets all the dead
//!   ends. After `10 * cells` tries, the walk gives up.

use log::{Level, debug, log_enabled};
use std::collections::{HashSet, VecDeque};
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use super::grid::{self, Coordinates, Direction, Grid};
use super::grid_configuration::{GridConfiguration, Hint};
use super::path::{self, Path, Step};
use super::seeded_stream::{SeededStream, random_index_inclusive};
use super::words::Word;

/// The walk restarts from scratch every `RESTART_FACTOR * cells` tries.
const RESTART_FACTOR: usize = 2;

/// The walk gives up after `MAX_TRIES_FACTOR * cells` tries.
const MAX_TRIES_FACTOR: usize = 10;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No path found before the maximum number of tries.
    GenerationExhausted { tries: usize },

    /// No path found before the time limit set in [`PathOptions::time_limit`].
    DurationExceeded,
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::GenerationExhausted { tries } => {
                write!(f, "no path found after {tries} tries")
            }
            RandomPathError::DurationExceeded => write!(f, "no path found before the time limit"),
        }
    }
}

impl Error for RandomPathError {}

/// Path generation options.
#[derive(Debug, Copy, Clone, Default)]
pub struct PathOptions {
    /// Max duration for trying to find a path. No limit by default.
    ///
    /// The limit is checked before each try, so it does not change the path that is found when
    /// it is not reached.
    pub time_limit: Option<Duration>,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of cells in a row.
    pub width: usize,

    /// Number of cells in the grid.
    pub num_cells: usize,

    /// Number of tries it took to generate the last random path.
    pub iteration: usize,

    /// Number of restarts during the last generation.
    pub restarts: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Grid topology.
    grid: Grid,

    /// Generation options.
    options: PathOptions,

    /// Time when the path generation started. Used to compute the [`RandomPath::duration`].
    start: Instant,
}

impl RandomPath {
    /// Create the object.
    ///
    /// # Panics
    ///
    /// The method panics if `width` is 0.
    pub fn new(width: usize) -> Self {
        Self::with_options(width, PathOptions::default())
    }

    /// Create the object with the given options.
    ///
    /// # Panics
    ///
    /// The method panics if `width` is 0.
    pub fn with_options(width: usize, options: PathOptions) -> Self {
        assert!(width > 0, "the grid width must be at least 1");
        Self {
            width,
            num_cells: width * width,
            iteration: 0,
            restarts: 0,
            duration: 0.0,
            grid: Grid::new(width),
            options,
            start: Instant::now(),
        }
    }

    /// Generate a random path for the given words, and return the grid and the hints.
    ///
    /// There is one hint per word, in the same order as `words`.
    ///
    /// # Errors
    ///
    /// See [`RandomPath::walk`].
    ///
    /// # Panics
    ///
    /// The method panics if the words do not have exactly one character per cell.
    pub fn generate(
        &mut self,
        stream: &mut SeededStream,
        words: &[Word],
    ) -> Result<(GridConfiguration, Vec<Hint>), RandomPathError> {
        let characters: Vec<char> = words.iter().flat_map(|w| w.chars()).collect();
        let configuration: GridConfiguration = self.walk(stream, &characters)?;

        let mut hints: Vec<Hint> = Vec::with_capacity(words.len());
        let mut boundary: usize = 0;
        for (word, w) in words.iter().enumerate() {
            hints.push(Hint {
                word,
                index: configuration.path()[boundary],
            });
            boundary += w.len();
        }
        debug!("Hints = {hints:?}");
        Ok((configuration, hints))
    }

    /// Generate a random path and assign the characters to the cells in path order.
    ///
    /// # Errors
    ///
    /// The method returns [`RandomPathError::GenerationExhausted`] if the walk reaches the
    /// maximum number of tries, and [`RandomPathError::DurationExceeded`] if it reaches the time
    /// limit. In both cases, retrying with the same stream state gives the same result.
    ///
    /// # Panics
    ///
    /// The method panics if there is not exactly one character per cell.
    pub fn walk(
        &mut self,
        stream: &mut SeededStream,
        characters: &[char],
    ) -> Result<GridConfiguration, RandomPathError> {
        assert_eq!(
            characters.len(),
            self.num_cells,
            "the number of characters must be the number of cells"
        );

        self.iteration = 0;
        self.restarts = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let mut walk: Walk = Walk::new(self.grid, characters);
        let res: Result<(), RandomPathError> = loop {
            if walk.path.len() == self.num_cells {
                break Ok(());
            }
            if let Some(limit) = self.options.time_limit
                && self.start.elapsed() >= limit
            {
                break Err(RandomPathError::DurationExceeded);
            }
            if let Err(e) = walk.step(stream) {
                break Err(e);
            }
        };

        self.iteration = walk.tries;
        self.restarts = walk.restarts;
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Restarts = {}  Duration = {}",
            self.iteration, self.restarts, self.duration
        );
        res?;

        let configuration: GridConfiguration = GridConfiguration::from_path(self.width, &walk.path);
        if log_enabled!(Level::Debug) {
            debug!("Path = {:?}", configuration.path());
            for line in configuration.render().lines() {
                debug!("    {line}");
            }
        }
        Ok(configuration)
    }
}

/// Generate a path for the words in a `width * width` grid.
///
/// # Errors
///
/// See [`RandomPath::walk`].
pub fn generate_path(
    stream: &mut SeededStream,
    words: &[Word],
    width: usize,
) -> Result<(GridConfiguration, Vec<Hint>), RandomPathError> {
    RandomPath::new(width).generate(stream, words)
}

/// State of one search. Dropped when the search ends.
struct Walk<'a> {
    grid: Grid,

    /// Characters to place, in path order.
    characters: &'a [char],

    /// Current path.
    path: Path,

    /// Free cells.
    free: Vec<bool>,

    /// `(prefix key, cell)` pairs that are known to lead to dead ends.
    invalid_steps: HashSet<(u64, usize)>,

    tries: usize,
    restarts: usize,
    restart_threshold: usize,
    max_tries: usize,
}

impl<'a> Walk<'a> {
    fn new(grid: Grid, characters: &'a [char]) -> Self {
        let num_cells: usize = grid.size();
        Self {
            grid,
            characters,
            path: Path::new(num_cells),
            free: vec![true; num_cells],
            invalid_steps: HashSet::new(),
            tries: 0,
            restarts: 0,
            restart_threshold: RESTART_FACTOR * num_cells,
            max_tries: MAX_TRIES_FACTOR * num_cells,
        }
    }

    /// Extend the path by one cell, or go back by one cell.
    fn step(&mut self, stream: &mut SeededStream) -> Result<(), RandomPathError> {
        self.tries += 1;
        if self.tries > self.max_tries {
            debug!("Giving up after {} tries", self.max_tries);
            return Err(RandomPathError::GenerationExhausted {
                tries: self.max_tries,
            });
        }
        if self.tries % self.restart_threshold == 0 {
            self.restart();
        }

        let Some(tail) = self.path.last().copied() else {
            return self.place_first(stream);
        };

        // Number of free cells left after the next one
        let min_group_size: usize = (self.grid.size() - self.path.len()) - 1;
        let from: Coordinates = self.grid.coordinates_of(tail.index);

        let mut eligible: Vec<usize> = Vec::with_capacity(8);
        for neighbor in self.grid.neighbors(&from) {
            let Some(index) = neighbor.index() else {
                continue;
            };
            if !self.free[index] || self.invalid_steps.contains(&(tail.key, index)) {
                continue;
            }
            if self.crosses_path(&from, neighbor.direction, None) {
                debug!(
                    "    {} -> {index} ({}) crosses the path",
                    tail.index, neighbor.direction
                );
                continue;
            }
            if !self.keeps_free_cells_together(tail.index, index, min_group_size) {
                debug!("    {} -> {index} splits the free cells", tail.index);
                continue;
            }
            eligible.push(index);
        }

        if eligible.is_empty() {
            self.backtrack(&tail);
            return Ok(());
        }

        let next: usize = eligible[random_index_inclusive(stream, eligible.len() - 1, 0)];
        self.place(next);
        Ok(())
    }

    /// Select a random starting cell.
    fn place_first(&mut self, stream: &mut SeededStream) -> Result<(), RandomPathError> {
        let candidates: Vec<usize> = (0..self.grid.size())
            .filter(|i| self.free[*i] && !self.invalid_steps.contains(&(path::ROOT_KEY, *i)))
            .collect();
        if candidates.is_empty() {
            debug!("Every starting cell is a dead end");
            return Err(RandomPathError::GenerationExhausted {
                tries: self.max_tries,
            });
        }

        let first: usize = candidates[random_index_inclusive(stream, candidates.len() - 1, 0)];
        debug!("Starting cell = {first}");
        self.place(first);
        Ok(())
    }

    fn place(&mut self, index: usize) {
        let character: char = self.characters[self.path.len()];
        self.path.push(index, character);
        self.free[index] = false;
    }

    /// Remove the last cell and mark it as a dead end after the remaining prefix.
    fn backtrack(&mut self, tail: &Step) {
        debug!("    Back: no eligible cell after {}", tail.index);
        let parent_key: u64 = self.path.parent_key(tail);
        self.path.pop();
        self.free[tail.index] = true;
        self.invalid_steps.insert((parent_key, tail.index));
    }

    /// Empty the path and forget all the dead ends.
    fn restart(&mut self) {
        debug!(
            "Restarting after {} tries ({} dead ends known)",
            self.tries,
            self.invalid_steps.len()
        );
        self.path.clear();
        self.free.fill(true);
        self.invalid_steps.clear();
        self.restarts += 1;
    }

    /// Whether the cell is in the path, or is the pending cell.
    fn is_occupied(&self, index: usize, pending: Option<(usize, usize)>) -> bool {
        self.path.contains(index) || pending.is_some_and(|(_, next)| next == index)
    }

    /// Whether a path segment joins the two cells. The pending segment counts as a path segment.
    fn is_linked(&self, index1: usize, index2: usize, pending: Option<(usize, usize)>) -> bool {
        pending.is_some_and(|(a, b)| (a, b) == (index1, index2) || (b, a) == (index1, index2))
            || self.path.linked(index1, index2)
    }

    /// Whether going from the cell in the given direction crosses a path segment.
    ///
    /// `pending` is the segment being tested, not yet in the path.
    fn crosses_path(
        &self,
        from: &Coordinates,
        direction: Direction,
        pending: Option<(usize, usize)>,
    ) -> bool {
        let Some((d1, d2)) = direction.crossing() else {
            return false;
        };
        let (Some(corner1), Some(corner2)) = (
            self.grid.step(from, d1).index,
            self.grid.step(from, d2).index,
        ) else {
            return false;
        };

        let pair: [Direction; 2] = [d1, d2];
        let occupied: &[Direction] = match (
            self.is_occupied(corner1, pending),
            self.is_occupied(corner2, pending),
        ) {
            (true, true) => &pair,
            (true, false) => &pair[..1],
            (false, true) => &pair[1..],
            (false, false) => &[],
        };
        grid::is_crossing(direction, occupied) && self.is_linked(corner1, corner2, pending)
    }

    /// Whether the free cells still form a single group of at least `min_group_size` cells after
    /// going from `tail` to `next`.
    fn keeps_free_cells_together(
        &mut self,
        tail: usize,
        next: usize,
        min_group_size: usize,
    ) -> bool {
        self.free[next] = false;
        let groups: Vec<usize> = self.free_groups(Some((tail, next)));
        self.free[next] = true;

        match groups.as_slice() {
            [] => true,
            [size] => *size >= min_group_size,
            _ => false,
        }
    }

    /// Return the sizes of the groups of connected free cells. Stop counting after two groups.
    fn free_groups(&self, pending: Option<(usize, usize)>) -> Vec<usize> {
        let mut groups: Vec<usize> = Vec::new();
        let mut seen: Vec<bool> = vec![false; self.grid.size()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for start in 0..self.grid.size() {
            if !self.free[start] || seen[start] {
                continue;
            }
            if groups.len() == 2 {
                break;
            }

            let mut size: usize = 0;
            seen[start] = true;
            queue.push_back(start);
            while let Some(index) = queue.pop_front() {
                size += 1;
                let from: Coordinates = self.grid.coordinates_of(index);
                for neighbor in self.grid.neighbors(&from) {
                    let Some(i) = neighbor.index() else {
                        continue;
                    };
                    if !self.free[i]
                        || seen[i]
                        || self.crosses_path(&from, neighbor.direction, pending)
                    {
                        continue;
                    }
                    seen[i] = true;
                    queue.push_back(i);
                }
            }
            groups.push(size);
        }
        groups
    }
}
