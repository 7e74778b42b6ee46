/*
path.rs

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

//! Path under construction in the puzzle grid.
//!
//! The path is a stack of [`Step`] objects. Each step stores the position of its parent in the
//! stack, so going back is just a pop.
//!
//! Each step also carries a key that identifies the whole path prefix that leads to it. The path
//! generator uses these keys to remember which next cells are dead ends from a given prefix.

/// Key of the (empty) prefix before the first step.
pub const ROOT_KEY: u64 = 0xcbf29ce484222325;

const KEY_PRIME: u64 = 0x100000001b3;

/// Compute the key of a step from the key of its parent and its cell index.
pub fn child_key(parent_key: u64, index: usize) -> u64 {
    (parent_key ^ index as u64).wrapping_mul(KEY_PRIME)
}

/// Cell placed in the path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    /// Grid index of the cell.
    pub index: usize,

    /// Character assigned to the cell.
    pub character: char,

    /// Position of the parent step in the path, or [`None`] for the first step.
    pub parent: Option<usize>,

    /// Key of the path prefix ending with this step.
    pub key: u64,
}

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Steps, from the first to the last.
    steps: Vec<Step>,

    /// For each grid index, the position of its step in the path.
    /// Instead of looking for the index in the [`Path::steps`] vector, this lookup table gives
    /// the answer directly.
    placed: Vec<Option<usize>>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Path {
    /// Create a [`Path`] object for a grid of `num_cells` cells.
    pub fn new(num_cells: usize) -> Self {
        Self {
            steps: Vec::with_capacity(num_cells),
            placed: vec![None; num_cells],
        }
    }

    /// Remove all the steps from the path.
    pub fn clear(&mut self) {
        for step in &self.steps {
            self.placed[step.index] = None;
        }
        self.steps.clear();
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, index: usize, character: char) {
        let (parent, parent_key) = match self.steps.last() {
            Some(s) => (Some(self.steps.len() - 1), s.key),
            None => (None, ROOT_KEY),
        };
        self.placed[index] = Some(self.steps.len());
        self.steps.push(Step {
            index,
            character,
            parent,
            key: child_key(parent_key, index),
        });
    }

    /// Remove the last step and return it.
    pub fn pop(&mut self) -> Option<Step> {
        let step: Step = self.steps.pop()?;
        self.placed[step.index] = None;
        Some(step)
    }

    /// Get the number of steps in the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, index: usize) -> bool {
        self.placed[index].is_some()
    }

    /// Return the position of the given cell in the path.
    pub fn position(&self, index: usize) -> Option<usize> {
        self.placed[index]
    }

    /// Return the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Return the step at the given position.
    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    /// Return the last step in the path.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Return the parent of the given step.
    pub fn parent(&self, step: &Step) -> Option<&Step> {
        step.parent.and_then(|p| self.steps.get(p))
    }

    /// Return the key of the prefix that precedes the given step.
    pub fn parent_key(&self, step: &Step) -> u64 {
        self.parent(step).map_or(ROOT_KEY, |p| p.key)
    }

    /// Whether the two cells are consecutive in the path (a path segment joins them).
    pub fn linked(&self, index1: usize, index2: usize) -> bool {
        match (self.placed[index1], self.placed[index2]) {
            (Some(p1), Some(p2)) => p1.abs_diff(p2) == 1,
            _ => false,
        }
    }

    /// Return the grid indexes, in path order.
    pub fn indexes(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut path = Path::new(9);
        path.push(4, 'c');
        path.push(0, 'a');
        path.push(1, 't');

        assert_eq!(path.len(), 3);
        assert_eq!(path.indexes(), vec![4, 0, 1]);
        assert_eq!(path.position(0), Some(1));
        assert!(path.contains(1));
        assert!(!path.contains(8));

        let last = path.pop().unwrap();
        assert_eq!((last.index, last.character, last.parent), (1, 't', Some(1)));
        assert!(!path.contains(1));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_parent_chain() {
        let mut path = Path::new(9);
        path.push(4, 'c');
        path.push(0, 'a');

        let first = *path.get(0).unwrap();
        let second = *path.last().unwrap();
        assert_eq!(first.parent, None);
        assert_eq!(path.parent(&second), Some(&first));
        assert_eq!(path.parent_key(&first), ROOT_KEY);
        assert_eq!(path.parent_key(&second), first.key);
        assert_eq!(second.key, child_key(child_key(ROOT_KEY, 4), 0));
    }

    #[test]
    fn test_keys_depend_on_prefix() {
        let mut a = Path::new(9);
        a.push(0, 'x');
        a.push(1, 'x');
        a.push(2, 'x');

        let mut b = Path::new(9);
        b.push(1, 'x');
        b.push(0, 'x');
        b.push(2, 'x');

        // Same last cell, different prefix
        assert_ne!(a.last().unwrap().key, b.last().unwrap().key);
    }

    #[test]
    fn test_linked() {
        let mut path = Path::new(9);
        path.push(0, 'x');
        path.push(4, 'x');
        path.push(2, 'x');

        assert!(path.linked(0, 4));
        assert!(path.linked(2, 4));
        assert!(!path.linked(0, 2));
        assert!(!path.linked(0, 8));
    }

    #[test]
    fn test_clear() {
        let mut path = Path::new(4);
        path.push(3, 'x');
        path.push(2, 'x');
        path.clear();

        assert!(path.is_empty());
        assert!(!path.contains(3));
        assert_eq!(path.pop(), None);
    }
}
