/*
grid.rs

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

//! Coordinates and adjacency in the square puzzle grid.
//!
//! Cells are numbered in row-major order, from 0 to `width * width - 1`.
//! Each cell has up to eight neighbors: four orthogonal and four diagonal.
//!
//! A diagonal move is a "crossing" when the two orthogonal cells it passes between are already
//! linked by a path segment. For example, a north-east move from a cell crosses the path when the
//! north and east neighbors of that cell are consecutive in the path.

use std::fmt;
use strum_macros::Display;

/// Neighbor directions.
///
/// The declaration order is the enumeration order used by the path generator, and must not change
/// (generated puzzles depend on it).
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// All the directions, in enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Row and column offsets.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// For a diagonal direction, return the two orthogonal directions that a line in that
    /// direction passes between. Orthogonal directions return [`None`].
    pub fn crossing(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NE => Some((Direction::N, Direction::E)),
            Direction::NW => Some((Direction::N, Direction::W)),
            Direction::SE => Some((Direction::S, Direction::E)),
            Direction::SW => Some((Direction::S, Direction::W)),
            _ => None,
        }
    }

    /// Whether the direction is diagonal.
    pub fn is_diagonal(self) -> bool {
        self.crossing().is_some()
    }
}

/// Cell coordinates.
///
/// The coordinates can be outside the grid (negative or too large), because
/// [`Grid::neighbors`] does not filter them.
/// The [`Coordinates::index`] field is only set when the coordinates are inside the grid.
#[derive(Debug, Copy, Clone)]
pub struct Coordinates {
    pub row: isize,
    pub column: isize,
    pub index: Option<usize>,
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Coordinates {}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Neighbor of a cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Neighbor {
    pub direction: Direction,
    pub coordinates: Coordinates,
}

impl Neighbor {
    /// Index of the neighbor, or [`None`] when it is outside the grid.
    pub fn index(&self) -> Option<usize> {
        self.coordinates.index
    }
}

/// Square grid of `width * width` cells.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    width: usize,
}

impl Grid {
    /// Create a [`Grid`] object.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Number of cells in a row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in the grid.
    pub fn size(&self) -> usize {
        self.width * self.width
    }

    /// Build coordinates, with their index when they are inside the grid.
    pub fn coordinates(&self, row: isize, column: isize) -> Coordinates {
        let w: isize = self.width as isize;
        let index: Option<usize> = if (0..w).contains(&row) && (0..w).contains(&column) {
            Some((row * w + column) as usize)
        } else {
            None
        };
        Coordinates { row, column, index }
    }

    /// Return the coordinates of the cell at the given index.
    pub fn coordinates_of(&self, index: usize) -> Coordinates {
        self.coordinates(self.row(index) as isize, self.column(index) as isize)
    }

    /// Return the index of the given coordinates, or [`None`] if they are outside the grid.
    pub fn index(&self, coordinates: &Coordinates) -> Option<usize> {
        self.coordinates(coordinates.row, coordinates.column).index
    }

    /// Row of the cell at the given index.
    pub fn row(&self, index: usize) -> usize {
        index / self.width
    }

    /// Column of the cell at the given index.
    pub fn column(&self, index: usize) -> usize {
        index % self.width
    }

    /// Return the coordinates one step away in the given direction.
    pub fn step(&self, coordinates: &Coordinates, direction: Direction) -> Coordinates {
        let (dr, dc) = direction.offset();
        self.coordinates(coordinates.row + dr, coordinates.column + dc)
    }

    /// Return the eight neighbors, in [`Direction::ALL`] order.
    ///
    /// The neighbors are not filtered: callers must check [`Neighbor::index`] before using them.
    pub fn neighbors(&self, coordinates: &Coordinates) -> [Neighbor; 8] {
        Direction::ALL.map(|direction| Neighbor {
            direction,
            coordinates: self.step(coordinates, direction),
        })
    }

    /// Return the direction from one cell to an adjacent cell, or [`None`] if the cells are not
    /// adjacent.
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        let dr: isize = self.row(to) as isize - self.row(from) as isize;
        let dc: isize = self.column(to) as isize - self.column(from) as isize;
        Direction::ALL.into_iter().find(|d| d.offset() == (dr, dc))
    }
}

/// Whether a move in the given direction crosses a path segment.
///
/// `occupied` lists the orthogonal directions, around the starting cell, that are occupied by the
/// two ends of a path segment. A diagonal move crosses that segment when both of its orthogonal
/// directions are occupied. Orthogonal moves never cross.
pub fn is_crossing(direction: Direction, occupied: &[Direction]) -> bool {
    match direction.crossing() {
        Some((d1, d2)) => occupied.contains(&d1) && occupied.contains(&d2),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let grid = Grid::new(5);
        assert_eq!(grid.size(), 25);
        assert_eq!(grid.row(13), 2);
        assert_eq!(grid.column(13), 3);

        let c = grid.coordinates_of(13);
        assert_eq!((c.row, c.column, c.index), (2, 3, Some(13)));
        assert_eq!(grid.index(&c), Some(13));

        assert_eq!(grid.coordinates(-1, 0).index, None);
        assert_eq!(grid.coordinates(0, 5).index, None);
        assert_eq!(grid.coordinates(4, 4).index, Some(24));
    }

    #[test]
    fn test_coordinates_equality_ignores_index() {
        let a = Coordinates {
            row: 1,
            column: 2,
            index: None,
        };
        let b = Grid::new(4).coordinates(1, 2);
        assert_eq!(a, b);
        assert_ne!(a, Grid::new(4).coordinates(2, 1));
    }

    #[test]
    fn test_neighbors_are_not_filtered() {
        let grid = Grid::new(3);
        let corner = grid.coordinates_of(0);
        let neighbors = grid.neighbors(&corner);

        assert_eq!(neighbors.len(), 8);
        let inside: Vec<(Direction, usize)> = neighbors
            .iter()
            .filter_map(|n| n.index().map(|i| (n.direction, i)))
            .collect();
        assert_eq!(
            inside,
            vec![(Direction::S, 3), (Direction::E, 1), (Direction::SE, 4)]
        );

        let north = neighbors[0];
        assert_eq!(north.direction, Direction::N);
        assert_eq!((north.coordinates.row, north.coordinates.column), (-1, 0));
    }

    #[test]
    fn test_center_has_eight_neighbors() {
        let grid = Grid::new(3);
        let indexes: Vec<usize> = grid
            .neighbors(&grid.coordinates_of(4))
            .iter()
            .filter_map(|n| n.index())
            .collect();
        assert_eq!(indexes, vec![1, 7, 5, 3, 2, 0, 8, 6]);
    }

    #[test]
    fn test_direction_between() {
        let grid = Grid::new(4);
        assert_eq!(grid.direction_between(5, 2), Some(Direction::NE));
        assert_eq!(grid.direction_between(5, 9), Some(Direction::S));
        assert_eq!(grid.direction_between(5, 7), None);
        assert_eq!(grid.direction_between(5, 5), None);
    }

    #[test]
    fn test_is_crossing() {
        assert!(is_crossing(Direction::NE, &[Direction::N, Direction::E]));
        assert!(is_crossing(Direction::SW, &[Direction::W, Direction::N, Direction::S]));
        assert!(!is_crossing(Direction::NE, &[Direction::N]));
        assert!(!is_crossing(Direction::NE, &[Direction::S, Direction::W]));
        assert!(!is_crossing(Direction::N, &[Direction::N, Direction::E]));
        assert!(!is_crossing(Direction::SE, &[]));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::N.to_string(), "N");
        assert_eq!(Direction::SW.to_string(), "SW");
        assert!(Direction::NW.is_diagonal());
        assert!(!Direction::W.is_diagonal());
    }
}
