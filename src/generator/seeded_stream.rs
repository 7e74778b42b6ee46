/*
seeded_stream.rs

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

//! Deterministic random stream.
//!
//! The puzzles must be reproducible from their identifier, on every platform, so the generator
//! does not use the [`rand`] thread RNG. Instead, a [`SeededStream`] implements the Mulberry32
//! mixing function over a 32-bit state.
//!
//! Each generation run owns exactly one stream. The word selector and the path generator draw
//! from that same stream, one after the other.

/// Increment added to the state on every draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B79F5;

/// 2^32, to convert a 32-bit integer into a float in `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 random stream.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Create a [`SeededStream`] object from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let a: u32 = self.state;
        let mut t: u32 = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Return the next float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// Return a random integer in `[min, max]`, both bounds included.
///
/// The caller must guarantee that `min <= max`.
pub fn random_index_inclusive(stream: &mut SeededStream, max: usize, min: usize) -> usize {
    debug_assert!(min <= max, "empty range {min}..={max}");
    (stream.next() * (max - min + 1) as f64).floor() as usize + min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_outputs() {
        let mut stream = SeededStream::new(12345);
        assert_eq!(stream.next_u32(), 4207900869);
        assert_eq!(stream.next_u32(), 1317490944);
        assert_eq!(stream.next_u32(), 2079646450);
        assert_eq!(stream.next_u32(), 3513001552);

        let mut stream = SeededStream::new(0);
        assert_eq!(stream.next_u32(), 1144304738);
        assert_eq!(stream.next_u32(), 1416247);
    }

    #[test]
    fn test_float_range() {
        let mut stream = SeededStream::new(12345);
        assert_eq!(stream.next(), 4207900869.0 / TWO_POW_32);

        let mut stream = SeededStream::new(7);
        for _ in 0..10_000 {
            let f = stream.next();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededStream::new(99);
        let mut b = SeededStream::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_random_index_inclusive_bounds() {
        let mut stream = SeededStream::new(2024);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let i = random_index_inclusive(&mut stream, 6, 3);
            assert!((3..=6).contains(&i));
            seen[i - 3] = true;
        }
        assert!(seen.iter().all(|s| *s));

        // A single-value range always returns that value
        assert_eq!(random_index_inclusive(&mut stream, 5, 5), 5);
    }

    #[test]
    fn test_random_index_inclusive_formula() {
        // First draw for seed 12345 is 0.9797..., so floor(0.9797 * 10) = 9
        let mut stream = SeededStream::new(12345);
        assert_eq!(random_index_inclusive(&mut stream, 9, 0), 9);
        // Second draw is 0.3067..., so floor(0.3067 * 3) + 1 = 1
        assert_eq!(random_index_inclusive(&mut stream, 3, 1), 1);
    }
}
