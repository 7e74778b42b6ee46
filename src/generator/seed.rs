/*
seed.rs

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

//! Derive puzzle seeds from puzzle identifiers.
//!
//! The seed is computed with cyrb53, a public-domain non-cryptographic string hash.
//! The grid width is passed as the hash seed, so the same identifier gives different puzzles
//! for different grid sizes.

/// Hash the string with cyrb53 and return the 53-bit result.
///
/// The characters are hashed as UTF-16 code units.
pub fn cyrb53(s: &str, seed: u32) -> u64 {
    let mut h1: u32 = 0xdeadbeef ^ seed;
    let mut h2: u32 = 0x41c6ce57 ^ seed;

    for ch in s.encode_utf16() {
        let ch: u32 = u32::from(ch);
        h1 = (h1 ^ ch).wrapping_mul(2654435761);
        h2 = (h2 ^ ch).wrapping_mul(1597334677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2246822507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3266489909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2246822507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3266489909);

    (u64::from(h2 & 0x1fffff) << 32) | u64::from(h1)
}

/// Return the seed of the puzzle with the given identifier and grid width.
pub fn puzzle_seed(identifier: &str, width: usize) -> u32 {
    // Keep the low 32 bits
    cyrb53(identifier, width as u32) as u32
}
