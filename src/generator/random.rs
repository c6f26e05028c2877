/*
random.rs

Copyright 2025 Amazeing contributors

This file is part of Amazeing.

Amazeing is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Amazeing is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Amazeing. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Random selection source.
//!
//! The generator and the augmenter only need one operation: pick an index in `0..len`. Hiding
//! the generator behind [`RandomSource`] makes it possible to replay an exact sequence of
//! choices with [`ScriptedRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random selections.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Seeded pseudo-random source. The same seed always produces the same selections.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed used to create the object.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot choose from an empty list");
        self.rng.random_range(0..len)
    }
}

/// Replay a fixed list of selections, cycling when the list is exhausted.
///
/// Each value is reduced modulo the number of candidates.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    /// Create a [`ScriptedRandom`] object. An empty list always selects the first candidate.
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            position: 0,
        }
    }

    /// Number of selections made so far.
    pub fn calls(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        let pick: usize = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.position % self.picks.len()]
        };
        self.position += 1;
        pick % len
    }
}
