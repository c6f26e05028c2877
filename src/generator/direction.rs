/*
direction.rs

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

//! Static direction table.
//!
//! Every algorithm in the [`crate::generator`] module iterates over [`Direction::ALL`] instead of
//! branching on a specific direction. The per-direction data (wall bit, coordinate delta,
//! opposite direction, and letter) lives in a densely indexed constant table.

use std::fmt;
use strum_macros::FromRepr;

use super::maze::Coord;

/// Cardinal direction.
///
/// The discriminant is the index in the direction table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr)]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// One row of the direction table.
struct DirectionEntry {
    bit: u8,
    dx: isize,
    dy: isize,
    opposite: Direction,
    letter: char,
}

// x grows to the right, y grows downward.
const DIRECTION_TABLE: [DirectionEntry; 4] = [
    DirectionEntry {
        bit: 1,
        dx: 0,
        dy: -1,
        opposite: Direction::South,
        letter: 'N',
    },
    DirectionEntry {
        bit: 2,
        dx: 1,
        dy: 0,
        opposite: Direction::West,
        letter: 'E',
    },
    DirectionEntry {
        bit: 4,
        dx: 0,
        dy: 1,
        opposite: Direction::North,
        letter: 'S',
    },
    DirectionEntry {
        bit: 8,
        dx: -1,
        dy: 0,
        opposite: Direction::East,
        letter: 'W',
    },
];

impl Direction {
    /// Canonical iteration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn entry(self) -> &'static DirectionEntry {
        &DIRECTION_TABLE[self as usize]
    }

    /// Bit used in the wall mask for this direction.
    pub fn bit(self) -> u8 {
        self.entry().bit
    }

    /// Coordinate offset `(dx, dy)` of a step in this direction.
    pub fn delta(self) -> (isize, isize) {
        let e: &DirectionEntry = self.entry();
        (e.dx, e.dy)
    }

    /// Opposite direction (North <-> South, East <-> West).
    pub fn opposite(self) -> Direction {
        self.entry().opposite
    }

    /// Letter used in path strings.
    pub fn letter(self) -> char {
        self.entry().letter
    }

    /// Direction for the given path letter, if any.
    pub fn from_letter(letter: char) -> Option<Direction> {
        DIRECTION_TABLE
            .iter()
            .position(|e| e.letter == letter)
            .and_then(|i| Direction::from_repr(i as u8))
    }

    /// Coordinates one step away from `from`, or [`None`] when the step would go below zero.
    ///
    /// Upper bounds are not checked here; see [`crate::generator::maze::Maze::neighbor`].
    pub fn step(self, from: Coord) -> Option<Coord> {
        let (dx, dy) = self.delta();
        let x: usize = from.0.checked_add_signed(dx)?;
        let y: usize = from.1.checked_add_signed(dy)?;
        Some((x, y))
    }

    /// Direction that leads from `from` to the adjacent cell `to`.
    ///
    /// Return [`None`] if the two cells are not adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.step(from) == Some(to))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_distinct_powers_of_two() {
        let mut all: u8 = 0;
        for d in Direction::ALL {
            assert!(d.bit().is_power_of_two());
            assert_eq!(all & d.bit(), 0);
            all |= d.bit();
        }
        assert_eq!(all, 0x0F);
    }

    #[test]
    fn opposite_cancels_delta() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn letters_round_trip() {
        assert_eq!(Direction::from_letter('N'), Some(Direction::North));
        assert_eq!(Direction::from_letter('W'), Some(Direction::West));
        assert_eq!(Direction::from_letter('x'), None);
        assert_eq!(Direction::East.to_string(), "E");
    }

    #[test]
    fn step_stops_at_zero() {
        assert_eq!(Direction::North.step((3, 0)), None);
        assert_eq!(Direction::West.step((0, 3)), None);
        assert_eq!(Direction::South.step((3, 0)), Some((3, 1)));
        assert_eq!(Direction::East.step((3, 0)), Some((4, 0)));
    }

    #[test]
    fn between_adjacent_cells() {
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::North));
        assert_eq!(Direction::between((1, 1), (0, 1)), Some(Direction::West));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
    }
}
