/*
decoration.rs

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

//! "42" decoration.
//!
//! The decoration is a block of forbidden cells that draws "42" in the middle of the maze. The
//! generator walks around those cells, so they stay fully walled and show up as a solid pattern
//! when the maze is displayed.
//!
//! The decoration is only placed when the maze is large enough to hold the pattern and a margin
//! on every side. It is dropped when the entry or the exit falls inside the pattern.

use log::{debug, warn};
use std::collections::BTreeSet;

use super::maze::{Coord, Maze, MazeError};

/// Width of the pattern in cells.
pub const STAMP_WIDTH: usize = 7;

/// Height of the pattern in cells.
pub const STAMP_HEIGHT: usize = 5;

/// Minimum number of free cells between the pattern and the maze border.
pub const BORDER_MARGIN: usize = 4;

/// Pattern cells, relative to the top-left corner of the pattern.
///
/// ```text
/// X . . . X X X
/// X . . . . . X
/// X X X . X X X
/// . . X . X . .
/// . . X . X X X
/// ```
const STAMP: [(usize, usize); 18] = [
    (0, 0),
    (4, 0),
    (5, 0),
    (6, 0),
    (0, 1),
    (6, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (2, 3),
    (4, 3),
    (2, 4),
    (4, 4),
    (5, 4),
    (6, 4),
];

/// Result of the decoration placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    /// The decoration was not requested.
    Disabled,

    /// The maze is too small for the pattern and its margin.
    TooSmall,

    /// The entry or the exit is inside the pattern, so the decoration was dropped.
    Skipped { entry_inside: bool, exit_inside: bool },

    /// The decoration is placed. These cells are forbidden.
    Placed(BTreeSet<Coord>),
}

impl Decoration {
    /// Forbidden cells for this outcome (empty unless the decoration is placed).
    pub fn cells(&self) -> BTreeSet<Coord> {
        match self {
            Decoration::Placed(cells) => cells.clone(),
            _ => BTreeSet::new(),
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Decoration::Placed(_))
    }
}

/// Minimum maze size `(width, height)` that can hold the decoration.
pub fn minimum_size() -> (usize, usize) {
    (
        STAMP_WIDTH + 2 * BORDER_MARGIN,
        STAMP_HEIGHT + 2 * BORDER_MARGIN,
    )
}

/// Cells of the pattern centered in a maze of the given size, or [`None`] if it does not fit.
pub fn stamp_cells(width: usize, height: usize) -> Option<BTreeSet<Coord>> {
    let (min_width, min_height) = minimum_size();
    if width < min_width || height < min_height {
        return None;
    }
    let left: usize = width / 2 - STAMP_WIDTH / 2;
    let top: usize = height / 2 - STAMP_HEIGHT / 2;
    Some(STAMP.iter().map(|(x, y)| (left + x, top + y)).collect())
}

/// Compute the decoration for the maze.
///
/// This does not modify the maze; see [`apply`].
pub fn compute(maze: &Maze) -> Decoration {
    let cells: BTreeSet<Coord> = match stamp_cells(maze.width(), maze.height()) {
        Some(c) => c,
        None => {
            let (w, h) = minimum_size();
            warn!(
                "Maze {}x{} is too small to display the 42 pattern (minimum {w}x{h})",
                maze.width(),
                maze.height()
            );
            return Decoration::TooSmall;
        }
    };

    let entry_inside: bool = cells.contains(&maze.entry());
    let exit_inside: bool = cells.contains(&maze.exit());
    if entry_inside || exit_inside {
        if entry_inside {
            warn!(
                "Entry {:?} is inside the 42 pattern: the pattern is not displayed",
                maze.entry()
            );
        }
        if exit_inside {
            warn!(
                "Exit {:?} is inside the 42 pattern: the pattern is not displayed",
                maze.exit()
            );
        }
        return Decoration::Skipped {
            entry_inside,
            exit_inside,
        };
    }

    debug!("42 pattern placed with {} forbidden cells", cells.len());
    Decoration::Placed(cells)
}

/// Mark the decoration cells as forbidden in the maze. Must run before generation.
pub fn apply(maze: &mut Maze, decoration: &Decoration) -> Result<(), MazeError> {
    if let Decoration::Placed(cells) = decoration {
        for cell in cells {
            maze.forbid(*cell)?;
        }
    }
    Ok(())
}
