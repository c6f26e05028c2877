/*
validator.rs

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

//! Structural checks on a generated maze.
//!
//! The validator never modifies the maze. Any reported error means that the generator or the
//! augmenter has a bug: nothing is corrected.

use log::{debug, warn};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::maze::{Coord, Maze};
use super::walls;

/// Invariant violations.
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    /// The mask uses bits outside of the four wall bits.
    InvalidMask { coord: Coord, mask: u8 },

    /// The two sides of a shared wall disagree.
    IncoherentWall { coord: Coord, direction: Direction },

    /// A wall on the maze border is open.
    OpenBorder { coord: Coord, direction: Direction },

    /// The entry or the exit is outside the maze or is forbidden.
    BadEndpoint { name: &'static str, coord: Coord },

    /// A forbidden cell has an open wall.
    CarvedForbidden { coord: Coord },

    /// The exit cannot be reached from the entry.
    UnreachableExit { exit: Coord },

    /// The cell can be reached from the entry in the grid but no open wall leads to it.
    Disconnected { coord: Coord },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::InvalidMask { coord, mask } => {
                write!(f, "invalid wall mask {mask} at ({},{})", coord.0, coord.1)
            }
            ValidationError::IncoherentWall { coord, direction } => write!(
                f,
                "wall {direction} of cell ({},{}) does not match its neighbor",
                coord.0, coord.1
            ),
            ValidationError::OpenBorder { coord, direction } => write!(
                f,
                "border wall {direction} of cell ({},{}) is open",
                coord.0, coord.1
            ),
            ValidationError::BadEndpoint { name, coord } => write!(
                f,
                "{name} ({},{}) is out of bounds or forbidden",
                coord.0, coord.1
            ),
            ValidationError::CarvedForbidden { coord } => {
                write!(f, "forbidden cell ({},{}) has open walls", coord.0, coord.1)
            }
            ValidationError::UnreachableExit { exit } => {
                write!(f, "exit ({},{}) is not reachable from the entry", exit.0, exit.1)
            }
            ValidationError::Disconnected { coord } => {
                write!(f, "cell ({},{}) is not connected to the entry", coord.0, coord.1)
            }
        }
    }
}

impl Error for ValidationError {}

/// Run all the checks.
pub fn validate(maze: &Maze) -> Result<(), ValidationError> {
    check_masks(maze)?;
    check_coherence(maze)?;
    check_borders(maze)?;
    check_endpoints(maze)?;
    check_forbidden(maze)?;
    check_connectivity(maze)?;
    debug!("Maze {}x{} is valid", maze.width(), maze.height());
    Ok(())
}

/// Every mask must fit in four bits.
pub fn check_masks(maze: &Maze) -> Result<(), ValidationError> {
    match maze
        .masks()
        .iter()
        .position(|m| *m & !walls::ALL_WALLS != 0)
    {
        Some(i) => Err(ValidationError::InvalidMask {
            coord: maze.coord_of(i),
            mask: maze.masks()[i],
        }),
        None => Ok(()),
    }
}

/// Both sides of every interior wall must agree.
pub fn check_coherence(maze: &Maze) -> Result<(), ValidationError> {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            for direction in [Direction::East, Direction::South] {
                if let Some(next) = maze.neighbor((x, y), direction)
                    && maze.is_open((x, y), direction) != maze.is_open(next, direction.opposite())
                {
                    return Err(ValidationError::IncoherentWall {
                        coord: (x, y),
                        direction,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Walls on the outer border must be closed.
pub fn check_borders(maze: &Maze) -> Result<(), ValidationError> {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            for direction in Direction::ALL {
                if maze.neighbor((x, y), direction).is_none() && maze.is_open((x, y), direction) {
                    return Err(ValidationError::OpenBorder {
                        coord: (x, y),
                        direction,
                    });
                }
            }
        }
    }
    Ok(())
}

/// The entry and the exit must be inside the maze and not forbidden.
pub fn check_endpoints(maze: &Maze) -> Result<(), ValidationError> {
    for (name, coord) in [("entry", maze.entry()), ("exit", maze.exit())] {
        if !maze.contains(coord) || maze.is_forbidden(coord) {
            return Err(ValidationError::BadEndpoint { name, coord });
        }
    }
    Ok(())
}

/// Forbidden cells must keep all their walls closed.
pub fn check_forbidden(maze: &Maze) -> Result<(), ValidationError> {
    match maze.forbidden_cells().iter().find(|c| maze.mask(**c) != 0) {
        Some(c) => Err(ValidationError::CarvedForbidden { coord: *c }),
        None => Ok(()),
    }
}

/// Every cell that the entry can reach in the grid (going around forbidden cells) must be
/// reachable through open walls, and the exit must be one of them.
///
/// Cells cut off from the entry by forbidden cells are reported in the log only.
pub fn check_connectivity(maze: &Maze) -> Result<(), ValidationError> {
    let region: Vec<bool> = reachable(maze, false);
    let connected: Vec<bool> = reachable(maze, true);

    if !connected[maze.index_of(maze.exit())] {
        return Err(ValidationError::UnreachableExit { exit: maze.exit() });
    }
    if let Some(i) = (0..maze.num_cells()).find(|i| region[*i] && !connected[*i]) {
        return Err(ValidationError::Disconnected {
            coord: maze.coord_of(i),
        });
    }

    let isolated: usize = (0..maze.num_cells())
        .filter(|i| !region[*i] && !maze.is_forbidden(maze.coord_of(*i)))
        .count();
    if isolated > 0 {
        warn!("{isolated} cells are cut off from the entry by forbidden cells");
    }
    Ok(())
}

/// Breadth-first flood fill from the entry, avoiding forbidden cells.
///
/// With `through_walls` set to `false`, walls are ignored and only the grid adjacency is used.
fn reachable(maze: &Maze, through_walls: bool) -> Vec<bool> {
    let mut seen: Vec<bool> = vec![false; maze.num_cells()];
    let mut queue: VecDeque<Coord> = VecDeque::new();

    seen[maze.index_of(maze.entry())] = true;
    queue.push_back(maze.entry());
    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            if through_walls && !maze.is_open(current, direction) {
                continue;
            }
            if let Some(next) = maze.neighbor(current, direction)
                && !maze.is_forbidden(next)
                && !seen[maze.index_of(next)]
            {
                seen[maze.index_of(next)] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::dfs;
    use crate::generator::random::SeededRandom;

    fn generated(width: usize, height: usize) -> Maze {
        let mut maze: Maze = Maze::new(width, height, (0, 0), (width - 1, height - 1)).unwrap();
        dfs::generate(&mut maze, &mut SeededRandom::new(11)).unwrap();
        maze
    }

    #[test]
    fn generated_maze_is_valid() {
        assert_eq!(validate(&generated(8, 6)), Ok(()));
        assert_eq!(validate(&generated(1, 1)), Ok(()));
    }

    #[test]
    fn detects_invalid_mask() {
        let mut maze: Maze = generated(3, 3);
        maze.set_mask_unchecked((1, 1), 0x1F);
        assert!(matches!(
            validate(&maze),
            Err(ValidationError::InvalidMask {
                coord: (1, 1),
                mask: 0x1F
            })
        ));
    }

    #[test]
    fn detects_one_sided_wall() {
        let maze: Maze = Maze::from_masks(2, 1, (0, 0), (1, 0), vec![2, 0]).unwrap();
        assert_eq!(
            check_coherence(&maze),
            Err(ValidationError::IncoherentWall {
                coord: (0, 0),
                direction: Direction::East
            })
        );
    }

    #[test]
    fn detects_open_border() {
        let maze: Maze = Maze::from_masks(2, 1, (0, 0), (1, 0), vec![2 | 1, 8]).unwrap();
        assert_eq!(
            validate(&maze),
            Err(ValidationError::OpenBorder {
                coord: (0, 0),
                direction: Direction::North
            })
        );
    }

    #[test]
    fn detects_unreachable_exit() {
        let maze: Maze = Maze::new(3, 1, (0, 0), (2, 0)).unwrap();
        assert_eq!(
            validate(&maze),
            Err(ValidationError::UnreachableExit { exit: (2, 0) })
        );
    }

    #[test]
    fn detects_disconnected_cell() {
        // (0,1) is closed off while the exit is reachable
        let maze: Maze = Maze::from_masks(2, 2, (0, 0), (1, 1), vec![2, 8 | 4, 0, 1]).unwrap();
        assert_eq!(
            validate(&maze),
            Err(ValidationError::Disconnected { coord: (0, 1) })
        );
    }

    #[test]
    fn detects_carved_forbidden_cell() {
        let mut maze: Maze = Maze::from_masks(3, 1, (0, 0), (2, 0), vec![2, 10, 8]).unwrap();
        maze.forbid((1, 0)).unwrap();
        assert_eq!(
            validate(&maze),
            Err(ValidationError::CarvedForbidden { coord: (1, 0) })
        );
    }

    #[test]
    fn isolated_region_is_not_an_error() {
        let mut maze: Maze = Maze::new(3, 3, (0, 0), (0, 2)).unwrap();
        for y in 0..3 {
            maze.forbid((1, y)).unwrap();
        }
        dfs::generate(&mut maze, &mut SeededRandom::new(5)).unwrap();
        assert_eq!(validate(&maze), Ok(()));
    }
}
