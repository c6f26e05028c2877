/*
walls.rs

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

//! Wall operations.
//!
//! Opening a wall always updates both cells that share it, so the two sides of a wall never
//! disagree. Walls are never closed again once opened.

use log::trace;

use super::direction::Direction;
use super::maze::{Coord, Maze, MazeError};

/// Mask with the four wall bits set.
pub const ALL_WALLS: u8 = 0x0F;

/// Whether the wall in the given direction is open in the mask.
pub fn is_open(mask: u8, direction: Direction) -> bool {
    mask & direction.bit() != 0
}

/// Whether the wall in the given direction is closed in the mask.
pub fn has_wall(mask: u8, direction: Direction) -> bool {
    !is_open(mask, direction)
}

/// Convert an open-wall mask into a closed-wall mask (set bit = wall present).
pub fn closed_mask(mask: u8) -> u8 {
    !mask & ALL_WALLS
}

/// Open the wall between `cell` and its neighbor in `direction`.
///
/// Return the coordinates of the neighbor.
///
/// # Errors
///
/// Nothing is changed, and an error is returned, if the neighbor is outside the maze or if one
/// of the two cells is forbidden.
pub fn carve(maze: &mut Maze, cell: Coord, direction: Direction) -> Result<Coord, MazeError> {
    if !maze.contains(cell) {
        return Err(MazeError::OutOfBounds { name: "cell", coord: cell });
    }
    let next: Coord = match maze.neighbor(cell, direction) {
        Some(n) if !maze.is_forbidden(cell) && !maze.is_forbidden(n) => n,
        _ => {
            return Err(MazeError::CannotCarve {
                from: cell,
                direction,
            });
        }
    };
    maze.open_bits(cell, direction.bit());
    maze.open_bits(next, direction.opposite().bit());
    trace!("Carved ({},{}) {direction} -> ({},{})", cell.0, cell.1, next.0, next.1);
    Ok(next)
}

/// Open the wall shared by two adjacent cells.
pub fn carve_between(maze: &mut Maze, a: Coord, b: Coord) -> Result<(), MazeError> {
    let direction: Direction = Direction::between(a, b).ok_or(MazeError::NotAdjacent(a, b))?;
    carve(maze, a, direction)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_helpers() {
        assert!(is_open(0b0010, Direction::East));
        assert!(has_wall(0b0010, Direction::North));
        assert_eq!(closed_mask(0), 0x0F);
        assert_eq!(closed_mask(0b1010), 0b0101);
        assert_eq!(closed_mask(ALL_WALLS), 0);
    }

    #[test]
    fn carve_opens_both_sides() {
        let mut maze: Maze = Maze::new(3, 3, (0, 0), (2, 2)).unwrap();
        assert_eq!(carve(&mut maze, (1, 1), Direction::North), Ok((1, 0)));
        assert_eq!(maze.mask((1, 1)), Direction::North.bit());
        assert_eq!(maze.mask((1, 0)), Direction::South.bit());

        carve_between(&mut maze, (1, 1), (2, 1)).unwrap();
        assert_eq!(maze.mask((1, 1)), Direction::North.bit() | Direction::East.bit());
        assert_eq!(maze.mask((2, 1)), Direction::West.bit());
        assert_eq!(maze.open_wall_count(), 2);
    }

    #[test]
    fn carving_twice_is_harmless() {
        let mut maze: Maze = Maze::new(2, 1, (0, 0), (1, 0)).unwrap();
        carve(&mut maze, (0, 0), Direction::East).unwrap();
        carve(&mut maze, (1, 0), Direction::West).unwrap();
        assert_eq!(maze.masks(), &[2, 8]);
    }

    #[test]
    fn refuses_border_and_forbidden_cells() {
        let mut maze: Maze = Maze::new(3, 3, (0, 0), (2, 2)).unwrap();
        maze.forbid((1, 0)).unwrap();

        assert_eq!(
            carve(&mut maze, (0, 0), Direction::North),
            Err(MazeError::CannotCarve {
                from: (0, 0),
                direction: Direction::North
            })
        );
        assert!(carve(&mut maze, (0, 0), Direction::East).is_err());
        assert!(carve(&mut maze, (1, 0), Direction::South).is_err());
        assert_eq!(
            carve_between(&mut maze, (0, 0), (2, 2)),
            Err(MazeError::NotAdjacent((0, 0), (2, 2)))
        );
        assert!(maze.masks().iter().all(|m| *m == 0));
    }
}
