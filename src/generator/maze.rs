/*
maze.rs

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

//! Maze grid.
//!
//! A [`Maze`] stores one wall mask per cell in row-major order: the cell at `(x, y)` is at
//! index `y * width + x`. In a mask, a set bit means that the wall in that direction is open
//! (see [`Direction::bit`]). A new maze has all its walls closed.
//!
//! Wall masks are only modified through [`crate::generator::walls::carve`], which keeps the two
//! sides of a shared wall coherent.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use super::direction::Direction;

/// Cell coordinates `(x, y)`.
pub type Coord = (usize, usize);

/// Errors for building and modifying a [`Maze`].
#[derive(Debug, PartialEq)]
pub enum MazeError {
    /// The width or the height is zero, or the number of cells overflows.
    InvalidSize { width: usize, height: usize },

    /// The number of masks does not match the maze size.
    GridSize { expected: usize, found: usize },

    /// The named coordinate (entry, exit, cell...) is outside the maze.
    OutOfBounds { name: &'static str, coord: Coord },

    /// The entry or the exit cannot be a forbidden cell.
    ForbiddenEndpoint { name: &'static str, coord: Coord },

    /// The wall cannot be opened: the neighbor is outside the maze, or one of the two cells is
    /// forbidden.
    CannotCarve { from: Coord, direction: Direction },

    /// The two cells do not share a wall.
    NotAdjacent(Coord, Coord),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidSize { width, height } => {
                write!(
                    f,
                    "invalid maze size {width}x{height}: width and height must be > 0 and the \
                     number of cells must fit in memory"
                )
            }
            MazeError::GridSize { expected, found } => {
                write!(f, "grid has {found} cells instead of {expected}")
            }
            MazeError::OutOfBounds { name, coord } => {
                write!(f, "{name} ({},{}) is out of the maze bounds", coord.0, coord.1)
            }
            MazeError::ForbiddenEndpoint { name, coord } => {
                write!(f, "{name} ({},{}) cannot be a forbidden cell", coord.0, coord.1)
            }
            MazeError::CannotCarve { from, direction } => {
                write!(f, "cannot open wall {direction} of cell ({},{})", from.0, from.1)
            }
            MazeError::NotAdjacent(a, b) => {
                write!(f, "cells ({},{}) and ({},{}) are not adjacent", a.0, a.1, b.0, b.1)
            }
        }
    }
}

impl Error for MazeError {}

/// Rectangular grid maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: usize,
    height: usize,

    /// Wall masks, row-major.
    cells: Vec<u8>,

    entry: Coord,
    exit: Coord,

    /// Cells reserved for the decoration. Never carved, never traversed.
    forbidden: BTreeSet<Coord>,
}

impl Maze {
    /// Create a [`Maze`] object with all the walls closed.
    ///
    /// The entry and the exit can be the same cell, in which case the solution is a single cell.
    ///
    /// # Errors
    ///
    /// Return an error if the width or the height is zero, if `width * height` overflows, or if the
    /// entry or the exit is out of bounds.
    pub fn new(width: usize, height: usize, entry: Coord, exit: Coord) -> Result<Self, MazeError> {
        let size: usize = Self::grid_size(width, height)?;
        Self::from_masks(width, height, entry, exit, vec![0; size])
    }

    /// Number of cells for the given size. Zero sizes and sizes that overflow are rejected.
    fn grid_size(width: usize, height: usize) -> Result<usize, MazeError> {
        match width.checked_mul(height) {
            Some(size) if size > 0 => Ok(size),
            _ => Err(MazeError::InvalidSize { width, height }),
        }
    }

    /// Create a [`Maze`] object from existing wall masks (row-major).
    ///
    /// The masks are not checked: use [`crate::generator::validator::validate`] for that.
    pub fn from_masks(
        width: usize,
        height: usize,
        entry: Coord,
        exit: Coord,
        cells: Vec<u8>,
    ) -> Result<Self, MazeError> {
        let size: usize = Self::grid_size(width, height)?;
        if cells.len() != size {
            return Err(MazeError::GridSize {
                expected: size,
                found: cells.len(),
            });
        }
        let maze: Maze = Self {
            width,
            height,
            cells,
            entry,
            exit,
            forbidden: BTreeSet::new(),
        };
        if !maze.contains(entry) {
            return Err(MazeError::OutOfBounds {
                name: "entry",
                coord: entry,
            });
        }
        if !maze.contains(exit) {
            return Err(MazeError::OutOfBounds {
                name: "exit",
                coord: exit,
            });
        }
        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn entry(&self) -> Coord {
        self.entry
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the signed coordinates are inside the maze.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Whether the coordinates are inside the maze.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Position of the cell in the row-major grid.
    ///
    /// # Panics
    ///
    /// The coordinates must be inside the maze.
    pub fn index_of(&self, coord: Coord) -> usize {
        assert!(self.contains(coord), "cell {coord:?} out of bounds");
        coord.1 * self.width + coord.0
    }

    /// Coordinates of the cell at the given row-major position.
    pub fn coord_of(&self, index: usize) -> Coord {
        (index % self.width, index / self.width)
    }

    /// Adjacent cell in the given direction, or [`None`] at the maze border.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        direction.step(coord).filter(|c| self.contains(*c))
    }

    /// Wall mask of the given cell.
    pub fn mask(&self, coord: Coord) -> u8 {
        self.cells[self.index_of(coord)]
    }

    /// Wall masks, row-major.
    pub fn masks(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate over the rows of wall masks.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// Set the given bits in the wall mask of a cell. Reserved to the wall operations.
    pub(super) fn open_bits(&mut self, coord: Coord, bits: u8) {
        let i: usize = self.index_of(coord);
        self.cells[i] |= bits;
    }

    /// Mark a cell as forbidden.
    ///
    /// # Errors
    ///
    /// The cell must be inside the maze and cannot be the entry or the exit.
    pub fn forbid(&mut self, coord: Coord) -> Result<(), MazeError> {
        if !self.contains(coord) {
            return Err(MazeError::OutOfBounds {
                name: "forbidden cell",
                coord,
            });
        }
        if coord == self.entry {
            return Err(MazeError::ForbiddenEndpoint {
                name: "entry",
                coord,
            });
        }
        if coord == self.exit {
            return Err(MazeError::ForbiddenEndpoint {
                name: "exit",
                coord,
            });
        }
        self.forbidden.insert(coord);
        Ok(())
    }

    /// Whether the cell is reserved for the decoration.
    pub fn is_forbidden(&self, coord: Coord) -> bool {
        self.forbidden.contains(&coord)
    }

    pub fn forbidden_cells(&self) -> &BTreeSet<Coord> {
        &self.forbidden
    }

    /// Whether the wall of the cell in the given direction is open.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.mask(coord) & direction.bit() != 0
    }

    /// Open interior walls, each one listed once from its west or north cell.
    pub fn open_walls(&self) -> BTreeSet<(Coord, Direction)> {
        let mut walls: BTreeSet<(Coord, Direction)> = BTreeSet::new();
        for y in 0..self.height {
            for x in 0..self.width {
                for direction in [Direction::East, Direction::South] {
                    if self.neighbor((x, y), direction).is_some() && self.is_open((x, y), direction)
                    {
                        walls.insert(((x, y), direction));
                    }
                }
            }
        }
        walls
    }

    /// Number of open interior walls.
    pub fn open_wall_count(&self) -> usize {
        self.open_walls().len()
    }
}

#[cfg(test)]
impl Maze {
    /// Overwrite a mask without keeping the walls coherent. Used to test the validator.
    pub(crate) fn set_mask_unchecked(&mut self, coord: Coord, mask: u8) {
        let i: usize = self.index_of(coord);
        self.cells[i] = mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maze_is_closed() {
        let maze: Maze = Maze::new(3, 2, (0, 0), (2, 1)).unwrap();
        assert_eq!(maze.num_cells(), 6);
        assert!(maze.masks().iter().all(|m| *m == 0));
        assert_eq!(maze.rows().count(), 2);
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn rejects_bad_sizes_and_endpoints() {
        assert_eq!(
            Maze::new(0, 3, (0, 0), (0, 0)),
            Err(MazeError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Maze::new(3, 3, (3, 0), (0, 0)),
            Err(MazeError::OutOfBounds {
                name: "entry",
                coord: (3, 0)
            })
        );
        assert_eq!(
            Maze::new(3, 3, (0, 0), (0, 3)),
            Err(MazeError::OutOfBounds {
                name: "exit",
                coord: (0, 3)
            })
        );
        assert!(Maze::new(1, 1, (0, 0), (0, 0)).is_ok());
    }

    #[test]
    fn rejects_overflowing_sizes() {
        let huge: usize = 1 << (usize::BITS / 2);
        assert_eq!(
            Maze::new(huge, huge, (0, 0), (1, 1)),
            Err(MazeError::InvalidSize {
                width: huge,
                height: huge
            })
        );
        assert_eq!(
            Maze::from_masks(usize::MAX, 2, (0, 0), (1, 1), Vec::new()),
            Err(MazeError::InvalidSize {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn row_major_indexing() {
        let maze: Maze = Maze::new(4, 3, (0, 0), (3, 2)).unwrap();
        assert_eq!(maze.index_of((1, 2)), 9);
        assert_eq!(maze.coord_of(9), (1, 2));
    }

    #[test]
    fn neighbors_at_the_border() {
        let maze: Maze = Maze::new(2, 2, (0, 0), (1, 1)).unwrap();
        assert_eq!(maze.neighbor((0, 0), Direction::North), None);
        assert_eq!(maze.neighbor((0, 0), Direction::West), None);
        assert_eq!(maze.neighbor((1, 1), Direction::East), None);
        assert_eq!(maze.neighbor((1, 1), Direction::South), None);
        assert_eq!(maze.neighbor((0, 0), Direction::East), Some((1, 0)));
        assert!(maze.in_bounds(1, 1));
        assert!(!maze.in_bounds(-1, 0));
        assert!(!maze.in_bounds(0, 2));
    }

    #[test]
    fn forbid_rejects_endpoints() {
        let mut maze: Maze = Maze::new(3, 3, (0, 0), (2, 2)).unwrap();
        assert!(maze.forbid((1, 1)).is_ok());
        assert!(maze.is_forbidden((1, 1)));
        assert!(matches!(
            maze.forbid((0, 0)),
            Err(MazeError::ForbiddenEndpoint { name: "entry", .. })
        ));
        assert!(matches!(
            maze.forbid((2, 2)),
            Err(MazeError::ForbiddenEndpoint { name: "exit", .. })
        ));
        assert!(matches!(maze.forbid((5, 1)), Err(MazeError::OutOfBounds { .. })));
        assert_eq!(maze.forbidden_cells().len(), 1);
    }

    #[test]
    fn from_masks_checks_length() {
        assert_eq!(
            Maze::from_masks(2, 2, (0, 0), (1, 1), vec![0; 3]),
            Err(MazeError::GridSize {
                expected: 4,
                found: 3
            })
        );
    }
}
