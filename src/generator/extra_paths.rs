/*
extra_paths.rs

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

//! Turn a perfect maze into a maze with several routes.
//!
//! A few closed interior walls are opened after generation. Walls are only ever opened, so the
//! result contains the spanning tree built by the generator and stays connected, while the new
//! openings create loops.

use log::debug;

use super::direction::Direction;
use super::maze::{Coord, Maze, MazeError};
use super::random::RandomSource;
use super::walls;

/// One extra wall is opened for every block of this many cells (at least one wall).
pub const CELLS_PER_EXTRA_PATH: usize = 25;

/// Number of extra walls to open for a maze of the given size.
pub fn extra_path_count(width: usize, height: usize) -> usize {
    ((width * height) / CELLS_PER_EXTRA_PATH).max(1)
}

/// Closed interior walls that can be opened, in row-major order.
///
/// Each wall is listed once, from its west or north cell. Both cells must be part of the
/// generated maze: forbidden cells and cells that the generator could not reach are skipped.
pub fn candidate_walls(maze: &Maze) -> Vec<(Coord, Direction)> {
    let generated = |c: Coord| -> bool { !maze.is_forbidden(c) && maze.mask(c) != 0 };
    let mut candidates: Vec<(Coord, Direction)> = Vec::new();

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if !generated((x, y)) {
                continue;
            }
            for direction in [Direction::East, Direction::South] {
                if let Some(next) = maze.neighbor((x, y), direction)
                    && generated(next)
                    && !maze.is_open((x, y), direction)
                {
                    candidates.push(((x, y), direction));
                }
            }
        }
    }
    candidates
}

/// Open extra walls in the maze and return the list of walls that were opened.
///
/// The number of walls is given by [`extra_path_count`], capped by the number of candidates.
pub fn add_extra_paths<R: RandomSource + ?Sized>(
    maze: &mut Maze,
    random: &mut R,
) -> Result<Vec<(Coord, Direction)>, MazeError> {
    let mut candidates: Vec<(Coord, Direction)> = candidate_walls(maze);
    let count: usize = extra_path_count(maze.width(), maze.height()).min(candidates.len());
    let mut opened: Vec<(Coord, Direction)> = Vec::with_capacity(count);

    debug!(
        "Opening {count} extra walls out of {} candidates",
        candidates.len()
    );
    for _ in 0..count {
        let (cell, direction) = candidates.remove(random.choose_index(candidates.len()));
        walls::carve(maze, cell, direction)?;
        opened.push((cell, direction));
    }
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::dfs;
    use crate::generator::random::{ScriptedRandom, SeededRandom};
    use std::collections::BTreeSet;

    #[test]
    fn count_scales_with_size() {
        assert_eq!(extra_path_count(1, 1), 1);
        assert_eq!(extra_path_count(5, 5), 1);
        assert_eq!(extra_path_count(10, 10), 4);
        assert_eq!(extra_path_count(30, 20), 24);
    }

    #[test]
    fn candidates_of_scripted_maze() {
        let mut maze: Maze = Maze::new(2, 2, (0, 0), (1, 1)).unwrap();
        dfs::generate(&mut maze, &mut ScriptedRandom::new(&[0])).unwrap();

        // Only the wall between (0,0) and (0,1) is still closed
        assert_eq!(candidate_walls(&maze), vec![((0, 0), Direction::South)]);

        let opened = add_extra_paths(&mut maze, &mut ScriptedRandom::new(&[0])).unwrap();
        assert_eq!(opened, vec![((0, 0), Direction::South)]);
        assert_eq!(maze.masks(), &[6, 12, 3, 9]);
        assert!(candidate_walls(&maze).is_empty());
    }

    #[test]
    fn only_opens_walls() {
        let mut maze: Maze = Maze::new(12, 10, (0, 0), (11, 9)).unwrap();
        let mut random: SeededRandom = SeededRandom::new(3);
        dfs::generate(&mut maze, &mut random).unwrap();
        let before: BTreeSet<(Coord, Direction)> = maze.open_walls();

        let opened = add_extra_paths(&mut maze, &mut random).unwrap();
        let after: BTreeSet<(Coord, Direction)> = maze.open_walls();

        assert_eq!(opened.len(), extra_path_count(12, 10));
        assert!(after.is_superset(&before));
        assert_eq!(after.len(), before.len() + opened.len());
    }

    #[test]
    fn skips_forbidden_cells() {
        let mut maze: Maze = Maze::new(4, 4, (0, 0), (3, 3)).unwrap();
        maze.forbid((1, 1)).unwrap();
        dfs::generate(&mut maze, &mut SeededRandom::new(0)).unwrap();
        for (cell, direction) in candidate_walls(&maze) {
            assert_ne!(cell, (1, 1));
            assert_ne!(maze.neighbor(cell, direction), Some((1, 1)));
        }
    }
}
