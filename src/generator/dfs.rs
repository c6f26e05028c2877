/*
dfs.rs

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

//! Depth-first maze generation (recursive backtracker).
//!
//! The traversal uses an explicit stack stored on the heap, so the maze size is only limited by
//! the available memory. Starting from the entry, the generator repeatedly looks at the cell on
//! top of the stack:
//!
//! * if the cell has unvisited neighbors (inside the maze and not forbidden), one of them is
//!   selected with the [`RandomSource`], the wall between the two cells is opened, and the
//!   neighbor is pushed onto the stack;
//! * otherwise the cell is popped (backtracking).
//!
//! Each cell is reached exactly once, through exactly one opened wall, so the result is a
//! spanning tree of the cells reachable from the entry: a perfect maze.

use log::{Level, debug, log_enabled};

use super::direction::Direction;
use super::maze::{Coord, Maze, MazeError};
use super::random::RandomSource;
use super::walls;

/// Statistics about a generation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Number of cells reached from the entry.
    pub visited: usize,

    /// Number of walls opened. Always `visited - 1`.
    pub carved: usize,

    /// Maximum depth reached by the stack.
    pub max_depth: usize,
}

/// Generate a perfect maze in place, starting from the maze entry.
///
/// The maze must be freshly created (all walls closed) and its forbidden cells already marked.
///
/// # Errors
///
/// An error can only come from the wall operations, and would indicate a bug in the generator.
pub fn generate<R: RandomSource + ?Sized>(
    maze: &mut Maze,
    random: &mut R,
) -> Result<GenerationReport, MazeError> {
    let entry: Coord = maze.entry();
    let mut visited: Vec<bool> = vec![false; maze.num_cells()];
    let mut stack: Vec<Coord> = Vec::with_capacity(maze.num_cells());
    let mut candidates: Vec<(Direction, Coord)> = Vec::with_capacity(Direction::ALL.len());
    let mut report: GenerationReport = GenerationReport {
        visited: 1,
        carved: 0,
        max_depth: 1,
    };

    visited[maze.index_of(entry)] = true;
    stack.push(entry);

    while let Some(&current) = stack.last() {
        candidates.clear();
        for direction in Direction::ALL {
            if let Some(next) = maze.neighbor(current, direction)
                && !maze.is_forbidden(next)
                && !visited[maze.index_of(next)]
            {
                candidates.push((direction, next));
            }
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (direction, next) = candidates[random.choose_index(candidates.len())];
        walls::carve(maze, current, direction)?;
        visited[maze.index_of(next)] = true;
        stack.push(next);

        report.visited += 1;
        report.carved += 1;
        report.max_depth = report.max_depth.max(stack.len());
    }

    debug!(
        "Generated maze: {} cells visited, {} walls opened, max depth {}",
        report.visited, report.carved, report.max_depth
    );
    if log_enabled!(Level::Debug) {
        let unreached: usize = maze.num_cells() - maze.forbidden_cells().len() - report.visited;
        if unreached > 0 {
            debug!("{unreached} cells are not reachable from the entry");
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn scripted_two_by_two() {
        let mut maze: Maze = Maze::new(2, 2, (0, 0), (1, 1)).unwrap();
        let mut random: ScriptedRandom = ScriptedRandom::new(&[0]);
        let report: GenerationReport = generate(&mut maze, &mut random).unwrap();

        // (0,0) -E-> (1,0) -S-> (1,1) -W-> (0,1)
        assert_eq!(maze.masks(), &[2, 12, 2, 9]);
        assert_eq!(report.visited, 4);
        assert_eq!(report.carved, 3);
        assert_eq!(report.max_depth, 4);
        assert_eq!(random.calls(), 3);
    }

    #[test]
    fn scripted_choice_changes_the_maze() {
        let mut maze: Maze = Maze::new(2, 2, (0, 0), (1, 1)).unwrap();
        generate(&mut maze, &mut ScriptedRandom::new(&[1])).unwrap();

        // (0,0) -S-> (0,1) -E-> (1,1) -N-> (1,0)
        assert_eq!(maze.masks(), &[4, 4, 3, 9]);
    }

    #[test]
    fn spanning_tree_edge_count() {
        for seed in 0..10 {
            let mut maze: Maze = Maze::new(9, 7, (3, 3), (8, 6)).unwrap();
            let report: GenerationReport =
                generate(&mut maze, &mut SeededRandom::new(seed)).unwrap();
            assert_eq!(report.visited, 63);
            assert_eq!(maze.open_wall_count(), report.visited - 1);
        }
    }

    #[test]
    fn forbidden_cells_stay_closed() {
        let mut maze: Maze = Maze::new(5, 5, (0, 0), (4, 4)).unwrap();
        maze.forbid((2, 2)).unwrap();
        maze.forbid((2, 1)).unwrap();
        let report: GenerationReport = generate(&mut maze, &mut SeededRandom::new(7)).unwrap();

        assert_eq!(report.visited, 23);
        assert_eq!(maze.mask((2, 2)), 0);
        assert_eq!(maze.mask((2, 1)), 0);
        assert!(!maze.is_open((1, 2), Direction::East));
        assert!(!maze.is_open((2, 3), Direction::North));
    }

    #[test]
    fn walled_off_region_is_not_generated() {
        // Column x=1 is forbidden: the right column cannot be reached from the entry
        let mut maze: Maze = Maze::new(3, 3, (0, 0), (0, 2)).unwrap();
        for y in 0..3 {
            maze.forbid((1, y)).unwrap();
        }
        let report: GenerationReport = generate(&mut maze, &mut SeededRandom::new(1)).unwrap();
        assert_eq!(report.visited, 3);
        assert!((0..3).all(|y| maze.mask((2, y)) == 0));
    }

    #[test]
    fn single_cell() {
        let mut maze: Maze = Maze::new(1, 1, (0, 0), (0, 0)).unwrap();
        let mut random: ScriptedRandom = ScriptedRandom::new(&[]);
        let report: GenerationReport = generate(&mut maze, &mut random).unwrap();
        assert_eq!(report.visited, 1);
        assert_eq!(report.carved, 0);
        assert_eq!(maze.mask((0, 0)), 0);
        assert_eq!(random.calls(), 0);
    }
}
