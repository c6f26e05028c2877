/*
solver.rs

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

//! Breadth-first search solver.
//!
//! The maze is an unweighted graph: cells are vertexes and open walls are edges. The search
//! expands the cells layer by layer from the entry, so the first time the exit is dequeued it has
//! been reached through a shortest path.

use log::debug;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::maze::{Coord, Maze};
use super::path::SolutionPath;

/// Solver errors.
#[derive(Debug, PartialEq)]
pub enum SolveError {
    /// The frontier was exhausted before reaching the exit.
    ///
    /// This never happens for a maze built by the generator.
    Unreachable { entry: Coord, exit: Coord },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Unreachable { entry, exit } => write!(
                f,
                "exit ({},{}) is not reachable from the entry ({},{})",
                exit.0, exit.1, entry.0, entry.1
            ),
        }
    }
}

impl Error for SolveError {}

/// Return the shortest path from the maze entry to the maze exit.
pub fn solve(maze: &Maze) -> Result<SolutionPath, SolveError> {
    let entry: Coord = maze.entry();
    let exit: Coord = maze.exit();

    let mut visited: Vec<bool> = vec![false; maze.num_cells()];
    // For each cell, the cell it was discovered from
    let mut predecessor: Vec<Option<Coord>> = vec![None; maze.num_cells()];
    let mut frontier: VecDeque<Coord> = VecDeque::new();
    let mut found: bool = false;

    visited[maze.index_of(entry)] = true;
    frontier.push_back(entry);

    while let Some(current) = frontier.pop_front() {
        if current == exit {
            found = true;
            break;
        }
        for direction in Direction::ALL {
            if !maze.is_open(current, direction) {
                continue;
            }
            if let Some(next) = maze.neighbor(current, direction)
                && !maze.is_forbidden(next)
                && !visited[maze.index_of(next)]
            {
                visited[maze.index_of(next)] = true;
                predecessor[maze.index_of(next)] = Some(current);
                frontier.push_back(next);
            }
        }
    }

    if !found {
        return Err(SolveError::Unreachable { entry, exit });
    }

    // Walk back from the exit to the entry
    let mut backtrace: Vec<Coord> = vec![exit];
    let mut cell: Coord = exit;
    while let Some(previous) = predecessor[maze.index_of(cell)] {
        backtrace.push(previous);
        cell = previous;
    }
    backtrace.reverse();

    debug!("Shortest path: {} moves", backtrace.len() - 1);
    Ok(SolutionPath::from_vec(backtrace))
}
