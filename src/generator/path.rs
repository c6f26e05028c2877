/*
path.rs

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

//! Path through the maze.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::maze::Coord;

/// Errors when converting paths.
#[derive(Debug, PartialEq)]
pub enum PathError {
    /// Two consecutive cells of the path are not adjacent.
    NonAdjacent(Coord, Coord),

    /// The character is not one of N, E, S, or W.
    InvalidDirection(char),

    /// Following the directions leaves the maze.
    OutOfBounds { step: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::NonAdjacent(a, b) => write!(
                f,
                "non-adjacent step in path: ({},{}) -> ({},{})",
                a.0, a.1, b.0, b.1
            ),
            PathError::InvalidDirection(c) => {
                write!(f, "invalid path character {c:?} (expected N, E, S, or W)")
            }
            PathError::OutOfBounds { step } => {
                write!(f, "path leaves the maze at step {step}")
            }
        }
    }
}

impl Error for PathError {}

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct SolutionPath {
    /// Path as an ordered list of cells, from the entry to the exit.
    path: Vec<Coord>,

    /// Cells in the path.
    /// Instead of looking for the cell in the [`SolutionPath::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coord>,
}

impl PartialEq for SolutionPath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl SolutionPath {
    /// Create an empty [`SolutionPath`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`SolutionPath`] object from a list of cells.
    pub fn from_vec(path: Vec<Coord>) -> Self {
        let visited: HashSet<Coord> = path.iter().copied().collect();
        Self { path, visited }
    }

    /// Rebuild the path by following a string of N, E, S, W letters from `start`.
    ///
    /// The path must stay inside a `width` x `height` maze.
    pub fn from_directions(
        start: Coord,
        directions: &str,
        width: usize,
        height: usize,
    ) -> Result<Self, PathError> {
        let inside = |c: Coord| c.0 < width && c.1 < height;
        if !inside(start) {
            return Err(PathError::OutOfBounds { step: 0 });
        }

        let mut path: SolutionPath = SolutionPath::new(directions.len() + 1);
        let mut current: Coord = start;
        path.push(current);
        for (i, letter) in directions.chars().enumerate() {
            let direction: Direction =
                Direction::from_letter(letter).ok_or(PathError::InvalidDirection(letter))?;
            current = direction
                .step(current)
                .filter(|c| inside(*c))
                .ok_or(PathError::OutOfBounds { step: i + 1 })?;
            path.push(current);
        }
        Ok(path)
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, cell: Coord) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves between the first and the last cell.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Coord) -> bool {
        self.visited.contains(&cell)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &[Coord] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Directions of the moves along the path.
    pub fn moves(&self) -> Result<Vec<Direction>, PathError> {
        self.path
            .windows(2)
            .map(|w| Direction::between(w[0], w[1]).ok_or(PathError::NonAdjacent(w[0], w[1])))
            .collect()
    }

    /// Convert the path to a string of N, E, S, W letters (empty for paths shorter than two
    /// cells).
    pub fn directions(&self) -> Result<String, PathError> {
        Ok(self.moves()?.into_iter().map(Direction::letter).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_of_a_path() {
        let path: SolutionPath = SolutionPath::from_vec(vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
        assert_eq!(path.directions(), Ok("ESW".to_string()));
        assert_eq!(path.steps(), 3);
        assert_eq!(path.get_first(), Some((0, 0)));
        assert_eq!(path.get_last(), Some((0, 1)));
        assert!(path.contains((1, 1)));
        assert!(!path.contains((2, 2)));
    }

    #[test]
    fn short_paths_have_no_directions() {
        assert_eq!(SolutionPath::from_vec(vec![(3, 3)]).directions(), Ok(String::new()));
        assert_eq!(SolutionPath::default().directions(), Ok(String::new()));
        assert_eq!(SolutionPath::from_vec(vec![(3, 3)]).steps(), 0);
    }

    #[test]
    fn rejects_jumps() {
        let path: SolutionPath = SolutionPath::from_vec(vec![(0, 0), (1, 1)]);
        assert_eq!(
            path.directions(),
            Err(PathError::NonAdjacent((0, 0), (1, 1)))
        );
    }

    #[test]
    fn rebuild_from_directions() {
        let path: SolutionPath = SolutionPath::from_directions((0, 0), "ESSW", 3, 3).unwrap();
        assert_eq!(path.get(), &[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]);
        assert_eq!(path.directions(), Ok("ESSW".to_string()));

        assert_eq!(
            SolutionPath::from_directions((0, 0), "EX", 3, 3),
            Err(PathError::InvalidDirection('X'))
        );
        assert_eq!(
            SolutionPath::from_directions((0, 0), "EEE", 3, 3),
            Err(PathError::OutOfBounds { step: 3 })
        );
        assert_eq!(
            SolutionPath::from_directions((0, 0), "N", 3, 3),
            Err(PathError::OutOfBounds { step: 1 })
        );
    }
}
