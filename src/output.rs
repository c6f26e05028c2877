/*
output.rs

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

//! Write the maze and its solution to the output file.
//!
//! The file contains, in order:
//!
//! 1. one line per maze row, with one uppercase hexadecimal digit per cell,
//! 2. an empty line,
//! 3. the entry coordinates as `x,y`,
//! 4. the exit coordinates as `x,y`,
//! 5. the shortest path as a string of N, E, S, and W letters.
//!
//! In the hexadecimal digits, a set bit means that the wall is closed (N=1, E=2, S=4, W=8).
//! This is the opposite of the in-memory masks, where a set bit means an open wall.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::generator::maze::{Coord, Maze};
use crate::generator::path::{PathError, SolutionPath};
use crate::generator::walls;

/// Output errors.
#[derive(Debug)]
pub enum OutputError {
    /// A cell mask does not fit in one hexadecimal digit.
    InvalidMask { coord: Coord, mask: u8 },

    /// The path cannot be converted to directions.
    Path(PathError),

    /// The file cannot be written.
    Io(io::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::InvalidMask { coord, mask } => write!(
                f,
                "invalid cell value at ({},{}): {mask} (expected 0..15)",
                coord.0, coord.1
            ),
            OutputError::Path(e) => write!(f, "{e}"),
            OutputError::Io(e) => write!(f, "cannot write the output file: {e}"),
        }
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OutputError::Path(e) => Some(e),
            OutputError::Io(e) => Some(e),
            OutputError::InvalidMask { .. } => None,
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<PathError> for OutputError {
    fn from(e: PathError) -> Self {
        OutputError::Path(e)
    }
}

/// Format a coordinate as `x,y`.
pub fn format_coord(coord: Coord) -> String {
    format!("{},{}", coord.0, coord.1)
}

/// Build the content of the output file.
pub fn render_output(maze: &Maze, path: &SolutionPath) -> Result<String, OutputError> {
    let mut out: String = String::with_capacity((maze.width() + 1) * maze.height() + 64);

    for (y, row) in maze.rows().enumerate() {
        for (x, mask) in row.iter().enumerate() {
            if *mask > walls::ALL_WALLS {
                return Err(OutputError::InvalidMask {
                    coord: (x, y),
                    mask: *mask,
                });
            }
            // Writing to a String cannot fail
            let _ = write!(out, "{:X}", walls::closed_mask(*mask));
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format_coord(maze.entry()));
    out.push('\n');
    out.push_str(&format_coord(maze.exit()));
    out.push('\n');
    out.push_str(&path.directions()?);
    out.push('\n');
    Ok(out)
}

/// Write the output file.
pub fn write_output(file: &Path, maze: &Maze, path: &SolutionPath) -> Result<(), OutputError> {
    let content: String = render_output(maze, path)?;
    let mut writer: BufWriter<File> = BufWriter::new(File::create(file)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    debug!("Maze written to {file:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::dfs;
    use crate::generator::random::ScriptedRandom;
    use crate::generator::solver;
    use std::fs;

    fn scripted_maze() -> Maze {
        let mut maze: Maze = Maze::new(2, 2, (0, 0), (0, 1)).unwrap();
        dfs::generate(&mut maze, &mut ScriptedRandom::new(&[0])).unwrap();
        maze
    }

    #[test]
    fn hexadecimal_closed_walls() {
        // Open masks [2, 12, 2, 9] -> closed masks [13, 3, 13, 6]
        let maze: Maze = scripted_maze();
        let path: SolutionPath = solver::solve(&maze).unwrap();
        assert_eq!(
            render_output(&maze, &path).unwrap(),
            "D3\nD6\n\n0,0\n0,1\nESW\n"
        );
    }

    #[test]
    fn closed_maze_is_all_f() {
        let maze: Maze = Maze::new(3, 1, (0, 0), (0, 0)).unwrap();
        let path: SolutionPath = SolutionPath::from_vec(vec![(0, 0)]);
        assert_eq!(render_output(&maze, &path).unwrap(), "FFF\n\n0,0\n0,0\n\n");
    }

    #[test]
    fn rejects_invalid_values() {
        let maze: Maze = Maze::from_masks(1, 1, (0, 0), (0, 0), vec![16]).unwrap();
        assert!(matches!(
            render_output(&maze, &SolutionPath::default()),
            Err(OutputError::InvalidMask { .. })
        ));

        let maze: Maze = Maze::new(2, 2, (0, 0), (1, 1)).unwrap();
        let jump: SolutionPath = SolutionPath::from_vec(vec![(0, 0), (1, 1)]);
        assert!(matches!(
            render_output(&maze, &jump),
            Err(OutputError::Path(_))
        ));
    }

    #[test]
    fn write_file() {
        let maze: Maze = scripted_maze();
        let path: SolutionPath = solver::solve(&maze).unwrap();
        let file = std::env::temp_dir().join(format!("amazeing-output-{}.txt", std::process::id()));
        write_output(&file, &maze, &path).unwrap();
        let content: String = fs::read_to_string(&file).unwrap();
        let _ = fs::remove_file(&file);
        assert_eq!(content, render_output(&maze, &path).unwrap());
    }
}
