/*
saver.rs

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

//! Export a generated maze in JSON format, and load it back.
//!
//! The saved object is a [`SavedMaze`], serialized with [`serde`]. Unlike the output file (see
//! [`crate::output`]), the JSON document stores the in-memory wall masks (set bit = open wall),
//! the forbidden cells, and the path coordinates.
//!
//! The binary only writes the document (`--json`). Reading it back ([`SaverMaze::get_maze`],
//! [`SavedMaze::to_maze`], [`SavedMaze::solution`]) is library API for tools that check exported
//! mazes. [`SavedMaze::to_maze`] goes through [`Maze::from_masks`] and [`Maze::forbid`], so a
//! document cannot produce a maze that skips those checks.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::maze::{Coord, Maze, MazeError};
use crate::generator::maze_generator::MazeResult;
use crate::generator::path::{PathError, SolutionPath};

/// Serializable snapshot of a generated maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedMaze {
    pub width: usize,
    pub height: usize,
    pub entry: Coord,
    pub exit: Coord,
    pub seed: u64,
    pub perfect: bool,

    /// Wall masks, one vector per row.
    pub masks: Vec<Vec<u8>>,

    pub forbidden: Vec<Coord>,

    /// Solution as a list of cells.
    pub path: Vec<Coord>,

    /// Solution as a string of N, E, S, W letters.
    pub directions: String,
}

impl SavedMaze {
    /// Create a [`SavedMaze`] object from a generation result.
    pub fn from_result(result: &MazeResult) -> Result<Self, PathError> {
        let maze: &Maze = &result.maze;
        Ok(Self {
            width: maze.width(),
            height: maze.height(),
            entry: maze.entry(),
            exit: maze.exit(),
            seed: result.seed,
            perfect: result.perfect,
            masks: maze.rows().map(|r| r.to_vec()).collect(),
            forbidden: maze.forbidden_cells().iter().copied().collect(),
            path: result.path.get().to_vec(),
            directions: result.path.directions()?,
        })
    }

    /// Rebuild the [`Maze`] object.
    pub fn to_maze(&self) -> Result<Maze, MazeError> {
        let cells: Vec<u8> = self.masks.concat();
        let mut maze: Maze = Maze::from_masks(self.width, self.height, self.entry, self.exit, cells)?;
        for cell in &self.forbidden {
            maze.forbid(*cell)?;
        }
        Ok(maze)
    }

    /// Rebuild the [`SolutionPath`] object.
    pub fn solution(&self) -> SolutionPath {
        SolutionPath::from_vec(self.path.clone())
    }
}

/// Object to save and restore a maze.
pub struct SaverMaze {
    /// Path to the JSON file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object for the given JSON file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("JSON export file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved maze.
    ///
    /// Return None if the file does not exist.
    pub fn get_maze(&self) -> Result<Option<SavedMaze>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let saved: SavedMaze = serde_json::from_reader(reader)?;
        Ok(Some(saved))
    }

    /// Save the provided generation result.
    pub fn save_maze(&self, result: &MazeResult) -> Result<(), Box<dyn Error>> {
        let saved: SavedMaze = SavedMaze::from_result(result)?;
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &saved)?;
        writer.flush()?;
        Ok(())
    }
}
