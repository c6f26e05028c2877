/*
maze_generator.rs

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

//! Run the whole generation pipeline.
//!
//! [`MazeGenerator::generate`] builds a fresh maze from a [`GenerationConfig`]:
//!
//! 1. create the maze with all the walls closed,
//! 2. compute and apply the "42" decoration,
//! 3. carve a perfect maze with the depth-first generator,
//! 4. open extra walls if a non-perfect maze is requested,
//! 5. validate the structure,
//! 6. solve the maze.
//!
//! A single seeded random stream is used for steps 3 and 4, so the same configuration always
//! produces the same maze and the same path.

use log::debug;
use std::error::Error;
use std::fmt;

use super::decoration::{self, Decoration};
use super::dfs::{self, GenerationReport};
use super::direction::Direction;
use super::extra_paths;
use super::maze::{Coord, Maze, MazeError};
use super::path::SolutionPath;
use super::random::{RandomSource, SeededRandom};
use super::solver::{self, SolveError};
use super::validator::{self, ValidationError};

/// Seed used when the configuration does not provide one.
pub const DEFAULT_SEED: u64 = 0;

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    pub entry: Coord,
    pub exit: Coord,

    /// Whether to build a perfect maze (a single route between any two cells).
    pub perfect: bool,

    /// Random seed. [`DEFAULT_SEED`] is used when not set.
    pub seed: Option<u64>,

    /// Whether to reserve cells for the "42" decoration.
    pub decoration: bool,
}

impl GenerationConfig {
    /// Create a [`GenerationConfig`] object for a perfect, decorated maze with the default seed.
    pub fn new(width: usize, height: usize, entry: Coord, exit: Coord) -> Self {
        Self {
            width,
            height,
            entry,
            exit,
            perfect: true,
            seed: None,
            decoration: true,
        }
    }

    /// Seed to use for the generation.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Check the configuration before any generation work.
    pub fn validate(&self) -> Result<(), MazeError> {
        Maze::new(self.width, self.height, self.entry, self.exit).map(|_| ())
    }
}

/// Errors that abort the pipeline.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The configuration is not valid.
    Config(MazeError),

    /// A wall operation failed during generation.
    Carve(MazeError),

    /// The generated maze breaks an invariant.
    Validation(ValidationError),

    /// The exit cannot be reached.
    Solve(SolveError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "invalid configuration: {e}"),
            GenerateError::Carve(e) => write!(f, "generation failed: {e}"),
            GenerateError::Validation(e) => write!(f, "invalid maze: {e}"),
            GenerateError::Solve(e) => write!(f, "cannot solve the maze: {e}"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::Config(e) | GenerateError::Carve(e) => Some(e),
            GenerateError::Validation(e) => Some(e),
            GenerateError::Solve(e) => Some(e),
        }
    }
}

/// Generated maze and its solution.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeResult {
    pub maze: Maze,

    /// Outcome of the decoration placement.
    pub decoration: Decoration,

    /// Shortest path from the entry to the exit.
    pub path: SolutionPath,

    /// Seed used for the generation.
    pub seed: u64,

    pub perfect: bool,

    /// Depth-first generation statistics.
    pub report: GenerationReport,

    /// Walls opened to make the maze non-perfect (empty for a perfect maze).
    pub extra_walls: Vec<(Coord, Direction)>,
}

/// Maze generation pipeline.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: GenerationConfig,
}

impl MazeGenerator {
    /// Create a [`MazeGenerator`] object.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate and solve a maze with the configured seed.
    pub fn generate(&self) -> Result<MazeResult, GenerateError> {
        let seed: u64 = self.config.seed();
        self.generate_with(&mut SeededRandom::new(seed), seed)
    }

    /// Generate and solve a maze with the provided random source.
    ///
    /// `seed` is only recorded in the result.
    pub fn generate_with<R: RandomSource + ?Sized>(
        &self,
        random: &mut R,
        seed: u64,
    ) -> Result<MazeResult, GenerateError> {
        let cfg: &GenerationConfig = &self.config;
        debug!(
            "Generating {}x{} maze, entry {:?}, exit {:?}, perfect {}, seed {seed}",
            cfg.width, cfg.height, cfg.entry, cfg.exit, cfg.perfect
        );

        let mut maze: Maze =
            Maze::new(cfg.width, cfg.height, cfg.entry, cfg.exit).map_err(GenerateError::Config)?;

        let decoration: Decoration = if cfg.decoration {
            decoration::compute(&maze)
        } else {
            Decoration::Disabled
        };
        decoration::apply(&mut maze, &decoration).map_err(GenerateError::Config)?;

        let report: GenerationReport =
            dfs::generate(&mut maze, random).map_err(GenerateError::Carve)?;
        validator::validate(&maze).map_err(GenerateError::Validation)?;

        let extra_walls: Vec<(Coord, Direction)> = if cfg.perfect {
            Vec::new()
        } else {
            let opened = extra_paths::add_extra_paths(&mut maze, random)
                .map_err(GenerateError::Carve)?;
            validator::validate(&maze).map_err(GenerateError::Validation)?;
            opened
        };

        let path: SolutionPath = solver::solve(&maze).map_err(GenerateError::Solve)?;

        Ok(MazeResult {
            maze,
            decoration,
            path,
            seed,
            perfect: cfg.perfect,
            report,
            extra_walls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::ScriptedRandom;

    #[test]
    fn default_seed() {
        let mut cfg: GenerationConfig = GenerationConfig::new(5, 5, (0, 0), (4, 4));
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        cfg.seed = Some(9);
        assert_eq!(cfg.seed(), 9);
    }

    #[test]
    fn invalid_config_fails_early() {
        let generator: MazeGenerator =
            MazeGenerator::new(GenerationConfig::new(5, 5, (0, 0), (5, 4)));
        assert!(generator.config().validate().is_err());
        assert_eq!(
            generator.generate(),
            Err(GenerateError::Config(MazeError::OutOfBounds {
                name: "exit",
                coord: (5, 4)
            }))
        );
    }

    #[test]
    fn scripted_pipeline() {
        let mut cfg: GenerationConfig = GenerationConfig::new(2, 2, (0, 0), (0, 1));
        cfg.perfect = false;
        let result: MazeResult = MazeGenerator::new(cfg)
            .generate_with(&mut ScriptedRandom::new(&[0]), 0)
            .unwrap();

        assert_eq!(result.decoration, Decoration::TooSmall);
        assert_eq!(result.maze.masks(), &[6, 12, 3, 9]);
        assert_eq!(result.extra_walls, vec![((0, 0), Direction::South)]);
        // The extra wall creates a shortcut to the exit
        assert_eq!(result.path.directions(), Ok("S".to_string()));
    }

    #[test]
    fn decoration_can_be_disabled() {
        let mut cfg: GenerationConfig = GenerationConfig::new(20, 15, (0, 0), (19, 14));
        cfg.decoration = false;
        let result: MazeResult = MazeGenerator::new(cfg).generate().unwrap();
        assert_eq!(result.decoration, Decoration::Disabled);
        assert!(result.maze.forbidden_cells().is_empty());
        assert_eq!(result.report.visited, 300);
    }
}
