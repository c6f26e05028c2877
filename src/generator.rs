/*
generator.rs

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

//! Generate and solve grid mazes.
//!
//! A maze is a [`maze::Maze`] grid where each cell stores a wall mask. The [`direction`] table
//! gives the bit, the coordinate offset, and the opposite of each direction, so that the
//! algorithms never branch on a specific direction.
//!
//! The generation is split in small steps that [`maze_generator::MazeGenerator`] runs in order:
//!
//! * [`decoration`] reserves the cells of a centered "42" pattern, when the maze is large enough
//!   and the entry and the exit are not inside the pattern.
//!   Those forbidden cells are never carved.
//! * [`dfs`] carves a perfect maze (a spanning tree) from the entry, with an explicit stack.
//! * [`extra_paths`] opens a few more walls when a non-perfect maze is requested.
//!   Walls are only ever opened (see [`walls::carve`]), so the maze stays connected.
//! * [`validator`] checks the wall coherence, the borders, and the connectivity.
//! * [`solver`] finds the shortest path from the entry to the exit with a breadth-first search,
//!   and returns a [`path::SolutionPath`].
//!
//! Random choices go through the [`random::RandomSource`] trait. [`random::SeededRandom`] makes
//! the generation reproducible for a given seed, and [`random::ScriptedRandom`] replays a fixed
//! sequence of choices.

pub mod decoration;
pub mod dfs;
pub mod direction;
pub mod extra_paths;
pub mod maze;
pub mod maze_generator;
pub mod path;
pub mod random;
pub mod solver;
pub mod validator;
pub mod walls;
