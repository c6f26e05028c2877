/*
lib.rs

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

//! Amazeing generates grid mazes, solves them, and displays them in the terminal.
//!
//! The [`generator`] module holds the maze model and the algorithms. It does not perform any I/O.
//! The other modules read the configuration file, write the output files, and run the
//! interactive terminal view.

pub mod config;
pub mod draw;
pub mod generator;
pub mod output;
pub mod saver;
pub mod ui;
