/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate the maze described in `config.txt` and open the interactive view:
//!
//! ```text
//! $ amazeing config.txt
//! ```
//!
//! Override the seed, export the maze in JSON, and skip the interactive view:
//!
//! ```text
//! $ amazeing config.txt --seed 42 --json maze.json --no-ui
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Generate, solve, and display grid mazes.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Configuration file (KEY=VALUE lines)
    pub config: PathBuf,

    /// Random seed, overrides the SEED key of the configuration file
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the maze files and exit without the interactive view
    #[arg(long, default_value_t = false)]
    pub no_ui: bool,

    /// Also export the maze and its solution in JSON format
    #[arg(short, long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize the logger.
///
/// Clap exits the process with status 2 on invalid options.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}
