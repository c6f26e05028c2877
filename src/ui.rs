/*
ui.rs

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

//! Interactive terminal loop.
//!
//! The loop draws the maze and waits for a command:
//!
//! * `r`: generate a new maze,
//! * `p`: show or hide the solution path,
//! * `c`: change the color of the walls,
//! * `q`: quit.
//!
//! The end of the input also quits the loop.

use log::debug;
use std::error::Error;
use std::io::{BufRead, Write};

use crate::draw::{self, WallColor};
use crate::generator::maze_generator::MazeResult;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const MENU: &str = "[r] regenerate  [p] show/hide path  [c] wall color  [q] quit\n> ";

/// User commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    TogglePath,
    CycleColor,
    Quit,
}

impl Command {
    /// Parse a line typed by the user. Only the first character counts.
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().chars().next()?.to_ascii_lowercase() {
            'r' => Some(Command::Regenerate),
            'p' => Some(Command::TogglePath),
            'c' => Some(Command::CycleColor),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Display state of the loop.
#[derive(Debug, Clone)]
pub struct UiState {
    pub result: MazeResult,
    pub show_path: bool,
    pub color: WallColor,
}

impl UiState {
    pub fn new(result: MazeResult) -> Self {
        Self {
            result,
            show_path: false,
            color: WallColor::default(),
        }
    }

    /// Draw the maze and a status line.
    fn draw(&self, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
        let path = if self.show_path {
            Some(&self.result.path)
        } else {
            None
        };
        write!(output, "{CLEAR_SCREEN}")?;
        write!(
            output,
            "{}",
            draw::render(&self.result.maze, path, self.color)
        )?;
        writeln!(
            output,
            "seed {}, {} maze, shortest path: {} steps",
            self.result.seed,
            if self.result.perfect {
                "perfect"
            } else {
                "non-perfect"
            },
            self.result.path.steps()
        )?;
        Ok(())
    }
}

/// Run the interactive loop until the user quits.
///
/// `regenerate` is called for each `r` command and must return the next maze.
pub fn run_ui_loop<F, I, O>(
    initial: MazeResult,
    mut regenerate: F,
    input: &mut I,
    output: &mut O,
) -> Result<UiState, Box<dyn Error>>
where
    F: FnMut() -> Result<MazeResult, Box<dyn Error>>,
    I: BufRead,
    O: Write,
{
    let mut state: UiState = UiState::new(initial);
    let mut message: Option<String> = None;

    loop {
        state.draw(output)?;
        if let Some(m) = message.take() {
            writeln!(output, "{m}")?;
        }
        write!(output, "{MENU}")?;
        output.flush()?;

        let mut line: String = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        match Command::parse(&line) {
            Some(Command::Regenerate) => {
                state.result = regenerate()?;
                debug!("New maze with seed {}", state.result.seed);
            }
            Some(Command::TogglePath) => state.show_path = !state.show_path,
            Some(Command::CycleColor) => state.color = state.color.next(),
            Some(Command::Quit) => break,
            None => message = Some(format!("Unknown command: {:?}", line.trim())),
        }
    }
    writeln!(output)?;
    Ok(state)
}
