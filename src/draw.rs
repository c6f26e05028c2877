/*
draw.rs

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

//! Draw a maze as ASCII art in the terminal.
//!
//! Each cell is three characters wide. Walls are drawn with `+---+` and `|`, the entry with `E`,
//! the exit with `X`, and the cells of the solution path with `•`. Forbidden cells are drawn with
//! a white background.

use strum_macros::FromRepr;

use crate::generator::direction::Direction;
use crate::generator::maze::{Coord, Maze};
use crate::generator::path::SolutionPath;
use crate::generator::walls;

const RESET: &str = "\x1b[0m";
const FORBIDDEN_CELL: &str = "\x1b[47m   \x1b[0m";

/// Color of the walls.
///
/// The colors are cycled in the declaration order. [`WallColor::None`] uses the terminal default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr, Default)]
#[repr(u8)]
pub enum WallColor {
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl WallColor {
    /// Next color in the palette. Wraps around after the last one.
    pub fn next(self) -> Self {
        WallColor::from_repr(self as u8 + 1).unwrap_or(WallColor::None)
    }

    /// ANSI escape sequence that selects the color.
    fn escape(self) -> Option<&'static str> {
        match self {
            WallColor::None => None,
            WallColor::Red => Some("\x1b[31m"),
            WallColor::Green => Some("\x1b[32m"),
            WallColor::Yellow => Some("\x1b[33m"),
            WallColor::Blue => Some("\x1b[34m"),
            WallColor::Magenta => Some("\x1b[35m"),
            WallColor::Cyan => Some("\x1b[36m"),
        }
    }

    /// Append `text` to `out`, colored.
    fn paint(self, out: &mut String, text: &str) {
        match self.escape() {
            Some(code) => {
                out.push_str(code);
                out.push_str(text);
                out.push_str(RESET);
            }
            None => out.push_str(text),
        }
    }
}

/// Content of the inside of a cell.
fn cell_content(maze: &Maze, cell: Coord, path: Option<&SolutionPath>) -> &'static str {
    if cell == maze.entry() {
        " E "
    } else if cell == maze.exit() {
        " X "
    } else if maze.is_forbidden(cell) {
        FORBIDDEN_CELL
    } else if path.is_some_and(|p| p.contains(cell)) {
        " • "
    } else {
        "   "
    }
}

/// Draw the horizontal walls on the given side of a row.
fn horizontal_line(out: &mut String, maze: &Maze, y: usize, side: Direction, color: WallColor) {
    for x in 0..maze.width() {
        color.paint(out, "+");
        if walls::has_wall(maze.mask((x, y)), side) {
            color.paint(out, "---");
        } else {
            out.push_str("   ");
        }
    }
    color.paint(out, "+");
    out.push('\n');
}

/// Render the maze.
///
/// The path cells are marked only when `path` is provided.
pub fn render(maze: &Maze, path: Option<&SolutionPath>, color: WallColor) -> String {
    let mut out: String = String::new();

    for y in 0..maze.height() {
        horizontal_line(&mut out, maze, y, Direction::North, color);

        for x in 0..maze.width() {
            if walls::has_wall(maze.mask((x, y)), Direction::West) {
                color.paint(&mut out, "|");
            } else {
                out.push(' ');
            }
            out.push_str(cell_content(maze, (x, y), path));
        }
        if walls::has_wall(maze.mask((maze.width() - 1, y)), Direction::East) {
            color.paint(&mut out, "|");
        } else {
            out.push(' ');
        }
        out.push('\n');
    }
    horizontal_line(&mut out, maze, maze.height() - 1, Direction::South, color);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::dfs;
    use crate::generator::random::ScriptedRandom;
    use crate::generator::solver;

    fn scripted_maze() -> Maze {
        let mut maze: Maze = Maze::new(2, 2, (0, 0), (0, 1)).unwrap();
        dfs::generate(&mut maze, &mut ScriptedRandom::new(&[0])).unwrap();
        maze
    }

    #[test]
    fn palette_wraps_around() {
        let mut color: WallColor = WallColor::default();
        for _ in 0..7 {
            color = color.next();
        }
        assert_eq!(color, WallColor::None);
        assert_eq!(WallColor::Blue.next(), WallColor::Magenta);
    }

    #[test]
    fn single_cell() {
        let maze: Maze = Maze::new(1, 1, (0, 0), (0, 0)).unwrap();
        assert_eq!(render(&maze, None, WallColor::None), "+---+\n| E |\n+---+\n");
    }

    #[test]
    fn walls_and_path() {
        let maze: Maze = scripted_maze();
        assert_eq!(
            render(&maze, None, WallColor::None),
            "+---+---+\n| E     |\n+---+   +\n| X     |\n+---+---+\n"
        );

        let path: SolutionPath = solver::solve(&maze).unwrap();
        assert_eq!(
            render(&maze, Some(&path), WallColor::None),
            "+---+---+\n| E   • |\n+---+   +\n| X   • |\n+---+---+\n"
        );
    }

    #[test]
    fn colored_walls() {
        let maze: Maze = Maze::new(1, 1, (0, 0), (0, 0)).unwrap();
        let out: String = render(&maze, None, WallColor::Red);
        assert!(out.starts_with("\x1b[31m+\x1b[0m"));
        assert!(out.contains(" E "));
    }

    #[test]
    fn forbidden_cells_are_highlighted() {
        let mut maze: Maze = Maze::new(3, 1, (0, 0), (2, 0)).unwrap();
        maze.forbid((1, 0)).unwrap();
        let out: String = render(&maze, None, WallColor::None);
        assert!(out.contains(FORBIDDEN_CELL));
    }
}
