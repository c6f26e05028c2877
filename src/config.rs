/*
config.rs

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

//! Read and validate the configuration file.
//!
//! The configuration file is a plain text file with one `KEY=VALUE` pair per line:
//!
//! ```text
//! # Maze size
//! WIDTH=20
//! HEIGHT=15
//! ENTRY=0,0
//! EXIT=19,14
//! OUTPUT_FILE=maze.txt
//! PERFECT=True
//! SEED=42
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Keys are case-insensitive. The value is
//! everything after the first `=`.
//!
//! `WIDTH`, `HEIGHT`, `ENTRY`, `EXIT`, `OUTPUT_FILE`, and `PERFECT` are required. `SEED` and
//! `DECORATION` are optional.

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::generator::maze::Coord;
use crate::generator::maze_generator::GenerationConfig;

/// Keys that must exist in the configuration file.
const REQUIRED_KEYS: [&str; 6] = ["ENTRY", "EXIT", "HEIGHT", "OUTPUT_FILE", "PERFECT", "WIDTH"];

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The file cannot be read.
    Io(io::Error),

    /// The line is not a `KEY=VALUE` pair.
    Syntax { line: usize, content: String },

    /// The line has no key before the `=` sign.
    EmptyKey { line: usize },

    /// Some required keys are missing.
    MissingKeys(Vec<String>),

    /// The value is not a valid integer.
    InvalidInteger { key: String, value: String },

    /// The width or the height is zero.
    InvalidSize { width: usize, height: usize },

    /// The value is not a valid `x,y` coordinate.
    InvalidCoordinate { key: String, value: String },

    /// The coordinate is outside the maze.
    OutOfBounds {
        key: String,
        coord: (i64, i64),
        width: usize,
        height: usize,
    },

    /// The entry and the exit are the same cell.
    SameEntryExit,

    /// The output file name is empty.
    EmptyOutputFile,

    /// The value is not a valid boolean.
    InvalidBool { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read the configuration file: {e}"),
            ConfigError::Syntax { line, content } => {
                write!(f, "line {line}: bad syntax {content:?} (expected KEY=VALUE)")
            }
            ConfigError::EmptyKey { line } => write!(f, "line {line}: empty key"),
            ConfigError::MissingKeys(keys) => {
                write!(f, "missing required key(s): {}", keys.join(", "))
            }
            ConfigError::InvalidInteger { key, value } => {
                write!(f, "{key}: {value:?} is not a valid integer")
            }
            ConfigError::InvalidSize { width, height } => {
                write!(
                    f,
                    "WIDTH and HEIGHT must be > 0 and WIDTH x HEIGHT must not overflow \
                     (got {width}x{height})"
                )
            }
            ConfigError::InvalidCoordinate { key, value } => {
                write!(f, "{key}: invalid coordinate {value:?} (expected x,y)")
            }
            ConfigError::OutOfBounds {
                key,
                coord,
                width,
                height,
            } => write!(
                f,
                "{key} out of bounds: ({},{}) for maze {width} x {height}",
                coord.0, coord.1
            ),
            ConfigError::SameEntryExit => write!(f, "ENTRY and EXIT must be different"),
            ConfigError::EmptyOutputFile => write!(f, "OUTPUT_FILE must be a non-empty string"),
            ConfigError::InvalidBool { key, value } => {
                write!(f, "{key}: invalid boolean {value:?} (expected True/False)")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub entry: Coord,
    pub exit: Coord,

    /// File where the maze and its solution are written.
    pub output_file: PathBuf,

    pub perfect: bool,

    /// Optional random seed.
    pub seed: Option<u64>,

    /// Whether to draw the "42" pattern. Defaults to `true`.
    pub decoration: bool,
}

impl Config {
    /// Parameters for the maze generator.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            entry: self.entry,
            exit: self.exit,
            perfect: self.perfect,
            seed: self.seed,
            decoration: self.decoration,
        }
    }
}

/// Load and validate the configuration file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    debug!("Loading configuration from {path:?}");
    let content: String = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate the content of a configuration file.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let data: HashMap<String, String> = parse_pairs(content)?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|k| !data.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingKeys(missing));
    }

    let width: usize = parse_integer("WIDTH", &data["WIDTH"])?;
    let height: usize = parse_integer("HEIGHT", &data["HEIGHT"])?;
    if width == 0 || height == 0 || width.checked_mul(height).is_none() {
        return Err(ConfigError::InvalidSize { width, height });
    }

    let entry: Coord = parse_coord_in_bounds("ENTRY", &data["ENTRY"], width, height)?;
    let exit: Coord = parse_coord_in_bounds("EXIT", &data["EXIT"], width, height)?;
    if entry == exit {
        return Err(ConfigError::SameEntryExit);
    }

    let output_file: &str = data["OUTPUT_FILE"].trim();
    if output_file.is_empty() {
        return Err(ConfigError::EmptyOutputFile);
    }

    let perfect: bool = parse_bool("PERFECT", &data["PERFECT"])?;

    let seed: Option<u64> = match data.get("SEED").map(|s| s.trim()) {
        Some(s) if !s.is_empty() => Some(parse_seed(s)?),
        _ => None,
    };

    let decoration: bool = match data.get("DECORATION") {
        Some(v) => parse_bool("DECORATION", v)?,
        None => true,
    };

    Ok(Config {
        width,
        height,
        entry,
        exit,
        output_file: PathBuf::from(output_file),
        perfect,
        seed,
        decoration,
    })
}

/// Collect the `KEY=VALUE` pairs. Keys are converted to uppercase.
fn parse_pairs(content: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut data: HashMap<String, String> = HashMap::new();

    for (i, raw) in content.lines().enumerate() {
        let line: &str = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Syntax {
            line: i + 1,
            content: line.to_string(),
        })?;
        let key: String = key.trim().to_uppercase();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey { line: i + 1 });
        }
        data.insert(key, value.trim().to_string());
    }
    Ok(data)
}

fn parse_integer<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Parse the seed. Any integer from `i64::MIN` to `u64::MAX` is accepted; negative values are
/// mapped to `u64` by two's complement (`-1` becomes `u64::MAX`).
fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    let seed: i128 = parse_integer("SEED", value)?;
    if seed < i128::from(i64::MIN) || seed > i128::from(u64::MAX) {
        return Err(ConfigError::InvalidInteger {
            key: "SEED".to_string(),
            value: value.to_string(),
        });
    }
    Ok(seed as u64)
}

/// Parse a boolean: true/1/yes/y or false/0/no/n, case-insensitive.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse an `x,y` coordinate and check that it is inside the maze.
fn parse_coord_in_bounds(
    key: &str,
    value: &str,
    width: usize,
    height: usize,
) -> Result<Coord, ConfigError> {
    let invalid = || ConfigError::InvalidCoordinate {
        key: key.to_string(),
        value: value.to_string(),
    };
    let (x, y) = value.split_once(',').ok_or_else(|| invalid())?;
    let x: i64 = x.trim().parse().map_err(|_| invalid())?;
    let y: i64 = y.trim().parse().map_err(|_| invalid())?;

    if x < 0 || y < 0 || x as u64 >= width as u64 || y as u64 >= height as u64 {
        return Err(ConfigError::OutOfBounds {
            key: key.to_string(),
            coord: (x, y),
            width,
            height,
        });
    }
    Ok((x as usize, y as usize))
}
