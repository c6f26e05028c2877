/*
main.rs

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

mod cli_options;

use log::{debug, error};
use std::error::Error;
use std::io;
use std::process::ExitCode;

use amazeing::config::{self, Config};
use amazeing::generator::maze_generator::{MazeGenerator, MazeResult};
use amazeing::generator::random::SeededRandom;
use amazeing::output;
use amazeing::saver::SaverMaze;
use amazeing::ui;

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &cli_options::Args) -> Result<(), Box<dyn Error>> {
    let mut config: Config = config::load_config(&args.config)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let generator: MazeGenerator = MazeGenerator::new(config.generation());
    let base_seed: u64 = generator.config().seed();
    let saver: Option<SaverMaze> = args.json.clone().map(SaverMaze::new);

    // Generate a maze with the given seed and write the output files
    let produce = |seed: u64| -> Result<MazeResult, Box<dyn Error>> {
        let result: MazeResult = generator.generate_with(&mut SeededRandom::new(seed), seed)?;
        output::write_output(&config.output_file, &result.maze, &result.path)?;
        if let Some(s) = &saver {
            s.save_maze(&result)?;
        }
        Ok(result)
    };

    let initial: MazeResult = produce(base_seed)?;
    if args.no_ui {
        println!(
            "Maze written to {} (seed {}, {} steps)",
            config.output_file.display(),
            initial.seed,
            initial.path.steps()
        );
        return Ok(());
    }

    let mut seed: u64 = base_seed;
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    ui::run_ui_loop(
        initial,
        || {
            seed = seed.wrapping_add(1);
            produce(seed)
        },
        &mut input,
        &mut out,
    )?;
    debug!("Last seed: {seed}");
    Ok(())
}
