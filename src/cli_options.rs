/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordwalk.

Wordwalk is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordwalk is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordwalk. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers tuning word lists and grid sizes.
//!
//! # Examples
//!
//! List the word sources:
//!
//! ```text
//! $ wordwalk --words animals.txt --words nature.txt --ls
//! animals 812
//! nature 1204
//! ```
//!
//! Generate today's 5x5 puzzle:
//!
//! ```text
//! $ wordwalk --words animals.txt --daily --width 5
//! Puzzle 2025-06-01 (seed 2034918257, width 5)
//!   words: heron mole lynx stoat yak ibis
//!   ...
//! ```
//!
//! Generate 100 random 7x7 puzzles and print some statistics:
//!
//! ```text
//! $ wordwalk --words animals.txt --width 7 -c 100 --summary
//! ```

use chrono::Local;
use clap::Parser;
use log::debug;
use rand::Rng;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use wordwalk::{Corpus, PathOptions, Puzzle, PuzzleError, RandomPath, Word, puzzle_seed};

use crate::dictionary;
use crate::saver::puzzles::SaverPuzzles;

/// Build Wordwalk puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Word list file, one word per line (can be repeated)
    #[arg(short, long = "words", value_name = "FILE")]
    words: Vec<PathBuf>,

    /// List the word sources
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Only select words from this source
    #[arg(short = 'S', long)]
    source: Option<String>,

    /// Puzzle identifier (a random identifier is used by default)
    #[arg(short, long, conflicts_with = "daily")]
    id: Option<String>,

    /// Use today's date as the puzzle identifier
    #[arg(long, default_value_t = false)]
    daily: bool,

    /// Number of cells in a grid row
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=12))]
    width: u8,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Max duration in seconds for generating each path
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Save the puzzles to a JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verify the puzzles saved in a JSON file
    #[arg(long, value_name = "FILE")]
    verify: Option<PathBuf>,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Verify saved puzzles
    //
    if let Some(file) = &args.verify {
        return verify(file.clone());
    }

    //
    // Load the word lists
    //
    if args.words.is_empty() {
        eprintln!("No word list. Use --words FILE.");
        return 1;
    }
    let mut corpus: Corpus = Corpus::new();
    for file in &args.words {
        if let Err(e) = dictionary::load_file(&mut corpus, file) {
            eprintln!("Cannot read {}: {e}", file.display());
            return 1;
        }
    }

    //
    // List the sources
    //
    if args.ls {
        for source in corpus.sources() {
            println!("{} {}", source.name, source.range.len());
        }
        return 0;
    }

    let pool: &[Word] = match &args.source {
        Some(name) => match corpus.source(name) {
            Some(words) => words,
            None => {
                eprintln!("Unknown source {name}. Use --ls to list the available sources.");
                return 1;
            }
        },
        None => corpus.words(),
    };

    let base_id: String = match (&args.id, args.daily) {
        (Some(id), _) => id.clone(),
        (None, true) => Local::now().format("%Y-%m-%d").to_string(),
        (None, false) => format!("{:08x}", rand::rng().random::<u32>()),
    };

    let width: usize = usize::from(args.width);
    let options: PathOptions = PathOptions {
        time_limit: args.timeout.map(Duration::from_secs),
    };

    //
    // Generate the puzzles
    //
    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut iterations: usize = 0;
    let mut restarts: usize = 0;
    for i in 0..args.count {
        let identifier: String = if args.count == 1 {
            base_id.clone()
        } else {
            format!("{base_id}#{}", i + 1)
        };
        debug!("Puzzle {identifier}");

        let mut random_path: RandomPath = RandomPath::with_options(width, options);
        let ret: Result<Puzzle, PuzzleError> =
            Puzzle::build(puzzle_seed(&identifier, width), pool, &mut random_path);

        total += random_path.duration;
        if random_path.duration > max {
            max = random_path.duration;
        }
        iterations += random_path.iteration;
        restarts += random_path.restarts;

        match ret {
            Ok(mut puzzle) => {
                puzzle.identifier = identifier;

                // Verify the generated puzzle
                if let Err(msg) = puzzle.verify() {
                    eprintln!("Bug: puzzle {}: {msg}", puzzle.identifier);
                    errors += 1;
                    continue;
                }
                if !args.json {
                    print_puzzle(&puzzle);
                }
                puzzles.push(puzzle);
            }
            Err(e) => {
                errors += 1;
                eprintln!("Puzzle {identifier}: {e}");
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&puzzles) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzles: {e}");
                return 1;
            }
        }
    }

    if let Some(file) = args.output {
        if let Err(e) = SaverPuzzles::new(file.clone()).save_puzzles(&puzzles) {
            eprintln!("Cannot save the puzzles to {}: {e}", file.display());
            return 1;
        }
    }

    // Print some stats
    if args.summary {
        let count: usize = args.count.max(1);
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
  average restarts = {}
            errors = {}",
            total,
            total / count as f32,
            max,
            iterations / count,
            restarts as f32 / count as f32,
            errors
        );
    }

    if errors == 0 { 0 } else { 1 }
}

/// Print a puzzle in text format.
fn print_puzzle(puzzle: &Puzzle) {
    let words: Vec<&str> = puzzle.words.iter().map(|w| w.as_str()).collect();
    let hints: Vec<String> = puzzle.hints.iter().map(|h| h.index.to_string()).collect();

    println!(
        "Puzzle {} (seed {}, width {})",
        puzzle.identifier, puzzle.seed, puzzle.width
    );
    println!("  words: {}", words.join(" "));
    for line in puzzle.grid.render().lines() {
        println!("  {line}");
    }
    println!("  hints: {}", hints.join(" "));
    println!("  path: {:?}", puzzle.grid.path());
}

/// Verify the puzzles saved in the given file.
fn verify(file: PathBuf) -> u8 {
    let puzzles: Vec<Puzzle> = match SaverPuzzles::new(file.clone()).get_puzzles() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", file.display());
            return 1;
        }
    };

    let mut errors: usize = 0;
    for puzzle in &puzzles {
        match puzzle.verify() {
            Ok(()) => println!("{}: ok", puzzle.identifier),
            Err(msg) => {
                errors += 1;
                println!("{}: {msg}", puzzle.identifier);
            }
        }
    }
    if errors == 0 { 0 } else { 1 }
}
