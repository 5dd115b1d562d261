// Vortspuro – A multiplayer word-tracing game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Reads a board from stdin and prints every word hidden in it with
// its score, best first. Useful for checking what a round could have
// been worth.

use std::fs::File;
use std::io;
use std::io::{BufReader, Read};
use std::process::ExitCode;
use vortspuro::dictionary::Dictionary;
use vortspuro::generator;
use vortspuro::grid::Grid;
use vortspuro::session::word_score;
use vortspuro::word_finder;

fn load_dictionary(filename: &std::ffi::OsStr) -> Result<Dictionary, ()> {
    let file = match File::open(filename) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return Err(());
        }
    };

    match Dictionary::load(BufReader::new(file)) {
        Ok(d) => Ok(d),
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            Err(())
        }
    }
}

fn read_grid() -> Result<Grid, ()> {
    let mut source = String::new();

    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("{}", e);
        return Err(());
    }

    match source.trim().to_lowercase().parse::<Grid>() {
        Ok(grid) => Ok(grid),
        Err(e) => {
            eprintln!("{}", e);
            Err(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(filename) = std::env::args_os().nth(1) else {
        eprintln!("usage: find-words <wordlist>");
        return ExitCode::FAILURE;
    };

    let Ok(dictionary) = load_dictionary(&filename) else {
        return ExitCode::FAILURE;
    };

    let Ok(grid) = read_grid() else {
        return ExitCode::FAILURE;
    };

    let max_length = generator::max_word_length(grid.size());

    let mut words = word_finder::search_words(&grid, &dictionary, max_length)
        .into_iter()
        .map(|word| {
            let score = word_score(word.chars().count());
            (word, score)
        })
        .collect::<Vec<_>>();

    words.sort_by(|(a_word, a_score), (b_word, b_score)| {
        b_score.cmp(a_score).then_with(|| a_word.cmp(b_word))
    });

    let total = words.iter().map(|&(_, score)| score).sum::<u32>();

    for (word, score) in words.iter() {
        println!("{} {}", score, word);
    }

    println!("total: {} points in {} words", total, words.len());

    ExitCode::SUCCESS
}
