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

use clap::Parser;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use vortspuro::config::{self, GameConfig};
use vortspuro::dictionary::Dictionary;
use vortspuro::generator::Generator;
use vortspuro::session::{Event, Phase, Session};
use vortspuro::store::{MemoryStore, RoomStore};
use vortspuro::word_finder::Finder;

#[derive(Parser)]
#[command(version, about = "Trace words on a letter board before the \
                            clock runs out")]
struct Args {
    /// Word list with one word per line. Without it no word can be
    /// confirmed valid.
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Width and height of the board
    #[arg(
        short,
        long,
        default_value_t = config::DEFAULT_GRID_SIZE,
    )]
    grid_size: u32,

    /// Round length in seconds
    #[arg(
        short,
        long,
        default_value_t = config::DEFAULT_DURATION,
    )]
    duration: u32,

    /// Name shown in the room record
    #[arg(short, long, default_value = "anonymous")]
    name: String,

    /// Print the room record as JSON when the round ends
    #[arg(long)]
    dump_room: bool,
}

fn load_dictionary(filename: &PathBuf) -> Option<Dictionary> {
    let file = match File::open(filename) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return None;
        }
    };

    match Dictionary::load(BufReader::new(file)) {
        Ok(d) => {
            println!(
                "{} words loaded from {}",
                d.len(),
                filename.to_string_lossy(),
            );
            Some(d)
        }
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            None
        }
    }
}

fn print_board(session: &Session) {
    println!();

    for row in session.grid().to_string().lines() {
        let spaced = row
            .chars()
            .flat_map(|ch| ch.to_uppercase())
            .map(|ch| format!("{} ", ch))
            .collect::<String>();
        println!("  {}", spaced.trim_end());
    }

    println!();
}

// Catches the clock up with wall time. Returns true when the round
// ended on one of these ticks.
fn catch_up_ticks(
    session: &mut Session,
    started: &Instant,
    ticked: &mut u64,
) -> bool {
    let elapsed = started.elapsed().as_secs();

    while *ticked < elapsed {
        *ticked += 1;

        if session.tick() == Some(Event::GameOver) {
            return true;
        }
    }

    false
}

fn play_round(
    session: &mut Session,
    finder: &mut Finder,
) -> Result<(), io::Error> {
    print_board(session);
    println!(
        "Type words hidden in the board. {} seconds on the clock.",
        session.duration(),
    );

    let started = Instant::now();
    let mut ticked = 0;

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();

        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        if catch_up_ticks(session, &started, &mut ticked) {
            println!("Time's up!");
            return Ok(());
        }

        let word = line.trim().to_lowercase();

        if word.is_empty() {
            println!(
                "{} seconds left, {} points",
                session.remaining_seconds(),
                session.score(),
            );
            continue;
        }

        let Some(route) = finder.find(session.grid(), &word) else {
            println!("“{}” can't be traced on the board", word);
            continue;
        };

        let (row, col) = route[0];
        session.select_start(row, col);

        for &(row, col) in &route[1..] {
            session.select_extend(row, col);
        }

        match session.select_end() {
            Event::WordAccepted { word, points } => {
                println!(
                    "{} points for “{}”, {} total",
                    points,
                    word,
                    session.score(),
                );
            }
            Event::WordRejected(word) => {
                println!("“{}” isn't in the word list", word);
            }
            Event::TooShort => {
                println!("Three letters or more");
            }
            Event::Ignored | Event::GameOver => (),
        }

        if catch_up_ticks(session, &started, &mut ticked) {
            println!("Time's up!");
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let game_config = match GameConfig::new(args.grid_size, args.duration)
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let dictionary = args.wordlist.as_ref().and_then(load_dictionary);

    if dictionary.is_none() {
        println!(
            "No word list, so no word will count. Pass one with \
             --wordlist.",
        );
    }

    let mut generator = Generator::new(game_config.max_attempts);
    let mut rng = rand::thread_rng();

    let grid = match dictionary.as_ref() {
        Some(dictionary) => generator.generate(
            &mut rng,
            game_config.grid_size,
            dictionary,
        ),
        None => {
            generator.generate_unchecked(&mut rng, game_config.grid_size)
        }
    };

    let mut store = MemoryStore::new();

    let (room_id, player_id) = match store.create_room(
        "local game",
        &args.name,
        game_config.grid_size,
        game_config.duration_secs,
    ) {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = store.start_game(&room_id, &grid) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    println!("Room {}", room_id);

    let mut session = Session::new(
        grid,
        dictionary.as_ref(),
        game_config.duration_secs,
    );
    let mut finder = Finder::new();

    session.start();

    if let Err(e) = play_round(&mut session, &mut finder) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = store.update_player(
        &room_id,
        &player_id,
        session.score(),
        session.found_words(),
    ) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = store.end_game(&room_id) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    println!();
    println!(
        "Final score: {} points from {} words",
        session.score(),
        session.found_words().len(),
    );

    for word in session.found_words() {
        println!("  {}", word);
    }

    if session.phase() == Phase::Running {
        // Reached on end of input before the clock ran out
        log::debug!("round abandoned before the clock ran out");
    }

    if args.dump_room {
        match store.room(&room_id) {
            Ok(room) => match serde_json::to_string_pretty(&room) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
