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

use super::dictionary::Dictionary;
use super::grid::Grid;
use super::trace::Trace;
use super::word_finder::MIN_WORD_LENGTH;

/// Points for a word of `length` letters. The bonus grows by half
/// again for every letter past the fourth, so long words are worth
/// far more than a pile of short ones.
pub fn word_score(length: usize) -> u32 {
    let base = length as u32 * 10;
    let extra = length.saturating_sub(3) as u32;

    let bonus = if extra > 0 {
        (1.5f64.powi(extra as i32 - 1) * 20.0).floor() as u32
    } else {
        0
    };

    base + bonus
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// What came of a gesture or a clock tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    WordAccepted { word: String, points: u32 },
    WordRejected(String),
    TooShort,
    Ignored,
    GameOver,
}

/// One player's round: the board, the running selection, the words
/// found so far and the clock. Selection gestures only do anything
/// while the round is running; input arriving after the clock runs
/// out is quietly dropped.
pub struct Session<'a> {
    dictionary: Option<&'a Dictionary>,
    grid: Grid,
    trace: Trace,
    found_words: Vec<String>,
    score: u32,
    phase: Phase,
    duration: u32,
    remaining: u32,
}

impl<'a> Session<'a> {
    pub fn new(
        grid: Grid,
        dictionary: Option<&'a Dictionary>,
        duration_secs: u32,
    ) -> Session<'a> {
        Session {
            dictionary,
            grid,
            trace: Trace::new(),
            found_words: Vec::new(),
            score: 0,
            phase: Phase::NotStarted,
            duration: duration_secs,
            remaining: duration_secs,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
            self.remaining = self.duration;
        }
    }

    /// Advances the clock by one second. Reports the end of the round
    /// exactly once; any further ticks are ignored.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != Phase::Running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.phase = Phase::Over;
            return Some(Event::GameOver);
        }

        None
    }

    pub fn select_start(&mut self, row: u32, col: u32) {
        if self.phase != Phase::Running {
            return;
        }

        let Some(cell) = self.grid.cell(row, col) else {
            return;
        };

        self.trace.start(cell);
    }

    pub fn select_extend(&mut self, row: u32, col: u32) {
        if self.phase != Phase::Running {
            return;
        }

        let Some(cell) = self.grid.cell(row, col) else {
            return;
        };

        self.trace.extend(cell);
    }

    /// Ends the selection gesture and scores it. The selection is
    /// cleared whatever the outcome.
    pub fn select_end(&mut self) -> Event {
        if self.phase != Phase::Running || self.trace.is_empty() {
            self.trace.clear();
            return Event::Ignored;
        }

        let Some(dictionary) = self.dictionary else {
            // No word list yet, so nothing can be checked
            self.trace.clear();
            return Event::Ignored;
        };

        let word = self.trace.word();
        self.trace.clear();

        if word.chars().count() < MIN_WORD_LENGTH {
            return Event::TooShort;
        }

        if dictionary.contains(&word)
            && !self.found_words.iter().any(|found| *found == word)
        {
            let points = word_score(word.chars().count());
            self.score += points;
            self.found_words.push(word.clone());

            Event::WordAccepted { word, points }
        } else {
            Event::WordRejected(word)
        }
    }

    /// Begins a new round on a fresh board, throwing away the words,
    /// score and selection of the finished one.
    pub fn restart(&mut self, grid: Grid) {
        if self.phase != Phase::Over {
            return;
        }

        self.grid = grid;
        self.trace.clear();
        self.found_words.clear();
        self.score = 0;
        self.remaining = self.duration;
        self.phase = Phase::NotStarted;
    }
}
