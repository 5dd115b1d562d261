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

use super::dictionary::{Dictionary, Walker};
use super::directions::{self, N_DIRECTIONS};
use super::grid::Grid;
use std::collections::HashSet;

/// Words shorter than this never count
pub const MIN_WORD_LENGTH: usize = 3;

struct SearchEntry<'a> {
    row: u32,
    col: u32,
    walker: Walker<'a>,
    next_direction: usize,
}

// Pops entries until one still has a direction left to try,
// unmarking each popped cell on the way out
fn resume_from_ancestor(
    stack: &mut Vec<SearchEntry>,
    visited: &mut [bool],
    size: u32,
) {
    while let Some(entry) = stack.pop() {
        visited[(entry.row * size + entry.col) as usize] = false;

        if entry.next_direction < N_DIRECTIONS {
            stack.push(entry);
            break;
        }
    }
}

fn search_from_cell(
    grid: &Grid,
    dictionary: &Dictionary,
    max_length: usize,
    start_row: u32,
    start_col: u32,
    words: &mut HashSet<String>,
) {
    let size = grid.size();

    let mut visited = vec![false; (size * size) as usize];

    let mut stack = vec![SearchEntry {
        row: start_row,
        col: start_col,
        walker: dictionary.walker(),
        next_direction: 0,
    }];

    while let Some(mut entry) = stack.pop() {
        if entry.row >= size
            || entry.col >= size
            || visited[(entry.row * size + entry.col) as usize]
            || entry.walker.step(grid.at(entry.row, entry.col)).is_none()
        {
            // The cell is off the board, already part of the path or
            // its letters aren't the prefix of any word
            resume_from_ancestor(&mut stack, &mut visited, size);
            continue;
        }

        let letter = grid.at(entry.row, entry.col);
        let next_walker = entry.walker.step(letter).unwrap();

        visited[(entry.row * size + entry.col) as usize] = true;

        let word_length = stack.len() + 1;

        if word_length >= MIN_WORD_LENGTH && next_walker.is_word() {
            let mut word = stack
                .iter()
                .map(|entry| grid.at(entry.row, entry.col))
                .collect::<String>();
            word.push(letter);
            words.insert(word);
        }

        if word_length >= max_length {
            visited[(entry.row * size + entry.col) as usize] = false;
            resume_from_ancestor(&mut stack, &mut visited, size);
            continue;
        }

        let (next_row, next_col) =
            directions::step(entry.row, entry.col, entry.next_direction);

        let next_entry = SearchEntry {
            row: next_row,
            col: next_col,
            walker: next_walker,
            next_direction: 0,
        };

        entry.next_direction += 1;
        stack.push(entry);

        stack.push(next_entry);
    }
}

/// Collects every dictionary word that can be traced on the grid
/// through a chain of adjacent cells with no cell used twice, up to
/// `max_length` letters.
pub fn search_words(
    grid: &Grid,
    dictionary: &Dictionary,
    max_length: usize,
) -> HashSet<String> {
    let mut words = HashSet::new();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            search_from_cell(
                grid,
                dictionary,
                max_length,
                row,
                col,
                &mut words,
            );
        }
    }

    words
}

struct RouteEntry {
    row: u32,
    col: u32,
    next_direction: usize,
    word_start: usize,
}

/// Finds a cell path that spells a given word, so that a typed word
/// can be replayed as a selection gesture.
pub struct Finder {
    stack: Vec<RouteEntry>,
    visited: Vec<bool>,
}

impl Finder {
    pub fn new() -> Finder {
        Finder {
            stack: Vec::new(),
            visited: Vec::new(),
        }
    }

    fn find_from_cell(
        &mut self,
        grid: &Grid,
        word: &str,
        start_row: u32,
        start_col: u32,
    ) -> Option<Vec<(u32, u32)>> {
        let size = grid.size();

        self.stack.clear();
        self.stack.push(RouteEntry {
            row: start_row,
            col: start_col,
            next_direction: 0,
            word_start: 0,
        });

        self.visited.clear();
        self.visited.resize((size * size) as usize, false);

        while let Some(mut entry) = self.stack.pop() {
            let letter = word.split_at(entry.word_start).1.chars().next();

            if entry.row >= size
                || entry.col >= size
                || self.visited[(entry.row * size + entry.col) as usize]
                || letter.map_or(true, |letter| {
                    grid.at(entry.row, entry.col) != letter
                })
            {
                // Backtrack
                while let Some(entry) = self.stack.pop() {
                    self.visited[
                        (entry.row * size + entry.col) as usize
                    ] = false;

                    if entry.next_direction < N_DIRECTIONS {
                        self.stack.push(entry);
                        break;
                    }
                }

                continue;
            }

            self.visited[(entry.row * size + entry.col) as usize] = true;

            let next_word_start =
                entry.word_start + letter.unwrap().len_utf8();

            if word.split_at(next_word_start).1.is_empty() {
                let mut route = self
                    .stack
                    .iter()
                    .map(|entry| (entry.row, entry.col))
                    .collect::<Vec<_>>();
                route.push((entry.row, entry.col));
                return Some(route);
            }

            let (next_row, next_col) = directions::step(
                entry.row,
                entry.col,
                entry.next_direction,
            );

            let next_entry = RouteEntry {
                row: next_row,
                col: next_col,
                word_start: next_word_start,
                next_direction: 0,
            };

            entry.next_direction += 1;
            self.stack.push(entry);

            self.stack.push(next_entry);
        }

        None
    }

    pub fn find(
        &mut self,
        grid: &Grid,
        word: &str,
    ) -> Option<Vec<(u32, u32)>> {
        if word.is_empty() {
            return None;
        }

        for row in 0..grid.size() {
            for col in 0..grid.size() {
                if let Some(route) =
                    self.find_from_cell(grid, word, row, col)
                {
                    return Some(route);
                }
            }
        }

        None
    }
}

impl Default for Finder {
    fn default() -> Finder {
        Finder::new()
    }
}
