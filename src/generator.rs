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
use super::letters;
use super::word_finder;
use rand::Rng;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

// No board is searched for words longer than this, whatever its size
pub const WORD_LENGTH_CAP: usize = 12;

/// How many distinct words a board must hide before it is considered
/// playable
pub fn min_required_words(size: u32) -> usize {
    ((size - 1) * (size - 1)) as usize * 3 / 2
}

pub fn max_word_length(size: u32) -> usize {
    std::cmp::min(size as usize * 3 / 2, WORD_LENGTH_CAP)
}

// A board full of three-letter words is dull. These two thresholds
// demand a handful of words near the length cap as well.
fn long_word_length(size: u32) -> usize {
    max_word_length(size) * 4 / 5
}

fn required_long_words(size: u32) -> usize {
    std::cmp::max(3, max_word_length(size) / 2)
}

/// Searches random letter boards until one passes the quality
/// thresholds, keeping the best candidate seen as a fallback so that
/// a round can always start.
pub struct Generator {
    max_attempts: u32,
    n_generations: u64,
    last_attempts: u32,
}

impl Generator {
    pub fn new(max_attempts: u32) -> Generator {
        Generator {
            max_attempts: std::cmp::max(1, max_attempts),
            n_generations: 0,
            last_attempts: 0,
        }
    }

    /// How many boards this generator has handed out
    pub fn n_generations(&self) -> u64 {
        self.n_generations
    }

    /// How many candidates the last call looked at
    pub fn last_attempts(&self) -> u32 {
        self.last_attempts
    }

    fn random_grid<R: Rng>(rng: &mut R, size: u32) -> Grid {
        let letters = (0..size * size)
            .map(|_| letters::random_letter(rng))
            .collect::<Vec<char>>();

        // The letter count matches the size by construction
        Grid::new(size, letters).unwrap()
    }

    /// A plain random board with no quality scoring, for when no
    /// dictionary is available yet
    pub fn generate_unchecked<R: Rng>(
        &mut self,
        rng: &mut R,
        size: u32,
    ) -> Grid {
        self.n_generations += 1;
        self.last_attempts = 1;

        Self::random_grid(rng, size)
    }

    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        size: u32,
        dictionary: &Dictionary,
    ) -> Grid {
        self.n_generations += 1;

        let min_words = min_required_words(size);
        let max_length = max_word_length(size);
        let long_length = long_word_length(size);
        let min_long_words = required_long_words(size);

        let mut best: Option<(Grid, usize)> = None;

        for attempt in 1..=self.max_attempts {
            self.last_attempts = attempt;

            let candidate = Self::random_grid(rng, size);
            let words = word_finder::search_words(
                &candidate,
                dictionary,
                max_length,
            );

            let n_long_words = words
                .iter()
                .filter(|word| word.chars().count() >= long_length)
                .count();

            log::debug!(
                "candidate {}: {} words, {} of length {} or more",
                attempt,
                words.len(),
                n_long_words,
                long_length,
            );

            if words.len() >= min_words && n_long_words >= min_long_words {
                log::info!(
                    "accepted board after {} attempts with {} words",
                    attempt,
                    words.len(),
                );
                return candidate;
            }

            if best
                .as_ref()
                .map_or(true, |&(_, n_words)| words.len() > n_words)
            {
                best = Some((candidate, words.len()));
            }
        }

        let (grid, n_words) = best.unwrap();

        log::info!(
            "no board passed the thresholds within {} attempts, \
             falling back to the best seen with {} words",
            self.max_attempts,
            n_words,
        );

        grid
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn thresholds() {
        assert_eq!(min_required_words(5), 24);
        assert_eq!(min_required_words(6), 37);
        assert_eq!(min_required_words(10), 121);

        assert_eq!(max_word_length(5), 7);
        assert_eq!(max_word_length(8), 12);
        assert_eq!(max_word_length(10), 12);

        assert_eq!(long_word_length(5), 5);
        assert_eq!(long_word_length(10), 9);

        assert_eq!(required_long_words(5), 3);
        assert_eq!(required_long_words(10), 6);
    }

    #[test]
    fn falls_back_to_the_best_candidate() {
        // A one-word dictionary can't satisfy the thresholds, so the
        // budget must run out and a board must still come back
        let dictionary = Dictionary::from_words(["cat"]);
        let mut generator = Generator::new(10);
        let mut rng = StdRng::seed_from_u64(1);

        let grid = generator.generate(&mut rng, 5, &dictionary);

        assert_eq!(grid.size(), 5);
        assert_eq!(generator.last_attempts(), 10);
        assert_eq!(generator.n_generations(), 1);

        let words = word_finder::search_words(
            &grid,
            &dictionary,
            max_word_length(5),
        );

        assert!(
            words.len() >= min_required_words(5)
                || generator.last_attempts() == 10,
        );
    }

    #[test]
    fn unchecked_board() {
        let mut generator = Generator::new(DEFAULT_MAX_ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(2);

        let grid = generator.generate_unchecked(&mut rng, 7);

        assert_eq!(grid.size(), 7);
        assert_eq!(generator.n_generations(), 1);

        for cell in grid.cells() {
            assert!(cell.letter.is_ascii_lowercase());
        }
    }

    #[test]
    fn generation_counter_accumulates() {
        let mut generator = Generator::new(1);
        let mut rng = StdRng::seed_from_u64(3);
        let dictionary = Dictionary::from_words(["cat"]);

        generator.generate(&mut rng, 5, &dictionary);
        generator.generate_unchecked(&mut rng, 5);
        generator.generate(&mut rng, 5, &dictionary);

        assert_eq!(generator.n_generations(), 3);
    }
}
