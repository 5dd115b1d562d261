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

use rand::Rng;

// Letters are drawn from four frequency tiers rather than uniformly
// so that a board tends toward pronounceable clusters with words in
// them. The weights are percentages and must sum to 100.
static TIERS: [(u32, &[char]); 4] = [
    (38, &['a', 'e', 'i', 'o', 'u']),
    (35, &['t', 'n', 's', 'r', 'h', 'l', 'd']),
    (20, &['c', 'm', 'f', 'p', 'g', 'w', 'y', 'b']),
    (7, &['v', 'k', 'j', 'x', 'q', 'z']),
];

pub fn random_letter<R: Rng>(rng: &mut R) -> char {
    let mut roll = rng.gen_range(0..100u32);

    for &(weight, letters) in TIERS.iter() {
        if roll < weight {
            return letters[rng.gen_range(0..letters.len())];
        }

        roll -= weight;
    }

    unreachable!("tier weights must sum to 100");
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn weights_sum_to_one_hundred() {
        assert_eq!(
            TIERS.iter().map(|&(weight, _)| weight).sum::<u32>(),
            100,
        );
    }

    #[test]
    fn tiers_cover_the_alphabet() {
        let mut letters = TIERS
            .iter()
            .flat_map(|&(_, letters)| letters.iter().copied())
            .collect::<Vec<char>>();

        letters.sort_unstable();

        assert_eq!(letters, ('a'..='z').collect::<Vec<char>>());
    }

    #[test]
    fn distribution_favours_vowels() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = HashMap::new();

        const N_DRAWS: u32 = 100_000;

        for _ in 0..N_DRAWS {
            *counts.entry(random_letter(&mut rng)).or_insert(0u32) += 1;
        }

        let tier_count = |letters: &[char]| -> u32 {
            letters
                .iter()
                .map(|letter| counts.get(letter).copied().unwrap_or(0))
                .sum()
        };

        let vowels = tier_count(TIERS[0].1);
        let rare = tier_count(TIERS[3].1);

        // 38% and 7% of the draws, with a generous margin
        assert!(vowels > N_DRAWS * 34 / 100);
        assert!(vowels < N_DRAWS * 42 / 100);
        assert!(rare > N_DRAWS * 4 / 100);
        assert!(rare < N_DRAWS * 10 / 100);
    }
}
