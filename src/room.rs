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

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

/// Where a room is in its life. Every client watching the room record
/// sees the same value and gates its own session off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Waiting,
    Playing,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub found_words: Vec<String>,
    pub is_host: bool,
}

/// The shared record one game revolves around. The grid travels in
/// its text form so any client can parse it back into a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: HashMap<String, Player>,
    #[serde(default)]
    pub grid: Option<String>,
    pub game_state: GameState,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    pub game_duration: u32,
    #[serde(default)]
    pub grid_size: Option<u32>,
}

static CONSONANTS: [char; 19] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r',
    's', 't', 'v', 'w', 'y', 'z',
];

static VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const MIN_ROOM_ID_LENGTH: usize = 10;
pub const MAX_ROOM_ID_LENGTH: usize = 15;

/// Makes a room id that people can read out loud: a few
/// consonant-vowel syllables followed by some digits, between 10 and
/// 15 characters long.
pub fn generate_room_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::new();

    let n_syllables = if rng.gen_bool(0.5) { 3 } else { 4 };

    for _ in 0..n_syllables {
        id.push(CONSONANTS[rng.gen_range(0..CONSONANTS.len())]);
        id.push(VOWELS[rng.gen_range(0..VOWELS.len())]);

        if rng.gen_bool(0.3) {
            id.push(CONSONANTS[rng.gen_range(0..CONSONANTS.len())]);
        }
    }

    for _ in 0..rng.gen_range(2..=4) {
        write!(&mut id, "{}", rng.gen_range(0..10)).unwrap();
    }

    id.truncate(MAX_ROOM_ID_LENGTH);

    while id.len() < MIN_ROOM_ID_LENGTH {
        write!(&mut id, "{}", rng.gen_range(0..10)).unwrap();
    }

    id
}

/// Makes a random player id shaped like a version 4 UUID
pub fn generate_player_id<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);

    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let mut id = String::with_capacity(36);

    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            id.push('-');
        }

        write!(&mut id, "{:02x}", byte).unwrap();
    }

    id
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn room_id_shape() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let id = generate_room_id(&mut rng);

            assert!(id.len() >= MIN_ROOM_ID_LENGTH);
            assert!(id.len() <= MAX_ROOM_ID_LENGTH);
            assert!(id.chars().all(|ch| {
                ch.is_ascii_lowercase() || ch.is_ascii_digit()
            }));
        }
    }

    #[test]
    fn player_id_shape() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let id = generate_player_id(&mut rng);

            assert_eq!(id.len(), 36);

            for (i, ch) in id.chars().enumerate() {
                if matches!(i, 8 | 13 | 18 | 23) {
                    assert_eq!(ch, '-');
                } else {
                    assert!(ch.is_ascii_hexdigit());
                }
            }

            assert_eq!(id.chars().nth(14), Some('4'));
            assert!(matches!(
                id.chars().nth(19),
                Some('8' | '9' | 'a' | 'b'),
            ));
        }
    }

    #[test]
    fn player_ids_are_distinct() {
        let mut rng = StdRng::seed_from_u64(3);

        let a = generate_player_id(&mut rng);
        let b = generate_player_id(&mut rng);

        assert_ne!(a, b);
    }

    #[test]
    fn room_serialization() {
        let mut players = HashMap::new();
        players.insert(
            "p1".to_string(),
            Player {
                id: "p1".to_string(),
                name: "ana".to_string(),
                score: 90,
                found_words: vec!["cat".to_string(), "cats".to_string()],
                is_host: true,
            },
        );

        let room = Room {
            id: "bakomi123".to_string(),
            name: "lunch break".to_string(),
            players,
            grid: Some("cat\nzzs\nzzz".to_string()),
            game_state: GameState::Playing,
            start_time: None,
            game_duration: 60,
            grid_size: Some(3),
        };

        let json = serde_json::to_string(&room).unwrap();

        assert!(json.contains("\"gameState\":\"playing\""));
        assert!(json.contains("\"gameDuration\":60"));
        assert!(json.contains("\"foundWords\":[\"cat\",\"cats\"]"));
        assert!(json.contains("\"isHost\":true"));

        let back: Room = serde_json::from_str(&json).unwrap();

        assert_eq!(back, room);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = "{\
            \"id\": \"bakomi123\",\
            \"name\": \"lunch break\",\
            \"gameState\": \"waiting\",\
            \"gameDuration\": 60\
        }";

        let room: Room = serde_json::from_str(json).unwrap();

        assert!(room.players.is_empty());
        assert_eq!(room.grid, None);
        assert_eq!(room.start_time, None);
        assert_eq!(room.grid_size, None);
        assert_eq!(room.game_state, GameState::Waiting);
    }
}
