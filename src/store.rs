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

use super::grid::Grid;
use super::room::{
    generate_player_id, generate_room_id, GameState, Player, Room,
};
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    RoomNotFound(String),
    PlayerNotFound(String),
    GameAlreadyStarted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::RoomNotFound(id) => {
                write!(f, "room not found: {}", id)
            }
            StoreError::PlayerNotFound(id) => {
                write!(f, "player not found: {}", id)
            }
            StoreError::GameAlreadyStarted => {
                write!(f, "game already started, joining is disabled")
            }
        }
    }
}

/// The few operations the game needs from whatever keeps the shared
/// room records. Scores and found words flow out through
/// `update_player`; everything else a client learns by reading the
/// room snapshot back.
pub trait RoomStore {
    /// Creates a room with its host already seated. Returns the room
    /// id and the host's player id.
    fn create_room(
        &mut self,
        name: &str,
        host_name: &str,
        grid_size: u32,
        game_duration: u32,
    ) -> Result<(String, String), StoreError>;

    /// Seats a new player. Refused unless the room is still waiting.
    fn join_room(
        &mut self,
        room_id: &str,
        player_name: &str,
    ) -> Result<String, StoreError>;

    fn leave_room(
        &mut self,
        room_id: &str,
        player_id: &str,
    ) -> Result<(), StoreError>;

    /// Publishes the board and flips the room to playing
    fn start_game(
        &mut self,
        room_id: &str,
        grid: &Grid,
    ) -> Result<(), StoreError>;

    fn end_game(&mut self, room_id: &str) -> Result<(), StoreError>;

    fn update_player(
        &mut self,
        room_id: &str,
        player_id: &str,
        score: u32,
        found_words: &[String],
    ) -> Result<(), StoreError>;

    fn room(&self, room_id: &str) -> Result<Room, StoreError>;
}

/// An in-process store. The real game syncs rooms through an external
/// service; this one backs tests and same-machine play.
#[derive(Default)]
pub struct MemoryStore {
    rooms: HashMap<String, Room>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore {
            rooms: HashMap::new(),
        }
    }

    fn room_mut(&mut self, room_id: &str) -> Result<&mut Room, StoreError> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| StoreError::RoomNotFound(room_id.to_string()))
    }
}

impl RoomStore for MemoryStore {
    fn create_room(
        &mut self,
        name: &str,
        host_name: &str,
        grid_size: u32,
        game_duration: u32,
    ) -> Result<(String, String), StoreError> {
        let mut rng = rand::thread_rng();

        let room_id = generate_room_id(&mut rng);
        let player_id = generate_player_id(&mut rng);

        let host = Player {
            id: player_id.clone(),
            name: host_name.to_string(),
            score: 0,
            found_words: Vec::new(),
            is_host: true,
        };

        let mut players = HashMap::new();
        players.insert(player_id.clone(), host);

        let room = Room {
            id: room_id.clone(),
            name: name.to_string(),
            players,
            grid: None,
            game_state: GameState::Waiting,
            start_time: None,
            game_duration,
            grid_size: Some(grid_size),
        };

        self.rooms.insert(room_id.clone(), room);

        Ok((room_id, player_id))
    }

    fn join_room(
        &mut self,
        room_id: &str,
        player_name: &str,
    ) -> Result<String, StoreError> {
        let room = self.room_mut(room_id)?;

        if room.game_state != GameState::Waiting {
            return Err(StoreError::GameAlreadyStarted);
        }

        let player_id = generate_player_id(&mut rand::thread_rng());

        let player = Player {
            id: player_id.clone(),
            name: player_name.to_string(),
            score: 0,
            found_words: Vec::new(),
            is_host: false,
        };

        room.players.insert(player_id.clone(), player);

        Ok(player_id)
    }

    fn leave_room(
        &mut self,
        room_id: &str,
        player_id: &str,
    ) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;

        room.players
            .remove(player_id)
            .map(|_| ())
            .ok_or_else(|| {
                StoreError::PlayerNotFound(player_id.to_string())
            })
    }

    fn start_game(
        &mut self,
        room_id: &str,
        grid: &Grid,
    ) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;

        room.grid = Some(grid.to_string());
        room.grid_size = Some(grid.size());
        room.game_state = GameState::Playing;
        room.start_time = Some(Utc::now());

        // A new round, so everyone's tally starts over
        for player in room.players.values_mut() {
            player.score = 0;
            player.found_words.clear();
        }

        Ok(())
    }

    fn end_game(&mut self, room_id: &str) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;

        room.game_state = GameState::Finished;

        Ok(())
    }

    fn update_player(
        &mut self,
        room_id: &str,
        player_id: &str,
        score: u32,
        found_words: &[String],
    ) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;

        let player = room.players.get_mut(player_id).ok_or_else(|| {
            StoreError::PlayerNotFound(player_id.to_string())
        })?;

        player.score = score;
        player.found_words = found_words.to_vec();

        Ok(())
    }

    fn room(&self, room_id: &str) -> Result<Room, StoreError> {
        self.rooms
            .get(room_id)
            .cloned()
            .ok_or_else(|| StoreError::RoomNotFound(room_id.to_string()))
    }
}
