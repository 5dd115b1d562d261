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

use super::generator::DEFAULT_MAX_ATTEMPTS;
use std::fmt;

pub const MIN_GRID_SIZE: u32 = 5;
pub const MAX_GRID_SIZE: u32 = 10;
pub const DEFAULT_GRID_SIZE: u32 = 5;

pub const MIN_DURATION: u32 = 10;
pub const MAX_DURATION: u32 = 600;
pub const DEFAULT_DURATION: u32 = 60;

/// The knobs a room's host gets to set for a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: u32,
    pub duration_secs: u32,
    pub max_attempts: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    BadGridSize(u32),
    BadDuration(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::BadGridSize(size) => {
                write!(
                    f,
                    "grid size {} out of range {}–{}",
                    size, MIN_GRID_SIZE, MAX_GRID_SIZE,
                )
            }
            ConfigError::BadDuration(duration) => {
                write!(
                    f,
                    "game duration {}s out of range {}–{}s",
                    duration, MIN_DURATION, MAX_DURATION,
                )
            }
        }
    }
}

impl GameConfig {
    pub fn new(
        grid_size: u32,
        duration_secs: u32,
    ) -> Result<GameConfig, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ConfigError::BadGridSize(grid_size));
        }

        if !(MIN_DURATION..=MAX_DURATION).contains(&duration_secs) {
            return Err(ConfigError::BadDuration(duration_secs));
        }

        Ok(GameConfig {
            grid_size,
            duration_secs,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            duration_secs: DEFAULT_DURATION,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds() {
        assert!(GameConfig::new(5, 60).is_ok());
        assert!(GameConfig::new(10, 600).is_ok());

        assert_eq!(
            GameConfig::new(4, 60).unwrap_err(),
            ConfigError::BadGridSize(4),
        );
        assert_eq!(
            GameConfig::new(11, 60).unwrap_err(),
            ConfigError::BadGridSize(11),
        );
        assert_eq!(
            GameConfig::new(5, 5).unwrap_err(),
            ConfigError::BadDuration(5),
        );
        assert_eq!(
            GameConfig::new(5, 601).unwrap_err(),
            ConfigError::BadDuration(601),
        );
    }

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();

        assert!(
            GameConfig::new(config.grid_size, config.duration_secs)
                .is_ok(),
        );
    }
}
