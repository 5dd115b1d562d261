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

pub const N_DIRECTIONS: usize = 8;

// The eight compass neighbours of a square, as (row, col) offsets
pub static DIRECTIONS: [(i32, i32); N_DIRECTIONS] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Moves one step in the given direction. Stepping off the top or
/// left edge wraps to a huge coordinate so that a plain bounds check
/// catches it.
pub fn step(row: u32, col: u32, direction: usize) -> (u32, u32) {
    let (row_offset, col_offset) = DIRECTIONS[direction];

    (
        row.wrapping_add_signed(row_offset),
        col.wrapping_add_signed(col_offset),
    )
}
