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

use super::grid::{is_adjacent, Cell};

/// The player's in-progress selection: an ordered chain of cells in
/// which every consecutive pair is adjacent and no cell appears
/// twice. Sliding back onto an earlier cell cuts the chain back to
/// that cell instead of being refused.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    cells: Vec<Cell>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace { cells: Vec::new() }
    }

    /// Begins a fresh selection at `cell`, discarding any previous one
    pub fn start(&mut self, cell: Cell) {
        self.cells.clear();
        self.cells.push(cell);
    }

    /// Extends the selection onto `cell`. Re-entering a cell already
    /// in the chain truncates back to it; otherwise the cell is
    /// appended when it adjoins the last one. Anything else is
    /// ignored. Returns whether the selection changed.
    pub fn extend(&mut self, cell: Cell) -> bool {
        let Some(&last) = self.cells.last() else {
            return false;
        };

        if let Some(pos) = self.position_of(cell.row, cell.col) {
            if pos + 1 < self.cells.len() {
                self.cells.truncate(pos + 1);
                return true;
            }

            return false;
        }

        if is_adjacent((last.row, last.col), (cell.row, cell.col)) {
            self.cells.push(cell);
            return true;
        }

        false
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn position_of(&self, row: u32, col: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.row == row && cell.col == col)
    }

    /// The selection's letters as a lowercase word
    pub fn word(&self) -> String {
        self.cells
            .iter()
            .flat_map(|cell| cell.letter.to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grid::Grid;

    fn cell(grid: &Grid, row: u32, col: u32) -> Cell {
        grid.cell(row, col).unwrap()
    }

    fn make_grid() -> Grid {
        "word\n\
         igno\n\
         lets\n\
         abcd"
            .parse::<Grid>()
            .unwrap()
    }

    fn positions(trace: &Trace) -> Vec<(u32, u32)> {
        trace
            .cells()
            .iter()
            .map(|cell| (cell.row, cell.col))
            .collect()
    }

    #[test]
    fn start_replaces_the_selection() {
        let grid = make_grid();
        let mut trace = Trace::new();

        trace.start(cell(&grid, 0, 0));
        trace.extend(cell(&grid, 0, 1));
        trace.start(cell(&grid, 2, 2));

        assert_eq!(positions(&trace), &[(2, 2)]);
    }

    #[test]
    fn extend_keeps_pairs_adjacent() {
        let grid = make_grid();
        let mut trace = Trace::new();

        trace.start(cell(&grid, 0, 0));
        assert!(trace.extend(cell(&grid, 0, 1)));
        assert!(trace.extend(cell(&grid, 1, 2)));
        assert!(trace.extend(cell(&grid, 2, 2)));

        // A cell two columns away is ignored
        assert!(!trace.extend(cell(&grid, 2, 0)));

        assert_eq!(
            positions(&trace),
            &[(0, 0), (0, 1), (1, 2), (2, 2)],
        );

        for pair in trace.cells().windows(2) {
            assert!(is_adjacent(
                (pair[0].row, pair[0].col),
                (pair[1].row, pair[1].col),
            ));
        }
    }

    #[test]
    fn extend_refuses_duplicates() {
        let grid = make_grid();
        let mut trace = Trace::new();

        trace.start(cell(&grid, 0, 0));
        trace.extend(cell(&grid, 0, 1));

        // Re-entering the last cell does nothing
        assert!(!trace.extend(cell(&grid, 0, 1)));
        assert_eq!(positions(&trace), &[(0, 0), (0, 1)]);
    }

    #[test]
    fn reentering_an_earlier_cell_backtracks() {
        let grid = make_grid();
        let mut trace = Trace::new();

        trace.start(cell(&grid, 0, 0));
        trace.extend(cell(&grid, 0, 1));
        trace.extend(cell(&grid, 0, 2));
        trace.extend(cell(&grid, 0, 3));

        assert!(trace.extend(cell(&grid, 0, 1)));

        assert_eq!(positions(&trace), &[(0, 0), (0, 1)]);

        // The cut-off cells can be selected again afterwards
        assert!(trace.extend(cell(&grid, 0, 2)));
        assert_eq!(positions(&trace), &[(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn extend_without_start_is_ignored() {
        let grid = make_grid();
        let mut trace = Trace::new();

        assert!(!trace.extend(cell(&grid, 0, 0)));
        assert!(trace.is_empty());
    }

    #[test]
    fn word() {
        let grid = make_grid();
        let mut trace = Trace::new();

        trace.start(cell(&grid, 0, 0));
        trace.extend(cell(&grid, 0, 1));
        trace.extend(cell(&grid, 0, 2));
        trace.extend(cell(&grid, 0, 3));

        assert_eq!(&trace.word(), "word");

        trace.clear();
        assert_eq!(&trace.word(), "");
        assert!(trace.is_empty());
    }
}
