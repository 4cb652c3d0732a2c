//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side of the board, X or O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Validated row/column pair, each in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Board edge length.
    pub const SIZE: usize = 3;

    /// Builds a coordinate from signed input, rejecting anything off the board.
    ///
    /// Signed arguments let callers pass raw pointer arithmetic (e.g. `-1`)
    /// straight through and get `None` back instead of wrapping.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < Self::SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < Self::SIZE)?;
        Some(Self { row, col })
    }

    /// Builds a coordinate from indices already known to be on the board.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index, top to bottom.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, left to right.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Iterates all nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 grid of cells, indexed by row then column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; Coordinate::SIZE]; Coordinate::SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Overwrites the cell at the given coordinate.
    ///
    /// No rule checking happens here; use [`crate::Session::place_mark`].
    pub(crate) fn set(&mut self, at: Coordinate, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; Coordinate::SIZE]; Coordinate::SIZE] {
        &self.cells
    }

    /// Counts the marks on the grid.
    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells = Default::default();
    }

    /// Formats the grid as a human-readable string.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.mark() {
                        Some(mark) => mark.to_string(),
                        None => ".".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Game status derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// Moves are still accepted.
    #[display("in progress")]
    InProgress,
    /// A mark completed a line.
    #[display("won by {}", _0)]
    WonBy(Mark),
    /// Grid filled with no line.
    #[display("draw")]
    Draw,
}

impl GamePhase {
    /// True for `WonBy` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GamePhase::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GamePhase::WonBy(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(0, 0).is_some());
        assert!(Coordinate::new(2, 2).is_some());
        assert!(Coordinate::new(3, 0).is_none());
        assert!(Coordinate::new(0, -1).is_none());
        assert!(Coordinate::new(-1, 3).is_none());
    }

    #[test]
    fn test_all_coordinates_row_major() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Coordinate::new(0, 0).unwrap());
        assert_eq!(all[5], Coordinate::new(1, 2).unwrap());
        assert_eq!(all[8], Coordinate::new(2, 2).unwrap());
    }

    #[test]
    fn test_grid_display() {
        let mut grid = Grid::new();
        grid.set(Coordinate::new(0, 0).unwrap(), Cell::Marked(Mark::X));
        grid.set(Coordinate::new(1, 1).unwrap(), Cell::Marked(Mark::O));
        assert_eq!(grid.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
        assert_eq!(grid.marks_placed(), 2);
    }
}
