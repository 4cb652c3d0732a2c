//! Placement errors.

use crate::GamePhase;
use derive_more::{Display, Error};

/// Why a mark could not be placed.
///
/// Every variant is a caller-input problem; the grid is left untouched and
/// the same player is still to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(#[error(not(source))] GamePhase),
}
