//! Win detection logic for tic-tac-toe.

use crate::{Cell, Coordinate, Grid, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    Diagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// Returns the coordinates that make up this line.
    pub fn coordinates(self) -> [Coordinate; 3] {
        let at = Coordinate::at;
        match self {
            Line::TopRow => [at(0, 0), at(0, 1), at(0, 2)],
            Line::MiddleRow => [at(1, 0), at(1, 1), at(1, 2)],
            Line::BottomRow => [at(2, 0), at(2, 1), at(2, 2)],
            Line::LeftColumn => [at(0, 0), at(1, 0), at(2, 0)],
            Line::CenterColumn => [at(0, 1), at(1, 1), at(2, 1)],
            Line::RightColumn => [at(0, 2), at(1, 2), at(2, 2)],
            Line::Diagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// True if every cell in the line holds `mark`.
    pub fn is_held_by(self, grid: &Grid, mark: Mark) -> bool {
        self.coordinates()
            .iter()
            .all(|at| grid.get(*at) == Cell::Marked(mark))
    }
}

/// Returns the first line completely held by `mark`.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, mark: Mark) -> Option<Line> {
    Line::iter().find(|line| line.is_held_by(grid, mark))
}

/// Checks whether `mark` holds any full row, column or diagonal.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid, mark: Mark) -> bool {
    winning_line(grid, mark).is_some()
}
