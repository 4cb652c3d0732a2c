//! Mapping between screen positions and grid cells.

use crate::Coordinate;
use derive_getters::Getters;
use tracing::instrument;

const SIZE: u16 = Coordinate::SIZE as u16;

/// Placement of the 3x3 board on screen, in terminal cells.
///
/// Board cells tile without gaps: cell `(r, c)` starts at
/// `origin + (c * cell_width, r * cell_height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct BoardGeometry {
    /// Left edge of the board.
    origin_x: u16,
    /// Top edge of the board.
    origin_y: u16,
    /// Width of one cell.
    cell_width: u16,
    /// Height of one cell.
    cell_height: u16,
}

impl BoardGeometry {
    /// Creates a geometry; zero cell sizes are bumped to 1.
    pub fn new(origin_x: u16, origin_y: u16, cell_width: u16, cell_height: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Centres a board of fixed-size cells inside an area.
    ///
    /// If the area is too small the board is pinned to its top-left corner.
    pub fn centered(
        area_x: u16,
        area_y: u16,
        area_width: u16,
        area_height: u16,
        cell_width: u16,
        cell_height: u16,
    ) -> Self {
        let board_w = cell_width.saturating_mul(SIZE);
        let board_h = cell_height.saturating_mul(SIZE);
        Self::new(
            area_x + area_width.saturating_sub(board_w) / 2,
            area_y + area_height.saturating_sub(board_h) / 2,
            cell_width,
            cell_height,
        )
    }

    /// Total board width.
    pub fn width(&self) -> u16 {
        self.cell_width.saturating_mul(SIZE)
    }

    /// Total board height.
    pub fn height(&self) -> u16 {
        self.cell_height.saturating_mul(SIZE)
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, at: Coordinate) -> (u16, u16) {
        (
            self.origin_x + self.cell_width * at.col() as u16,
            self.origin_y + self.cell_height * at.row() as u16,
        )
    }

    /// Converts a click position to `(row, col)` by dividing by the cell size.
    ///
    /// Clicks above, left of, or below the board return `None`. Clicks to the
    /// right still produce a column (possibly `>= 3`) so the rule engine can
    /// reject them as an invalid coordinate.
    #[instrument]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(i32, i32)> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let dy = y - self.origin_y;
        if dy >= self.height() {
            return None;
        }
        let dx = x - self.origin_x;
        let row = i32::from(dy / self.cell_height);
        let col = i32::from(dx / self.cell_width);
        Some((row, col))
    }
}
