//! Draw detection logic for tic-tac-toe.

use crate::Grid;
use tracing::instrument;

/// Checks if the grid is full (no empty cells).
///
/// A full grid with no winner indicates a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.rows().iter().flatten().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Cell, Coordinate, Mark};

    fn fill(rows: [&str; 3]) -> Grid {
        let mut grid = Grid::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Marked(Mark::X),
                    'O' => Cell::Marked(Mark::O),
                    _ => Cell::Empty,
                };
                grid.set(Coordinate::new(r as i32, c as i32).unwrap(), cell);
            }
        }
        grid
    }

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(&Grid::new()));
    }

    #[test]
    fn test_partial_grid_not_full() {
        let grid = fill(["XOX", "OX.", "OXO"]);
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_full_grid_without_line() {
        let grid = fill(["XOX", "XOO", "OXX"]);
        assert!(is_full(&grid));
        assert!(!check_winner(&grid, Mark::X));
        assert!(!check_winner(&grid, Mark::O));
    }

    #[test]
    fn test_full_grid_with_line() {
        let grid = fill(["XXX", "OOX", "XOO"]);
        assert!(is_full(&grid));
        assert!(check_winner(&grid, Mark::X));
    }
}
