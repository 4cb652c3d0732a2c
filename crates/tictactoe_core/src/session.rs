//! The rule engine: one owned game session.

use crate::rules::{self, Line};
use crate::{Cell, Coordinate, GamePhase, Grid, Mark, PlaceError};
use tracing::{debug, info, instrument};

/// Grid, turn and last mover for a single game.
///
/// The phase is never stored. It is recomputed from the grid and the mark
/// that moved last, so it cannot drift out of sync with the cells.
///
/// Sessions are not serde types; every state is reached by playing moves:
///
/// ```compile_fail
/// fn assert_serialize<T: serde::Serialize>() {}
/// assert_serialize::<tictactoe_core::Session>();
/// ```
///
/// ```compile_fail
/// fn assert_deserialize<T: serde::de::DeserializeOwned>() {}
/// assert_deserialize::<tictactoe_core::Session>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    current_player: Mark,
    last_mover: Option<Mark>,
}

impl Session {
    /// Creates a session with an empty grid and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            current_player: Mark::X,
            last_mover: None,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mark expected to move next.
    ///
    /// Frozen once the game is over.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the mark placed by the most recent successful move.
    pub fn last_mover(&self) -> Option<Mark> {
        self.last_mover
    }

    /// Number of marks on the grid.
    pub fn moves_made(&self) -> usize {
        self.grid.marks_placed()
    }

    /// Places `mark` at `(row, col)` and returns the resulting phase.
    ///
    /// On failure nothing changes: not the grid, not the turn.
    #[instrument(skip(self), fields(moves = self.moves_made()))]
    pub fn place_mark(&mut self, row: i32, col: i32, mark: Mark) -> Result<GamePhase, PlaceError> {
        let phase = self.evaluate_phase();
        if phase.is_over() {
            debug!(%phase, "Rejected move after game end");
            return Err(PlaceError::GameAlreadyOver(phase));
        }

        let at = Coordinate::new(row, col).ok_or(PlaceError::InvalidCoordinate { row, col })?;

        if !self.grid.get(at).is_empty() {
            debug!(%at, "Rejected move on occupied cell");
            return Err(PlaceError::CellOccupied {
                row: at.row(),
                col: at.col(),
            });
        }

        self.grid.set(at, Cell::Marked(mark));
        self.last_mover = Some(mark);

        let phase = self.evaluate_phase();
        if phase == GamePhase::InProgress {
            self.current_player = mark.opponent();
        }

        info!(%mark, %at, %phase, "Mark placed");
        Ok(phase)
    }

    /// Places the current player's mark at `(row, col)`.
    pub fn play(&mut self, row: i32, col: i32) -> Result<GamePhase, PlaceError> {
        self.place_mark(row, col, self.current_player)
    }

    /// True if `mark` holds a full row, column or diagonal.
    pub fn check_winner(&self, mark: Mark) -> bool {
        rules::check_winner(&self.grid, mark)
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.grid)
    }

    /// Derives the phase: a line for the last mover wins, else a full grid
    /// draws, else play continues.
    ///
    /// Only the last mover is checked. A placement can only complete lines
    /// for the mark placed, and the opponent was checked on their own move,
    /// so an unnoticed opponent line is impossible.
    #[instrument(skip(self))]
    pub fn evaluate_phase(&self) -> GamePhase {
        let Some(mover) = self.last_mover else {
            return GamePhase::InProgress;
        };

        debug_assert!(
            !self.check_winner(mover.opponent()),
            "opponent of {mover} holds a line that was never reported"
        );

        if self.check_winner(mover) {
            GamePhase::WonBy(mover)
        } else if self.is_full() {
            GamePhase::Draw
        } else {
            GamePhase::InProgress
        }
    }

    /// The completed line, once the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.last_mover
            .and_then(|mover| rules::winning_line(&self.grid, mover))
    }

    /// Clears the grid and hands the first move back to X.
    #[instrument(skip(self), fields(moves = self.moves_made()))]
    pub fn restart(&mut self) {
        self.grid.clear();
        self.current_player = Mark::X;
        self.last_mover = None;
        info!("Session restarted");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
