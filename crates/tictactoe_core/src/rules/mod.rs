//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Grid`]. They hold no state, so the
//! session can compose them in whatever order the phase evaluation needs.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner, winning_line};
