//! Two-player tic-tac-toe rules.
//!
//! Pure logic with no I/O. A front end owns a [`Session`], feeds it moves
//! from its input handling and renders whatever state it reports back.
//!
//! # Architecture
//!
//! - **Session**: grid, turn and derived phase for one game
//! - **Rules**: win and draw detection over a grid
//! - **Names**: player identities and the name-entry editor
//! - **Fade**: frame-driven banner animation
//! - **Geometry**: screen position to cell mapping
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GamePhase, Mark, Session};
//!
//! let mut session = Session::new();
//! session.place_mark(0, 0, Mark::X).unwrap();
//! assert_eq!(session.current_player(), Mark::O);
//! assert_eq!(session.evaluate_phase(), GamePhase::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod fade;
mod geometry;
mod names;
mod rules;
mod session;
mod types;

pub use error::PlaceError;
pub use fade::{BannerFade, DEFAULT_FADE_DURATION, FADE_STEP};
pub use geometry::BoardGeometry;
pub use names::{EntryStep, MAX_NAME_LEN, NameEntry, PlayerIdentity, Players};
pub use rules::{Line, check_winner, is_full, winning_line};
pub use session::Session;
pub use types::{Cell, Coordinate, GamePhase, Grid, Mark};
