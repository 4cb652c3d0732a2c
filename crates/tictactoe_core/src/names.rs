//! Player display names and the two-field entry editor.

use crate::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Longest name accepted, in characters.
pub const MAX_NAME_LEN: usize = 15;

/// Immutable display name bound to a mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Mark this player places.
    mark: Mark,
    /// Display name, never blank.
    name: String,
}

impl PlayerIdentity {
    /// Builds an identity from raw input.
    ///
    /// Blank input becomes `"Player X"` / `"Player O"`; longer input is cut
    /// to [`MAX_NAME_LEN`] characters.
    #[instrument]
    pub fn new(mark: Mark, raw: &str) -> Self {
        let name = if raw.trim().is_empty() {
            Self::default_name(mark)
        } else {
            raw.chars().take(MAX_NAME_LEN).collect()
        };
        Self { mark, name }
    }

    /// Name used when the player leaves the field blank.
    pub fn default_name(mark: Mark) -> String {
        format!("Player {}", mark)
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Both players for the whole run; restart does not touch them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Players {
    /// Plays X.
    x: PlayerIdentity,
    /// Plays O.
    o: PlayerIdentity,
}

impl Players {
    /// Builds both identities from raw input.
    pub fn new(x: &str, o: &str) -> Self {
        Self {
            x: PlayerIdentity::new(Mark::X, x),
            o: PlayerIdentity::new(Mark::O, o),
        }
    }

    /// Returns the identity playing `mark`.
    pub fn identity(&self, mark: Mark) -> &PlayerIdentity {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Returns the display name for `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        self.identity(mark).name()
    }

    /// The "<x> (X) vs <o> (O)" headline.
    pub fn matchup(&self) -> String {
        format!("{} (X) vs {} (O)", self.x, self.o)
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Result of submitting the active field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStep {
    /// Moved on to the next field.
    Next(Mark),
    /// Both names captured.
    Done(Players),
}

/// Modal editor for the two names, X first then O.
#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    x_text: String,
    o_text: String,
    x_done: bool,
}

impl NameEntry {
    /// Starts with both fields empty and X active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the fields pre-filled, X still active.
    pub fn with_text(x: &str, o: &str) -> Self {
        Self {
            x_text: x.chars().take(MAX_NAME_LEN).collect(),
            o_text: o.chars().take(MAX_NAME_LEN).collect(),
            x_done: false,
        }
    }

    /// The field currently receiving keystrokes.
    pub fn active_mark(&self) -> Mark {
        if self.x_done { Mark::O } else { Mark::X }
    }

    /// True if `mark`'s field has focus.
    pub fn is_active(&self, mark: Mark) -> bool {
        self.active_mark() == mark
    }

    /// Current text of a field.
    pub fn text(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_text,
            Mark::O => &self.o_text,
        }
    }

    /// Prompt shown above a field.
    pub fn prompt(mark: Mark) -> String {
        format!("Enter name for Player {}:", mark)
    }

    fn active_text_mut(&mut self) -> &mut String {
        if self.x_done {
            &mut self.o_text
        } else {
            &mut self.x_text
        }
    }

    /// Appends a printable character; returns false if it was dropped.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let text = self.active_text_mut();
        if text.chars().count() >= MAX_NAME_LEN {
            return false;
        }
        text.push(ch);
        true
    }

    /// Deletes the last character of the active field.
    pub fn backspace(&mut self) {
        self.active_text_mut().pop();
    }

    /// Confirms the active field.
    #[instrument(skip(self), fields(active = %self.active_mark()))]
    pub fn submit(&mut self) -> EntryStep {
        if !self.x_done {
            self.x_done = true;
            debug!("X name confirmed");
            return EntryStep::Next(Mark::O);
        }
        let players = Players::new(&self.x_text, &self.o_text);
        debug!(matchup = %players.matchup(), "Names confirmed");
        EntryStep::Done(players)
    }
}
