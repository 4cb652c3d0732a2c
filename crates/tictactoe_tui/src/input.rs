//! Translation of terminal events into game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A left-button press at a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Click {
    /// Terminal column.
    pub x: u16,
    /// Terminal row.
    pub y: u16,
}

/// What a terminal event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Clear the board (board screen only).
    Restart,
    /// Pointer pressed on screen.
    Click(Click),
    /// Text typed into a name field.
    Type(char),
    /// Delete a character from a name field.
    Backspace,
    /// Confirm the active name field.
    Submit,
}

/// Where keystrokes are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Name fields capture text, so letters are not shortcuts.
    Text,
    /// Letters are shortcuts.
    Board,
}

/// Maps a crossterm event to a command, if it means anything.
pub fn translate(event: &Event, mode: InputMode, restart_key: char) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key, mode, restart_key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, mode: InputMode, restart_key: char) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C closes from any screen
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match (mode, key.code) {
        (_, KeyCode::Esc) => Some(Command::Quit),
        (InputMode::Text, KeyCode::Enter) => Some(Command::Submit),
        (InputMode::Text, KeyCode::Backspace) => Some(Command::Backspace),
        (InputMode::Text, KeyCode::Char(c)) => Some(Command::Type(c)),
        (InputMode::Board, KeyCode::Char(c)) if c.eq_ignore_ascii_case(&restart_key) => {
            Some(Command::Restart)
        }
        (InputMode::Board, KeyCode::Char('q')) => Some(Command::Quit),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(Command::Click(Click::new(mouse.column, mouse.row)))
        }
        _ => None,
    }
}
