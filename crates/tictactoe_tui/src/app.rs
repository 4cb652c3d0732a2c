//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{Click, Command, InputMode};
use tictactoe_core::{BannerFade, BoardGeometry, EntryStep, GamePhase, NameEntry, Players, Session};
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug)]
pub enum Screen {
    /// Collecting the two names.
    NameEntry(NameEntry),
    /// The board.
    Playing(Players),
}

/// Main application state.
///
/// Owns the rule session outright; rendering and input only see it
/// through this struct.
#[derive(Debug)]
pub struct App {
    config: TuiConfig,
    screen: Screen,
    session: Session,
    fade: Option<BannerFade>,
    geometry: Option<BoardGeometry>,
    should_quit: bool,
}

impl App {
    /// Creates an application that starts on the name-entry screen.
    pub fn new(config: TuiConfig, entry: NameEntry) -> Self {
        Self {
            config,
            screen: Screen::NameEntry(entry),
            session: Session::new(),
            fade: None,
            geometry: None,
            should_quit: false,
        }
    }

    /// Creates an application that goes straight to the board.
    pub fn with_players(config: TuiConfig, players: Players) -> Self {
        info!(matchup = %players.matchup(), "Starting with preset names");
        Self {
            screen: Screen::Playing(players),
            ..Self::new(config, NameEntry::new())
        }
    }

    /// Gets the config.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Gets the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the rule session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the running banner fade, if a win is being shown.
    pub fn fade(&self) -> Option<&BannerFade> {
        self.fade.as_ref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How keystrokes should be interpreted right now.
    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::NameEntry(_) => InputMode::Text,
            Screen::Playing(_) => InputMode::Board,
        }
    }

    /// Where the board was last drawn, if it fit.
    pub fn geometry(&self) -> Option<BoardGeometry> {
        self.geometry
    }

    /// Stores where the board was last drawn; `None` drops clicks.
    pub fn set_geometry(&mut self, geometry: Option<BoardGeometry>) {
        self.geometry = geometry;
    }

    /// Text for the turn line or the end-of-game line.
    pub fn status_line(&self) -> Option<String> {
        let Screen::Playing(players) = &self.screen else {
            return None;
        };
        let key = self.config.restart_key();
        let line = match self.session.evaluate_phase() {
            GamePhase::InProgress => {
                let mark = self.session.current_player();
                format!("{}'s turn ({})", players.name_of(mark), mark)
            }
            GamePhase::WonBy(mark) => {
                format!("{} wins! Press '{}' to play again.", players.name_of(mark), key)
            }
            GamePhase::Draw => format!("It's a draw! Press '{}' to play again.", key),
        };
        Some(line)
    }

    /// Banner text while a win is being celebrated.
    pub fn banner(&self) -> Option<String> {
        let Screen::Playing(players) = &self.screen else {
            return None;
        };
        self.session
            .evaluate_phase()
            .winner()
            .map(|mark| format!("{} wins!", players.name_of(mark)))
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Restart => self.restart(),
            Command::Click(click) => self.click(click),
            Command::Type(ch) => {
                if let Screen::NameEntry(entry) = &mut self.screen {
                    entry.push(ch);
                }
            }
            Command::Backspace => {
                if let Screen::NameEntry(entry) = &mut self.screen {
                    entry.backspace();
                }
            }
            Command::Submit => self.submit_name(),
        }
    }

    /// Advances per-frame animation.
    pub fn tick(&mut self) {
        if let Some(fade) = &mut self.fade {
            fade.tick();
        }
    }

    fn submit_name(&mut self) {
        let Screen::NameEntry(entry) = &mut self.screen else {
            return;
        };
        if let EntryStep::Done(players) = entry.submit() {
            info!(matchup = %players.matchup(), "Names entered, starting game");
            self.screen = Screen::Playing(players);
        }
    }

    fn click(&mut self, click: Click) {
        if !matches!(self.screen, Screen::Playing(_)) {
            return;
        }
        let Some((row, col)) = self.geometry.and_then(|g| g.cell_at(click.x, click.y)) else {
            debug!(?click, "Click outside board");
            return;
        };

        match self.session.play(row, col) {
            Ok(GamePhase::WonBy(mark)) => {
                info!(%mark, "Game won");
                self.fade = Some(BannerFade::start(self.config.fade_duration()));
            }
            Ok(GamePhase::Draw) => info!("Game drawn"),
            Ok(GamePhase::InProgress) => {}
            Err(e) => debug!(error = %e, "Click ignored"),
        }
    }

    fn restart(&mut self) {
        if !matches!(self.screen, Screen::Playing(_)) {
            return;
        }
        self.session.restart();
        self.fade = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, Coordinate, Mark};

    fn playing_app() -> App {
        let mut app = App::with_players(TuiConfig::default(), Players::new("Ann", "Bob"));
        app.set_geometry(Some(BoardGeometry::new(0, 0, 10, 5)));
        app
    }

    fn click_cell(app: &mut App, row: u16, col: u16) {
        app.handle_command(Command::Click(Click::new(col * 10 + 1, row * 5 + 1)));
    }

    #[test]
    fn test_name_entry_flow() {
        let mut app = App::new(TuiConfig::default(), NameEntry::new());
        assert_eq!(app.input_mode(), InputMode::Text);

        for ch in "Ann".chars() {
            app.handle_command(Command::Type(ch));
        }
        app.handle_command(Command::Submit);
        // Blank O name
        app.handle_command(Command::Submit);

        let Screen::Playing(players) = app.screen() else {
            panic!("Should be on the board after two names");
        };
        assert_eq!(players.name_of(Mark::X), "Ann");
        assert_eq!(players.name_of(Mark::O), "Player O");
        assert_eq!(app.input_mode(), InputMode::Board);
    }

    #[test]
    fn test_click_places_mark_and_updates_turn_line() {
        let mut app = playing_app();
        assert_eq!(app.status_line().unwrap(), "Ann's turn (X)");

        click_cell(&mut app, 1, 2);
        let at = Coordinate::new(1, 2).unwrap();
        assert_eq!(app.session().grid().get(at), Cell::Marked(Mark::X));
        assert_eq!(app.status_line().unwrap(), "Bob's turn (O)");
    }

    #[test]
    fn test_click_on_occupied_keeps_turn() {
        let mut app = playing_app();
        click_cell(&mut app, 0, 0);
        click_cell(&mut app, 0, 0);
        assert_eq!(app.session().moves_made(), 1);
        assert_eq!(app.session().current_player(), Mark::O);
    }

    #[test]
    fn test_click_ignored_without_geometry() {
        let mut app = playing_app();
        app.set_geometry(None);
        click_cell(&mut app, 0, 0);
        assert_eq!(app.session().moves_made(), 0);
    }

    #[test]
    fn test_click_right_of_board_ignored() {
        let mut app = playing_app();
        app.handle_command(Command::Click(Click::new(35, 1)));
        assert_eq!(app.session().moves_made(), 0);
        assert_eq!(app.session().current_player(), Mark::X);
    }

    #[test]
    fn test_win_starts_banner_and_restart_clears() {
        let mut app = playing_app();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click_cell(&mut app, row, col);
        }
        assert!(app.fade().is_some());
        assert_eq!(app.banner().unwrap(), "Ann wins!");
        assert!(app.status_line().unwrap().starts_with("Ann wins!"));

        app.tick();
        app.handle_command(Command::Restart);
        assert!(app.fade().is_none());
        assert!(app.banner().is_none());
        assert_eq!(app.session().moves_made(), 0);
        assert_eq!(app.status_line().unwrap(), "Ann's turn (X)");
    }

    #[test]
    fn test_quit() {
        let mut app = playing_app();
        assert!(!app.should_quit());
        app.handle_command(Command::Quit);
        assert!(app.should_quit());
    }
}
