//! UI rendering using ratatui.

mod board;
mod names;

use crate::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_core::BoardGeometry;

pub use board::render_board;
pub use names::render_name_entry;

/// Draws the current screen and returns where the board landed, if shown.
pub fn draw(f: &mut Frame, app: &App) -> Option<BoardGeometry> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let (geometry, help) = match app.screen() {
        Screen::NameEntry(entry) => {
            render_name_entry(f, chunks[1], entry);
            (None, "Type a name, Enter to confirm | Esc: Quit".to_string())
        }
        Screen::Playing(players) => {
            let now = Instant::now();
            let geometry = render_board(f, chunks[1], app, now);

            let status_style = if app.session().evaluate_phase().is_over() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let status = Paragraph::new(vec![
                Line::from(players.matchup()),
                Line::styled(app.status_line().unwrap_or_default(), status_style),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
            f.render_widget(status, chunks[2]);

            let help = format!(
                "Click a cell to play | {}: Restart | Q: Quit",
                app.config().restart_key().to_ascii_uppercase()
            );
            (geometry, help)
        }
    };

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::input::{Click, Command};
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_core::{Coordinate, Players};

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        let mut geometry = None;
        terminal.draw(|f| geometry = draw(f, app)).unwrap();
        app.set_geometry(geometry);
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_mark_visible_on_shortest_playable_terminal() {
        // 10 rows of chrome leave exactly 9 for the board
        let mut terminal = Terminal::new(TestBackend::new(80, 19)).unwrap();
        let mut app = App::with_players(TuiConfig::default(), Players::new("Ann", "Bob"));
        render(&mut terminal, &mut app);

        let geometry = app.geometry().expect("board should fit");
        assert_eq!(*geometry.cell_height(), 3);
        let (x, y) = geometry.cell_origin(Coordinate::new(0, 0).unwrap());
        app.handle_command(Command::Click(Click::new(x + 1, y + 1)));
        assert_eq!(app.session().moves_made(), 1);

        render(&mut terminal, &mut app);
        let buffer = terminal.backend().buffer();
        let mark_drawn = (x..x + geometry.cell_width())
            .flat_map(|col| (y..y + geometry.cell_height()).map(move |row| (col, row)))
            .any(|pos| buffer.cell(pos).is_some_and(|cell| cell.symbol() == "X"));
        assert!(mark_drawn, "X should be drawn inside cell (0, 0)");
    }

    #[test]
    fn test_short_terminal_shows_notice_and_drops_clicks() {
        let mut terminal = Terminal::new(TestBackend::new(80, 18)).unwrap();
        let mut app = App::with_players(TuiConfig::default(), Players::new("Ann", "Bob"));
        render(&mut terminal, &mut app);

        assert!(app.geometry().is_none());
        assert!(screen_text(&terminal).contains("Terminal too small"));

        for y in 0..18 {
            app.handle_command(Command::Click(Click::new(40, y)));
        }
        assert_eq!(app.session().moves_made(), 0);
    }

    #[test]
    fn test_narrow_terminal_has_no_board() {
        let mut terminal = Terminal::new(TestBackend::new(8, 30)).unwrap();
        let mut app = App::with_players(TuiConfig::default(), Players::new("Ann", "Bob"));
        render(&mut terminal, &mut app);
        assert!(app.geometry().is_none());
    }
}
