//! Name-entry screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_core::{MAX_NAME_LEN, Mark, NameEntry};

/// Renders both name fields, X above O, with a bar cursor on the active one.
pub fn render_name_entry(f: &mut Frame, area: Rect, entry: &NameEntry) {
    let form = center_rect(area, 40, 8);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(form);

    for (mark, row) in Mark::iter().zip(rows.iter()) {
        let active = entry.is_active(mark);
        let text = if active {
            format!("{}|", entry.text(mark))
        } else {
            entry.text(mark).to_string()
        };
        let border = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let field = Paragraph::new(vec![
            Line::styled(
                NameEntry::prompt(mark),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(text),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("{}/{}", entry.text(mark).chars().count(), MAX_NAME_LEN)),
        );
        f.render_widget(field, *row);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
