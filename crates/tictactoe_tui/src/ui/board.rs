//! Tic-tac-toe board rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Instant;
use tictactoe_core::{BoardGeometry, Coordinate, Mark};
use unicode_width::UnicodeWidthStr;

/// Smallest cell that still fits a border around its mark.
const MIN_CELL: u16 = 3;

/// Renders the board into `area` and returns its geometry.
///
/// Returns `None` when the area cannot hold three minimum-size cells each
/// way; a notice is drawn instead and no click maps to a cell.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, now: Instant) -> Option<BoardGeometry> {
    if area.width < MIN_CELL * 3 || area.height < MIN_CELL * 3 {
        render_too_small(f, area);
        return None;
    }

    let config = app.config();
    let cell_w = (*config.cell_width()).min(area.width / 3).max(MIN_CELL);
    let cell_h = (*config.cell_height()).min(area.height / 3).max(MIN_CELL);
    let geometry =
        BoardGeometry::centered(area.x, area.y, area.width, area.height, cell_w, cell_h);

    let session = app.session();
    let winning: Vec<Coordinate> = session
        .winning_line()
        .map(|line| line.coordinates().to_vec())
        .unwrap_or_default();

    for at in Coordinate::all() {
        let (x, y) = geometry.cell_origin(at);
        let rect = Rect::new(x, y, cell_w, cell_h).intersection(area);
        if rect.is_empty() {
            continue;
        }
        render_cell(f, rect, session.grid().get(at).mark(), winning.contains(&at));
    }

    if let Some(fade) = app.fade() {
        if !fade.is_finished_at(now) {
            if let Some(text) = app.banner() {
                render_banner(f, area, &text, fade.alpha_at(now));
            }
        }
    }

    Some(geometry)
}

fn render_too_small(f: &mut Frame, area: Rect) {
    let notice = Paragraph::new("Terminal too small, enlarge to play")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
    f.render_widget(notice, row);
}

fn render_cell(f: &mut Frame, rect: Rect, mark: Option<Mark>, highlighted: bool) {
    let border_style = if highlighted {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(border_style);

    let (symbol, style) = match mark {
        None => (" ", Style::default()),
        Some(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    // Pad so the symbol sits on the middle row inside the border
    let inner_height = rect.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::styled(symbol, style));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, rect);
}

fn render_banner(f: &mut Frame, area: Rect, text: &str, alpha: u8) {
    let width = (text.width() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let shade = Color::Rgb(alpha, alpha, alpha);
    let banner = Paragraph::new(text)
        .style(Style::default().fg(shade).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(shade)),
        );

    f.render_widget(Clear, rect);
    f.render_widget(banner, rect);
}
