//! TUI rendering with ratatui
//!
//! Draws the board, the on-screen keyboard and the message log. Read-only:
//! nothing here mutates the game.

use super::app::{App, MessageStyle};
use crate::core::{Cell, CellStatus, GameState, KEYBOARD_LAYOUT, KeyStatusMap, Phase, Row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.game, chunks[1]);
    render_keyboard(f, app.game.key_statuses(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, &app.game, chunks[4]);
}

/// Tile colors for a status
fn status_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Default => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_span(cell: &Cell, is_cursor: bool) -> Span<'static> {
    let ch = cell.value.unwrap_or(' ');
    let mut style = status_style(cell.status);
    if is_cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    Span::styled(format!(" {ch} "), style)
}

fn board_line(row: &Row, cursor_col: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells().len() * 2);
    for (col, cell) in row.cells().iter().enumerate() {
        if col > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(tile_span(cell, cursor_col == Some(col)));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, game: &GameState, area: Rect) {
    let cursor = match game.phase() {
        Phase::Entering { row, col } => Some((row, col)),
        Phase::Won | Phase::Lost => None,
    };

    let mut lines = Vec::new();
    for (i, row) in game.grid().rows().iter().enumerate() {
        let cursor_col = cursor.and_then(|(r, c)| (r == i).then_some(c));
        lines.push(board_line(row, cursor_col));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyStatusMap, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|layout_row| {
            let mut spans = Vec::new();
            for (i, &key) in layout_row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!(" {} ", key.label()),
                    status_style(keys.get(key)),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, game: &GameState, area: Rect) {
    let help_text = match game.phase() {
        Phase::Entering { row, .. } => {
            format!("Guess {}/6 | Enter: Submit | Backspace: Delete | Esc: Quit", row + 1)
        }
        Phase::Won | Phase::Lost => "n / Enter: New Game | q: Quit".to_string(),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn cursor_tile_is_highlighted() {
        let mut game = GameState::with_target(Word::new("apple").unwrap());
        game.input_letter('A');
        let line = board_line(game.grid().row(0), Some(1));

        // tiles are interleaved with spacers
        let first = &line.spans[0];
        let second = &line.spans[2];
        assert_eq!(first.content, " A ");
        assert!(!first.style.add_modifier.contains(Modifier::REVERSED));
        assert!(second.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn statuses_have_distinct_backgrounds() {
        let correct = status_style(CellStatus::Correct).bg;
        let present = status_style(CellStatus::Present).bg;
        let default = status_style(CellStatus::Default).bg;
        assert_ne!(correct, present);
        assert_ne!(present, default);
        assert_ne!(correct, default);
    }
}
