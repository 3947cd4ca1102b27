//! Display functions for the board and keyboard

use crate::core::{CellStatus, GameState, KEYBOARD_LAYOUT, Key, KeyStatusMap, Row};
use colored::{ColoredString, Colorize};

fn tile(text: &str, status: CellStatus) -> ColoredString {
    match status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Default => text.white().on_bright_black(),
    }
}

fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| {
            let ch = cell.value.unwrap_or('_');
            tile(&format!(" {ch} "), cell.status).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print every row of the board
pub fn print_board(game: &GameState) {
    println!("\n{}", "─".repeat(23).cyan());
    for row in game.grid().rows() {
        println!("  {}", format_row(row));
    }
    println!("{}", "─".repeat(23).cyan());
}

/// Print the keyboard, each key tinted by its best status
pub fn print_keyboard(keys: &KeyStatusMap) {
    for (indent, layout_row) in KEYBOARD_LAYOUT.iter().enumerate() {
        let line = layout_row
            .iter()
            .filter(|key| matches!(key, Key::Letter(_)))
            .map(|&key| tile(&key.label(), keys.get(key)).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}{line}", " ".repeat(indent + 2));
    }
}
