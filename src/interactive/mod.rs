//! Interactive TUI interface
//!
//! Captures key presses, feeds them to the game and redraws after every event.

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, key_to_action, run_tui};
