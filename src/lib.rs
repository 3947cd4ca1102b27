//! Wordle Game
//!
//! A single-player Wordle: a hidden five-letter word, six guesses, and
//! per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{CellStatus, GameState, InputEvent, Word};
//!
//! let mut game = GameState::with_target(Word::new("apple").unwrap());
//! for token in ["P", "E", "A", "R", "S", "Enter"] {
//!     game.handle(token.parse::<InputEvent>().unwrap());
//! }
//!
//! assert_eq!(game.grid().row(0).to_emoji(), "🟨🟨🟨⬜⬜");
//! assert_eq!(game.key_statuses().letter('S'), CellStatus::Default);
//! ```

// Core domain types and the game state machine
pub mod core;

// Word lists and target word sources
pub mod wordlists;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
