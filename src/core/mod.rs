//! Core game types for Wordle
//!
//! Everything here is synchronous and free of I/O: the evaluator is a pure
//! function and `GameState` is an owned value driven by input events.

mod evaluator;
mod game;
mod grid;
mod keyboard;
mod status;
mod word;

pub use evaluator::{Evaluation, evaluate, evaluate_letters};
pub use game::{GameState, InputEvent, InputParseError, Outcome, Phase, Transition};
pub use grid::{AttemptGrid, Cell, MAX_ATTEMPTS, Row};
pub use keyboard::{KEYBOARD_LAYOUT, Key, KeyStatusMap};
pub use status::CellStatus;
pub use word::{WORD_LENGTH, Word, WordError};
