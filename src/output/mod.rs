//! Terminal output formatting
//!
//! Display utilities for the line-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard};
pub use formatters::{outcome_message, share_text};
