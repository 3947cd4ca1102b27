//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayResult, enter_word, replay};
pub use simple::{play_lines, run_simple};
