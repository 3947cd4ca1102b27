//! Formatting utilities for terminal output

use crate::core::{GameState, MAX_ATTEMPTS, Outcome};

/// Shareable emoji summary of a finished game
///
/// The header reads `Wordle 3/6`, or `Wordle X/6` for a loss. Only
/// submitted rows are included.
#[must_use]
pub fn share_text(game: &GameState) -> String {
    let score = match game.outcome() {
        Some(Outcome::Won) => game.attempts_used().to_string(),
        Some(Outcome::Lost) | None => "X".to_string(),
    };

    let mut out = format!("Wordle {score}/{MAX_ATTEMPTS}");
    for row in game.grid().rows().iter().take(game.attempts_used()) {
        out.push('\n');
        out.push_str(&row.to_emoji());
    }
    out
}

/// One-line message announcing the end of a game
#[must_use]
pub fn outcome_message(game: &GameState) -> Option<String> {
    game.outcome().map(|outcome| match outcome {
        Outcome::Won => match game.attempts_used() {
            1 => "Hole in one! Solved in a single guess.".to_string(),
            n => format!("You won! Solved in {n} guesses."),
        },
        Outcome::Lost => format!("You lost. The word was {}.", game.target()),
    })
}
