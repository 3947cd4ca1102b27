//! Scripted replay
//!
//! Feeds whole guesses through the game state machine against a known target.

use crate::core::{GameState, InputEvent, Transition, Word, WordError};
use tracing::warn;

/// Result of replaying a list of guesses
pub struct ReplayResult {
    pub game: GameState,
    /// Guesses that were not valid words and never reached the board
    pub rejected: Vec<(String, WordError)>,
    /// Guesses left over once the game ended
    pub unused: Vec<String>,
}

/// Type one whole word into the active row and submit it
///
/// Any partial input already in the row is cleared first.
pub fn enter_word(game: &mut GameState, word: &Word) -> Transition {
    let (_, col) = game.cursor();
    for _ in 0..=col {
        game.handle(InputEvent::Delete);
    }
    for &ch in word.chars() {
        game.handle(InputEvent::Letter(ch));
    }
    game.handle(InputEvent::Enter)
}

/// Play `guesses` in order against `target`
///
/// Stops at the first win or loss.
#[must_use]
pub fn replay(target: Word, guesses: &[String]) -> ReplayResult {
    let mut game = GameState::with_target(target);
    let mut rejected = Vec::new();
    let mut unused = Vec::new();

    for guess in guesses {
        if game.is_ended() {
            unused.push(guess.clone());
            continue;
        }
        match Word::new(guess) {
            Ok(word) => {
                enter_word(&mut game, &word);
            }
            Err(e) => {
                warn!(guess = %guess, error = %e, "rejecting guess");
                rejected.push((guess.clone(), e));
            }
        }
    }

    ReplayResult {
        game,
        rejected,
        unused,
    }
}
