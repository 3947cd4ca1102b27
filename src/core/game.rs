//! Game state machine
//!
//! `GameState` owns the target word, the attempt grid and the keyboard
//! statuses. All mutation goes through `input_letter`, `input_delete`,
//! `input_submit` and `reset`. Out-of-turn or incomplete input is ignored
//! rather than reported as an error.

use super::{
    AttemptGrid, Evaluation, KeyStatusMap, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate,
};
use crate::wordlists::WordSource;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, trace};

const LAST_COL: usize = WORD_LENGTH - 1;
const LAST_ROW: usize = MAX_ATTEMPTS - 1;

/// An input event from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised input {0:?}: expected a letter A-Z, \"Delete\" or \"Enter\"")]
pub struct InputParseError(pub String);

impl FromStr for InputEvent {
    type Err = InputParseError;

    /// Parse the literal tokens `"Delete"`, `"Enter"` or a single letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Delete" => Ok(Self::Delete),
            "Enter" => Ok(Self::Enter),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => {
                        Ok(Self::Letter(ch.to_ascii_uppercase()))
                    }
                    _ => Err(InputParseError(s.to_string())),
                }
            }
        }
    }
}

impl From<super::Key> for InputEvent {
    fn from(key: super::Key) -> Self {
        match key {
            super::Key::Letter(ch) => Self::Letter(ch),
            super::Key::Enter => Self::Enter,
            super::Key::Delete => Self::Delete,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Where the state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering { row: usize, col: usize },
    Won,
    Lost,
}

/// What an input did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The input was a no-op
    Ignored,
    /// A cell was written or cleared
    Edited,
    /// The row was evaluated and the cursor moved to the next row
    RowAdvanced(Evaluation),
    /// The row was a full match
    Won(Evaluation),
    /// The last row was submitted without a full match
    Lost(Evaluation),
}

impl Transition {
    /// The end-of-game signal carried by this transition, if any
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Won(_) => Some(Outcome::Won),
            Self::Lost(_) => Some(Outcome::Lost),
            _ => None,
        }
    }

    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Self::RowAdvanced(e) | Self::Won(e) | Self::Lost(e) => Some(e),
            Self::Ignored | Self::Edited => None,
        }
    }
}

/// A single game session
///
/// # Examples
/// ```
/// use wordle_game::core::{GameState, InputEvent, Outcome, Word};
///
/// let mut game = GameState::with_target(Word::new("apple").unwrap());
/// for ch in "APPLE".chars() {
///     game.input_letter(ch);
/// }
/// let transition = game.input_submit();
///
/// assert_eq!(transition.outcome(), Some(Outcome::Won));
/// assert!(game.is_ended());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    grid: AttemptGrid,
    keys: KeyStatusMap,
    row: usize,
    col: usize,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Start a game with a word drawn from `source`
    pub fn new(source: &mut dyn WordSource) -> Self {
        Self::with_target(source.next_word())
    }

    /// Start a game with a known target
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        info!("starting new game");
        Self {
            target,
            grid: AttemptGrid::new(),
            keys: KeyStatusMap::new(),
            row: 0,
            col: 0,
            outcome: None,
        }
    }

    /// Throw away the current game and start over with `target`
    pub fn reset(&mut self, target: Word) {
        *self = Self::with_target(target);
    }

    /// Start over with a fresh word from `source`
    pub fn restart(&mut self, source: &mut dyn WordSource) {
        self.reset(source.next_word());
    }

    /// Feed one input event
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Letter(ch) => self.input_letter(ch),
            InputEvent::Delete => self.input_delete(),
            InputEvent::Enter => self.input_submit(),
        }
    }

    /// Type a letter into the active cell
    ///
    /// The cursor advances up to the last column and then stays put, so
    /// repeated input overwrites the last cell. Non-letters are ignored.
    pub fn input_letter(&mut self, ch: char) -> Transition {
        if self.is_ended() || !ch.is_ascii_alphabetic() {
            trace!(?ch, "letter ignored");
            return Transition::Ignored;
        }

        self.grid.row_mut(self.row).cell_mut(self.col).value = Some(ch.to_ascii_uppercase());
        if self.col < LAST_COL {
            self.col += 1;
        }
        Transition::Edited
    }

    /// Clear the cell before the cursor and step back
    ///
    /// At column 0 the first cell is cleared in place. At the last column a
    /// filled cell is cleared in place, since the cursor never moves past it.
    pub fn input_delete(&mut self) -> Transition {
        if self.is_ended() {
            trace!("delete ignored");
            return Transition::Ignored;
        }

        let row = self.grid.row_mut(self.row);
        let pinned_at_end = self.col == LAST_COL && !row.cells()[LAST_COL].is_empty();
        if self.col > 0 && !pinned_at_end {
            self.col -= 1;
        }
        row.cell_mut(self.col).value = None;
        Transition::Edited
    }

    /// Submit the active row
    ///
    /// Ignored unless the row is completely filled.
    pub fn input_submit(&mut self) -> Transition {
        if self.is_ended() {
            trace!("submit ignored: game over");
            return Transition::Ignored;
        }

        let row = self.grid.row(self.row);
        if self.col != LAST_COL || row.cells()[LAST_COL].is_empty() || !row.is_filled() {
            trace!(row = self.row, col = self.col, "submit ignored: row incomplete");
            return Transition::Ignored;
        }

        let evaluation = evaluate(row, &self.target);
        let row = self.grid.row_mut(self.row);
        row.apply(&evaluation);
        self.keys.record(row);
        debug!(
            row = self.row,
            guess = %row.word(),
            pattern = %row.to_emoji(),
            "row evaluated"
        );

        if evaluation.row_win {
            self.end_game(true);
            Transition::Won(evaluation)
        } else if self.row >= LAST_ROW {
            self.end_game(false);
            Transition::Lost(evaluation)
        } else {
            self.row += 1;
            self.col = 0;
            Transition::RowAdvanced(evaluation)
        }
    }

    fn end_game(&mut self, won: bool) {
        let outcome = if won { Outcome::Won } else { Outcome::Lost };
        info!(%outcome, attempts = self.row + 1, "game over");
        self.outcome = Some(outcome);
    }

    #[inline]
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.outcome {
            Some(Outcome::Won) => Phase::Won,
            Some(Outcome::Lost) => Phase::Lost,
            None => Phase::Entering {
                row: self.row,
                col: self.col,
            },
        }
    }

    /// Cursor position as (row, col)
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of rows submitted so far
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        if self.outcome.is_some() {
            self.row + 1
        } else {
            self.row
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &AttemptGrid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.keys
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellStatus, Key};

    fn game(target: &str) -> GameState {
        GameState::with_target(Word::new(target).unwrap())
    }

    fn type_word(game: &mut GameState, word: &str) {
        for ch in word.chars() {
            game.input_letter(ch);
        }
    }

    #[test]
    fn parse_input_events() {
        assert_eq!("Enter".parse::<InputEvent>(), Ok(InputEvent::Enter));
        assert_eq!("Delete".parse::<InputEvent>(), Ok(InputEvent::Delete));
        assert_eq!("q".parse::<InputEvent>(), Ok(InputEvent::Letter('Q')));
        assert_eq!("Z".parse::<InputEvent>(), Ok(InputEvent::Letter('Z')));
        assert!("enter".parse::<InputEvent>().is_err());
        assert!("AB".parse::<InputEvent>().is_err());
        assert!("7".parse::<InputEvent>().is_err());
        assert!("".parse::<InputEvent>().is_err());
    }

    #[test]
    fn key_converts_to_event() {
        assert_eq!(InputEvent::from(Key::Letter('A')), InputEvent::Letter('A'));
        assert_eq!(InputEvent::from(Key::Enter), InputEvent::Enter);
        assert_eq!(InputEvent::from(Key::Delete), InputEvent::Delete);
    }

    #[test]
    fn letters_fill_and_cursor_stops_at_last_column() {
        let mut g = game("APPLE");
        type_word(&mut g, "ABCDEFGH");
        assert_eq!(g.cursor(), (0, 4));
        assert_eq!(g.grid().row(0).word(), "ABCDH");
    }

    #[test]
    fn letters_are_uppercased_and_non_letters_ignored() {
        let mut g = game("APPLE");
        assert_eq!(g.input_letter('a'), Transition::Edited);
        assert_eq!(g.input_letter('1'), Transition::Ignored);
        assert_eq!(g.grid().row(0).cells()[0].value, Some('A'));
        assert_eq!(g.cursor(), (0, 1));
    }

    #[test]
    fn delete_at_column_zero_clears_in_place() {
        let mut g = game("APPLE");
        g.input_letter('X');
        g.input_delete();
        assert_eq!(g.cursor(), (0, 0));
        assert_eq!(g.input_delete(), Transition::Edited);
        assert_eq!(g.cursor(), (0, 0));
        assert!(g.grid().row(0).cells()[0].is_empty());
    }

    #[test]
    fn delete_steps_back_then_clears() {
        let mut g = game("APPLE");
        type_word(&mut g, "AB");
        g.input_delete();
        assert_eq!(g.cursor(), (0, 1));
        assert_eq!(g.grid().row(0).word(), "A");
    }

    #[test]
    fn delete_on_full_row_clears_last_cell_first() {
        let mut g = game("APPLE");
        type_word(&mut g, "ABCDE");
        g.input_delete();
        assert_eq!(g.cursor(), (0, 4));
        assert_eq!(g.grid().row(0).word(), "ABCD");

        g.input_delete();
        assert_eq!(g.cursor(), (0, 3));
        assert_eq!(g.grid().row(0).word(), "ABC");
    }

    #[test]
    fn submit_incomplete_row_is_ignored() {
        let mut g = game("APPLE");
        type_word(&mut g, "ABC");
        assert_eq!(g.input_submit(), Transition::Ignored);
        assert_eq!(g.cursor(), (0, 3));
        assert!(
            g.grid()
                .row(0)
                .cells()
                .iter()
                .all(|c| c.status == CellStatus::Default)
        );
    }

    #[test]
    fn submit_after_deleting_last_cell_is_ignored() {
        let mut g = game("APPLE");
        type_word(&mut g, "ABCDE");
        g.input_delete();
        assert_eq!(g.input_submit(), Transition::Ignored);
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut g = game("APPLE");
        type_word(&mut g, "PEARS");
        let transition = g.input_submit();
        assert!(matches!(transition, Transition::RowAdvanced(_)));
        assert_eq!(g.cursor(), (1, 0));
        assert_eq!(g.attempts_used(), 1);
        assert_eq!(g.phase(), Phase::Entering { row: 1, col: 0 });
    }

    #[test]
    fn correct_guess_wins() {
        let mut g = game("APPLE");
        type_word(&mut g, "APPLE");
        let transition = g.input_submit();
        assert_eq!(transition.outcome(), Some(Outcome::Won));
        assert_eq!(g.phase(), Phase::Won);
        assert_eq!(g.attempts_used(), 1);
        assert_eq!(g.key_statuses().letter('P'), CellStatus::Correct);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut g = game("APPLE");
        for i in 0..MAX_ATTEMPTS {
            type_word(&mut g, "DUCKS");
            let transition = g.input_submit();
            if i < LAST_ROW {
                assert!(matches!(transition, Transition::RowAdvanced(_)));
            } else {
                assert_eq!(transition.outcome(), Some(Outcome::Lost));
            }
        }
        assert_eq!(g.phase(), Phase::Lost);
        assert_eq!(g.cursor(), (LAST_ROW, LAST_COL));
        assert_eq!(g.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut g = game("APPLE");
        for _ in 0..LAST_ROW {
            type_word(&mut g, "DUCKS");
            g.input_submit();
        }
        type_word(&mut g, "APPLE");
        assert_eq!(g.input_submit().outcome(), Some(Outcome::Won));
    }

    #[test]
    fn ended_game_ignores_input() {
        let mut g = game("APPLE");
        type_word(&mut g, "APPLE");
        g.input_submit();

        let before = g.grid().clone();
        assert_eq!(g.input_letter('A'), Transition::Ignored);
        assert_eq!(g.input_delete(), Transition::Ignored);
        assert_eq!(g.input_submit(), Transition::Ignored);
        assert_eq!(g.grid(), &before);
    }

    #[test]
    fn reset_clears_everything() {
        let mut g = game("APPLE");
        type_word(&mut g, "APPLE");
        g.input_submit();

        g.reset(Word::new("crane").unwrap());
        assert!(!g.is_ended());
        assert_eq!(g.cursor(), (0, 0));
        assert_eq!(g.target().text(), "CRANE");
        assert_eq!(g.grid(), &AttemptGrid::new());
        assert_eq!(g.key_statuses(), &KeyStatusMap::new());
    }

    #[test]
    fn handle_dispatches_events() {
        let mut g = game("APPLE");
        for token in ["A", "P", "P", "L", "E", "Enter"] {
            g.handle(token.parse().unwrap());
        }
        assert_eq!(g.outcome(), Some(Outcome::Won));
    }
}
