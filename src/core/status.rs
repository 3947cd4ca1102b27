//! Per-cell feedback status
//!
//! Statuses are ordered `Default < Present < Correct`. Both tiles and keyboard
//! keys only ever move up this ladder within a single game.

/// Feedback for a single tile or keyboard key
///
/// - `Default`: not evaluated yet, or the letter is not in the target
/// - `Present`: the letter is in the target but somewhere else
/// - `Correct`: the letter is in the target at this position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellStatus {
    #[default]
    Default,
    Present,
    Correct,
}

impl CellStatus {
    /// Merge `incoming` into `self`, keeping whichever ranks higher
    ///
    /// Returns `true` if the stored status changed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::CellStatus;
    ///
    /// let mut status = CellStatus::Correct;
    /// assert!(!status.escalate(CellStatus::Present));
    /// assert_eq!(status, CellStatus::Correct);
    /// ```
    #[inline]
    pub fn escalate(&mut self, incoming: Self) -> bool {
        if incoming > *self {
            *self = incoming;
            true
        } else {
            false
        }
    }

    /// Emoji square used when sharing a board
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Default => '⬜',
        }
    }
}
