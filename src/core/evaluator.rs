//! Guess evaluation
//!
//! Two passes over a completed row:
//! 1. Exact-position pass: letters matching the target at the same index become `Correct`
//! 2. Presence pass: remaining letters that occur in the target become `Present`,
//!    unless another cell with the same letter was already marked `Correct`
//!
//! Duplicate letters are deliberately under-counted by pass 2. A letter that
//! appears twice in the target but once in the right spot leaves every other
//! copy in the guess at `Default`.

use super::{CellStatus, Row, WORD_LENGTH, Word};

/// Result of evaluating one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub statuses: [CellStatus; WORD_LENGTH],
    pub row_win: bool,
}

impl Evaluation {
    /// Number of `Correct` cells
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&s| s == CellStatus::Correct)
            .count()
    }

    /// Number of `Present` cells
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&s| s == CellStatus::Present)
            .count()
    }
}

/// Evaluate the letters of a row against the target
///
/// Empty cells never match anything. Letters compare case-insensitively.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate_letters, CellStatus, Word};
///
/// let target = Word::new("apple").unwrap();
/// let result = evaluate_letters(&[Some('P'), Some('E'), Some('A'), Some('R'), Some('S')], &target);
///
/// assert_eq!(result.statuses[0], CellStatus::Present);
/// assert_eq!(result.statuses[4], CellStatus::Default);
/// assert!(!result.row_win);
/// ```
#[must_use]
pub fn evaluate_letters(letters: &[Option<char>; WORD_LENGTH], target: &Word) -> Evaluation {
    let letters = letters.map(|l| l.map(|ch| ch.to_ascii_uppercase()));
    let mut statuses = [CellStatus::Default; WORD_LENGTH];

    // Exact-position pass
    for (i, letter) in letters.iter().enumerate() {
        if *letter == Some(target.char_at(i)) {
            statuses[i] = CellStatus::Correct;
        }
    }

    // Presence pass: only sees the `Correct` marks from the first pass,
    // since `Present` never satisfies another copy of the same letter.
    let corrects = statuses;
    for (i, letter) in letters.iter().enumerate() {
        let Some(ch) = *letter else { continue };
        if statuses[i] == CellStatus::Correct || !target.has_letter(ch) {
            continue;
        }

        let already_satisfied = letters
            .iter()
            .zip(corrects.iter())
            .any(|(other, status)| *other == Some(ch) && *status == CellStatus::Correct);

        if !already_satisfied {
            statuses[i] = CellStatus::Present;
        }
    }

    let row_win = statuses.iter().all(|&s| s == CellStatus::Correct);

    Evaluation { statuses, row_win }
}

/// Evaluate a row against the target
///
/// Pure: the row is not modified. Use [`Row::apply`] to write the statuses back.
#[must_use]
pub fn evaluate(row: &Row, target: &Word) -> Evaluation {
    let letters = row.cells().map(|cell| cell.value);
    evaluate_letters(&letters, target)
}

impl Row {
    /// Write evaluated statuses into the row's cells
    ///
    /// A cell already marked `Correct` keeps its status.
    pub fn apply(&mut self, evaluation: &Evaluation) {
        for (col, &status) in evaluation.statuses.iter().enumerate() {
            self.cell_mut(col).status.escalate(status);
        }
    }
}
