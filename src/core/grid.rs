//! Attempt grid: six rows of five cells

use super::{CellStatus, WORD_LENGTH};

/// Number of guesses a game allows
pub const MAX_ATTEMPTS: usize = 6;

/// A single tile on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub value: Option<char>,
    pub status: CellStatus,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// One attempt: five cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, col: usize) -> &mut Cell {
        &mut self.cells[col]
    }

    /// Whether every cell holds a letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Letters typed so far, empty cells skipped
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().filter_map(|cell| cell.value).collect()
    }

    #[must_use]
    pub fn statuses(&self) -> [CellStatus; WORD_LENGTH] {
        self.cells.map(|cell| cell.status)
    }

    /// Emoji squares for this row, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.status.emoji()).collect()
    }
}

/// The full board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptGrid {
    rows: [Row; MAX_ATTEMPTS],
}

impl AttemptGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Get a row by index
    ///
    /// # Panics
    /// Panics if `row >= MAX_ATTEMPTS`
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Row {
        &mut self.rows[row]
    }
}
