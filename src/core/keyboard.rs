//! Keyboard keys and their cumulative status
//!
//! Each letter maps straight to its slot in a fixed array, so tinting the
//! on-screen keyboard never has to search the layout.

use super::{CellStatus, Row};
use std::fmt;

/// A key on the game keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An uppercase letter A-Z
    Letter(char),
    Enter,
    Delete,
}

impl Key {
    /// Label shown on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Delete => "Delete".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// On-screen keyboard layout, top row first
pub const KEYBOARD_LAYOUT: [&[Key]; 3] = [
    &[
        Key::Letter('Q'),
        Key::Letter('W'),
        Key::Letter('E'),
        Key::Letter('R'),
        Key::Letter('T'),
        Key::Letter('Y'),
        Key::Letter('U'),
        Key::Letter('I'),
        Key::Letter('O'),
        Key::Letter('P'),
    ],
    &[
        Key::Letter('A'),
        Key::Letter('S'),
        Key::Letter('D'),
        Key::Letter('F'),
        Key::Letter('G'),
        Key::Letter('H'),
        Key::Letter('J'),
        Key::Letter('K'),
        Key::Letter('L'),
        Key::Delete,
    ],
    &[
        Key::Letter('Z'),
        Key::Letter('X'),
        Key::Letter('C'),
        Key::Letter('V'),
        Key::Letter('B'),
        Key::Letter('N'),
        Key::Letter('M'),
        Key::Enter,
    ],
];

const ALPHABET_LEN: usize = 26;

/// Best status seen so far for each letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatusMap {
    letters: [CellStatus; ALPHABET_LEN],
}

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }

    /// Status of a key
    ///
    /// `Enter` and `Delete` always report `Default`.
    #[must_use]
    pub fn get(&self, key: Key) -> CellStatus {
        match key {
            Key::Letter(ch) => self.letter(ch),
            Key::Enter | Key::Delete => CellStatus::Default,
        }
    }

    /// Status of a letter (case-insensitive); non-letters report `Default`
    #[must_use]
    pub fn letter(&self, letter: char) -> CellStatus {
        Self::slot(letter).map_or(CellStatus::Default, |i| self.letters[i])
    }

    /// Escalate a letter's status; lower statuses are ignored
    pub fn escalate(&mut self, letter: char, status: CellStatus) -> bool {
        Self::slot(letter).is_some_and(|i| self.letters[i].escalate(status))
    }

    /// Merge every cell of an evaluated row
    pub fn record(&mut self, row: &Row) {
        for cell in row.cells() {
            if let Some(letter) = cell.value {
                self.escalate(letter, cell.status);
            }
        }
    }

    /// Letters with a status above `Default`, alphabetical
    pub fn iter_known(&self) -> impl Iterator<Item = (char, CellStatus)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|(_, status)| **status > CellStatus::Default)
            .map(|(i, &status)| ((b'A' + i as u8) as char, status))
    }
}
