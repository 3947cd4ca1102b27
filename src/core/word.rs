//! Target word representation
//!
//! A Word stores a validated 5-letter word, normalized to uppercase.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word (and cells in every row)
pub const WORD_LENGTH: usize = 5;

/// A 5-letter uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters A-Z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored word is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut chars = ['A'; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(ch));
            }
            *slot = ch.to_ascii_uppercase();
        }

        Ok(Self { chars })
    }

    /// Get the word as an uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
