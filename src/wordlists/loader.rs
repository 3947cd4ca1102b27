//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error loading a custom word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no valid 5-letter words")]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and
/// invalid entries.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if no line holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = trimmed, error = %e, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
