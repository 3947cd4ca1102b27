//! Game configuration
//!
//! Collects the command-line options that decide where target words come from.

use crate::core::Word;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{FixedWordSource, RandomWordSource, WORDS, WordSource};
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use tracing::info;

/// Where the pool of target words comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordList {
    /// The list compiled into the binary
    Embedded,
    /// One word per line in a text file
    File(PathBuf),
}

impl WordList {
    /// Parse the `--wordlist` option: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Options for a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_list: WordList,
    /// Seed for reproducible target selection
    pub seed: Option<u64>,
    /// Play every game against this word instead of a random one
    pub target: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: WordList::Embedded,
            seed: None,
            target: None,
        }
    }
}

impl GameConfig {
    /// Build the word source described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed target is not a valid word, or if a
    /// custom word list cannot be read or holds no valid words.
    pub fn word_source(&self) -> Result<Box<dyn WordSource>> {
        if let Some(target) = &self.target {
            let word = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
            info!("using fixed target word");
            return Ok(Box::new(FixedWordSource(word)));
        }

        let words = match &self.word_list {
            WordList::Embedded => words_from_slice(WORDS),
            WordList::File(path) => load_from_file(path)?,
        };
        info!(count = words.len(), seeded = self.seed.is_some(), "word pool ready");

        let source = RandomWordSource::new(words, self.seed)
            .ok_or_else(|| anyhow!("word list is empty"))?;
        Ok(Box::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordlist_arg_parsing() {
        assert_eq!(WordList::from_arg("embedded"), WordList::Embedded);
        assert_eq!(
            WordList::from_arg("words/mine.txt"),
            WordList::File(PathBuf::from("words/mine.txt"))
        );
    }

    #[test]
    fn fixed_target_wins_over_list() {
        let config = GameConfig {
            target: Some("apple".to_string()),
            ..GameConfig::default()
        };
        let mut source = config.word_source().unwrap();
        assert_eq!(source.next_word().text(), "APPLE");
    }

    #[test]
    fn invalid_target_is_an_error() {
        let config = GameConfig {
            target: Some("toolong".to_string()),
            ..GameConfig::default()
        };
        assert!(config.word_source().is_err());
    }

    #[test]
    fn embedded_source_yields_embedded_words() {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::default()
        };
        let mut source = config.word_source().unwrap();
        let word = source.next_word().text().to_lowercase();
        assert!(WORDS.contains(&word.as_str()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = GameConfig {
            word_list: WordList::File(PathBuf::from("no/such/list.txt")),
            ..GameConfig::default()
        };
        assert!(config.word_source().is_err());
    }
}
