//! Word lists and word sources
//!
//! Provides the embedded target list compiled into the binary, a loader for
//! custom lists, and the `WordSource` seam `GameState` draws targets from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FixedWordSource, RandomWordSource, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(Word::new(word).is_ok());
        }
    }

    #[test]
    fn words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn apple_is_embedded() {
        assert!(WORDS.contains(&"apple"));
    }
}
