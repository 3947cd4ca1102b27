//! Target word sources

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Supplies target words for new games
pub trait WordSource {
    /// Produce the target for the next game
    fn next_word(&mut self) -> Word;
}

/// Picks targets uniformly at random from a word list
pub struct RandomWordSource {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWordSource {
    /// Create a source over `words`
    ///
    /// With a `seed` the sequence of targets is reproducible. Returns `None`
    /// if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Some(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWordSource {
    fn next_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        debug!(index, pool = self.words.len(), "drew target word");
        self.words[index].clone()
    }
}

/// Always yields the same target (practice games and tests)
#[derive(Debug, Clone)]
pub struct FixedWordSource(pub Word);

impl WordSource for FixedWordSource {
    fn next_word(&mut self) -> Word {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn empty_list_is_rejected() {
        assert!(RandomWordSource::new(Vec::new(), Some(1)).is_none());
    }

    #[test]
    fn random_source_draws_from_list() {
        let words = words_from_slice(&["apple", "crane", "slate"]);
        let mut source = RandomWordSource::new(words.clone(), None).unwrap();
        assert_eq!(source.len(), 3);
        for _ in 0..20 {
            assert!(words.contains(&source.next_word()));
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let words = words_from_slice(&["apple", "crane", "slate", "tiger", "zebra"]);
        let mut a = RandomWordSource::new(words.clone(), Some(42)).unwrap();
        let mut b = RandomWordSource::new(words, Some(42)).unwrap();
        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn fixed_source_repeats() {
        let word = Word::new("apple").unwrap();
        let mut source = FixedWordSource(word.clone());
        assert_eq!(source.next_word(), word);
        assert_eq!(source.next_word(), word);
    }
}
