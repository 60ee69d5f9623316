//! Accepted-guess word lists
//!
//! The word list is a pure membership set: unordered, uncounted, consulted
//! only when a guess is submitted. A small embedded fallback keeps the game
//! playable when no word file is available.

mod embedded;
pub mod loader;

pub use embedded::FALLBACK;

use crate::core::Guess;
use rustc_hash::FxHashSet;

/// Membership set of accepted 5-letter guesses
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from validated guesses
    pub fn from_words<I: IntoIterator<Item = Guess>>(words: I) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.text().to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, guess: &Guess) -> bool {
        self.words.contains(guess.text())
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

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn membership_is_case_normalized() {
        let set = words_from_slice(&["crane", "SLATE"]);
        assert!(set.contains(&Guess::new("CRANE").unwrap()));
        assert!(set.contains(&Guess::new("slate").unwrap()));
        assert!(!set.contains(&Guess::new("irate").unwrap()));
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_has_no_duplicates() {
        let set = words_from_slice(FALLBACK);
        assert_eq!(set.len(), FALLBACK.len());
    }
}
