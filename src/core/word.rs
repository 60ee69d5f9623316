//! Word-guess word representation
//!
//! A Guess stores a validated 5-letter word along with letter position indices
//! for duplicate-aware scoring.

use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter guess word with letter position tracking
///
/// Stores the word as uppercase ASCII bytes and maintains a map of letter
/// positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    chars: [u8; 5],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid guess words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Create a new Guess from a string
    ///
    /// Input is case-normalized to uppercase, matching the stored progress
    /// format.
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use cfm_daily::core::Guess;
    ///
    /// let word = Guess::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Guess::new("too long").is_err());
    /// assert!(Guess::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, GuessError> {
        let text: String = text.into().to_uppercase();

        // Reject non-ASCII first so byte length equals character length below
        if !text.is_ascii() {
            return Err(GuessError::NonAscii);
        }

        // Validate length
        if text.len() != 5 {
            return Err(GuessError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GuessError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
