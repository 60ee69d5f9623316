//! Word list loading utilities
//!
//! Provides functions to load the accepted-guess set from a file or fall
//! back to the embedded list.

use super::{FALLBACK, WordSet};
use crate::core::Guess;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load a word set from a file, one word per line
///
/// Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSet> {
    let content = fs::read_to_string(path)?;

    let words = content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Guess::new(trimmed).ok()
        }
    });

    Ok(WordSet::from_words(words))
}

/// Convert a string slice to a word set, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordSet {
    WordSet::from_words(slice.iter().filter_map(|&s| Guess::new(s).ok()))
}

/// Load the accepted-word set, degrading to the embedded fallback
///
/// A missing or unreadable file is logged; the game keeps running with the
/// smaller embedded list.
#[must_use]
pub fn load_or_fallback(path: Option<&Path>) -> WordSet {
    match path {
        Some(path) => match load_from_file(path) {
            Ok(words) => words,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "word list unavailable, using embedded fallback"
                );
                words_from_slice(FALLBACK)
            }
        },
        None => words_from_slice(FALLBACK),
    }
}
