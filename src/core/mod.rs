//! Core domain types for the daily puzzles
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod cipher;
mod score;
mod word;

pub use cipher::{ALPHABET, CipherKey, CipherKeyError};
pub use score::{KeyStatus, LetterScore, key_status, score_guess};
pub use word::{Guess, GuessError};
