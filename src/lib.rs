//! CFM Daily
//!
//! Daily puzzle companion: a 5-letter word-guess game, a letter-substitution
//! cryptogram, and a reflection prompt, all keyed by calendar date with
//! locally persisted progress.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cfm_daily::core::{Guess, LetterScore, score_guess};
//!
//! // Score a guess against a solution
//! let guess = Guess::new("crane").unwrap();
//! let solution = Guess::new("slate").unwrap();
//!
//! let scores = score_guess(&guess, &solution);
//! assert_eq!(scores[2], LetterScore::Correct);
//! ```

// Core domain types
pub mod core;

// Dated puzzle catalog
pub mod catalog;

// Persisted per-date progress
pub mod progress;

// Game engines
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
