//! Puzzle engines
//!
//! One state machine per game, each owning only its own slice of the
//! persisted progress. Engines are pure with respect to I/O: restoring and
//! persisting progress is the caller's job.

pub mod cryptogram;
pub mod prompt;
pub mod wordle;

pub use cryptogram::{Conflict, CryptogramGame, evaluate_solved, unique_letters};
pub use prompt::PromptView;
pub use wordle::{GameStatus, GuessRejection, MAX_GUESSES, WORD_LENGTH, WordleGame};
