//! Word-guess engine
//!
//! Six tries at a 5-letter word. Status is derived from the guess sequence:
//! won if any guess equals the solution, lost after the sixth non-winning
//! guess, playing otherwise. Once terminal, no further input is accepted.

use crate::core::{Guess, KeyStatus, LetterScore, key_status, score_guess};
use crate::wordlists::WordSet;
use std::fmt;

/// Maximum number of submitted guesses
pub const MAX_GUESSES: usize = 6;

/// Word length for every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Game lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a submitted guess was rejected
///
/// Rejections are transient notices: the attempted guess is not consumed and
/// state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    InvalidLength(usize),
    NotInDictionary,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(_) => write!(f, "Word must be 5 letters"),
            Self::NotInDictionary => write!(f, "Not in word list"),
        }
    }
}

impl std::error::Error for GuessRejection {}

/// Interactive state for one date's word-guess game
pub struct WordleGame {
    solution: Guess,
    guesses: Vec<Guess>,
    current: String,
}

impl WordleGame {
    /// Build the session state, restoring saved guesses
    ///
    /// The in-progress guess is never persisted, so it always starts empty.
    #[must_use]
    pub fn new(solution: Guess, saved: &[Guess]) -> Self {
        let guesses: Vec<Guess> = saved.iter().take(MAX_GUESSES).cloned().collect();
        Self {
            solution,
            guesses,
            current: String::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Guess {
        &self.solution
    }

    /// Submitted guesses, in order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The in-progress guess text
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Derived lifecycle status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.guesses.iter().any(|g| *g == self.solution) {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Append a letter to the in-progress guess
    ///
    /// Only A-Z appends, up to 5 characters; everything is ignored once the
    /// game has left `Playing`.
    pub fn push_letter(&mut self, letter: char) {
        if self.status() != GameStatus::Playing {
            return;
        }
        if letter.is_ascii_alphabetic() && self.current.len() < WORD_LENGTH {
            self.current.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last letter of the in-progress guess
    pub fn pop_letter(&mut self) {
        if self.status() != GameStatus::Playing {
            return;
        }
        self.current.pop();
    }

    /// Submit the in-progress guess
    ///
    /// The solution itself always passes the dictionary check. On accept the
    /// guess is appended, the input cleared, and the new status returned.
    ///
    /// # Errors
    /// Returns a `GuessRejection` when the guess is not exactly 5 letters or
    /// not an accepted word; the attempt is not consumed.
    pub fn submit(&mut self, dictionary: &WordSet) -> Result<GameStatus, GuessRejection> {
        if self.status() != GameStatus::Playing {
            return Ok(self.status());
        }

        let word = Guess::new(&self.current)
            .map_err(|_| GuessRejection::InvalidLength(self.current.len()))?;

        if word != self.solution && !dictionary.contains(&word) {
            return Err(GuessRejection::NotInDictionary);
        }

        self.guesses.push(word);
        self.current.clear();
        Ok(self.status())
    }

    /// Per-position feedback for a submitted guess row
    #[must_use]
    pub fn score_row(&self, index: usize) -> Option<[LetterScore; 5]> {
        self.guesses
            .get(index)
            .map(|guess| score_guess(guess, &self.solution))
    }

    /// Best status a keyboard letter has achieved across all guesses
    #[must_use]
    pub fn key_status(&self, letter: u8) -> KeyStatus {
        key_status(letter, &self.guesses, &self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn game(solution: &str) -> WordleGame {
        WordleGame::new(Guess::new(solution).unwrap(), &[])
    }

    fn dictionary() -> WordSet {
        words_from_slice(&["crane", "slate", "irate", "least", "stone", "drink", "think"])
    }

    #[test]
    fn typing_contract() {
        let mut game = game("FAITH");

        game.push_letter('c');
        game.push_letter('R');
        game.push_letter('1'); // ignored
        game.push_letter(' '); // ignored
        assert_eq!(game.current(), "CR");

        game.pop_letter();
        assert_eq!(game.current(), "C");

        for letter in "RANEX".chars() {
            game.push_letter(letter);
        }
        // Capped at 5
        assert_eq!(game.current(), "CRANE");
    }

    #[test]
    fn short_guess_is_rejected_without_consuming() {
        let mut game = game("FAITH");
        game.push_letter('c');
        game.push_letter('a');
        game.push_letter('t');

        assert_eq!(
            game.submit(&dictionary()),
            Err(GuessRejection::InvalidLength(3))
        );
        assert_eq!(game.current(), "CAT");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_without_consuming() {
        let mut game = game("FAITH");
        for letter in "ZZZZZ".chars() {
            game.push_letter(letter);
        }

        assert_eq!(
            game.submit(&dictionary()),
            Err(GuessRejection::NotInDictionary)
        );
        assert_eq!(game.current(), "ZZZZZ");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn solution_bypasses_dictionary() {
        // FAITH is not in the test dictionary
        let mut game = game("FAITH");
        for letter in "faith".chars() {
            game.push_letter(letter);
        }

        assert_eq!(game.submit(&dictionary()), Ok(GameStatus::Won));
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.current(), "");
    }

    #[test]
    fn six_misses_lose_the_game() {
        let mut game = game("FAITH");
        let words = ["crane", "slate", "irate", "least", "stone", "drink"];

        for (i, word) in words.iter().enumerate() {
            for letter in word.chars() {
                game.push_letter(letter);
            }
            let status = game.submit(&dictionary()).unwrap();
            if i < 5 {
                assert_eq!(status, GameStatus::Playing);
            } else {
                assert_eq!(status, GameStatus::Lost);
            }
        }
    }

    #[test]
    fn terminal_states_block_further_input() {
        let mut game = game("CRANE");
        for letter in "crane".chars() {
            game.push_letter(letter);
        }
        assert_eq!(game.submit(&dictionary()), Ok(GameStatus::Won));

        game.push_letter('s');
        assert_eq!(game.current(), "");
        assert_eq!(game.submit(&dictionary()), Ok(GameStatus::Won));
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn status_restored_from_saved_guesses() {
        let solution = Guess::new("CRANE").unwrap();

        let won = WordleGame::new(solution.clone(), &[Guess::new("crane").unwrap()]);
        assert_eq!(won.status(), GameStatus::Won);

        let misses: Vec<Guess> = ["slate", "irate", "least", "stone", "drink", "think"]
            .iter()
            .map(|w| Guess::new(*w).unwrap())
            .collect();
        let lost = WordleGame::new(solution.clone(), &misses);
        assert_eq!(lost.status(), GameStatus::Lost);

        let playing = WordleGame::new(solution, &misses[..2]);
        assert_eq!(playing.status(), GameStatus::Playing);
    }

    #[test]
    fn score_row_matches_submitted_guess() {
        let mut game = game("SLATE");
        for letter in "crane".chars() {
            game.push_letter(letter);
        }
        game.submit(&dictionary()).unwrap();

        let row = game.score_row(0).unwrap();
        assert_eq!(row[2], LetterScore::Correct); // A
        assert_eq!(row[4], LetterScore::Correct); // E
        assert!(game.score_row(1).is_none());
    }

    #[test]
    fn key_status_reflects_guesses() {
        let mut game = game("SLATE");
        for letter in "crane".chars() {
            game.push_letter(letter);
        }
        game.submit(&dictionary()).unwrap();

        assert_eq!(game.key_status(b'A'), KeyStatus::Correct);
        assert_eq!(game.key_status(b'C'), KeyStatus::Absent);
        assert_eq!(game.key_status(b'Z'), KeyStatus::Unused);
    }
}
