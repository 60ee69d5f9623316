//! Date summary command
//!
//! Reports one date's puzzle availability and saved progress without opening
//! the TUI.

use crate::catalog::PuzzleCatalog;
use crate::core::LetterScore;
use crate::engine::{CryptogramGame, GameStatus, WordleGame};
use crate::progress::ProgressStore;
use chrono::NaiveDate;

/// Summary of one date's puzzles and progress
pub struct ShowResult {
    pub date: NaiveDate,
    pub in_catalog: bool,
    pub wordle: Option<WordleSummary>,
    pub cryptogram: Option<CryptogramSummary>,
    pub has_prompt: bool,
}

/// Word-guess progress for the summary
pub struct WordleSummary {
    pub status: GameStatus,
    /// Scored rows for each submitted guess
    pub rows: Vec<(String, [LetterScore; 5])>,
}

/// Cryptogram progress for the summary
pub struct CryptogramSummary {
    pub hint: String,
    pub filled_slots: usize,
    pub total_slots: usize,
    pub solved: bool,
    pub conflict_count: usize,
}

/// Build the summary for a date
#[must_use]
pub fn show_date(catalog: &PuzzleCatalog, store: &ProgressStore, date: NaiveDate) -> ShowResult {
    let bundle = catalog.get(date);
    let day = store.day(date);

    let wordle = bundle
        .and_then(|b| b.wordle.as_deref())
        .and_then(|solution| crate::core::Guess::new(solution).ok())
        .map(|solution| {
            let saved = day.wordle.as_ref().map(|w| w.guesses()).unwrap_or_default();
            let game = WordleGame::new(solution, &saved);

            let rows = game
                .guesses()
                .iter()
                .enumerate()
                .filter_map(|(i, guess)| {
                    game.score_row(i).map(|row| (guess.text().to_string(), row))
                })
                .collect();

            WordleSummary {
                status: game.status(),
                rows,
            }
        });

    let cryptogram = bundle.and_then(|b| b.scryptogram.as_ref()).map(|puzzle| {
        let game = CryptogramGame::new(puzzle, day.scryptogram.as_ref());
        CryptogramSummary {
            hint: game.hint().to_string(),
            filled_slots: game.mapping().len(),
            total_slots: game.unique_letters().len(),
            solved: game.is_solved(),
            conflict_count: game.conflicts().len(),
        }
    });

    let has_prompt = bundle
        .and_then(|b| b.prompt.as_ref())
        .is_some_and(|p| !p.is_empty());

    ShowResult {
        date,
        in_catalog: bundle.is_some(),
        wordle,
        cryptogram,
        has_prompt,
    }
}
