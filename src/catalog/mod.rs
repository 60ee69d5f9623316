//! Date-keyed puzzle catalog
//!
//! One JSON document holds every day's puzzle bundle, keyed by ISO date
//! (`YYYY-MM-DD`). The catalog is read-only after load; absence of a date
//! yields "no puzzle" behavior in every engine.

pub mod loader;

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

/// All puzzles for one calendar date, immutable once fetched
///
/// Every sub-key is optional; each engine handles its own absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PuzzleBundle {
    /// 5-letter solution for the word-guess game
    pub wordle: Option<String>,
    pub scryptogram: Option<CryptogramPuzzle>,
    pub prompt: Option<PromptPuzzle>,
}

/// Cryptogram puzzle definition
#[derive(Debug, Clone, Deserialize)]
pub struct CryptogramPuzzle {
    /// Plaintext solution: letters, spaces, punctuation
    pub solution: String,
    #[serde(default)]
    pub hint: String,
    /// 26-letter substitution key; identity alphabet when absent
    #[serde(default)]
    pub cipher: Option<String>,
}

/// Reflection prompt for one date
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptPuzzle {
    pub reference: Option<String>,
    #[serde(rename = "referenceText")]
    pub reference_text: Option<String>,
    pub question: Option<String>,
    pub response: Option<String>,
}

impl PromptPuzzle {
    /// A prompt with no fields at all renders as unavailable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reference.is_none()
            && self.reference_text.is_none()
            && self.question.is_none()
            && self.response.is_none()
    }
}

/// Sorted date map of puzzle bundles
#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    days: BTreeMap<NaiveDate, PuzzleBundle>,
}

impl PuzzleCatalog {
    /// An empty catalog: the degraded "no data" mode
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON document
    ///
    /// Entries whose key is not a valid ISO date are skipped with a warning
    /// rather than failing the whole document.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if the document itself is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, PuzzleBundle> = serde_json::from_str(json)?;

        let mut days = BTreeMap::new();
        for (key, bundle) in raw {
            match NaiveDate::parse_from_str(&key, "%Y-%m-%d") {
                Ok(date) => {
                    days.insert(date, bundle);
                }
                Err(err) => {
                    warn!(key, %err, "skipping catalog entry with invalid date key");
                }
            }
        }

        Ok(Self { days })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// The bundle for a date, if the catalog has one
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&PuzzleBundle> {
        self.days.get(&date)
    }

    /// All catalog dates, ascending
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// The greatest catalog date strictly before `date`
    ///
    /// `None` means `date` is already at (or before) the start: the caller
    /// clamps by keeping the current selection.
    #[must_use]
    pub fn prev_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.days.range(..date).next_back().map(|(d, _)| *d)
    }

    /// The smallest catalog date strictly after `date`, bounded above
    ///
    /// Dates after `max` (the current calendar date) are never selectable.
    #[must_use]
    pub fn next_date(&self, date: NaiveDate, max: NaiveDate) -> Option<NaiveDate> {
        self.days
            .range(date.succ_opt()?..)
            .map(|(d, _)| *d)
            .find(|d| *d <= max)
    }

    /// The latest catalog date on or before `date`
    ///
    /// Used for the initial selection: today's puzzle when it exists, else
    /// the most recent one.
    #[must_use]
    pub fn latest_on_or_before(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.days
            .range(..=date)
            .next_back()
            .map(|(d, _)| *d)
    }
}
