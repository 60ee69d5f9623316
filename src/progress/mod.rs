//! Persisted per-date game progress
//!
//! One JSON record per installation, namespaced by date then by game key
//! (`wordle`, `scryptogram`) — the same blob schema the browser version kept
//! in its progress cookie. The storage layer has no partial-field update
//! primitive: every write is a read-modify-write of the whole record, and
//! each game's setter preserves the sibling key and every other date.
//!
//! Reads never fail: a missing or malformed record is treated as empty
//! progress and logged.

use crate::core::Guess;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Saved word-guess progress: up to six submitted guesses
///
/// Field-per-guess layout matches the original stored format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordleProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess6: Option<String>,
}

impl WordleProgress {
    /// Build the stored form from an ordered guess sequence
    #[must_use]
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let mut slots = [None, None, None, None, None, None];
        for (slot, guess) in slots.iter_mut().zip(guesses) {
            *slot = Some(guess.text().to_string());
        }
        let [guess1, guess2, guess3, guess4, guess5, guess6] = slots;
        Self {
            guess1,
            guess2,
            guess3,
            guess4,
            guess5,
            guess6,
        }
    }

    /// Reconstruct the ordered guess sequence, skipping invalid entries
    #[must_use]
    pub fn guesses(&self) -> Vec<Guess> {
        [
            &self.guess1,
            &self.guess2,
            &self.guess3,
            &self.guess4,
            &self.guess5,
            &self.guess6,
        ]
        .into_iter()
        .flatten()
        .filter_map(|text| Guess::new(text).ok())
        .collect()
    }
}

/// One date's progress record
///
/// Each engine owns only its own sub-key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordle: Option<WordleProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scryptogram: Option<BTreeMap<char, char>>,
}

impl DayProgress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wordle.is_none() && self.scryptogram.is_none()
    }
}

/// File-backed progress store
///
/// Writes are fire-and-forget from the engines' perspective; callers log
/// failures and move on. Concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one date's progress
    ///
    /// Missing or unreadable records yield empty progress, never an error.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> DayProgress {
        self.load_record()
            .remove(&date_key(date))
            .unwrap_or_default()
    }

    /// Persist the word-guess sequence for a date
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    pub fn set_wordle(&self, date: NaiveDate, guesses: &[Guess]) -> Result<()> {
        self.update(date, |day| {
            day.wordle = Some(WordleProgress::from_guesses(guesses));
        })
    }

    /// Persist the cryptogram mapping for a date
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    pub fn set_cryptogram(&self, date: NaiveDate, mapping: &BTreeMap<char, char>) -> Result<()> {
        self.update(date, |day| {
            day.scryptogram = Some(mapping.clone());
        })
    }

    /// Remove a date's word-guess sub-key only
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    pub fn clear_wordle(&self, date: NaiveDate) -> Result<()> {
        self.update(date, |day| {
            day.wordle = None;
        })
    }

    /// Remove a date's cryptogram sub-key only
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    pub fn clear_cryptogram(&self, date: NaiveDate) -> Result<()> {
        self.update(date, |day| {
            day.scryptogram = None;
        })
    }

    /// Dates that currently hold any progress
    #[must_use]
    pub fn dates_with_progress(&self) -> Vec<NaiveDate> {
        self.load_record()
            .keys()
            .filter_map(|key| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok())
            .collect()
    }

    fn update(&self, date: NaiveDate, mutate: impl FnOnce(&mut DayProgress)) -> Result<()> {
        let mut record = self.load_record();
        let key = date_key(date);
        let mut day = record.remove(&key).unwrap_or_default();

        mutate(&mut day);

        if !day.is_empty() {
            record.insert(key, day);
        }

        self.write_record(&record)
    }

    fn load_record(&self) -> BTreeMap<String, DayProgress> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "progress record unreadable, starting empty");
                }
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "progress record malformed, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn write_record(&self, record: &BTreeMap<String, DayProgress>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating progress directory {}", parent.display()))?;
        }

        let json = serde_json::to_string(record).context("serializing progress record")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing progress record {}", self.path.display()))
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
