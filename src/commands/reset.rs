//! Progress reset command

use crate::progress::ProgressStore;
use anyhow::Result;
use chrono::NaiveDate;

/// Which persisted sub-keys to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    Wordle,
    Cryptogram,
    Both,
}

impl ResetTarget {
    /// Parse a `--game` argument
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wordle" => Some(Self::Wordle),
            "cryptogram" | "scryptogram" => Some(Self::Cryptogram),
            "both" | "all" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Clear persisted progress for one date
///
/// Only the named sub-keys are touched; other dates and the sibling game are
/// preserved.
///
/// # Errors
/// Returns an error if the progress record cannot be written.
pub fn reset_progress(store: &ProgressStore, date: NaiveDate, target: ResetTarget) -> Result<()> {
    match target {
        ResetTarget::Wordle => store.clear_wordle(date),
        ResetTarget::Cryptogram => store.clear_cryptogram(date),
        ResetTarget::Both => {
            store.clear_wordle(date)?;
            store.clear_cryptogram(date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;
    use std::collections::BTreeMap;

    #[test]
    fn target_parsing() {
        assert_eq!(ResetTarget::from_name("wordle"), Some(ResetTarget::Wordle));
        assert_eq!(
            ResetTarget::from_name("Scryptogram"),
            Some(ResetTarget::Cryptogram)
        );
        assert_eq!(ResetTarget::from_name("both"), Some(ResetTarget::Both));
        assert_eq!(ResetTarget::from_name("chess"), None);
    }

    #[test]
    fn reset_clears_only_the_target() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        let date = NaiveDate::parse_from_str("2025-03-01", "%Y-%m-%d").unwrap();

        store
            .set_wordle(date, &[Guess::new("crane").unwrap()])
            .unwrap();
        let mut mapping = BTreeMap::new();
        mapping.insert('A', 'B');
        store.set_cryptogram(date, &mapping).unwrap();

        reset_progress(&store, date, ResetTarget::Cryptogram).unwrap();
        let day = store.day(date);
        assert!(day.scryptogram.is_none());
        assert!(day.wordle.is_some());

        reset_progress(&store, date, ResetTarget::Both).unwrap();
        assert!(store.day(date).is_empty());
    }
}
