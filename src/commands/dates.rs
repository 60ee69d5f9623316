//! Catalog date listing command

use crate::catalog::PuzzleCatalog;
use crate::progress::ProgressStore;
use chrono::NaiveDate;

/// One catalog date with availability and progress markers
pub struct DateEntry {
    pub date: NaiveDate,
    pub has_wordle: bool,
    pub has_cryptogram: bool,
    pub has_prompt: bool,
    pub wordle_started: bool,
    pub cryptogram_started: bool,
}

/// List every catalog date, ascending, with progress markers
#[must_use]
pub fn list_dates(catalog: &PuzzleCatalog, store: &ProgressStore) -> Vec<DateEntry> {
    catalog
        .dates()
        .map(|date| {
            // One catalog entry per date; get() cannot miss here
            let bundle = catalog.get(date).cloned().unwrap_or_default();
            let day = store.day(date);

            DateEntry {
                date,
                has_wordle: bundle.wordle.is_some(),
                has_cryptogram: bundle.scryptogram.is_some(),
                has_prompt: bundle.prompt.is_some_and(|p| !p.is_empty()),
                wordle_started: day.wordle.is_some(),
                cryptogram_started: day.scryptogram.is_some(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn entries_cover_catalog_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        let catalog = PuzzleCatalog::from_json(
            r#"{
                "2025-03-03": {"wordle": "GRACE"},
                "2025-03-01": {"scryptogram": {"solution": "GOD"}}
            }"#,
        )
        .unwrap();

        let mut mapping = BTreeMap::new();
        mapping.insert('G', 'G');
        store
            .set_cryptogram(
                NaiveDate::parse_from_str("2025-03-01", "%Y-%m-%d").unwrap(),
                &mapping,
            )
            .unwrap();

        let entries = list_dates(&catalog, &store);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].date.to_string(), "2025-03-01");
        assert!(entries[0].has_cryptogram);
        assert!(entries[0].cryptogram_started);
        assert!(!entries[0].has_wordle);

        assert!(entries[1].has_wordle);
        assert!(!entries[1].wordle_started);
    }
}
