//! Puzzle catalog loading
//!
//! The catalog document is fetched once at startup. A missing or malformed
//! file degrades to an empty catalog instead of crashing.

use super::PuzzleCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog
/// document.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading puzzle catalog {}", path.display()))?;

    PuzzleCatalog::from_json(&content)
        .with_context(|| format!("parsing puzzle catalog {}", path.display()))
}

/// Load a catalog, degrading to empty on any failure
///
/// Failures are logged; every engine then renders its "no puzzle data"
/// state.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> PuzzleCatalog {
    match load_from_file(&path) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(
                path = %path.as_ref().display(),
                %err,
                "puzzle catalog unavailable, continuing without puzzle data"
            );
            PuzzleCatalog::empty()
        }
    }
}
