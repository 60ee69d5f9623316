//! Command implementations

pub mod dates;
pub mod reset;
pub mod show;

pub use dates::{DateEntry, list_dates};
pub use reset::{ResetTarget, reset_progress};
pub use show::{CryptogramSummary, ShowResult, WordleSummary, show_date};
