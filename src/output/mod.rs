//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_dates, print_reset, print_show_result};
