//! Display functions for command results

use super::formatters::{create_progress_bar, scores_to_emoji};
use crate::commands::{DateEntry, ResetTarget, ShowResult};
use crate::engine::GameStatus;
use chrono::NaiveDate;
use colored::Colorize;

/// Print one date's puzzle summary
pub fn print_show_result(result: &ShowResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Daily puzzles for {}", result.date.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if !result.in_catalog {
        println!("\n{}", "No puzzle data for this date.".italic());
        return;
    }

    match &result.wordle {
        Some(wordle) => {
            let status = match wordle.status {
                GameStatus::Won => "won".green().bold(),
                GameStatus::Lost => "lost".red().bold(),
                GameStatus::Playing => {
                    format!("{}/6 guesses used", wordle.rows.len()).normal()
                }
            };
            println!("\n📗 ScriptureSpell: {status}");
            for (word, scores) in &wordle.rows {
                println!("   {} {}", word, scores_to_emoji(scores));
            }
        }
        None => println!("\n📗 ScriptureSpell: {}", "not available".italic()),
    }

    match &result.cryptogram {
        Some(crypto) => {
            let bar = create_progress_bar(
                crypto.filled_slots as f64,
                crypto.total_slots.max(1) as f64,
                20,
            );
            let status = if crypto.solved {
                "solved".green().bold()
            } else {
                format!("{}/{} letters mapped", crypto.filled_slots, crypto.total_slots).normal()
            };
            println!("\n🔒 Scryptogram: {status}");
            println!("   [{}]", bar.green());
            if !crypto.hint.is_empty() {
                println!("   Hint: {}", crypto.hint.italic());
            }
            if crypto.conflict_count > 0 {
                println!(
                    "   {}",
                    format!("{} duplicate guess group(s)", crypto.conflict_count).yellow()
                );
            }
        }
        None => println!("\n🔒 Scryptogram: {}", "not available".italic()),
    }

    if result.has_prompt {
        println!("\n📝 Prompt: available");
    } else {
        println!("\n📝 Prompt: {}", "not available".italic());
    }
}

/// Print the catalog date listing
pub fn print_dates(entries: &[DateEntry]) {
    if entries.is_empty() {
        println!("{}", "No puzzle data loaded.".italic());
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AVAILABLE DATES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  {} started  {} available  {} absent\n", "●".green(), "○".normal(), "·".dimmed());

    for entry in entries {
        let mark = |available: bool, started: bool| {
            if started {
                "●".green().to_string()
            } else if available {
                "○".normal().to_string()
            } else {
                "·".dimmed().to_string()
            }
        };

        println!(
            "  {}  spell {}  crypto {}  prompt {}",
            entry.date.to_string().bright_yellow(),
            mark(entry.has_wordle, entry.wordle_started),
            mark(entry.has_cryptogram, entry.cryptogram_started),
            mark(entry.has_prompt, false),
        );
    }
    println!();
}

/// Print a reset confirmation
pub fn print_reset(date: NaiveDate, target: ResetTarget) {
    let what = match target {
        ResetTarget::Wordle => "word-guess progress",
        ResetTarget::Cryptogram => "cryptogram progress",
        ResetTarget::Both => "all progress",
    };
    println!(
        "{} Cleared {what} for {}",
        "✓".green().bold(),
        date.to_string().bright_yellow()
    );
}
