//! Formatting utilities for terminal output

use crate::core::LetterScore;

/// Format a scored guess row as an emoji string
#[must_use]
pub fn scores_to_emoji(scores: &[LetterScore; 5]) -> String {
    let mut result = String::with_capacity(20);

    for score in scores {
        result.push(match score {
            LetterScore::Correct => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬜',
        });
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Present};

    #[test]
    fn scores_to_emoji_all_absent() {
        assert_eq!(scores_to_emoji(&[Absent; 5]), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn scores_to_emoji_all_correct() {
        assert_eq!(scores_to_emoji(&[Correct; 5]), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn scores_to_emoji_mixed() {
        assert_eq!(
            scores_to_emoji(&[Present, Absent, Absent, Present, Absent]),
            "🟨⬜⬜🟨⬜"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
