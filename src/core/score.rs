//! Guess scoring and keyboard status aggregation
//!
//! Scoring follows Wordle's exact feedback rules, including proper handling
//! of duplicate letters:
//! 1. First pass: mark all exact matches (Correct) and remove them from the
//!    solution's available letter pool
//! 2. Second pass: mark present-but-wrong-position letters (Present) from the
//!    remaining pool, left to right
//!
//! Once the solution's supply of a letter is exhausted, further occurrences
//! in the guess score Absent.

use super::Guess;

/// Per-position feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Letter not in the word (or supply exhausted)
    Absent,
    /// Letter in the word, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

/// Best status a keyboard letter has achieved across all guesses
///
/// Ordering gives the aggregation precedence: `Correct > Present > Absent >
/// Unused`. A key's status is the maximum over every scored occurrence, so
/// it never downgrades as more guesses are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyStatus {
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<LetterScore> for KeyStatus {
    fn from(score: LetterScore) -> Self {
        match score {
            LetterScore::Correct => Self::Correct,
            LetterScore::Present => Self::Present,
            LetterScore::Absent => Self::Absent,
        }
    }
}

/// Score a guess against the solution
///
/// # Examples
/// ```
/// use cfm_daily::core::{Guess, LetterScore, score_guess};
///
/// let guess = Guess::new("erase").unwrap();
/// let solution = Guess::new("speed").unwrap();
/// let scores = score_guess(&guess, &solution);
///
/// // SPEED's two E's supply both of ERASE's E's
/// assert_eq!(scores[0], LetterScore::Present);
/// assert_eq!(scores[4], LetterScore::Present);
/// ```
#[must_use]
pub fn score_guess(guess: &Guess, solution: &Guess) -> [LetterScore; 5] {
    let mut result = [LetterScore::Absent; 5];
    let mut available = solution.char_counts();

    // First pass: exact position matches consume the letter supply first
    // Allow: Index needed to access guess[i], solution[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        if guess.chars()[i] == solution.chars()[i] {
            result[i] = LetterScore::Correct;

            let letter = guess.chars()[i];
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong-position letters, while supply remains
    // Allow: Index needed to access guess[i] and check/set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        if result[i] == LetterScore::Absent {
            let letter = guess.chars()[i];
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterScore::Present;
                *count -= 1;
            }
        }
    }

    result
}

/// Aggregate a keyboard letter's status across every submitted guess
///
/// Returns the best status the letter has ever achieved, which drives the
/// on-screen keyboard coloring.
#[must_use]
pub fn key_status(letter: u8, guesses: &[Guess], solution: &Guess) -> KeyStatus {
    let mut best = KeyStatus::Unused;

    for guess in guesses {
        let scores = score_guess(guess, solution);
        for &position in guess.positions_of(letter) {
            best = best.max(KeyStatus::from(scores[position]));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(guess: &str, solution: &str) -> [LetterScore; 5] {
        score_guess(
            &Guess::new(guess).unwrap(),
            &Guess::new(solution).unwrap(),
        )
    }

    #[test]
    fn all_absent() {
        use LetterScore::Absent;
        assert_eq!(scores("fghij", "abcde"), [Absent; 5]);
    }

    #[test]
    fn all_correct() {
        assert_eq!(scores("crane", "crane"), [LetterScore::Correct; 5]);
    }

    #[test]
    fn duplicate_letters_not_double_credited() {
        use LetterScore::{Absent, Correct, Present};

        // Solution SPEED has two E's: both of ERASE's E's draw from that
        // supply, so each scores Present.
        assert_eq!(
            scores("erase", "speed"),
            [Present, Absent, Absent, Present, Present]
        );

        // With the supply exhausted by exact matches, extra E's score Absent
        assert_eq!(
            scores("eeeee", "speed"),
            [Absent, Absent, Correct, Correct, Absent]
        );
    }

    #[test]
    fn correct_consumes_supply_before_present() {
        use LetterScore::{Absent, Correct, Present};

        // Solution FLOOR: guess ROBOT's second O is Correct and consumes
        // one O; the first O takes the remaining supply as Present.
        assert_eq!(
            scores("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn classic_example() {
        use LetterScore::{Absent, Correct};

        // CRANE vs SLATE: A and E correct, R absent (SLATE has no R)
        assert_eq!(
            scores("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn key_status_precedence() {
        let solution = Guess::new("slate").unwrap();
        let guesses = vec![Guess::new("crane").unwrap(), Guess::new("least").unwrap()];

        // A was Correct in CRANE: stays Correct even though LEAST scores it Present
        assert_eq!(key_status(b'A', &guesses, &solution), KeyStatus::Correct);
        // E was Correct in CRANE
        assert_eq!(key_status(b'E', &guesses, &solution), KeyStatus::Correct);
        // L appears only in LEAST, wrong position
        assert_eq!(key_status(b'L', &guesses, &solution), KeyStatus::Present);
        // C appears only in CRANE, not in SLATE
        assert_eq!(key_status(b'C', &guesses, &solution), KeyStatus::Absent);
        // Z never guessed
        assert_eq!(key_status(b'Z', &guesses, &solution), KeyStatus::Unused);
    }

    #[test]
    fn key_status_never_downgrades() {
        let solution = Guess::new("slate").unwrap();
        let mut guesses = vec![Guess::new("least").unwrap()];
        let before = key_status(b'L', &guesses, &solution);

        // A later guess where L scores Absent must not lower the key
        guesses.push(Guess::new("llama").unwrap());
        let after = key_status(b'L', &guesses, &solution);
        assert!(after >= before);
    }
}
