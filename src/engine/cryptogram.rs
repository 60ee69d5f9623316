//! Cryptogram engine
//!
//! Maintains the guessed mapping from ciphertext letters back to plaintext
//! letters for one date's puzzle. Slots are the distinct ciphertext letters in
//! ascending order; derived state (solved flag, conflict groups) is recomputed
//! eagerly after every mutation.

use crate::catalog::CryptogramPuzzle;
use crate::core::CipherKey;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::warn;

/// A plaintext letter currently guessed for more than one ciphertext letter
///
/// Advisory only: a valid solution needs an injective mapping, but transient
/// duplicates never block input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub plain: char,
    pub ciphers: Vec<char>,
}

/// Interactive state for one date's cryptogram
pub struct CryptogramGame {
    solution: String,
    hint: String,
    ciphertext: String,
    unique_letters: Vec<char>,
    mapping: BTreeMap<char, char>,
    focus: usize,
    solved: bool,
    celebrated: bool,
    pending_celebration: bool,
    revealed: Option<char>,
}

impl CryptogramGame {
    /// Build the session state for a puzzle, restoring saved progress
    ///
    /// Saved entries whose key is not a ciphertext letter of this puzzle, or
    /// whose value is not a single A-Z letter, are discarded.
    #[must_use]
    pub fn new(puzzle: &CryptogramPuzzle, saved: Option<&BTreeMap<char, char>>) -> Self {
        let key = puzzle
            .cipher
            .as_deref()
            .map_or(CipherKey::IDENTITY, |text| {
                CipherKey::new(text).unwrap_or_else(|err| {
                    warn!(%err, "invalid cipher key, falling back to identity alphabet");
                    CipherKey::IDENTITY
                })
            });

        let ciphertext = key.encode(&puzzle.solution);
        let unique = unique_letters(&ciphertext);

        let mut mapping = BTreeMap::new();
        if let Some(saved) = saved {
            for (&cipher, &plain) in saved {
                let plain = plain.to_ascii_uppercase();
                if unique.contains(&cipher) && plain.is_ascii_uppercase() {
                    mapping.insert(cipher, plain);
                }
            }
        }

        let mut game = Self {
            solution: puzzle.solution.clone(),
            hint: puzzle.hint.clone(),
            ciphertext,
            unique_letters: unique,
            mapping,
            focus: 0,
            solved: false,
            celebrated: false,
            pending_celebration: false,
            revealed: None,
        };
        game.refresh_solved();
        game
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// The ordered slot domain: distinct ciphertext letters, ascending
    #[must_use]
    pub fn unique_letters(&self) -> &[char] {
        &self.unique_letters
    }

    /// The current mapping, filled entries only
    #[must_use]
    pub const fn mapping(&self) -> &BTreeMap<char, char> {
        &self.mapping
    }

    /// The guessed plaintext letter for a ciphertext letter, if any
    #[must_use]
    pub fn guess_for(&self, cipher: char) -> Option<char> {
        self.mapping.get(&cipher).copied()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// The last hint-revealed ciphertext letter, for UI highlight
    #[must_use]
    pub const fn revealed(&self) -> Option<char> {
        self.revealed
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// The ciphertext letter under the focused slot
    #[must_use]
    pub fn focused_letter(&self) -> Option<char> {
        self.unique_letters.get(self.focus).copied()
    }

    /// Set or clear the guess for one ciphertext letter
    ///
    /// Accepts only `None` (clear) or a single A-Z letter (case-normalized);
    /// anything else, or a letter outside this puzzle's slot domain, is
    /// rejected without mutating state. Returns whether the guess was
    /// applied.
    pub fn set_guess(&mut self, cipher: char, plain: Option<char>) -> bool {
        let cipher = cipher.to_ascii_uppercase();
        if !self.unique_letters.contains(&cipher) {
            return false;
        }

        match plain {
            None => {
                self.mapping.remove(&cipher);
            }
            Some(letter) => {
                let letter = letter.to_ascii_uppercase();
                if !letter.is_ascii_uppercase() {
                    return false;
                }
                self.mapping.insert(cipher, letter);
            }
        }

        self.refresh_solved();
        true
    }

    /// Move focus one slot right, clamped at the last slot
    pub fn move_right(&mut self) {
        if self.focus + 1 < self.unique_letters.len() {
            self.focus += 1;
        }
    }

    /// Move focus one slot left, clamped at the first slot
    pub fn move_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Move focus to the slot of a specific ciphertext letter
    pub fn focus_slot(&mut self, cipher: char) {
        if let Some(index) = self.unique_letters.iter().position(|&c| c == cipher) {
            self.focus = index;
        }
    }

    /// Type a letter into the focused slot
    ///
    /// Auto-advances focus right unless already at the last slot. Returns
    /// whether the letter was accepted.
    pub fn commit_letter(&mut self, letter: char) -> bool {
        let Some(cipher) = self.focused_letter() else {
            return false;
        };
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        if !self.set_guess(cipher, Some(letter)) {
            return false;
        }
        self.move_right();
        true
    }

    /// Backspace on the focused slot
    ///
    /// Clears a filled slot in place; on an empty slot, moves focus left.
    pub fn backspace(&mut self) {
        let Some(cipher) = self.focused_letter() else {
            return;
        };
        if self.mapping.contains_key(&cipher) {
            self.set_guess(cipher, None);
        } else {
            self.move_left();
        }
    }

    /// Paste into the focused slot
    ///
    /// Accepts only text whose first non-whitespace character resolves to an
    /// A-Z letter; otherwise rejected without mutating state.
    pub fn paste(&mut self, text: &str) -> bool {
        let Some(letter) = text.trim().chars().next() else {
            return false;
        };
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        self.commit_letter(letter)
    }

    /// Current duplicate-guess groups, ordered by plaintext letter
    #[must_use]
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut by_plain: BTreeMap<char, Vec<char>> = BTreeMap::new();
        for (&cipher, &plain) in &self.mapping {
            by_plain.entry(plain).or_default().push(cipher);
        }

        by_plain
            .into_iter()
            .filter(|(_, ciphers)| ciphers.len() > 1)
            .map(|(plain, ciphers)| Conflict { plain, ciphers })
            .collect()
    }

    /// Reveal the correct letter for one unsolved slot, chosen uniformly
    ///
    /// Candidates are ciphertext letters whose current guess is missing or
    /// incorrect. Marks the revealed letter for highlight and moves focus to
    /// its slot. Returns `None` when the puzzle is already fully solved.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        let mut candidates: Vec<(char, char)> = Vec::new();
        for (cipher, plain) in self.ciphertext.chars().zip(self.solution.chars()) {
            if !cipher.is_ascii_uppercase() {
                continue;
            }
            let desired = plain.to_ascii_uppercase();
            if self.mapping.get(&cipher) != Some(&desired)
                && !candidates.iter().any(|(c, _)| *c == cipher)
            {
                candidates.push((cipher, desired));
            }
        }

        let (cipher, desired) = *candidates.get(rng.random_range(0..candidates.len().max(1)))?;

        self.mapping.insert(cipher, desired);
        self.revealed = Some(cipher);
        self.focus_slot(cipher);
        self.refresh_solved();
        Some(cipher)
    }

    /// Clear all guesses and remembered focus state
    ///
    /// The caller removes this date's persisted cryptogram sub-key; the
    /// engine only resets in-memory state. Focus returns to the first slot,
    /// and a later resolve celebrates again.
    pub fn reset(&mut self) {
        self.mapping.clear();
        self.revealed = None;
        self.focus = 0;
        self.celebrated = false;
        self.pending_celebration = false;
        self.refresh_solved();
    }

    /// Take the one-shot celebration flag
    ///
    /// Returns true exactly once per false-to-true solve transition.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.pending_celebration)
    }

    fn refresh_solved(&mut self) {
        let solved = evaluate_solved(&self.mapping, &self.solution, &self.ciphertext);
        if solved && !self.celebrated {
            self.celebrated = true;
            self.pending_celebration = true;
        }
        self.solved = solved;
    }
}

/// The distinct A-Z letters of a ciphertext, ascending
#[must_use]
pub fn unique_letters(ciphertext: &str) -> Vec<char> {
    let mut letters: Vec<char> = ciphertext
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

/// True iff every letter position's mapped guess matches the solution
///
/// Non-letter positions are vacuously satisfied; a missing or wrong guess at
/// any single position makes the whole puzzle unsolved.
#[must_use]
pub fn evaluate_solved(
    mapping: &BTreeMap<char, char>,
    solution: &str,
    ciphertext: &str,
) -> bool {
    ciphertext
        .chars()
        .zip(solution.chars())
        .all(|(cipher, plain)| {
            if !cipher.is_ascii_uppercase() {
                return true;
            }
            mapping
                .get(&cipher)
                .is_some_and(|guess| guess.eq_ignore_ascii_case(&plain))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle(solution: &str, cipher: Option<&str>) -> CryptogramPuzzle {
        CryptogramPuzzle {
            solution: solution.to_string(),
            hint: "hint".to_string(),
            cipher: cipher.map(String::from),
        }
    }

    // Shift-by-13 key: G encodes to T
    const ROT13: &str = "NOPQRSTUVWXYZABCDEFGHIJKLM";

    #[test]
    fn ciphertext_and_unique_letters() {
        let game = CryptogramGame::new(&puzzle("GOD IS LOVE", Some(ROT13)), None);

        assert_eq!(game.ciphertext(), "TBQ VF YBIR");
        // Distinct ciphertext letters, ascending, no duplicates
        assert_eq!(
            game.unique_letters(),
            &['B', 'F', 'I', 'Q', 'R', 'T', 'V', 'Y']
        );
    }

    #[test]
    fn unique_letters_ignores_non_letters() {
        assert_eq!(unique_letters("A-B, B!"), vec!['A', 'B']);
        assert_eq!(unique_letters("123 ..."), Vec::<char>::new());
    }

    #[test]
    fn malformed_cipher_falls_back_to_identity() {
        let game = CryptogramGame::new(&puzzle("ABBA", Some("short")), None);
        assert_eq!(game.ciphertext(), "ABBA");
    }

    #[test]
    fn set_guess_validates_input() {
        let mut game = CryptogramGame::new(&puzzle("GOD", Some(ROT13)), None);

        // T is a ciphertext letter (G -> T); lowercase normalizes
        assert!(game.set_guess('T', Some('g')));
        assert_eq!(game.guess_for('T'), Some('G'));

        // Non-letters rejected without mutation
        assert!(!game.set_guess('T', Some('3')));
        assert_eq!(game.guess_for('T'), Some('G'));

        // Keys outside the puzzle's slot domain rejected
        assert!(!game.set_guess('Z', Some('A')));
        assert!(game.mapping().keys().all(|c| game.unique_letters().contains(c)));

        // Clearing removes the entry
        assert!(game.set_guess('T', None));
        assert_eq!(game.guess_for('T'), None);
    }

    #[test]
    fn solved_flips_exactly_once_on_last_fill() {
        let mut game = CryptogramGame::new(&puzzle("GOD IS LOVE", Some(ROT13)), None);

        // Map every ciphertext letter except one correctly
        let pairs = [
            ('T', 'G'),
            ('B', 'O'),
            ('Q', 'D'),
            ('V', 'I'),
            ('F', 'S'),
            ('Y', 'L'),
            ('I', 'V'),
        ];
        for (cipher, plain) in pairs {
            game.set_guess(cipher, Some(plain));
        }
        // R (-> E) still unmapped
        assert!(!game.is_solved());
        assert!(!game.take_celebration());

        game.set_guess('R', Some('E'));
        assert!(game.is_solved());
        assert!(game.take_celebration());

        // Further edits while solved never re-fire the celebration
        game.set_guess('T', Some('G'));
        assert!(!game.take_celebration());
    }

    #[test]
    fn one_wrong_slot_is_unsolved() {
        let mut game = CryptogramGame::new(&puzzle("GOD", Some(ROT13)), None);
        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('X')); // wrong
        game.set_guess('Q', Some('D'));
        assert!(!game.is_solved());

        game.set_guess('B', Some('O'));
        assert!(game.is_solved());
    }

    #[test]
    fn celebration_after_reset_then_resolve() {
        let mut game = CryptogramGame::new(&puzzle("GO", Some(ROT13)), None);
        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('O'));
        assert!(game.take_celebration());

        game.reset();
        assert!(game.mapping().is_empty());
        assert!(!game.is_solved());
        assert_eq!(game.focus(), 0);

        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('O'));
        assert!(game.take_celebration());
    }

    #[test]
    fn restoring_saved_progress_filters_invalid_entries() {
        let mut saved = BTreeMap::new();
        saved.insert('T', 'G');
        saved.insert('Z', 'Q'); // Z is not in this puzzle's ciphertext
        let game = CryptogramGame::new(&puzzle("GOD", Some(ROT13)), Some(&saved));

        assert_eq!(game.guess_for('T'), Some('G'));
        assert_eq!(game.mapping().len(), 1);
    }

    #[test]
    fn restoring_solved_progress_celebrates_once() {
        let mut saved = BTreeMap::new();
        saved.insert('T', 'G');
        saved.insert('B', 'O');
        let mut game = CryptogramGame::new(&puzzle("GO", Some(ROT13)), Some(&saved));

        assert!(game.is_solved());
        assert!(game.take_celebration());
        assert!(!game.take_celebration());
    }

    #[test]
    fn conflicts_group_by_plain_letter() {
        let mut game = CryptogramGame::new(&puzzle("ABC", None), None);
        game.set_guess('A', Some('X'));
        game.set_guess('B', Some('X'));
        game.set_guess('C', Some('Y'));

        let conflicts = game.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].plain, 'X');
        assert_eq!(conflicts[0].ciphers, vec!['A', 'B']);

        // All-distinct values yield no conflicts
        game.set_guess('B', Some('Z'));
        assert!(game.conflicts().is_empty());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut game = CryptogramGame::new(&puzzle("ABC", None), None);
        assert_eq!(game.focus(), 0);

        game.move_left();
        assert_eq!(game.focus(), 0);

        game.move_right();
        game.move_right();
        assert_eq!(game.focus(), 2);
        game.move_right();
        assert_eq!(game.focus(), 2);
    }

    #[test]
    fn commit_letter_advances_except_at_last_slot() {
        let mut game = CryptogramGame::new(&puzzle("ABC", None), None);

        assert!(game.commit_letter('x'));
        assert_eq!(game.guess_for('A'), Some('X'));
        assert_eq!(game.focus(), 1);

        game.move_right();
        assert!(game.commit_letter('z'));
        assert_eq!(game.focus(), 2);
    }

    #[test]
    fn backspace_clears_in_place_then_moves_left() {
        let mut game = CryptogramGame::new(&puzzle("ABC", None), None);
        game.commit_letter('x'); // fills A, focus -> B

        game.backspace(); // B empty: move left to A
        assert_eq!(game.focus(), 0);

        game.backspace(); // A filled: clear, keep focus
        assert_eq!(game.guess_for('A'), None);
        assert_eq!(game.focus(), 0);

        game.backspace(); // A empty, already at first slot
        assert_eq!(game.focus(), 0);
    }

    #[test]
    fn paste_accepts_single_resolvable_letter() {
        let mut game = CryptogramGame::new(&puzzle("ABC", None), None);

        assert!(game.paste("  x  "));
        assert_eq!(game.guess_for('A'), Some('X'));
        assert_eq!(game.focus(), 1);

        // Non-letter paste rejected without mutation
        assert!(!game.paste("42"));
        assert!(!game.paste(""));
        assert_eq!(game.guess_for('B'), None);
        assert_eq!(game.focus(), 1);
    }

    #[test]
    fn hint_fills_the_only_remaining_slot() {
        let mut game = CryptogramGame::new(&puzzle("GOD", Some(ROT13)), None);
        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('O'));

        let mut rng = StdRng::seed_from_u64(7);
        let revealed = game.reveal_hint(&mut rng);

        assert_eq!(revealed, Some('Q'));
        assert_eq!(game.guess_for('Q'), Some('D'));
        assert_eq!(game.revealed(), Some('Q'));
        assert_eq!(game.focused_letter(), Some('Q'));
        assert!(game.is_solved());
    }

    #[test]
    fn hint_targets_incorrect_guesses_too() {
        let mut game = CryptogramGame::new(&puzzle("GOD", Some(ROT13)), None);
        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('O'));
        game.set_guess('Q', Some('X')); // wrong

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(game.reveal_hint(&mut rng), Some('Q'));
        assert_eq!(game.guess_for('Q'), Some('D'));
    }

    #[test]
    fn hint_is_noop_when_solved() {
        let mut game = CryptogramGame::new(&puzzle("GO", Some(ROT13)), None);
        game.set_guess('T', Some('G'));
        game.set_guess('B', Some('O'));

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(game.reveal_hint(&mut rng), None);
        assert_eq!(game.revealed(), None);
    }

    #[test]
    fn repeated_hints_solve_the_puzzle() {
        let mut game = CryptogramGame::new(&puzzle("GOD IS LOVE", Some(ROT13)), None);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..game.unique_letters().len() {
            assert!(game.reveal_hint(&mut rng).is_some());
        }
        assert!(game.is_solved());
        assert_eq!(game.reveal_hint(&mut rng), None);
    }

    #[test]
    fn evaluate_solved_non_letters_vacuous() {
        let mapping = BTreeMap::new();
        assert!(evaluate_solved(&mapping, "... !", "... !"));
    }
}
