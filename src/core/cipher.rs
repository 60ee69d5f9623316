//! Substitution-cipher codec
//!
//! A `CipherKey` maps each plaintext-alphabet position to a ciphertext letter.
//! Encoding is a pure, length-preserving character substitution: letters map
//! through the table case-insensitively, everything else passes through
//! unchanged.

use std::fmt;

/// The plaintext alphabet, in table order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A 26-letter substitution table
///
/// Position `i` holds the ciphertext letter for the `i`-th letter of the
/// alphabet. The table is normalized to uppercase on construction. A key does
/// not have to be a permutation to encode, but only permutation keys have an
/// inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherKey {
    table: [u8; 26],
}

/// Error type for invalid cipher keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKeyError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for CipherKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Cipher key must be exactly 26 letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Cipher key contains non-letter characters"),
        }
    }
}

impl std::error::Error for CipherKeyError {}

impl CipherKey {
    /// The identity key: every letter encodes to itself.
    pub const IDENTITY: Self = Self { table: *ALPHABET };

    /// Create a key from a 26-letter string
    ///
    /// # Errors
    /// Returns `CipherKeyError` if the string is not exactly 26 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use cfm_daily::core::CipherKey;
    ///
    /// let key = CipherKey::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    /// assert_eq!(key, CipherKey::IDENTITY);
    ///
    /// assert!(CipherKey::new("ABC").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherKeyError> {
        let normalized = key.to_uppercase();
        let bytes = normalized.as_bytes();

        if bytes.len() != 26 {
            return Err(CipherKeyError::InvalidLength(bytes.len()));
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(CipherKeyError::InvalidCharacters);
        }

        let table: [u8; 26] = bytes.try_into().expect("length already validated");
        Ok(Self { table })
    }

    /// Encode a single character
    ///
    /// Letters map through the table (output is the uppercase ciphertext
    /// letter); non-letters are returned unchanged.
    #[must_use]
    pub fn encode_char(&self, ch: char) -> char {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            char::from(self.table[(upper as u8 - b'A') as usize])
        } else {
            ch
        }
    }

    /// Encode a plaintext string
    ///
    /// Pure and length-preserving; spaces and punctuation are fixed points.
    ///
    /// # Examples
    /// ```
    /// use cfm_daily::core::CipherKey;
    ///
    /// let rot1 = CipherKey::new("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    /// assert_eq!(rot1.encode("GOD IS LOVE"), "HPE JT MPWF");
    /// assert_eq!(CipherKey::IDENTITY.encode("it's me!"), "IT'S ME!");
    /// ```
    #[must_use]
    pub fn encode(&self, plaintext: &str) -> String {
        plaintext.chars().map(|ch| self.encode_char(ch)).collect()
    }

    /// Compute the inverse key, if this key is a permutation
    ///
    /// Returns `None` when two alphabet positions map to the same ciphertext
    /// letter. For a permutation key, `invert().encode(encode(text))`
    /// recovers the letters of `text` (uppercased).
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let mut inverse = [0u8; 26];
        let mut seen = [false; 26];

        for (i, &cipher) in self.table.iter().enumerate() {
            let slot = (cipher - b'A') as usize;
            if seen[slot] {
                return None;
            }
            seen[slot] = true;
            inverse[slot] = ALPHABET[i];
        }

        Some(Self { table: inverse })
    }
}

impl Default for CipherKey {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.table {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_encodes_to_self() {
        assert_eq!(CipherKey::IDENTITY.encode("HELLO"), "HELLO");
        assert_eq!(CipherKey::IDENTITY.encode("hello"), "HELLO");
    }

    #[test]
    fn key_validation() {
        assert!(CipherKey::new("abcdefghijklmnopqrstuvwxyz").is_ok());
        assert!(matches!(
            CipherKey::new("ABC"),
            Err(CipherKeyError::InvalidLength(3))
        ));
        assert!(matches!(
            CipherKey::new("ABCDEFGHIJKLMNOPQRSTUVWXY1"),
            Err(CipherKeyError::InvalidCharacters)
        ));
    }

    #[test]
    fn non_letters_are_fixed_points() {
        let rot13 = CipherKey::new("NOPQRSTUVWXYZABCDEFGHIJKLM").unwrap();
        let encoded = rot13.encode("GOD IS LOVE, 3:16!");
        assert_eq!(encoded, "TBQ VF YBIR, 3:16!");

        // Same length, identical non-letter positions
        assert_eq!(encoded.chars().count(), "GOD IS LOVE, 3:16!".chars().count());
        assert_eq!(&encoded[11..], ", 3:16!");
    }

    #[test]
    fn encode_is_deterministic() {
        let key = CipherKey::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        assert_eq!(key.encode("DAILY"), key.encode("DAILY"));
        assert_eq!(key.encode("daily"), key.encode("DAILY"));
    }

    #[test]
    fn inverse_recovers_letters() {
        let key = CipherKey::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        let inverse = key.invert().unwrap();

        let plain = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG.";
        assert_eq!(inverse.encode(&key.encode(plain)), plain);
    }

    #[test]
    fn non_permutation_has_no_inverse() {
        // Two positions map to A
        let key = CipherKey::new("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(key.invert().is_none());
    }

    #[test]
    fn identity_is_its_own_inverse() {
        assert_eq!(CipherKey::IDENTITY.invert(), Some(CipherKey::IDENTITY));
    }

    #[test]
    fn display_round_trips() {
        let key = CipherKey::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        assert_eq!(CipherKey::new(&key.to_string()).unwrap(), key);
    }
}
