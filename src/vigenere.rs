//! Vigenère: polyalphabetic substitution engine.
//!
//! Each ASCII letter of the text is shifted by the alphabet index of the
//! key-stream letter at the same position: forward for encryption,
//! backward for decryption. Everything that is not an ASCII letter is
//! copied through unchanged, so output and input always have the same
//! length and the same non-letter positions. Output letters are always
//! uppercase.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::alignment::Alignment;
use crate::error::{InputField, VigenereError};
use crate::key_stream::{CleanKey, KeyStream};
use crate::utils::alphabet;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `r = (c + k) mod 26`
    Encrypt,
    /// `r = (c - k + 26) mod 26`
    Decrypt,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }

    /// Label for the text fed into a transform in this direction.
    pub fn input_label(self) -> &'static str {
        match self {
            Direction::Encrypt => "Plaintext",
            Direction::Decrypt => "Ciphertext",
        }
    }

    /// Label for the text produced by a transform in this direction.
    pub fn output_label(self) -> &'static str {
        self.inverse().input_label()
    }

    fn is_forward(self) -> bool {
        self == Direction::Encrypt
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Error returned when parsing an unknown [`Direction`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction '{0}', expected 'encrypt' or 'decrypt'")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Direction::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Direction::Decrypt),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Vigenère cipher engine bound to one keyword.
///
/// Holds only the validated [`CleanKey`]. Every call derives a fresh key
/// stream, so one engine can serve any number of texts, in either
/// direction, from any number of threads.
///
/// # Examples
///
/// ```
/// use vigenere::Vigenere;
///
/// let cipher = Vigenere::new("KEY").unwrap();
/// let encrypted = cipher.encrypt("HELLO, WORLD!").unwrap();
/// assert_eq!(encrypted, "RIJVS, UYVJN!");
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "HELLO, WORLD!");
/// ```
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: CleanKey,
}

impl Vigenere {
    /// Creates an engine from a raw keyword.
    ///
    /// # Errors
    /// - [`VigenereError::EmptyInput`] if `keyword` is empty.
    /// - [`VigenereError::NoKeyMaterial`] if `keyword` has no ASCII letters.
    ///
    /// ```
    /// use vigenere::{Vigenere, VigenereError};
    ///
    /// assert_eq!(Vigenere::new("123").unwrap_err(), VigenereError::NoKeyMaterial);
    /// ```
    pub fn new(keyword: &str) -> Result<Self, VigenereError> {
        let key = CleanKey::new(keyword)?;
        debug!("vigenere engine ready, key length {}", key.len());
        Ok(Vigenere { key })
    }

    /// Creates an engine from an already cleaned key.
    pub fn with_key(key: CleanKey) -> Self {
        Vigenere { key }
    }

    /// Returns the clean key this engine uses.
    pub fn key(&self) -> &CleanKey {
        &self.key
    }

    /// Encrypts `text`.
    ///
    /// # Errors
    /// [`VigenereError::EmptyInput`] if `text` is empty.
    pub fn encrypt(&self, text: &str) -> Result<String, VigenereError> {
        self.transform(text, Direction::Encrypt)
    }

    /// Decrypts `text`.
    ///
    /// Decrypting an encryption restores the original letters in uppercase;
    /// the original letter case is not recoverable.
    ///
    /// # Errors
    /// [`VigenereError::EmptyInput`] if `text` is empty.
    pub fn decrypt(&self, text: &str) -> Result<String, VigenereError> {
        self.transform(text, Direction::Decrypt)
    }

    /// Encrypts or decrypts `text` according to `direction`.
    ///
    /// # Errors
    /// [`VigenereError::EmptyInput`] if `text` is empty.
    pub fn transform(&self, text: &str, direction: Direction) -> Result<String, VigenereError> {
        let stream = self.key_stream(text)?;
        Ok(Self::apply(text, &stream, direction))
    }

    /// Expands this engine's key over `text`.
    ///
    /// # Errors
    /// [`VigenereError::EmptyInput`] if `text` is empty.
    pub fn key_stream(&self, text: &str) -> Result<KeyStream, VigenereError> {
        if text.is_empty() {
            return Err(VigenereError::EmptyInput(InputField::Text));
        }
        Ok(KeyStream::expand(text, &self.key))
    }

    /// Builds the character-by-character alignment for `text`.
    ///
    /// # Errors
    /// [`VigenereError::EmptyInput`] if `text` is empty.
    pub fn align(&self, text: &str, direction: Direction) -> Result<Alignment, VigenereError> {
        let stream = self.key_stream(text)?;
        let result = Self::apply(text, &stream, direction);
        Ok(Alignment::from_parts(direction, text, &stream, &result))
    }

    /// Applies a key stream to `text`.
    ///
    /// `stream` must have been expanded over `text`; positions without a
    /// key letter are copied verbatim.
    pub(crate) fn apply(text: &str, stream: &KeyStream, direction: Direction) -> String {
        let forward = direction.is_forward();
        let mut shifted = 0usize;
        let result: String = text
            .chars()
            .zip(stream.iter())
            .map(|(c, k)| match k.and_then(|k| alphabet::shift(c, k, forward)) {
                Some(r) => {
                    shifted += 1;
                    r
                }
                None => c,
            })
            .collect();
        debug!(
            "{}: {} chars, {} letters transformed",
            direction,
            stream.len(),
            shifted
        );
        result
    }
}

/// Encrypts or decrypts `text` with `keyword`.
///
/// # Errors
/// - [`VigenereError::EmptyInput`] if `text` or `keyword` is empty.
/// - [`VigenereError::NoKeyMaterial`] if `keyword` has no ASCII letters.
///
/// # Examples
///
/// ```
/// use vigenere::{transform, Direction, VigenereError};
///
/// assert_eq!(transform("attack at dawn", "LEMON", Direction::Encrypt).unwrap(),
///            "LXFOPV EF RNHR");
/// assert_eq!(transform("TEST", "123", Direction::Encrypt),
///            Err(VigenereError::NoKeyMaterial));
/// ```
pub fn transform(text: &str, keyword: &str, direction: Direction) -> Result<String, VigenereError> {
    if text.is_empty() {
        return Err(VigenereError::EmptyInput(InputField::Text));
    }
    Vigenere::new(keyword)?.transform(text, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_mixed_content() {
        let cipher = Vigenere::new("KEY").unwrap();
        assert_eq!(cipher.encrypt("HELLO, WORLD!").unwrap(), "RIJVS, UYVJN!");
    }

    #[test]
    fn test_decrypt_mixed_content() {
        let cipher = Vigenere::new("KEY").unwrap();
        assert_eq!(cipher.decrypt("RIJVS, UYVJN!").unwrap(), "HELLO, WORLD!");
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let cipher = Vigenere::new("key").unwrap();
        assert_eq!(cipher.encrypt("hello").unwrap(), "RIJVS");
        assert_eq!(cipher.decrypt("rijvs").unwrap(), "HELLO");
    }

    #[test]
    fn test_decrypt_of_encrypt_uppercases_letters() {
        let cipher = Vigenere::new("Lemon").unwrap();
        let text = "Attack at dawn, 5 o'clock.";
        let round = cipher.decrypt(&cipher.encrypt(text).unwrap()).unwrap();
        assert_eq!(round, "ATTACK AT DAWN, 5 O'CLOCK.");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let cipher = Vigenere::new("B").unwrap();
        assert_eq!(cipher.encrypt("añb").unwrap(), "BñC");
    }

    #[test]
    fn test_text_without_letters_is_unchanged() {
        let cipher = Vigenere::new("KEY").unwrap();
        assert_eq!(cipher.encrypt("123 !?").unwrap(), "123 !?");
    }

    #[test]
    fn test_key_a_is_identity() {
        let cipher = Vigenere::new("a").unwrap();
        assert_eq!(cipher.encrypt("Zebra").unwrap(), "ZEBRA");
    }

    #[test]
    fn test_empty_text_rejected() {
        let cipher = Vigenere::new("KEY").unwrap();
        assert_eq!(
            cipher.encrypt(""),
            Err(VigenereError::EmptyInput(InputField::Text))
        );
        assert_eq!(
            transform("", "KEY", Direction::Decrypt),
            Err(VigenereError::EmptyInput(InputField::Text))
        );
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert_eq!(
            transform("TEST", "", Direction::Encrypt),
            Err(VigenereError::EmptyInput(InputField::Keyword))
        );
    }

    #[test]
    fn test_no_key_material_rejected() {
        assert_eq!(
            transform("TEST", "123", Direction::Encrypt),
            Err(VigenereError::NoKeyMaterial)
        );
    }

    #[test]
    fn test_keyword_punctuation_is_ignored() {
        assert_eq!(
            transform("HELLO", "k-e-y", Direction::Encrypt),
            transform("HELLO", "KEY", Direction::Encrypt)
        );
    }

    #[test]
    fn test_with_key_matches_new() {
        let key = CleanKey::new("KEY").unwrap();
        let a = Vigenere::with_key(key.clone());
        let b = Vigenere::new("KEY").unwrap();
        assert_eq!(a.key(), &key);
        assert_eq!(a.encrypt("abc").unwrap(), b.encrypt("abc").unwrap());
    }

    #[test]
    fn test_direction_inverse_and_labels() {
        assert_eq!(Direction::Encrypt.inverse(), Direction::Decrypt);
        assert_eq!(Direction::Decrypt.inverse(), Direction::Encrypt);
        assert_eq!(Direction::Encrypt.input_label(), "Plaintext");
        assert_eq!(Direction::Encrypt.output_label(), "Ciphertext");
        assert_eq!(Direction::Decrypt.input_label(), "Ciphertext");
        assert_eq!(Direction::Decrypt.output_label(), "Plaintext");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("encrypt".parse::<Direction>(), Ok(Direction::Encrypt));
        assert_eq!("DECRYPT".parse::<Direction>(), Ok(Direction::Decrypt));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Decrypt));
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Encrypt.to_string(), "encrypt");
    }

    #[test]
    fn test_engine_is_reusable() {
        let cipher = Vigenere::new("KEY").unwrap();
        let first = cipher.encrypt("HELLO").unwrap();
        let second = cipher.encrypt("HELLO").unwrap();
        assert_eq!(first, second);
    }
}
