//! Key-stream expansion over a cleaned keyword.
//!
//! A keyword is first reduced to a [`CleanKey`] (its ASCII letters,
//! uppercased). The clean key is then cycled across the letter positions
//! of a text to produce a [`KeyStream`]: one entry per text character,
//! holding the key letter for letter positions and nothing for everything
//! else. Non-letters never advance the key cursor.
//!
//! ```text
//! text   H E L L O ,   W O R L D !
//! stream K E Y K E     Y K E Y K
//! ```

use std::fmt;

use log::trace;
use zeroize::Zeroize;

use crate::error::{InputField, VigenereError};
use crate::utils::alphabet;

/// Keyword reduced to its ASCII letters, uppercased.
///
/// Never empty. Immutable once built; the letters are wiped from memory
/// when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct CleanKey {
    letters: Vec<u8>,
}

impl CleanKey {
    /// Derives the clean key from a raw keyword.
    ///
    /// # Errors
    /// - [`VigenereError::EmptyInput`] if `keyword` is empty.
    /// - [`VigenereError::NoKeyMaterial`] if `keyword` has no ASCII letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::CleanKey;
    ///
    /// let key = CleanKey::new("k3-e y!").unwrap();
    /// assert_eq!(key.as_str(), "KEY");
    ///
    /// assert!(CleanKey::new("123").is_err());
    /// ```
    pub fn new(keyword: &str) -> Result<Self, VigenereError> {
        if keyword.is_empty() {
            return Err(VigenereError::EmptyInput(InputField::Keyword));
        }
        let letters: Vec<u8> = keyword
            .chars()
            .filter(|&c| alphabet::is_letter(c))
            .map(|c| c.to_ascii_uppercase() as u8)
            .collect();
        if letters.is_empty() {
            return Err(VigenereError::NoKeyMaterial);
        }
        Ok(CleanKey { letters })
    }

    /// Returns the key letters as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Returns the number of key letters (always at least 1).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the key letter for key-cursor position `cursor`, cycling.
    pub fn key_at(&self, cursor: usize) -> char {
        self.letters[cursor % self.letters.len()] as char
    }
}

impl Drop for CleanKey {
    /// Wipes the key letters on drop.
    fn drop(&mut self) {
        self.letters.zeroize();
    }
}

impl fmt::Debug for CleanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanKey")
            .field("len", &self.letters.len())
            .finish_non_exhaustive()
    }
}

/// Per-position key letters aligned to a text.
///
/// `len()` always equals the number of `char`s in the text it was expanded
/// over. Entry `i` is `Some(key letter)` iff text character `i` is an ASCII
/// letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStream {
    slots: Vec<Option<char>>,
}

impl KeyStream {
    /// Expands `key` across the letter positions of `text`.
    ///
    /// The key cursor starts at 0 and advances only on ASCII letters, so
    /// spaces and punctuation do not consume key letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::{CleanKey, KeyStream};
    ///
    /// let key = CleanKey::new("KEY").unwrap();
    /// let stream = KeyStream::expand("HI THERE", &key);
    /// assert_eq!(stream.letters(), "KEYKEYK");
    /// assert_eq!(stream.get(2), None);
    /// ```
    pub fn expand(text: &str, key: &CleanKey) -> Self {
        let mut cursor = 0usize;
        let slots: Vec<Option<char>> = text
            .chars()
            .map(|c| {
                if alphabet::is_letter(c) {
                    let k = key.key_at(cursor);
                    cursor += 1;
                    Some(k)
                } else {
                    None
                }
            })
            .collect();
        trace!(
            "expanded key stream: {} positions, {} key letters",
            slots.len(),
            cursor
        );
        KeyStream { slots }
    }

    /// Returns the key letter at text position `index`, if that position
    /// holds a letter.
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of positions (equal to the text length in `char`s).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the stream was expanded over an empty text.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over every position, letter or not.
    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.slots.iter().copied()
    }

    /// Returns only the assigned key letters, in order.
    pub fn letters(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}

impl fmt::Display for KeyStream {
    /// Writes one character per position, with a space where no key letter
    /// is assigned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(' '))?;
        }
        Ok(())
    }
}

/// Cleans `keyword` and expands it across `text`.
///
/// # Errors
/// Same as [`CleanKey::new`].
pub fn expand(text: &str, keyword: &str) -> Result<KeyStream, VigenereError> {
    let key = CleanKey::new(keyword)?;
    Ok(KeyStream::expand(text, &key))
}
