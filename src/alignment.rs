//! Character-by-character alignment of a transform.
//!
//! An [`Alignment`] zips a text, its key stream and the transform result
//! into three parallel rows of equal length. It is a read-only view for
//! display; it carries no information that [`transform`](crate::transform)
//! and [`KeyStream::expand`](crate::KeyStream::expand) do not already
//! produce.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InputField, VigenereError};
use crate::key_stream::KeyStream;
use crate::utils::alphabet;
use crate::vigenere::{Direction, Vigenere};

/// Glyph drawn in place of a space in the text grid.
const SPACE_GLYPH: char = '␣';

/// Three parallel rows describing a transform, one cell per text `char`.
///
/// `key[i]` is the key letter applied at position `i`, or `""` when the
/// text character there is not an ASCII letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Direction the result was computed in.
    pub direction: Direction,
    /// Input characters.
    pub original: Vec<String>,
    /// Key letters, empty for non-letter positions.
    pub key: Vec<String>,
    /// Output characters.
    pub result: Vec<String>,
}

impl Alignment {
    /// Zips a text with its key stream and transform result.
    ///
    /// `stream` and `result` must have been produced from `text`.
    pub(crate) fn from_parts(
        direction: Direction,
        text: &str,
        stream: &KeyStream,
        result: &str,
    ) -> Self {
        let original = text.chars().map(String::from).collect();
        let key = stream
            .iter()
            .map(|k| k.map(String::from).unwrap_or_default())
            .collect();
        let result = result.chars().map(String::from).collect();
        Alignment {
            direction,
            original,
            key,
            result,
        }
    }

    /// Number of cells in each row.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Returns `true` if the rows have no cells.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Indices of the cells whose input character is an ASCII letter.
    ///
    /// These are exactly the cells with a non-empty key.
    pub fn letter_positions(&self) -> Vec<usize> {
        self.original
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.chars().next().is_some_and(alphabet::is_letter))
            .map(|(i, _)| i)
            .collect()
    }

    /// Iterates over `(original, key, result)` cell triples.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.original
            .iter()
            .zip(&self.key)
            .zip(&self.result)
            .map(|((o, k), r)| (o.as_str(), k.as_str(), r.as_str()))
    }

    /// Concatenates the result row back into a string.
    pub fn result_text(&self) -> String {
        self.result.concat()
    }

    fn write_row<'a>(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        cells: impl Iterator<Item = &'a str>,
    ) -> fmt::Result {
        write!(f, "{:<width$}", label, width = LABEL_WIDTH)?;
        for cell in cells {
            let glyph = match cell {
                "" => ' ',
                " " => SPACE_GLYPH,
                other => other.chars().next().unwrap_or(' '),
            };
            write!(f, " {}", glyph)?;
        }
        Ok(())
    }
}

/// Width of the row label column ("Ciphertext" plus one).
const LABEL_WIDTH: usize = 11;

impl fmt::Display for Alignment {
    /// Renders the rows as a labelled text grid.
    ///
    /// ```text
    /// Plaintext   H I ␣ Y O U
    /// Key         K E   Y K E
    /// Ciphertext  R M ␣ W Y Y
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_row(
            f,
            self.direction.input_label(),
            self.original.iter().map(String::as_str),
        )?;
        writeln!(f)?;
        Self::write_row(f, "Key", self.key.iter().map(String::as_str))?;
        writeln!(f)?;
        Self::write_row(
            f,
            self.direction.output_label(),
            self.result.iter().map(String::as_str),
        )
    }
}

/// Builds the alignment for `text` under `keyword` and `direction`.
///
/// # Errors
/// - [`VigenereError::EmptyInput`] if `text` or `keyword` is empty.
/// - [`VigenereError::NoKeyMaterial`] if `keyword` has no ASCII letters.
///
/// # Examples
///
/// ```
/// use vigenere::{align, Direction};
///
/// let a = align("HI!", "KEY", Direction::Encrypt).unwrap();
/// assert_eq!(a.original, ["H", "I", "!"]);
/// assert_eq!(a.key, ["K", "E", ""]);
/// assert_eq!(a.result, ["R", "M", "!"]);
/// ```
pub fn align(text: &str, keyword: &str, direction: Direction) -> Result<Alignment, VigenereError> {
    if text.is_empty() {
        return Err(VigenereError::EmptyInput(InputField::Text));
    }
    Vigenere::new(keyword)?.align(text, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vigenere::transform;

    #[test]
    fn test_align_rows_have_text_length() {
        let a = align("HELLO, WORLD!", "KEY", Direction::Encrypt).unwrap();
        assert_eq!(a.len(), 13);
        assert_eq!(a.key.len(), 13);
        assert_eq!(a.result.len(), 13);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_align_result_matches_transform() {
        let text = "Meet me @ 10pm";
        for direction in [Direction::Encrypt, Direction::Decrypt] {
            let a = align(text, "KEY", direction).unwrap();
            let expected = transform(text, "KEY", direction).unwrap();
            assert_eq!(a.result_text(), expected);
            assert_eq!(a.direction, direction);
        }
    }

    #[test]
    fn test_align_key_empty_iff_not_letter() {
        let a = align("a b.c", "xy", Direction::Encrypt).unwrap();
        for (o, k, _) in a.cells() {
            let is_letter = o.chars().all(|c| c.is_ascii_alphabetic());
            assert_eq!(!k.is_empty(), is_letter, "cell {:?}", o);
        }
        assert_eq!(a.key, ["X", "", "Y", "", "X"]);
    }

    #[test]
    fn test_align_astral_char_is_one_cell() {
        let a = align("a😀b", "KEY", Direction::Encrypt).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.original, ["a", "😀", "b"]);
        assert_eq!(a.key, ["K", "", "E"]);
        assert_eq!(a.result, ["K", "😀", "F"]);
    }

    #[test]
    fn test_letter_positions() {
        let a = align("HI, YOU", "KEY", Direction::Encrypt).unwrap();
        assert_eq!(a.letter_positions(), vec![0, 1, 4, 5, 6]);
    }

    #[test]
    fn test_align_rejects_bad_input() {
        assert_eq!(
            align("", "KEY", Direction::Encrypt),
            Err(VigenereError::EmptyInput(InputField::Text))
        );
        assert_eq!(
            align("TEST", "123", Direction::Encrypt),
            Err(VigenereError::NoKeyMaterial)
        );
    }

    #[test]
    fn test_display_grid_encrypt() {
        let a = align("HI YOU", "KEY", Direction::Encrypt).unwrap();
        let expected = "Plaintext   H I ␣ Y O U\n\
                        Key         K E   Y K E\n\
                        Ciphertext  R M ␣ W Y Y";
        assert_eq!(a.to_string(), expected);
    }

    #[test]
    fn test_display_grid_decrypt_labels() {
        let a = align("RM", "KEY", Direction::Decrypt).unwrap();
        let grid = a.to_string();
        let rows: Vec<&str> = grid.lines().collect();
        assert!(rows[0].starts_with("Ciphertext"));
        assert!(rows[1].starts_with("Key"));
        assert!(rows[2].starts_with("Plaintext"));
        assert!(rows[2].ends_with("H I"));
    }

    #[test]
    fn test_serialize_shape() {
        let a = align("A b", "B", Direction::Encrypt).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["direction"], "encrypt");
        assert_eq!(json["original"], serde_json::json!(["A", " ", "b"]));
        assert_eq!(json["key"], serde_json::json!(["B", "", "B"]));
        assert_eq!(json["result"], serde_json::json!(["B", " ", "C"]));
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let a = align("Go!", "KEY", Direction::Decrypt).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Alignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
