//! Error types for the Vigenère cipher library.

use std::fmt;

/// Identifies which caller-supplied input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The text to encrypt or decrypt.
    Text,
    /// The keyword the key stream is derived from.
    Keyword,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Text => write!(f, "text"),
            InputField::Keyword => write!(f, "keyword"),
        }
    }
}

/// Errors produced by the Vigenère cipher library.
///
/// Both variants are recoverable: the engine reports them before touching
/// the input and never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VigenereError {
    /// Text or keyword is empty.
    #[error("The {0} must not be empty")]
    EmptyInput(InputField),
    /// Keyword contains no ASCII letters once cleaned.
    #[error("Keyword must contain at least one ASCII letter")]
    NoKeyMaterial,
}
