//! Vigenère polyalphabetic substitution cipher.
//!
//! Encrypts and decrypts ASCII letters by shifting each one by the
//! matching letter of a repeating keyword. Characters that are not ASCII
//! letters pass through untouched and do not consume key letters.
//! Output letters are always uppercase.
//!
//! Vigenère is a classical, pedagogical cipher. It offers no security.
//!
//! # Architecture
//!
//! ```text
//! CleanKey   (keyword -> ASCII letters, uppercased, never empty)
//!     ↓ cycled over the letter positions of the text
//! KeyStream  (one optional key letter per text char)
//!     ↓ (c ± k) mod 26 per letter
//! Vigenere   (engine: encrypt / decrypt / transform)
//!     ↓ zipped
//! Alignment  (original / key / result rows for display)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use vigenere::{transform, Direction};
//!
//! let ciphertext = transform("HELLO, WORLD!", "KEY", Direction::Encrypt).unwrap();
//! assert_eq!(ciphertext, "RIJVS, UYVJN!");
//!
//! let plaintext = transform(&ciphertext, "KEY", Direction::Decrypt).unwrap();
//! assert_eq!(plaintext, "HELLO, WORLD!");
//! ```
//!
//! Inspect which key letter produced which output letter:
//!
//! ```
//! use vigenere::{align, Direction};
//!
//! let grid = align("Hi you", "KEY", Direction::Encrypt).unwrap();
//! assert_eq!(grid.key, ["K", "E", "", "Y", "K", "E"]);
//! assert_eq!(grid.result_text(), "RM WYY");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alignment;
mod key_stream;
pub(crate) mod utils;
mod vigenere;

pub use alignment::{align, Alignment};
pub use error::{InputField, VigenereError};
pub use key_stream::{expand, CleanKey, KeyStream};
pub use vigenere::{transform, Direction, ParseDirectionError, Vigenere};
