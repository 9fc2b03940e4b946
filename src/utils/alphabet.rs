//! ASCII alphabet arithmetic for the 26-letter Latin alphabet.
//!
//! Letters are mapped to `0..26` (`A`/`a` = 0) and shifted modulo 26.
//! Every result is an uppercase ASCII letter.

/// Number of letters in the alphabet.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// Returns `true` for `A..=Z` and `a..=z`, `false` for everything else,
/// including non-ASCII letters.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns the alphabet index (0..26) of an ASCII letter, ignoring case.
///
/// # Returns
/// `None` if `c` is not an ASCII letter.
#[inline]
pub(crate) fn index_of(c: char) -> Option<u8> {
    if is_letter(c) {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at alphabet index `idx % 26`.
#[inline]
pub(crate) fn letter_at(idx: u8) -> char {
    (b'A' + idx % ALPHABET_LEN) as char
}

/// Shifts `letter` forward (`forward == true`) or backward by the alphabet
/// index of `key`.
///
/// # Parameters
/// - `letter`: Any ASCII letter, either case.
/// - `key`: Any ASCII letter, either case.
/// - `forward`: `true` computes `(c + k) mod 26`, `false` computes
///   `(c - k + 26) mod 26`.
///
/// # Returns
/// The shifted letter in uppercase, or `None` if either argument is not an
/// ASCII letter.
pub(crate) fn shift(letter: char, key: char, forward: bool) -> Option<char> {
    let c = index_of(letter)?;
    let k = index_of(key)?;
    let r = if forward {
        (c + k) % ALPHABET_LEN
    } else {
        (c + ALPHABET_LEN - k) % ALPHABET_LEN
    };
    Some(letter_at(r))
}
