/*!
The cipher alphabet window.

Every operation in this crate works over one contiguous run of ASCII codes,
space (32) through underscore (95). This module owns the window constants
and the membership checks that gate all cipher input. The window is part of
the crate's contract: existing test vectors depend on these exact
codepoints.
*/

use crate::error::{Error, Result};

/// Lowest character admitted by the ciphers (ASCII 32, space)
pub const LOWER_BOUND: char = ' ';

/// Highest character admitted by the ciphers (ASCII 95, underscore)
pub const UPPER_BOUND: char = '_';

/// Number of characters in the window
pub const RANGE: u8 = UPPER_BOUND as u8 - LOWER_BOUND as u8 + 1;

/// Whether a single character lies within the alphabet window
pub fn contains(c: char) -> bool {
    (LOWER_BOUND..=UPPER_BOUND).contains(&c)
}

/// Returns true iff every character of `text` lies within the window.
///
/// The empty string is vacuously in bounds.
pub fn is_in_bounds(text: &str) -> bool {
    text.chars().all(contains)
}

/// Typed membership gate: reports the first out-of-window character.
///
/// Both ciphers route every input through this check, for encryption and
/// decryption alike, so malformed text is rejected before any character is
/// transformed.
pub fn check(text: &str) -> Result<()> {
    match text.chars().enumerate().find(|(_, c)| !contains(*c)) {
        Some((position, character)) => Err(Error::InputOutOfBounds {
            character,
            position,
        }),
        None => Ok(()),
    }
}
