/*!
Error handling for the cipher operations.

Failure cases are typed and carried in the result channel, never encoded
as sentinel strings in place of ciphertext, so a failed transformation
cannot be mistaken for a successful one.
*/

use thiserror::Error;

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cipher operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input text contained a character outside the alphabet window
    #[error("character {character:?} at position {position} is outside the cipher alphabet")]
    InputOutOfBounds {
        /// The offending character
        character: char,
        /// Zero-based character position within the input
        position: usize,
    },

    /// Key rejected before any transformation was attempted
    #[error("invalid key")]
    InvalidKey(#[source] KeyError),
}

/// Keyword errors for the keyed cipher
///
/// Caesar keys never produce these: any integer key normalizes into the
/// window. Only Bellaso keywords carry enough structure to be malformed.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The keyword contained no characters
    #[error("keyword is empty")]
    EmptyKeyword,

    /// A keyword character fell outside the alphabet window
    #[error("keyword character {character:?} at position {position} is outside the cipher alphabet")]
    OutOfAlphabet {
        /// The offending character
        character: char,
        /// Zero-based character position within the keyword
        position: usize,
    },
}
