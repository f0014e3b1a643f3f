/*!
The common cipher interface.

Both ciphers in this crate are pure, stateless transformations over the
alphabet window. This module defines the trait that makes the two
interchangeable and the enum that names them.
*/

use std::fmt;

use crate::error::Result;

/// Cipher algorithms provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Algorithm {
    /// Fixed-offset substitution
    Caesar,
    /// Repeating-keyword polyalphabetic substitution
    Bellaso,
}

impl Algorithm {
    /// Get the name of this algorithm as a string
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Caesar => "Caesar",
            Algorithm::Bellaso => "Bellaso",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for cipher operations over the alphabet window
///
/// Implementations hold no mutable state, so one cipher value can serve any
/// number of threads concurrently.
pub trait Cipher: Send + Sync {
    /// Encrypt text with the cipher
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt text with the cipher
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Get the algorithm being used
    fn algorithm(&self) -> Algorithm;
}
