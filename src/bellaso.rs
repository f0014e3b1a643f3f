/*!
The Bellaso cipher: a repeating-keyword polyalphabetic substitution.

Each plaintext character is combined with one keyword character, the
keyword cycling for as long as the text runs. The combination adds the two
full character codes and folds the sum back into the alphabet window,
following the classical table construction in which the keyword character's
absolute code (not its offset from the window base) sets the shift.
Decryption subtracts the keyword code and folds in the opposite direction.

The fold is a single euclidean reduction per character. The classical
formulation instead loops `s = s - UPPER + LOWER - 1` until the sum lands
in the window; the two agree for every in-window input pair, which the test
suite pins down against that literal loop.
*/

use crate::{
    alphabet::{self, LOWER_BOUND, RANGE},
    cipher::{Algorithm, Cipher},
    error::{Error, KeyError, Result},
};

/// Validate a keyword: non-empty, every character within the window.
///
/// Checked before the text in both directions, so keyword errors are
/// reported consistently even for empty input text.
fn check_keyword(keyword: &str) -> Result<()> {
    if keyword.is_empty() {
        return Err(Error::InvalidKey(KeyError::EmptyKeyword));
    }
    match keyword
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet::contains(*c))
    {
        Some((position, character)) => Err(Error::InvalidKey(KeyError::OutOfAlphabet {
            character,
            position,
        })),
        None => Ok(()),
    }
}

/// Fold the raw sum of two in-window codes back into the window.
fn combine(code: u8, key: u8) -> u8 {
    let sum = code as u16 + key as u16;
    LOWER_BOUND as u8 + ((sum - LOWER_BOUND as u16) % RANGE as u16) as u8
}

/// Invert [`combine`] for the same keyword code.
fn separate(code: u8, key: u8) -> u8 {
    let diff = code as i16 - key as i16;
    LOWER_BOUND as u8 + (diff - LOWER_BOUND as i16).rem_euclid(RANGE as i16) as u8
}

/// Encrypt `plaintext` against a repeating `keyword`.
///
/// The keyword must be non-empty and drawn entirely from the alphabet
/// window, as must the text. Position `i` of the text is combined with
/// keyword character `i mod keyword_len`.
pub fn encrypt(plaintext: &str, keyword: &str) -> Result<String> {
    check_keyword(keyword)?;
    alphabet::check(plaintext)?;
    let key_codes: Vec<u8> = keyword.chars().map(|c| c as u8).collect();
    let mut out = String::with_capacity(plaintext.len());
    for (i, c) in plaintext.chars().enumerate() {
        out.push(combine(c as u8, key_codes[i % key_codes.len()]) as char);
    }
    Ok(out)
}

/// Decrypt `ciphertext` against a repeating `keyword`. Exact inverse of
/// [`encrypt`] for the same keyword.
pub fn decrypt(ciphertext: &str, keyword: &str) -> Result<String> {
    check_keyword(keyword)?;
    alphabet::check(ciphertext)?;
    let key_codes: Vec<u8> = keyword.chars().map(|c| c as u8).collect();
    let mut out = String::with_capacity(ciphertext.len());
    for (i, c) in ciphertext.chars().enumerate() {
        out.push(separate(c as u8, key_codes[i % key_codes.len()]) as char);
    }
    Ok(out)
}

/// Bellaso cipher with a validated keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bellaso {
    keyword: String,
}

impl Bellaso {
    /// Create a cipher from a keyword.
    ///
    /// Fails with [`KeyError::EmptyKeyword`] or [`KeyError::OutOfAlphabet`]
    /// wrapped in [`Error::InvalidKey`] when the keyword is malformed.
    pub fn new(keyword: &str) -> Result<Self> {
        check_keyword(keyword)?;
        Ok(Self {
            keyword: keyword.to_string(),
        })
    }

    /// The keyword this cipher repeats over its input.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Cipher for Bellaso {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        encrypt(plaintext, &self.keyword)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        decrypt(ciphertext, &self.keyword)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bellaso
    }
}
