/*!
The Caesar cipher: a fixed-offset substitution over the alphabet window.

Each character is replaced by the character `key` positions after it, with
wraparound from [`UPPER_BOUND`](crate::alphabet::UPPER_BOUND) back to
[`LOWER_BOUND`](crate::alphabet::LOWER_BOUND). Decryption shifts the same
distance in the opposite direction. The classical formulation walks the
offset one step at a time; a single modular addition per character produces
identical output for every non-negative key, including keys larger than the
window (whole-window wraps are no-ops).
*/

use crate::{
    alphabet::{self, LOWER_BOUND, RANGE},
    cipher::{Algorithm, Cipher},
    error::Result,
};

/// Reduce a signed key to its canonical shift in `[0, RANGE)`.
///
/// Negative keys are equivalent leftward shifts, so `-3` reduces to `61`,
/// and whole-window multiples reduce to the identity.
fn normalize(key: i32) -> u8 {
    key.rem_euclid(RANGE as i32) as u8
}

/// Shift one in-window character code forward by `shift` positions.
fn shift_forward(code: u8, shift: u8) -> u8 {
    LOWER_BOUND as u8 + (code - LOWER_BOUND as u8 + shift) % RANGE
}

/// Shift one in-window character code backward by `shift` positions.
fn shift_backward(code: u8, shift: u8) -> u8 {
    LOWER_BOUND as u8 + (code - LOWER_BOUND as u8 + RANGE - shift) % RANGE
}

/// Encrypt `plaintext` by shifting every character `key` positions forward.
///
/// Every character of `plaintext` must lie within the alphabet window; the
/// key may be any integer and is interpreted modulo
/// [`RANGE`](crate::alphabet::RANGE).
pub fn encrypt(plaintext: &str, key: i32) -> Result<String> {
    alphabet::check(plaintext)?;
    let shift = normalize(key);
    let mut out = String::with_capacity(plaintext.len());
    for c in plaintext.chars() {
        out.push(shift_forward(c as u8, shift) as char);
    }
    Ok(out)
}

/// Decrypt `ciphertext` by shifting every character `key` positions
/// backward. Exact inverse of [`encrypt`] for the same key.
pub fn decrypt(ciphertext: &str, key: i32) -> Result<String> {
    alphabet::check(ciphertext)?;
    let shift = normalize(key);
    let mut out = String::with_capacity(ciphertext.len());
    for c in ciphertext.chars() {
        out.push(shift_backward(c as u8, shift) as char);
    }
    Ok(out)
}

/// Caesar cipher with a fixed shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    /// Canonical shift in `[0, RANGE)`
    shift: u8,
}

impl Caesar {
    /// Create a cipher from any integer key.
    pub fn new(key: i32) -> Self {
        Self {
            shift: normalize(key),
        }
    }

    /// The canonical shift this cipher applies.
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        encrypt(plaintext, self.shift as i32)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        decrypt(ciphertext, self.shift as i32)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }
}
