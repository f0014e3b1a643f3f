/*!
Random key material for the ciphers.

Keys produced here are for exercising the ciphers, not for protecting
anything: both algorithms are classical teaching constructions. The
generators draw uniformly from the alphabet domain so every output is
accepted by the cipher constructors.
*/

use rand::Rng;

use crate::{
    alphabet::{LOWER_BOUND, RANGE, UPPER_BOUND},
    error::{Error, KeyError, Result},
};

/// Generate a random Caesar key in `[1, RANGE)`.
///
/// The identity shift 0 is excluded so a generated key always changes its
/// input.
pub fn random_caesar_key() -> i32 {
    random_caesar_key_with(&mut rand::rng())
}

/// Seeded variant of [`random_caesar_key`].
pub fn random_caesar_key_with<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(1..RANGE as i32)
}

/// Generate a random Bellaso keyword of `length` alphabet-window
/// characters.
pub fn random_keyword(length: usize) -> Result<String> {
    random_keyword_with(&mut rand::rng(), length)
}

/// Seeded variant of [`random_keyword`].
///
/// A zero-length request is rejected rather than returning a keyword the
/// ciphers would refuse.
pub fn random_keyword_with<R: Rng>(rng: &mut R, length: usize) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidKey(KeyError::EmptyKeyword));
    }
    Ok((0..length)
        .map(|_| rng.random_range(LOWER_BOUND as u8..=UPPER_BOUND as u8) as char)
        .collect())
}
