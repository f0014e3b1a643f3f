/*!
Serialization support for cipher key material.

This module provides serialization and deserialization for cipher
configurations using Serde. It's only built when the `serde-support`
feature is enabled. Reconstruction routes through the validating
constructors, so a deserialized keyword is vetted exactly like one
supplied by hand.
*/

use serde::{Deserialize, Serialize};

use crate::{
    bellaso::Bellaso,
    caesar::Caesar,
    cipher::{Algorithm, Cipher},
    error::Result,
};

/// Serializable key material for either cipher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherKey {
    /// Caesar shift key
    Caesar(i32),
    /// Bellaso keyword
    Bellaso(String),
}

impl CipherKey {
    /// The algorithm this key material belongs to
    pub fn algorithm(&self) -> Algorithm {
        match self {
            CipherKey::Caesar(_) => Algorithm::Caesar,
            CipherKey::Bellaso(_) => Algorithm::Bellaso,
        }
    }

    /// Build the cipher this key material describes.
    ///
    /// Keyword validation applies here just as in [`Bellaso::new`], so a
    /// malformed serialized keyword is rejected instead of surfacing later
    /// as a transformation error.
    pub fn build(&self) -> Result<Box<dyn Cipher>> {
        match self {
            CipherKey::Caesar(key) => Ok(Box::new(Caesar::new(*key))),
            CipherKey::Bellaso(keyword) => Ok(Box::new(Bellaso::new(keyword)?)),
        }
    }
}

impl From<&Caesar> for CipherKey {
    fn from(cipher: &Caesar) -> Self {
        CipherKey::Caesar(cipher.shift() as i32)
    }
}

impl From<&Bellaso> for CipherKey {
    fn from(cipher: &Bellaso) -> Self {
        CipherKey::Bellaso(cipher.keyword().to_string())
    }
}
