/*!
# Shift Cipher

Classical shift ciphers over a fixed ASCII alphabet window: the Caesar
cipher, which replaces every character with the character a fixed offset
away, and the Bellaso cipher, which draws a different offset for each
position from a repeating keyword.

## Overview

This library provides reversible character-wise text transformations with:

- A single alphabet window, space (32) through underscore (95), shared by
  every operation
- Modular offset arithmetic with wraparound at the window edges
- One validation gate applied uniformly to all input, for encryption and
  decryption alike
- Typed errors instead of sentinel strings, so failures cannot be mistaken
  for ciphertext
- A common [`Cipher`] trait making the two algorithms interchangeable
- Random key and keyword generation for exercising the ciphers

All operations are pure and hold no shared state, so they are safe to call
concurrently from any number of threads.

## A word of caution

These are teaching ciphers. They demonstrate modular character arithmetic
and key-stream alignment; they provide no meaningful secrecy and must never
be used to protect real data.
*/

// Alphabet window and validation
pub mod alphabet;

// Error handling
pub mod error;

// Common cipher interface
pub mod cipher;

// Fixed-shift cipher
pub mod caesar;

// Keyed-shift (repeating keyword) cipher
pub mod bellaso;

// Random key material
pub mod keygen;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used items for convenience
pub use alphabet::{is_in_bounds, LOWER_BOUND, UPPER_BOUND, RANGE};
pub use error::{Error, KeyError, Result};
pub use cipher::{Algorithm, Cipher};
pub use caesar::Caesar;
pub use bellaso::Bellaso;
