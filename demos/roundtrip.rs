//! Minimal encrypt/decrypt walkthrough for both ciphers.
//!
//! Run with: cargo run --example roundtrip

use shift_cipher::{bellaso, caesar, Result};

fn main() -> Result<()> {
    let message = "MEET AT THE FORUM";
    println!("message:         {}", message);

    let shifted = caesar::encrypt(message, 3)?;
    println!("caesar encrypt:  {}", shifted);
    println!("caesar decrypt:  {}", caesar::decrypt(&shifted, 3)?);

    let keyed = bellaso::encrypt(message, "BRUTUS")?;
    println!("bellaso encrypt: {}", keyed);
    println!("bellaso decrypt: {}", bellaso::decrypt(&keyed, "BRUTUS")?);

    Ok(())
}
