// src/input.rs
//! Caller-side validation that runs before the crypto core
//!
//! "No input" is an explicit state here: an empty or whitespace-only value
//! is rejected with the field it came from.

use secrecy::ExposeSecret;

use crate::aliases::Passphrase;
use crate::error::{CoreError, InputField, Result};

/// Accept a passphrase that is non-empty after trimming
///
/// The untrimmed value is kept; it is what the key is derived from.
pub fn parse_passphrase(raw: impl Into<String>) -> Result<Passphrase> {
    let raw = raw.into();
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyInput(InputField::Passphrase));
    }
    Ok(Passphrase::from(raw))
}

/// Accept a message that is non-empty after trimming
pub fn require_message(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(CoreError::EmptyInput(InputField::Message));
    }
    Ok(text)
}

pub(crate) fn ensure_passphrase(passphrase: &Passphrase) -> Result<()> {
    if passphrase.expose_secret().trim().is_empty() {
        return Err(CoreError::EmptyInput(InputField::Passphrase));
    }
    Ok(())
}
