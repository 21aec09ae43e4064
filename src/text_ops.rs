// src/text_ops.rs
//! Text-mode encryption/decryption operations
//!
//! Messages cross the display boundary as standard base64 of the encoded
//! blob, building on the pure primitives in `crypto`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::aliases::Passphrase;
use crate::crypto::{decrypt_with_passphrase, encrypt_with_passphrase};
use crate::error::{CoreError, Result};
use crate::input::{ensure_passphrase, require_message};

/// Encrypt a UTF-8 message → base64(IV || ciphertext)
pub fn encrypt_text(message: &str, passphrase: &Passphrase) -> Result<String> {
    ensure_passphrase(passphrase)?;
    let message = require_message(message)?;

    let blob = encrypt_with_passphrase(message.as_bytes(), passphrase);
    debug!(plaintext_len = message.len(), blob_len = blob.len(), "encrypted text");
    Ok(STANDARD.encode(blob))
}

/// Decrypt base64(IV || ciphertext) → UTF-8 message
///
/// ASCII whitespace is ignored so wrapped or indented pastes still decode.
pub fn decrypt_text(encoded: &str, passphrase: &Passphrase) -> Result<String> {
    ensure_passphrase(passphrase)?;
    let encoded = require_message(encoded)?;

    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let blob = STANDARD.decode(compact)?;

    let plaintext = decrypt_with_passphrase(&blob, passphrase)?;
    let message = std::str::from_utf8(plaintext.expose_secret())
        .map_err(|_| CoreError::InvalidUtf8)?
        .to_owned();
    debug!(blob_len = blob.len(), plaintext_len = message.len(), "decrypted text");
    Ok(message)
}
