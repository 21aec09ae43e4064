// src/crypto/decrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use secrecy::ExposeSecret;

use super::{derive_key, Aes256CbcDec};
use crate::aliases::{DerivedKey32, Passphrase, PlainText};
use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::error::{CoreError, Result};

/// Split an encoded blob into its IV and ciphertext
///
/// Fails with [`CoreError::BlobTooShort`] before any cipher work.
pub fn split_blob(blob: &[u8]) -> Result<(&[u8; IV_LEN], &[u8])> {
    blob.split_first_chunk::<IV_LEN>()
        .ok_or(CoreError::BlobTooShort { len: blob.len() })
}

/// Decrypt IV || ciphertext → plaintext (in-memory)
///
/// An empty or unaligned ciphertext is [`CoreError::Misaligned`]; a bad
/// final block is [`CoreError::BadPadding`]. A wrong key can still unpad
/// cleanly and return garbage: nothing in the format authenticates it.
pub fn decrypt_to_vec(blob: &[u8], key: &DerivedKey32) -> Result<PlainText> {
    let (iv, ciphertext) = split_blob(blob)?;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CoreError::Misaligned {
            len: ciphertext.len(),
        });
    }

    let plaintext = Aes256CbcDec::new(key.expose_secret().into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::BadPadding)?;

    Ok(PlainText::new(Box::new(plaintext)))
}

/// Derive the key from `passphrase`, then [`decrypt_to_vec`]
pub fn decrypt_with_passphrase(blob: &[u8], passphrase: &Passphrase) -> Result<PlainText> {
    decrypt_to_vec(blob, &derive_key(passphrase))
}
