// src/crypto/encrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use secrecy::ExposeSecret;

use super::{derive_key, Aes256CbcEnc};
use crate::aliases::{DerivedKey32, Passphrase};
use crate::consts::{BLOCK_LEN, IV_LEN};

/// Encrypt plaintext → IV || AES-256-CBC ciphertext (in-memory)
///
/// A fresh IV is drawn from the thread-local CSPRNG on every call.
pub fn encrypt_to_vec(plaintext: &[u8], key: &DerivedKey32) -> Vec<u8> {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.expose_secret().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out
}

/// Derive the key from `passphrase`, then [`encrypt_to_vec`]
pub fn encrypt_with_passphrase(plaintext: &[u8], passphrase: &Passphrase) -> Vec<u8> {
    encrypt_to_vec(plaintext, &derive_key(passphrase))
}

/// Size of the encoded blob for a plaintext of `plaintext_len` bytes
///
/// PKCS#7 always adds 1..=16 bytes, a whole block when already aligned.
pub const fn encrypted_len(plaintext_len: usize) -> usize {
    IV_LEN + (plaintext_len / BLOCK_LEN + 1) * BLOCK_LEN
}
