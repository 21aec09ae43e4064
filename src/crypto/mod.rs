// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no config
//!
//! One fixed scheme: SHA-256(passphrase) as an AES-256 key, CBC mode,
//! PKCS#7 padding, and the 16-byte IV prepended to the ciphertext.
//! Every call derives its own key and IV, so nothing here is shared
//! between threads.
mod decrypt;
mod encrypt;
mod key;

pub use decrypt::{decrypt_to_vec, decrypt_with_passphrase, split_blob};
pub use encrypt::{encrypt_to_vec, encrypt_with_passphrase, encrypted_len};
pub use key::derive_key;

pub(crate) type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
