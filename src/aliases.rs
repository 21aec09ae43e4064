// src/aliases.rs
//! Secret types used throughout post-crypt
//!
//! All of them are `secrecy::SecretBox`es: heap-held, redacted in `Debug`,
//! and zeroized when dropped.

use crate::consts::KEY_LEN;

pub use secrecy::{ExposeSecret, SecretBox, SecretString};

/// SHA-256(passphrase) as the AES-256 key
pub type DerivedKey32 = SecretBox<[u8; KEY_LEN]>;

/// Used verbatim for key derivation; build with `Passphrase::from(String)`
pub type Passphrase = SecretString;

/// Decrypted output
pub type PlainText = SecretBox<Vec<u8>>;
