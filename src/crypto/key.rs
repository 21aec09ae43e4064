// src/crypto/key.rs
use secrecy::ExposeSecret;
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};

use crate::aliases::{DerivedKey32, Passphrase};

/// Derive the AES-256 key as a single SHA-256 pass over the passphrase's UTF-8 bytes.
///
/// No salt and no iteration count: keys must stay compatible with data
/// encrypted by earlier releases. Emptiness is checked by the caller.
///
/// The digest is written straight into the secret's own buffer, so no
/// unwiped copy of the key is left on the stack.
pub fn derive_key(passphrase: &Passphrase) -> DerivedKey32 {
    DerivedKey32::init_with_mut(|key| {
        Sha256::new()
            .chain_update(passphrase.expose_secret().as_bytes())
            .finalize_into(GenericArray::from_mut_slice(key.as_mut_slice()));
    })
}
