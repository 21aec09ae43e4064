// src/lib.rs
//! post-crypt: passphrase-keyed encryption for pasted text and files
//!
//! Features:
//! - SHA-256 passphrase → AES-256 key
//! - AES-256-CBC + PKCS#7, random IV prepended to every blob
//! - Base64 text mode and raw-byte file mode
//! - Zeroizing secret types via secrecy
//!
//! The scheme is unauthenticated and the key derivation is unsalted.
//! Both are kept for compatibility with existing encrypted data.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;
pub mod input;
pub mod text_ops;

// Re-export everything users need at the crate root
pub use aliases::{DerivedKey32, ExposeSecret, Passphrase, PlainText};
pub use config::{load as load_config, Config, Limits};
pub use crypto::{
    decrypt_to_vec, decrypt_with_passphrase, derive_key, encrypt_to_vec, encrypt_with_passphrase,
};
pub use error::{CoreError, ErrorKind, InputField, Result as CoreResult};
pub use file_ops::{decrypt_file, describe_file, encrypt_file, format_file_size, FileInfo, FileKind};
pub use input::{parse_passphrase, require_message};
pub use text_ops::{decrypt_text, encrypt_text};
