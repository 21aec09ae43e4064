// src/error.rs
//! Public error type for the entire crate
//!
//! Variants carry structured data only. Turning a failure into a sentence
//! for the user is the caller's job; group failures with [`CoreError::kind`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Which caller-supplied value was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Passphrase,
    Message,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Passphrase => f.write_str("passphrase"),
            InputField::Message => f.write_str("message"),
        }
    }
}

/// Coarse failure classes a caller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    MalformedInput,
    DecryptionFailure,
    InputTooLarge,
    Unexpected,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("empty {0}")]
    EmptyInput(InputField),

    #[error("blob of {len} bytes is shorter than the IV")]
    BlobTooShort { len: usize },

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("ciphertext length {len} is not a positive multiple of the block size")]
    Misaligned { len: usize },

    #[error("invalid padding")]
    BadPadding,

    #[error("decrypted bytes are not UTF-8")]
    InvalidUtf8,

    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    ConfigValue { key: &'static str, value: String },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyInput(_) => ErrorKind::EmptyInput,
            CoreError::BlobTooShort { .. } | CoreError::Base64(_) => ErrorKind::MalformedInput,
            CoreError::Misaligned { .. } | CoreError::BadPadding | CoreError::InvalidUtf8 => {
                ErrorKind::DecryptionFailure
            }
            CoreError::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            CoreError::Io(_) | CoreError::Config { .. } | CoreError::ConfigValue { .. } => {
                ErrorKind::Unexpected
            }
        }
    }
}
