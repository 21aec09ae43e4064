// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! This module handles encryption and decryption with file I/O,
//! building on the pure crypto primitives from `crypto`.
//! Files are read whole, bounded by [`Limits::max_file_size`], and written
//! back as raw bytes (no base64 layer). Also includes file description
//! utilities used for `post-crypt info`.

use std::path::Path;

use secrecy::zeroize::Zeroizing;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::aliases::Passphrase;
use crate::config::Limits;
use crate::consts::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::crypto::{decrypt_with_passphrase, encrypt_with_passphrase};
use crate::error::{CoreError, Result};
use crate::input::ensure_passphrase;

/// Encrypt a file on disk
///
/// Reads the plaintext file, encrypts it in-memory, writes IV || ciphertext.
/// Returns the number of bytes written.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    passphrase: &Passphrase,
    limits: &Limits,
) -> Result<u64> {
    ensure_passphrase(passphrase)?;
    let plaintext = Zeroizing::new(read_bounded(input_path.as_ref(), limits)?);
    let blob = encrypt_with_passphrase(&plaintext, passphrase);
    std::fs::write(output_path.as_ref(), &blob)?;

    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_len = plaintext.len(),
        blob_len = blob.len(),
        "encrypted file"
    );
    Ok(blob.len() as u64)
}

/// Decrypt a file written by [`encrypt_file`]
///
/// Reads the blob, decrypts it in-memory, writes the plaintext.
/// Returns the number of bytes written. Nothing is written on failure.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    passphrase: &Passphrase,
    limits: &Limits,
) -> Result<u64> {
    ensure_passphrase(passphrase)?;
    let blob = read_bounded(input_path.as_ref(), limits)?;
    let plaintext = decrypt_with_passphrase(&blob, passphrase)?;
    std::fs::write(output_path.as_ref(), plaintext.expose_secret())?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        blob_len = blob.len(),
        plaintext_len = plaintext_size_bytes,
        "decrypted file"
    );
    Ok(plaintext_size_bytes)
}

fn read_bounded(path: &Path, limits: &Limits) -> Result<Vec<u8>> {
    let size = std::fs::metadata(path)?.len();
    if size > limits.max_file_size {
        return Err(CoreError::InputTooLarge {
            size,
            limit: limits.max_file_size,
        });
    }
    Ok(std::fs::read(path)?)
}

/// Coarse file category, by extension only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Other,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Video
        } else {
            FileKind::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    /// Lowercase, without the dot
    pub extension: Option<String>,
    pub kind: FileKind,
}

pub fn describe_file<P: AsRef<Path>>(path: P) -> Result<FileInfo> {
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    let kind = extension
        .as_deref()
        .map_or(FileKind::Other, FileKind::from_extension);

    Ok(FileInfo {
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size,
        extension,
        kind,
    })
}

/// Render a byte count with binary units and up to two decimals
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut len = bytes as f64;
    let mut order = 0;
    while len >= 1024.0 && order < UNITS.len() - 1 {
        order += 1;
        len /= 1024.0;
    }

    // Half away from zero, like "0.##" formatting; `{:.2}` alone rounds ties to even
    let len = (len * 100.0).round() / 100.0;
    let number = format!("{len:.2}");
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number} {}", UNITS[order])
}
