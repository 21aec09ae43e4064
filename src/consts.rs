// src/consts.rs
//! Shared constants: scheme parameters and defaults

/// AES-256 key length produced by SHA-256
pub const KEY_LEN: usize = 32;

/// AES block size; also the IV length
pub const BLOCK_LEN: usize = 16;

/// IV prefix length of every encoded blob
pub const IV_LEN: usize = BLOCK_LEN;

/// Default upper bound for file inputs (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "post-crypt.toml";

pub const ENV_CONFIG: &str = "POST_CRYPT_CONFIG";
pub const ENV_MAX_FILE_SIZE: &str = "POST_CRYPT_MAX_FILE_SIZE";
pub const ENV_PASSPHRASE: &str = "POST_CRYPT_PASSPHRASE";

/// Extensions reported as images by `describe_file`
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// Extensions reported as videos by `describe_file`
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "mkv", "webm", "m4v"];
