// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

use crate::consts::{DEFAULT_CONFIG_FILE, ENV_CONFIG, ENV_MAX_FILE_SIZE};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_limits")]
    pub limits: Limits,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Limits {
    /// Largest file accepted by the file operations, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Logging {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limits: default_limits(),
            logging: default_logging(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        default_limits()
    }
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| CoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `POST_CRYPT_MAX_FILE_SIZE` if set
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var(ENV_MAX_FILE_SIZE) {
            self.limits.max_file_size =
                value.trim().parse().map_err(|_| CoreError::ConfigValue {
                    key: ENV_MAX_FILE_SIZE,
                    value,
                })?;
        }
        Ok(self)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read config from `path`, falling back to defaults if the file is missing
pub fn load_from(path: &Path) -> Result<Config> {
    let conf = if path.exists() {
        debug!(path = %path.display(), "reading config");
        let content = std::fs::read_to_string(path)?;
        Config::from_toml_str(&content, path)?
    } else {
        debug!(path = %path.display(), "config not found, using built-in defaults");
        Config::default()
    };

    conf.apply_env()
}

/// Load config once per process
///
/// Path precedence: `explicit`, then `POST_CRYPT_CONFIG`, then
/// `post-crypt.toml` in the working directory. Later calls return the
/// first successful load regardless of `explicit`.
pub fn load(explicit: Option<&Path>) -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::var_os(ENV_CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
    };

    let conf = load_from(&path)?;
    Ok(CONFIG.get_or_init(|| conf))
}
