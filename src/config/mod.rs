// src/config/mod.rs
//! Configuration system for post-crypt
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, Config, Limits, Logging};

mod app;
mod defaults;
