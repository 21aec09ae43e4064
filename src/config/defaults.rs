// src/config/defaults.rs
use crate::config::app::{Limits, Logging};
use crate::consts::{DEFAULT_LOG_FILTER, DEFAULT_MAX_FILE_SIZE};

pub fn default_limits() -> Limits {
    Limits {
        max_file_size: DEFAULT_MAX_FILE_SIZE,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}

pub fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

pub fn default_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
