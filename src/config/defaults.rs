// src/config/defaults.rs
use std::path::PathBuf;

use crate::consts::{APP_DATA_ENV, DEFAULT_APP_DATA_FILE};

/// Location of the host record: `REGISTER_APP_DATA` if set, else `app-data.json`
pub fn record_path() -> PathBuf {
    std::env::var_os(APP_DATA_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_DATA_FILE))
}
