// src/error.rs
//! Error type for the record-reading layer
//!
//! Normalization itself never fails; only reading a record from disk or
//! parsing a document can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON app data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML app data: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
