// src/source.rs
//! Reading host records from documents and files
//!
//! The `parse_*` / `read_path` functions report failures. The `load_*`
//! functions fold every failure back into an absent record, so they always
//! produce a `NormalizedConfig`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{load, record_path, AppConfig, NormalizedConfig};
use crate::error::Result;

/// Parse a JSON record. The literal `null` is an absent record.
pub fn parse_json(input: &str) -> Result<Option<AppConfig>> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a TOML record
pub fn parse_toml(input: &str) -> Result<AppConfig> {
    Ok(toml::from_str(input)?)
}

/// Read a record file; `.toml` files are TOML, everything else is JSON.
pub fn read_path(path: impl AsRef<Path>) -> Result<Option<AppConfig>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        parse_toml(&content).map(Some)
    } else {
        parse_json(&content)
    }
}

/// Normalize a JSON record; unparseable input yields empty defaults
pub fn load_from_json(input: &str) -> NormalizedConfig {
    match parse_json(input) {
        Ok(raw) => load(raw),
        Err(err) => {
            warn!(error = %err, "unreadable app data, using empty defaults");
            load(None)
        }
    }
}

/// Normalize the record at `path`; a missing or unreadable file yields empty defaults
pub fn load_from_path(path: impl AsRef<Path>) -> NormalizedConfig {
    let path = path.as_ref();

    if !path.exists() {
        warn!(path = %path.display(), "app data not found, using empty defaults");
        return load(None);
    }

    match read_path(path) {
        Ok(raw) => {
            debug!(path = %path.display(), present = raw.is_some(), "loaded app data");
            load(raw)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable app data, using empty defaults");
            load(None)
        }
    }
}

/// Load from `REGISTER_APP_DATA`, falling back to `app-data.json`
pub fn load_from_env() -> NormalizedConfig {
    load_from_path(record_path())
}
