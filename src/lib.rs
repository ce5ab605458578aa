// src/lib.rs
//! register-app-data — typed, always-defaulted view of the host page's app data
//!
//! Features:
//! - Tolerant decoding of the `APP_DATA` record rendered by the host page
//! - Total defaulting: a missing record or field never surfaces as an error
//! - JSON / TOML record sources with env-var override
//! - Export of the normalized values under their page binding names

pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod source;

// Re-export everything users need at the crate root
pub use config::{load, AppConfig, CatalogItem, NormalizedConfig};
pub use error::ConfigError;
pub use export::{export_bindings, to_bindings};
pub use source::{load_from_env, load_from_json, load_from_path};
