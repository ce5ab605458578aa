// src/config/mod.rs
//! App data system for register-app-data
//!
//! `AppConfig` is the raw record the host page renders; `load` turns it into
//! a fully-defaulted, immutable `NormalizedConfig`.

pub use app::AppConfig;
pub use catalog::CatalogItem;
pub use defaults::record_path;
pub use normalized::{load, NormalizedConfig};

mod app;
mod catalog;
mod defaults;
mod normalized;
