// src/export/mod.rs
//! Export utilities for register-app-data
//!
//! Publishes a `NormalizedConfig` under the names the page script binds.

pub use json::{export_bindings, to_bindings};

pub mod json;
