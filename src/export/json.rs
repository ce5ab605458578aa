// src/export/json.rs
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::config::{CatalogItem, NormalizedConfig};
use crate::consts::*;
use crate::error::Result;

/// Render the normalized values keyed by their binding names.
///
/// `ALLOWED_TABS` is emitted as a sorted array so the output is stable.
/// Catalog rows are published as the host sent them.
pub fn to_bindings(config: &NormalizedConfig) -> Value {
    let mut tabs: Vec<&str> = config.allowed_tabs().iter().map(String::as_str).collect();
    tabs.sort_unstable();

    let mut bindings = Map::new();
    bindings.insert(BINDING_ALLOWED_TABS.into(), tabs.into());
    bindings.insert(BINDING_USER_ROLE.into(), config.user_role().into());
    bindings.insert(BINDING_CURRENT_USER.into(), config.current_user().into());
    bindings.insert(BINDING_REASONS.into(), catalog(config.reasons()));
    bindings.insert(BINDING_ROLES.into(), catalog(config.roles()));
    bindings.insert(BINDING_RESTAURANTS.into(), catalog(config.restaurants()));
    bindings.insert(
        BINDING_TABLES_CONFIG.into(),
        Value::Object(
            config
                .tables_config()
                .iter()
                .map(|(table, cfg)| (table.clone(), cfg.clone()))
                .collect(),
        ),
    );

    Value::Object(bindings)
}

fn catalog(items: &[CatalogItem]) -> Value {
    Value::Array(items.iter().map(Value::from).collect())
}

/// Write the bindings to `path` as pretty JSON
pub fn export_bindings(config: &NormalizedConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, serde_json::to_string_pretty(&to_bindings(config))?)?;
    info!(
        path = %path.display(),
        tabs = config.allowed_tabs().len(),
        "exported page bindings"
    );
    Ok(())
}
