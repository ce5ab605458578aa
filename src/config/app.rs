// src/config/app.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::catalog::CatalogItem;
use crate::consts::*;

/// Raw app data as rendered by the host page. Every field is optional.
///
/// The record decodes from a JSON/TOML object only; anything else is not a
/// record. Duplicate keys keep the last value. Decoding is tolerant per
/// field: a value of the wrong type is dropped (and logged) instead of
/// failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AppConfig {
    #[serde(rename = "allowed_tabs", skip_serializing_if = "Option::is_none")]
    pub allowed_tabs: Option<Vec<String>>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "session_user", skip_serializing_if = "Option::is_none")]
    pub session_user: Option<String>,
    #[serde(rename = "razones", skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<CatalogItem>>,
    #[serde(rename = "roles", skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<CatalogItem>>,
    #[serde(rename = "restaurantes", skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<CatalogItem>>,
    #[serde(rename = "tables_cfg", skip_serializing_if = "Option::is_none")]
    pub tables_config: Option<BTreeMap<String, Value>>,
}

impl From<Map<String, Value>> for AppConfig {
    fn from(mut record: Map<String, Value>) -> Self {
        Self {
            allowed_tabs: list(FIELD_ALLOWED_TABS, record.remove(FIELD_ALLOWED_TABS), tab),
            role: text(FIELD_ROLE, record.remove(FIELD_ROLE)),
            session_user: text(FIELD_SESSION_USER, record.remove(FIELD_SESSION_USER)),
            reasons: list(FIELD_REASONS, record.remove(FIELD_REASONS), catalog_item),
            roles: list(FIELD_ROLES, record.remove(FIELD_ROLES), catalog_item),
            restaurants: list(FIELD_RESTAURANTS, record.remove(FIELD_RESTAURANTS), catalog_item),
            tables_config: mapping(FIELD_TABLES_CONFIG, record.remove(FIELD_TABLES_CONFIG)),
        }
    }
}

fn text(field: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            warn!(field = field, found = kind(&other), "expected a string, ignoring field");
            None
        }
    }
}

fn list<T>(field: &str, value: Option<Value>, item: fn(Value) -> Option<T>) -> Option<Vec<T>> {
    let items = match value? {
        Value::Array(items) => items,
        Value::Null => return None,
        other => {
            warn!(field = field, found = kind(&other), "expected a list, ignoring field");
            return None;
        }
    };

    Some(
        items
            .into_iter()
            .filter_map(|value| {
                let found = kind(&value);
                let decoded = item(value);
                if decoded.is_none() {
                    debug!(field = field, found = found, "skipping list item of unexpected type");
                }
                decoded
            })
            .collect(),
    )
}

fn tab(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn catalog_item(value: Value) -> Option<CatalogItem> {
    match value {
        Value::String(name) => Some(CatalogItem::Name(name)),
        Value::Object(row) => Some(CatalogItem::Row(row)),
        _ => None,
    }
}

fn mapping(field: &str, value: Option<Value>) -> Option<BTreeMap<String, Value>> {
    match value? {
        Value::Object(entries) => Some(entries.into_iter().collect()),
        Value::Null => None,
        other => {
            warn!(field = field, found = kind(&other), "expected a mapping, ignoring field");
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
