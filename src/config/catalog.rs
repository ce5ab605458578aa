// src/config/catalog.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::CATALOG_NAME_KEY;

/// One entry of a host catalog list (`razones`, `roles`, `restaurantes`).
///
/// The host renders rows such as `{"id": 4, "id_razon_social": 1, "nombre": "Sede Centro"}`;
/// plain strings are accepted too. Rows are kept whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogItem {
    Name(String),
    Row(Map<String, Value>),
}

impl CatalogItem {
    /// Display name: the string itself, or the row's `nombre`
    pub fn name(&self) -> Option<&str> {
        match self {
            CatalogItem::Name(name) => Some(name),
            CatalogItem::Row(row) => row.get(CATALOG_NAME_KEY).and_then(Value::as_str),
        }
    }

    /// Numeric `id` of a row
    pub fn id(&self) -> Option<i64> {
        match self {
            CatalogItem::Name(_) => None,
            CatalogItem::Row(row) => row.get("id").and_then(Value::as_i64),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            CatalogItem::Name(_) => None,
            CatalogItem::Row(row) => row.get(key),
        }
    }
}

impl From<&str> for CatalogItem {
    fn from(name: &str) -> Self {
        CatalogItem::Name(name.to_string())
    }
}

impl From<String> for CatalogItem {
    fn from(name: String) -> Self {
        CatalogItem::Name(name)
    }
}

impl From<&CatalogItem> for Value {
    fn from(item: &CatalogItem) -> Self {
        match item {
            CatalogItem::Name(name) => Value::String(name.clone()),
            CatalogItem::Row(row) => Value::Object(row.clone()),
        }
    }
}
