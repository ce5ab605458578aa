// src/config/normalized.rs
use std::collections::{BTreeMap, HashSet};

use serde_json::Value;

use super::app::AppConfig;
use super::catalog::CatalogItem;

/// Fully-defaulted app data. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedConfig {
    allowed_tabs: HashSet<String>,
    user_role: String,
    current_user: String,
    reasons: Vec<CatalogItem>,
    roles: Vec<CatalogItem>,
    restaurants: Vec<CatalogItem>,
    tables_config: BTreeMap<String, Value>,
}

impl NormalizedConfig {
    /// Tabs the current user may see (`ALLOWED_TABS`)
    pub fn allowed_tabs(&self) -> &HashSet<String> {
        &self.allowed_tabs
    }

    /// Whether `tab` is in `ALLOWED_TABS`
    pub fn is_tab_allowed(&self, tab: &str) -> bool {
        self.allowed_tabs.contains(tab)
    }

    /// `USER_ROLE`
    pub fn user_role(&self) -> &str {
        &self.user_role
    }

    /// `currentUser`
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Company catalog (`_razones`), host order
    pub fn reasons(&self) -> &[CatalogItem] {
        &self.reasons
    }

    /// `_roles`
    pub fn roles(&self) -> &[CatalogItem] {
        &self.roles
    }

    /// `_restaurantes`; rows keep their `id_razon_social` link
    pub fn restaurants(&self) -> &[CatalogItem] {
        &self.restaurants
    }

    /// `TABLES_CFG`
    pub fn tables_config(&self) -> &BTreeMap<String, Value> {
        &self.tables_config
    }
}

impl From<AppConfig> for NormalizedConfig {
    fn from(raw: AppConfig) -> Self {
        Self {
            allowed_tabs: raw.allowed_tabs.unwrap_or_default().into_iter().collect(),
            user_role: raw.role.unwrap_or_default(),
            current_user: raw.session_user.unwrap_or_default(),
            reasons: raw.reasons.unwrap_or_default(),
            roles: raw.roles.unwrap_or_default(),
            restaurants: raw.restaurants.unwrap_or_default(),
            tables_config: raw.tables_config.unwrap_or_default(),
        }
    }
}

/// Normalize a host record. An absent record behaves like an empty one.
pub fn load(raw: Option<AppConfig>) -> NormalizedConfig {
    raw.unwrap_or_default().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_record_yields_empty_defaults() {
        let config = load(None);

        assert!(config.allowed_tabs().is_empty());
        assert_eq!(config.user_role(), "");
        assert_eq!(config.current_user(), "");
        assert!(config.reasons().is_empty());
        assert!(config.roles().is_empty());
        assert!(config.restaurants().is_empty());
        assert!(config.tables_config().is_empty());
        assert_eq!(config, NormalizedConfig::default());
    }

    #[test]
    fn duplicate_tabs_collapse() {
        let config = load(Some(AppConfig {
            role: Some("admin".into()),
            allowed_tabs: Some(vec!["a".into(), "a".into(), "b".into()]),
            ..Default::default()
        }));

        assert_eq!(config.allowed_tabs().len(), 2);
        assert!(config.is_tab_allowed("a"));
        assert!(config.is_tab_allowed("b"));
        assert!(!config.is_tab_allowed("c"));
        assert_eq!(config.user_role(), "admin");
        assert_eq!(config.current_user(), "");
    }

    #[test]
    fn tables_config_entries_survive() {
        let mut tables = BTreeMap::new();
        tables.insert("tbl_bpm".to_string(), json!(["id", "fecha", "responsable"]));

        let config = load(Some(AppConfig {
            tables_config: Some(tables.clone()),
            ..Default::default()
        }));

        assert_eq!(config.tables_config(), &tables);
    }

    #[test]
    fn normalized_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NormalizedConfig>();
    }
}
