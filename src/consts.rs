// src/consts.rs
//! Shared constants: host field names, binding names and file defaults

/// Env var naming the file that holds the host record
pub const APP_DATA_ENV: &str = "REGISTER_APP_DATA";

/// Record file used when `APP_DATA_ENV` is unset
pub const DEFAULT_APP_DATA_FILE: &str = "app-data.json";

// Field names as rendered by the host page
pub const FIELD_ALLOWED_TABS: &str = "allowed_tabs";
pub const FIELD_ROLE: &str = "rol";
pub const FIELD_SESSION_USER: &str = "session_user";
pub const FIELD_REASONS: &str = "razones";
pub const FIELD_ROLES: &str = "roles";
pub const FIELD_RESTAURANTS: &str = "restaurantes";
pub const FIELD_TABLES_CONFIG: &str = "tables_cfg";

/// Key holding the display name inside a host catalog row (`{"id": 1, "nombre": "..."}`)
pub const CATALOG_NAME_KEY: &str = "nombre";

// Names the normalized values are published under
pub const BINDING_ALLOWED_TABS: &str = "ALLOWED_TABS";
pub const BINDING_USER_ROLE: &str = "USER_ROLE";
pub const BINDING_CURRENT_USER: &str = "currentUser";
pub const BINDING_REASONS: &str = "_razones";
pub const BINDING_ROLES: &str = "_roles";
pub const BINDING_RESTAURANTS: &str = "_restaurantes";
pub const BINDING_TABLES_CONFIG: &str = "TABLES_CFG";
