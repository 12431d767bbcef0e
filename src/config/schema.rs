//! Settings file schema.
//!
//! Every field is optional so a file only needs to name what it changes.
//!
//! ```yaml
//! base_url: https://shop.staging.example.com
//! timeout_secs: 15
//! login:
//!   field: email
//!   identifier: admin@example.com
//!   token_aliases: [accessToken, token]
//! endpoints:
//!   health: /actuator/health
//!   login: /api/auth/login
//! ```

use serde::{Deserialize, Serialize};

/// Top-level layout of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    /// Base URL of the backend under test.
    pub base_url: Option<String>,

    /// Per-call timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Login payload and response settings.
    #[serde(default)]
    pub login: FileLoginSettings,

    /// Endpoint paths, relative to the base URL.
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Login section of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoginSettings {
    /// Which field carries the login identifier.
    pub field: Option<LoginField>,

    /// Login identifier (username or email).
    pub identifier: Option<String>,

    /// Password. Prefer `ADMIN_PASSWORD` over committing this.
    pub password: Option<String>,

    /// Response fields that may hold the token, tried in order.
    pub token_aliases: Option<Vec<String>>,
}

/// Which JSON field carries the login identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    /// `{"email": ..., "password": ...}`
    Email,
    /// `{"username": ..., "password": ...}`
    #[default]
    Username,
}

impl LoginField {
    /// JSON key used in the login payload.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }
}

/// Endpoint paths used by the suites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    /// Health/readiness endpoint.
    pub health: String,
    /// Authentication endpoint.
    pub login: String,
    /// Product collection (list, create; `/{id}` for a single product).
    pub products: String,
    /// Admin user listing.
    pub admin_users: String,
    /// Admin order listing.
    pub admin_orders: String,
    /// Database sync status.
    pub sync_status: String,
    /// Feature-flag provider status.
    pub devcycle_status: String,
    /// Primary/secondary consistency report.
    pub consistency: String,
    /// Cart item sync trigger.
    pub sync_cart_items: String,
    /// Bidirectional sync trigger.
    pub sync_bidirectional: String,
    /// `use-neon` flag evaluation.
    pub use_neon_flag: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: "/actuator/health".to_string(),
            login: "/api/auth/login".to_string(),
            products: "/api/products".to_string(),
            admin_users: "/api/admin/users".to_string(),
            admin_orders: "/api/admin/orders".to_string(),
            sync_status: "/api/admin/database-sync/status".to_string(),
            devcycle_status: "/api/admin/feature-flags/devcycle/status".to_string(),
            consistency: "/api/admin/database/consistency".to_string(),
            sync_cart_items: "/api/admin/database/sync/cart-items".to_string(),
            sync_bidirectional: "/api/admin/database/sync/bidirectional".to_string(),
            use_neon_flag: "/api/admin/feature-flags/use-neon/test".to_string(),
        }
    }
}
