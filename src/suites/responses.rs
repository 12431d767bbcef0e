//! Typed views of the admin endpoints' JSON bodies.
//!
//! Every field defaults so that a missing key reads as "no" or zero instead
//! of a parse failure; `success` is what the checks actually gate on.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// `GET /admin/database/consistency`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsistencyReport {
    pub success: bool,
    pub is_consistent: bool,
    pub primary_count: i64,
    pub secondary_count: i64,
    pub message: Option<String>,
}

impl ConsistencyReport {
    /// `Primary: 12, Secondary: 12`.
    pub fn counts(&self) -> String {
        format!(
            "Primary: {}, Secondary: {}",
            self.primary_count, self.secondary_count
        )
    }
}

/// `GET /admin/feature-flags/devcycle/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevCycleStatusResponse {
    pub success: bool,
    pub status: DevCycleStatus,
    pub message: Option<String>,
}

/// The `status` object of [`DevCycleStatusResponse`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevCycleStatus {
    pub is_dev_cycle_connected: bool,
    pub source: String,
    pub use_neon_flag_tests: BTreeMap<String, Value>,
}

impl Default for DevCycleStatus {
    fn default() -> Self {
        Self {
            is_dev_cycle_connected: false,
            source: "Unknown".to_string(),
            use_neon_flag_tests: BTreeMap::new(),
        }
    }
}

/// `POST /admin/database/sync/cart-items`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartSyncResponse {
    pub success: bool,
    pub synced_count: i64,
    pub message: Option<String>,
}

/// `POST /admin/database/sync/bidirectional`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BidirectionalSyncResponse {
    pub success: bool,
    pub primary_to_secondary_count: i64,
    pub secondary_to_primary_count: i64,
    pub timestamp: Option<String>,
    pub message: Option<String>,
}

/// `GET /admin/feature-flags/use-neon/test`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagTestResponse {
    pub success: bool,
    pub source: String,
    pub results: BTreeMap<String, Value>,
    pub message: Option<String>,
}

impl Default for FlagTestResponse {
    fn default() -> Self {
        Self {
            success: false,
            source: "Unknown".to_string(),
            results: BTreeMap::new(),
            message: None,
        }
    }
}

/// Message for a `success: false` body, or a generic fallback.
pub fn failure_message(message: Option<&str>, fallback: &str) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
