//! Settings and admin endpoint types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend configuration from `/api/settings/config`.
///
/// Also serialized as the PUT body when updating settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub scrape_interval_minutes: Option<u32>,
    #[serde(default)]
    pub sentiment_model: Option<String>,
    #[serde(default)]
    pub forums_tracked: Vec<String>,
}

/// Health report from `/api/settings/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub database_ok: bool,
    #[serde(default)]
    pub last_scrape: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Result of `/api/admin/migrate-database`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationReport {
    pub success: bool,
    #[serde(default)]
    pub migrations_applied: u32,
    #[serde(default)]
    pub message: Option<String>,
}
