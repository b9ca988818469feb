//! Settings and admin service.
//!
//! Status and config reads use a short TTL so the settings page reflects
//! backend changes quickly; mutations are issued once and never retried.

use super::Backend;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{BackendConfig, BackendStatus, MigrationReport};
use crate::network::Query;

const CONFIG_KEY: &str = "settings:config";
const STATUS_KEY: &str = "settings:status";

/// Typed façade over `/api/settings/*` and admin endpoints.
#[derive(Clone)]
pub struct SettingsService {
    backend: Backend,
}

impl SettingsService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn config(&self) -> Result<BackendConfig> {
        self.backend
            .fetch_cached(
                CONFIG_KEY,
                CacheTtl::SETTINGS,
                "/api/settings/config",
                &Query::new(),
            )
            .await
    }

    pub async fn status(&self) -> Result<BackendStatus> {
        self.backend
            .fetch_cached(
                STATUS_KEY,
                CacheTtl::SETTINGS,
                "/api/settings/status",
                &Query::new(),
            )
            .await
    }

    /// Replace the backend configuration, then drop the cached copy so the
    /// next read observes the update.
    pub async fn update_config(&self, config: &BackendConfig) -> Result<BackendConfig> {
        let body = serde_json::to_value(config).map_err(|e| {
            crate::error::PulseError::Config {
                message: format!("failed to encode config body: {e}"),
            }
        })?;
        let updated = self
            .backend
            .put("/api/settings/config", Some(body))
            .await?;
        self.backend.invalidate(&[CONFIG_KEY.to_string()]);
        Ok(updated)
    }

    /// Run pending database migrations. Issued once, never retried.
    pub async fn migrate_database(&self) -> Result<MigrationReport> {
        self.backend.post("/api/admin/migrate-database", None).await
    }
}
