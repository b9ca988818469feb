//! Centralized configuration for the Pulse dashboard client.
//!
//! Network timeouts, retry policy defaults, and per-endpoint cache TTLs
//! live here so that services never hard-code their own numbers.

use std::time::Duration;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    /// Fixed per-request timeout. Generous because some backend analytics
    /// queries scan weeks of forum data.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
    pub const MAX_RETRIES: u32 = 3;
    pub const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
    pub const USER_AGENT: &'static str = "pulse-dashboard/0.1";
    /// Environment variable selecting the backend origin.
    pub const BASE_URL_ENV: &'static str = "PULSE_API_BASE_URL";
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
}

/// Cache TTLs per endpoint group.
///
/// Values track how often the underlying data actually changes: recent
/// posts churn every scrape cycle, while release notes move weekly.
pub struct CacheTtl;

impl CacheTtl {
    pub const DEFAULT: Duration = Duration::from_secs(5 * 60);

    pub const OVERVIEW: Duration = Duration::from_secs(2 * 60);
    pub const RECENT_POSTS: Duration = Duration::from_secs(60);
    pub const TRENDING_TOPICS: Duration = Duration::from_secs(5 * 60);
    pub const SENTIMENT_TIMELINE: Duration = Duration::from_secs(15 * 60);
    pub const HEALTH_SCORE: Duration = Duration::from_secs(2 * 60);

    pub const POSTS: Duration = Duration::from_secs(2 * 60);
    pub const POST_STATS: Duration = Duration::from_secs(10 * 60);

    pub const ANALYTICS: Duration = Duration::from_secs(15 * 60);

    pub const RELEASE_NOTES: Duration = Duration::from_secs(30 * 60);
    pub const CLOUD_NEWS: Duration = Duration::from_secs(30 * 60);

    pub const FORUMS: Duration = Duration::from_secs(10 * 60);
    pub const SETTINGS: Duration = Duration::from_secs(60);
}

/// Resolve the backend base URL from the environment, falling back to the
/// local development default.
pub fn base_url_from_env() -> String {
    std::env::var(NetworkConfig::BASE_URL_ENV)
        .ok()
        .map(|raw| normalize_base_url(&raw))
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| NetworkConfig::DEFAULT_BASE_URL.to_string())
}

/// Trim whitespace and any trailing slash so that paths can always be
/// appended verbatim.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
