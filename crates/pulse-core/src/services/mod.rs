//! Domain services: typed façades over the backend endpoint groups.
//!
//! Each service owns one endpoint group and composes the same pipeline for
//! reads: retry(cache(client.get)). Mutating calls are issued exactly once
//! — replaying a non-idempotent POST blindly is worse than surfacing the
//! failure to the caller.

mod aggregate;
mod analytics;
mod cloud_news;
mod dashboard;
mod forums;
mod posts;
mod release_notes;
mod settings;

pub use aggregate::{
    author_leaderboard, category_breakdown, growth_rate, sentiment_distribution, AuthorActivity,
};
pub use analytics::AnalyticsService;
pub use cloud_news::{CloudNewsService, NewsFilter};
pub use dashboard::{DashboardService, DashboardSnapshot};
pub use forums::ForumsService;
pub use posts::{PostFilter, PostsService};
pub use release_notes::{NotesFilter, NotesPage, ReleaseNotesService};
pub use settings::SettingsService;

use crate::cache::TtlCache;
use crate::error::{PulseError, Result};
use crate::network::{retry_async, ApiClient, Query, RetryConfig};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Shared plumbing every service composes: the HTTP client, the response
/// cache, and the retry policy. Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct Backend {
    client: Arc<ApiClient>,
    cache: Arc<TtlCache<serde_json::Value>>,
    retry: RetryConfig,
}

impl Backend {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
            cache: Arc::new(TtlCache::new()),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Cached, retried GET: the retry wraps the cache lookup, so a hit
    /// costs no network call and a miss that fails transiently is refetched.
    pub(crate) async fn fetch_cached<T: DeserializeOwned>(
        &self,
        key: &str,
        ttl: Duration,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        let (result, stats) = retry_async(
            &self.retry,
            || {
                let client = Arc::clone(&self.client);
                let cache = Arc::clone(&self.cache);
                let key = key.to_string();
                let path = path.to_string();
                let query = query.clone();
                async move {
                    cache
                        .get_or_fetch(&key, ttl, || async {
                            client.get::<serde_json::Value>(&path, &query).await
                        })
                        .await
                }
            },
            PulseError::is_retryable,
        )
        .await;

        if stats.attempts > 1 {
            debug!(path, attempts = stats.attempts, "request settled after retries");
        }
        decode(path, result?)
    }

    /// Uncached, retried GET.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let (result, _stats) = retry_async(
            &self.retry,
            || {
                let client = Arc::clone(&self.client);
                let path = path.to_string();
                let query = query.clone();
                async move { client.get::<T>(&path, &query).await }
            },
            PulseError::is_retryable,
        )
        .await;
        result
    }

    /// POST without retry.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.client.post(path, body).await
    }

    /// PUT without retry.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.client.put(path, body).await
    }

    /// Drop the given cache keys so the next read refetches.
    pub(crate) fn invalidate(&self, keys: &[String]) {
        for key in keys {
            self.cache.remove(key);
        }
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| PulseError::MalformedResponse {
        message: format!("{}: {}", path, e),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::network::mock::MockTransport;

    /// Route tracing output through the test harness, filtered by
    /// `RUST_LOG`. Safe to call from every test; later calls are no-ops.
    pub(crate) fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Backend over a scripted transport with fast retry delays.
    pub(crate) fn backend_over(transport: Arc<MockTransport>) -> Backend {
        init_tracing();
        let client = ApiClient::with_transport("http://backend.test", transport);
        Backend::new(client)
            .with_retry(RetryConfig::new().with_base_delay(Duration::from_millis(5)))
    }
}
