//! HTTP client wrapper: the single point of contact with the backend.
//!
//! Provides a typed `get`/`post`/`put`/`patch`/`delete` surface with:
//! - A fixed per-request timeout (configured on the transport)
//! - Uniform error normalization for non-2xx responses
//! - A typed decode boundary that surfaces malformed bodies as a distinct
//!   error kind instead of letting bad shapes propagate
//! - A monotonic `_ts` cache-buster on every GET so intermediate HTTP
//!   caches never serve stale data (independent of the TTL cache)
//! - Cancellation checks before dispatch and after the response lands

use crate::cancel::CancellationToken;
use crate::config;
use crate::error::{PulseError, Result};
use crate::network::query::Query;
use crate::network::transport::{HttpTransport, Method, RawResponse, ReqwestTransport};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Typed HTTP client for one backend origin.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    cache_buster: AtomicU64,
    cancel: Option<CancellationToken>,
}

impl ApiClient {
    /// Create a client for the given base URL using the reqwest transport.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = config::normalize_base_url(&base_url.into());
        url::Url::parse(&base_url).map_err(|_| PulseError::InvalidUrl {
            url: base_url.clone(),
        })?;
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(base_url, transport))
    }

    /// Create a client for the origin named by `PULSE_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(config::base_url_from_env())
    }

    /// Create a client over an injected transport. Used by embedders that
    /// share one connection pool and by tests that mock the wire.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: config::normalize_base_url(&base_url.into()),
            cache_buster: AtomicU64::new(unix_millis()),
            cancel: None,
        }
    }

    /// Attach a cancellation token. Once cancelled, pending and future
    /// requests resolve to [`PulseError::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let mut query = query.clone();
        query.push("_ts", self.next_cache_buster());
        let url = self.build_url(path, &query);
        self.request(Method::Get, &url, None).await
    }

    /// POST with an optional JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.build_url(path, &Query::new());
        self.request(Method::Post, &url, body).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.build_url(path, &Query::new());
        self.request(Method::Put, &url, body).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.build_url(path, &Query::new());
        self.request(Method::Patch, &url, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path, &Query::new());
        self.request(Method::Delete, &url, None).await
    }

    // Internal methods

    fn build_url(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.to_query_string())
        }
    }

    fn next_cache_buster(&self) -> u64 {
        self.cache_buster.fetch_add(1, Ordering::Relaxed)
    }

    fn check_cancelled(&self) -> Result<()> {
        if let Some(token) = &self.cancel {
            token.check()?;
        }
        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.check_cancelled()?;
        debug!(%method, url, "dispatching request");

        let response = self.transport.send(method, url, body).await;
        // Drop responses that arrive after the caller navigated away.
        self.check_cancelled()?;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, url, error = %e, "transport failure");
                return Err(e);
            }
        };

        debug!(%method, url, status = response.status, "response received");
        if !(200..300).contains(&response.status) {
            return Err(Self::normalize_error(&response));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(%method, url, error = %e, "response body did not match expected shape");
            PulseError::MalformedResponse {
                message: format!("{} {}: {}", method, url, e),
            }
        })
    }

    fn normalize_error(response: &RawResponse) -> PulseError {
        let backend_detail = serde_json::from_slice::<BackendErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail);
        PulseError::api(response.status, backend_detail)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_cancellation", &self.cancel.is_some())
            .finish()
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::transport::mock::MockTransport;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    fn client_over(transport: Arc<MockTransport>) -> ApiClient {
        ApiClient::with_transport("http://backend.test", transport)
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, PulseError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_get_decodes_typed_body() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, r#"{"value": 7}"#);
        let client = client_over(transport.clone());

        let payload: Payload = client.get("/api/thing", &Query::new()).await.unwrap();
        assert_eq!(payload, Payload { value: 7 });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert!(requests[0].url.starts_with("http://backend.test/api/thing?_ts="));
    }

    #[tokio::test]
    async fn test_gets_carry_distinct_cache_busters() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, r#"{"value": 1}"#);
        transport.reply(200, r#"{"value": 2}"#);
        let client = client_over(transport.clone());

        let _: Payload = client.get("/api/thing", &Query::new()).await.unwrap();
        let _: Payload = client.get("/api/thing", &Query::new()).await.unwrap();

        let requests = transport.requests();
        assert_ne!(requests[0].url, requests[1].url);
    }

    #[tokio::test]
    async fn test_post_does_not_carry_cache_buster() {
        let transport = Arc::new(MockTransport::new());
        let client = client_over(transport.clone());

        let _: serde_json::Value = client
            .post("/api/refresh", Some(serde_json::json!({"force": true})))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://backend.test/api/refresh");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"force": true}))
        );
    }

    #[tokio::test]
    async fn test_patch_sends_body_without_cache_buster() {
        let transport = Arc::new(MockTransport::new());
        let client = client_over(transport.clone());

        let _: serde_json::Value = client
            .patch("/api/settings/config", Some(serde_json::json!({"enabled": true})))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(requests[0].url, "http://backend.test/api/settings/config");
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"enabled": true}))
        );
    }

    #[tokio::test]
    async fn test_delete_targets_bare_url() {
        let transport = Arc::new(MockTransport::new());
        let client = client_over(transport.clone());

        let _: serde_json::Value = client.delete("/api/posts/p-1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://backend.test/api/posts/p-1");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_normalizes_with_backend_detail() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(422, r#"{"detail": "days must be positive"}"#);
        let client = client_over(transport);

        let err = client
            .get::<Payload>("/api/thing", &Query::new())
            .await
            .unwrap_err();
        match err {
            PulseError::Api {
                detail, status_code, ..
            } => {
                assert_eq!(detail, "days must be positive");
                assert_eq!(status_code, 422);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_still_normalizes() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(503, "upstream down");
        let client = client_over(transport);

        let err = client
            .get::<Payload>("/api/thing", &Query::new())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 503);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_network_error() {
        let transport = Arc::new(MockTransport::new());
        transport.fail(PulseError::Network {
            message: "connection refused".into(),
            cause: None,
        });
        let client = client_over(transport);

        let err = client
            .get::<Payload>("/api/thing", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PulseError::Network { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_malformed_response() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, r#"{"unexpected": "shape"}"#);
        let client = client_over(transport);

        let err = client
            .get::<Payload>("/api/thing", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PulseError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_requests() {
        let transport = Arc::new(MockTransport::new());
        let token = CancellationToken::new();
        let client = client_over(transport.clone()).with_cancellation(token.clone());

        token.cancel();
        let err = client
            .get::<Payload>("/api/thing", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PulseError::Cancelled));
        // Nothing reached the wire.
        assert_eq!(transport.calls(), 0);
    }
}
