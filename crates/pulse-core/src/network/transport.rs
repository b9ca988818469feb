//! Transport seam between the HTTP wrapper and the wire.
//!
//! [`ApiClient`](super::ApiClient) talks to a [`HttpTransport`] trait object
//! rather than to reqwest directly, so tests can substitute a scripted mock
//! and count the calls that actually reach the network.

use crate::config::NetworkConfig;
use crate::error::{PulseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP verbs used by the client surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw response before normalization. Any HTTP status is a response here;
/// only transport-level failures are errors.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// One round-trip to the backend.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse>;
}

/// Production transport backed by reqwest.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the standard fixed timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(NetworkConfig::REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| PulseError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: Some(e.to_string()),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(PulseError::from)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(PulseError::from)?.to_vec();

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted transport for service and client tests.

    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    /// Transport that replays queued responses and records every request.
    ///
    /// When the queue runs dry it answers `200 {}`.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<RawResponse>>>,
        requests: Mutex<Vec<RecordedRequest>>,
        calls: AtomicUsize,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and body text.
        pub fn reply(&self, status: u16, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(RawResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                }));
        }

        /// Queue a transport-level failure.
        pub fn fail(&self, error: PulseError) {
            self.responses.lock().unwrap().push_back(Err(error));
        }

        /// Number of requests that reached this transport.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(
            &self,
            method: Method,
            url: &str,
            body: Option<serde_json::Value>,
        ) -> Result<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                body,
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(RawResponse {
                        status: 200,
                        body: b"{}".to_vec(),
                    })
                })
        }
    }
}
