//! Network layer: HTTP wrapper, transport seam, retry policy, URL helpers.
//!
//! This module provides:
//! - [`ApiClient`] — typed verbs with uniform error normalization
//! - [`HttpTransport`] — the seam tests mock instead of the wire
//! - [`retry_async`] — bounded retry with linear backoff
//! - [`Query`] / [`fill_path`] — query-string and path-template helpers

mod client;
mod query;
mod retry;
mod transport;

pub use client::ApiClient;
pub use query::{fill_path, Query};
pub use retry::{retry_async, RetryConfig, RetryStats};
pub use transport::{HttpTransport, Method, RawResponse, ReqwestTransport};

#[cfg(test)]
pub(crate) use transport::mock;
