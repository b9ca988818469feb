//! Error types for the Pulse dashboard client.
//!
//! Every failure that can reach a caller is normalized into [`PulseError`].
//! HTTP-level failures carry the uniform `detail` / `status_code` /
//! `error_type` / `timestamp` shape regardless of what the transport or the
//! backend actually produced.

use crate::config::NetworkConfig;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Main error type for Pulse client operations.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Normalized API error for any non-2xx backend response.
    #[error("{detail} (HTTP {status_code})")]
    Api {
        /// Human-readable message, safe to show in an error panel.
        detail: String,
        status_code: u16,
        /// Stable snake_case tag for the error class.
        error_type: String,
        timestamp: DateTime<Utc>,
    },

    /// Transport-level failure: no HTTP response was received.
    #[error("Network error: {message}")]
    Network {
        message: String,
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    /// The backend answered 2xx but the body did not decode into the
    /// expected shape.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Request cancelled")]
    Cancelled,
}

/// Result type alias for Pulse client operations.
pub type Result<T> = std::result::Result<T, PulseError>;

impl PulseError {
    /// Build a normalized API error from a status code and the backend's own
    /// `detail` message, if it sent one.
    ///
    /// Well-known status codes map to fixed human-readable strings; unmapped
    /// codes pass the backend message through, falling back to a generic
    /// line when the body carried nothing usable.
    pub fn api(status_code: u16, backend_detail: Option<String>) -> Self {
        let detail = match status_code {
            401 => "Authentication required. Please check your credentials.".to_string(),
            403 => "You do not have permission to access this resource.".to_string(),
            404 => "The requested resource was not found.".to_string(),
            422 => backend_detail
                .unwrap_or_else(|| "The request could not be validated.".to_string()),
            429 => "Too many requests. Please slow down and try again.".to_string(),
            500 => "The server encountered an internal error.".to_string(),
            503 => "The service is temporarily unavailable. Please try again later.".to_string(),
            _ => backend_detail
                .unwrap_or_else(|| format!("Request failed with status {}", status_code)),
        };

        let error_type = match status_code {
            401 | 403 => "auth_error",
            404 => "not_found",
            422 => "validation_error",
            429 => "rate_limited",
            400..=499 => "client_error",
            500..=599 => "server_error",
            _ => "http_error",
        }
        .to_string();

        PulseError::Api {
            detail,
            status_code,
            error_type,
            timestamp: Utc::now(),
        }
    }

    /// Normalized numeric status for this error.
    ///
    /// Network-level failures (no response received) default to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            PulseError::Api { status_code, .. } => *status_code,
            _ => 500,
        }
    }

    /// Check if this error should trigger a retry.
    ///
    /// Client-caused statuses (400/401/403/404/422) are never retried:
    /// repeating the identical request cannot change the outcome. Transport
    /// failures, timeouts, and the remaining HTTP statuses (429, 5xx) are
    /// transient and worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            PulseError::Api { status_code, .. } => {
                !matches!(*status_code, 400 | 401 | 403 | 404 | 422)
            }
            PulseError::Network { .. } | PulseError::Timeout(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for PulseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PulseError::Timeout(NetworkConfig::REQUEST_TIMEOUT)
        } else {
            let cause = std::error::Error::source(&err).map(|s| s.to_string());
            PulseError::Network {
                message: err.to_string(),
                cause,
            }
        }
    }
}
