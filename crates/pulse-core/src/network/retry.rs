//! Retry helper with linear backoff.
//!
//! Wraps a single async operation with a bounded number of attempts.
//! Client-caused errors short-circuit immediately; everything else waits
//! `base_delay * attempt` between tries. There is deliberately no jitter,
//! no circuit breaker, and no state shared across calls — the backend is a
//! single first-party service, not a fleet worth load-shaping against.

use crate::config::NetworkConfig;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay unit for the linear backoff.
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: NetworkConfig::MAX_RETRIES,
            base_delay: NetworkConfig::RETRY_BASE_DELAY,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Delay after the given failed attempt (0-indexed): linear in the
    /// attempt number, so 1x, 2x, 3x the base delay.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * (attempt + 1)
    }
}

/// Statistics about a retry operation.
#[derive(Debug, Clone, Default)]
pub struct RetryStats {
    /// Number of attempts made.
    pub attempts: u32,
    /// Total backoff delay accumulated.
    pub total_delay: Duration,
    /// Whether the operation ultimately succeeded.
    pub success: bool,
    /// Last error message if the operation failed at least once.
    pub last_error: Option<String>,
}

/// Retry an async operation with linear backoff.
///
/// `should_retry` decides whether an error is worth another attempt; when
/// it returns false the error is returned immediately. The final attempt's
/// error is always returned to the caller — failures are never swallowed.
pub async fn retry_async<F, Fut, T, E>(
    config: &RetryConfig,
    mut operation: F,
    should_retry: impl Fn(&E) -> bool,
) -> (Result<T, E>, RetryStats)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut stats = RetryStats::default();

    for attempt in 0..config.max_attempts {
        stats.attempts = attempt + 1;

        match operation().await {
            Ok(value) => {
                stats.success = true;
                if attempt > 0 {
                    debug!(attempts = attempt + 1, "operation succeeded after retry");
                }
                return (Ok(value), stats);
            }
            Err(e) => {
                stats.last_error = Some(e.to_string());

                if !should_retry(&e) {
                    debug!(error = %e, "error is not retryable");
                    return (Err(e), stats);
                }

                if attempt + 1 >= config.max_attempts {
                    warn!(
                        attempts = config.max_attempts,
                        error = %e,
                        "all retry attempts exhausted"
                    );
                    return (Err(e), stats);
                }

                let delay = config.delay_after(attempt);
                stats.total_delay += delay;
                warn!(
                    attempt = attempt + 1,
                    max = config.max_attempts,
                    ?delay,
                    error = %e,
                    "attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }

    unreachable!("retry loop always returns from within")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PulseError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_config(max_attempts: u32) -> RetryConfig {
        RetryConfig::new()
            .with_max_attempts(max_attempts)
            .with_base_delay(Duration::from_millis(10))
    }

    #[test]
    fn test_linear_delay_schedule() {
        let config = RetryConfig::new().with_base_delay(Duration::from_secs(1));
        assert_eq!(config.delay_after(0), Duration::from_secs(1));
        assert_eq!(config.delay_after(1), Duration::from_secs(2));
        assert_eq!(config.delay_after(2), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_client_error_short_circuits() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = calls.clone();

        let (result, stats) = retry_async(
            &fast_config(3),
            || {
                let calls = calls_clone.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(PulseError::api(404, None))
                }
            },
            PulseError::is_retryable,
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(stats.attempts, 1);
        assert_eq!(result.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_retryable_error_exhausts_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = calls.clone();

        let (result, stats) = retry_async(
            &fast_config(3),
            || {
                let calls = calls_clone.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(PulseError::api(500, None))
                }
            },
            PulseError::is_retryable,
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(stats.attempts, 3);
        assert!(!stats.success);
        assert_eq!(result.unwrap_err().status_code(), 500);
    }

    #[tokio::test]
    async fn test_success_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = calls.clone();

        let (result, stats) = retry_async(
            &fast_config(3),
            || {
                let calls = calls_clone.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    if n < 2 {
                        Err(PulseError::api(503, None))
                    } else {
                        Ok(42)
                    }
                }
            },
            PulseError::is_retryable,
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(stats.attempts, 3);
        assert!(stats.success);
    }

    #[tokio::test]
    async fn test_first_try_success_records_no_error() {
        let (result, stats) = retry_async(
            &fast_config(3),
            || async { Ok::<_, PulseError>("fine") },
            PulseError::is_retryable,
        )
        .await;

        assert_eq!(result.unwrap(), "fine");
        assert_eq!(stats.attempts, 1);
        assert!(stats.last_error.is_none());
    }
}
