//! Cancellation token for in-flight requests.
//!
//! A view that navigates away hands its token to `cancel()`; the HTTP
//! wrapper checks the token before dispatch and again when the response
//! lands, so late responses are dropped as [`PulseError::Cancelled`]
//! instead of resolving into torn-down state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token for cooperative cancellation of in-flight fetches.
///
/// Clones share state: cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation. All clones observe it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Create a token observing the same cancellation flag. Useful for
    /// handing to sub-operations that should stop with their parent.
    pub fn child_token(&self) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Return an error if cancellation has been requested.
    pub fn check(&self) -> Result<(), CancelledError> {
        if self.is_cancelled() {
            Err(CancelledError)
        } else {
            Ok(())
        }
    }
}

/// Error returned when an operation observes a cancelled token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelledError;

impl std::fmt::Display for CancelledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation was cancelled")
    }
}

impl std::error::Error for CancelledError {}

impl From<CancelledError> for crate::error::PulseError {
    fn from(_: CancelledError) -> Self {
        crate::error::PulseError::Cancelled
    }
}
