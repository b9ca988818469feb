//! Fetch-state tracking for view code.
//!
//! Views hold a [`FetchState`] per data source and drive it through the
//! same cycle everywhere: [`FetchState::begin`] before the request, then
//! [`FetchState::resolve`] (or [`FetchState::resolve_with_fallback`]) with
//! the outcome. Placeholder substitution is always explicit and always
//! flagged, so rendered fallback data can never be mistaken for live data.

use crate::error::Result;

/// Lifecycle of one fetched piece of view data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// No request has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Data is available. `placeholder` is true when the data came from a
    /// fallback rather than the backend.
    Ready { data: T, placeholder: bool },
    /// The request failed and no fallback was supplied.
    Failed { message: String },
}

impl<T> FetchState<T> {
    /// Transition to `Loading`, dropping any previous data or error.
    pub fn begin(&mut self) {
        *self = FetchState::Loading;
    }

    /// Settle with the fetch outcome: live data on success, a failure
    /// message otherwise.
    pub fn resolve(&mut self, outcome: Result<T>) {
        *self = match outcome {
            Ok(data) => FetchState::Ready {
                data,
                placeholder: false,
            },
            Err(e) => FetchState::Failed {
                message: e.to_string(),
            },
        };
    }

    /// Settle with the fetch outcome, substituting `fallback` on failure.
    /// The substituted data is flagged as a placeholder.
    pub fn resolve_with_fallback(&mut self, outcome: Result<T>, fallback: T) {
        *self = match outcome {
            Ok(data) => FetchState::Ready {
                data,
                placeholder: false,
            },
            Err(_) => FetchState::Ready {
                data: fallback,
                placeholder: true,
            },
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FetchState::Ready { placeholder: true, .. })
    }

    /// The settled data, live or placeholder.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The failure message, when the state is `Failed`.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
