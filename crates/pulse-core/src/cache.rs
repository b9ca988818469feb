//! In-process TTL cache for read-mostly endpoint responses.
//!
//! Entries expire individually; an expired entry is deleted by the read
//! that discovers it, never by a background sweeper. The cache is an
//! explicit, constructible object so tests and embedders can hold
//! isolated instances instead of sharing module-level state.

use crate::config::CacheTtl;
use crate::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Key-value store with per-entry time-to-live.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    default_ttl: Duration,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TtlCache<V> {
    /// Create a cache with the standard 5-minute default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(CacheTtl::DEFAULT)
    }

    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    // A poisoned lock only means another thread panicked mid-operation;
    // the map itself is still structurally valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a value under the default TTL.
    pub fn insert(&self, key: &str, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with an explicit TTL.
    pub fn insert_with_ttl(&self, key: &str, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.lock().insert(key.to_string(), entry);
    }

    /// Remove a single key.
    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of stored entries, expired ones included until a read
    /// evicts them.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<V: Clone> TtlCache<V> {
    /// Look up a key, returning `None` for missing or expired entries.
    ///
    /// An expired entry is removed by this read.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                debug!(key, "evicting expired cache entry");
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Return the cached value for `key` if fresh, otherwise await `fetch`,
    /// store its result, and return it.
    ///
    /// Not single-flight: two concurrent misses for the same key will both
    /// run `fetch`. The later store wins, which is harmless for the
    /// read-mostly data cached here.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, ttl: Duration, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(hit) = self.get(key) {
            debug!(key, "cache hit");
            return Ok(hit);
        }
        debug!(key, "cache miss");
        let value = fetch().await?;
        self.insert_with_ttl(key, value.clone(), ttl);
        Ok(value)
    }
}

/// Build a deterministic cache key from a namespace and request parameters.
///
/// Parameterless lookups use the bare namespace; parameterized lookups
/// append the serialized pairs. Callers own key uniqueness — there is no
/// collision detection.
pub fn cache_key(namespace: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return namespace.to_string();
    }
    let serialized = serde_json::to_string(params).unwrap_or_default();
    format!("{}:{}", namespace, serialized)
}
