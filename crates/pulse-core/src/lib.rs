//! Pulse Dashboard - typed data-access layer for the community pulse backend.
//!
//! This crate wraps the backend REST API in typed services with a shared
//! request pipeline: normalized errors, linear-backoff retry for
//! recoverable failures, and a TTL response cache. It carries no UI; view
//! code consumes the services and tracks load cycles with
//! [`view::FetchState`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pulse_dashboard::PulseApi;
//!
//! #[tokio::main]
//! async fn main() -> pulse_dashboard::Result<()> {
//!     let api = PulseApi::from_env()?;
//!
//!     let snapshot = api.dashboard().snapshot().await?;
//!     println!("{} posts today", snapshot.overview.posts_today);
//!
//!     let posts = api.posts().list(&Default::default()).await?;
//!     println!("{} recent posts", posts.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod cancel;
pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use cache::TtlCache;
pub use cancel::{CancellationToken, CancelledError};
pub use error::{PulseError, Result};
pub use network::{ApiClient, RetryConfig};
pub use services::{
    AnalyticsService, CloudNewsService, DashboardService, ForumsService, NewsFilter, NotesFilter,
    PostFilter, PostsService, ReleaseNotesService, SettingsService,
};
pub use view::FetchState;

use services::Backend;

/// Entry point bundling every domain service over one shared client,
/// cache, and retry policy.
#[derive(Clone)]
pub struct PulseApi {
    dashboard: DashboardService,
    posts: PostsService,
    analytics: AnalyticsService,
    release_notes: ReleaseNotesService,
    cloud_news: CloudNewsService,
    forums: ForumsService,
    settings: SettingsService,
}

impl PulseApi {
    /// Build against an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(ApiClient::new(base_url)?))
    }

    /// Build against the base URL from the environment, falling back to
    /// the local development default.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_client(ApiClient::from_env()?))
    }

    /// Build over an already-configured client. Useful for injecting a
    /// custom transport or cancellation token.
    pub fn with_client(client: ApiClient) -> Self {
        let backend = Backend::new(client);
        Self {
            dashboard: DashboardService::new(backend.clone()),
            posts: PostsService::new(backend.clone()),
            analytics: AnalyticsService::new(backend.clone()),
            release_notes: ReleaseNotesService::new(backend.clone()),
            cloud_news: CloudNewsService::new(backend.clone()),
            forums: ForumsService::new(backend.clone()),
            settings: SettingsService::new(backend),
        }
    }

    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }

    pub fn posts(&self) -> &PostsService {
        &self.posts
    }

    pub fn analytics(&self) -> &AnalyticsService {
        &self.analytics
    }

    pub fn release_notes(&self) -> &ReleaseNotesService {
        &self.release_notes
    }

    pub fn cloud_news(&self) -> &CloudNewsService {
        &self.cloud_news
    }

    pub fn forums(&self) -> &ForumsService {
        &self.forums
    }

    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }
}
