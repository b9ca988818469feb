//! Typed records for backend responses.
//!
//! Plain serde structs, decoded at the HTTP wrapper. Optional fields use
//! `#[serde(default)]` so a backend that omits them does not break
//! decoding; a missing required field surfaces as a malformed-response
//! error instead of a silent `null`.

mod analytics;
mod dashboard;
mod forums;
mod post;
mod releases;
mod settings;

pub use analytics::{AnalyticsSummary, DailyAnalytics, SentimentTrendPoint};
pub use dashboard::{
    DashboardOverview, HealthScore, RefreshReport, SentimentBreakdown, SentimentPoint, TopicTrend,
};
pub use forums::{ForumActivity, ForumAnalytics, ForumOverview};
pub use post::{Category, Post, PostStats, SentimentLabel};
pub use releases::{CloudNewsItem, ContentStats, ContentSummary, ReleaseNote, ScrapeReport};
pub use settings::{BackendConfig, BackendStatus, MigrationReport};
