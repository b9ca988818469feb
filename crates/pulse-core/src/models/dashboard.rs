//! Dashboard aggregate types.
//!
//! All of these are recomputed server-side; the client only reads them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Top-of-dashboard counters from `/api/dashboard/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub posts_today: u64,
    pub posts_this_week: u64,
    /// Composite community-health score in 0..1.
    pub health_score: f64,
    pub sentiment_breakdown: SentimentBreakdown,
    #[serde(default)]
    pub most_active_forum: Option<String>,
    #[serde(default)]
    pub top_issues: Vec<String>,
}

/// Post counts per sentiment class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentBreakdown {
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

/// One point of the sentiment timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: NaiveDate,
    pub average_sentiment: f64,
    pub post_count: u64,
}

/// A topic the backend flagged as trending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
    pub topic: String,
    pub mentions: u64,
    pub average_sentiment: f64,
    /// 0..1, higher means hotter.
    pub trending_score: f64,
    pub last_seen: DateTime<Utc>,
}

/// Standalone health score from `/api/dashboard/health-score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: f64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Acknowledgement of a `/api/dashboard/refresh-data` trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    pub started: bool,
    #[serde(default)]
    pub message: Option<String>,
}
