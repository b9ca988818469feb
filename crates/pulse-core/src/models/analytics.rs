//! Analytics endpoint types.

use super::dashboard::TopicTrend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day rollup from `/api/analytics/daily/:date` and `/range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAnalytics {
    pub date: NaiveDate,
    pub post_count: u64,
    pub average_sentiment: f64,
    #[serde(default)]
    pub top_topics: Vec<String>,
}

/// One point of the sentiment trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTrendPoint {
    pub date: NaiveDate,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

/// Rollup from `/api/analytics/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_posts: u64,
    pub average_sentiment: f64,
    #[serde(default)]
    pub most_active_day: Option<NaiveDate>,
    #[serde(default)]
    pub trending_topics: Vec<TopicTrend>,
}
