//! Analytics service: daily rollups, ranges, and trend series.

use super::Backend;
use crate::cache::cache_key;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{AnalyticsSummary, DailyAnalytics, SentimentTrendPoint, TopicTrend};
use crate::network::{fill_path, Query};
use chrono::NaiveDate;

const SUMMARY_KEY: &str = "analytics:summary";

const DEFAULT_TREND_DAYS: u32 = 30;
const DEFAULT_TOPIC_LIMIT: u32 = 10;

/// Typed façade over `/api/analytics/*`.
#[derive(Clone)]
pub struct AnalyticsService {
    backend: Backend,
}

impl AnalyticsService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn daily(&self, date: NaiveDate) -> Result<DailyAnalytics> {
        let date = date.format("%Y-%m-%d").to_string();
        let path = fill_path("/api/analytics/daily/:date", &[("date", &date)]);
        let key = cache_key("analytics:daily", &[("date".to_string(), date)]);
        self.backend
            .fetch_cached(&key, CacheTtl::ANALYTICS, &path, &Query::new())
            .await
    }

    pub async fn range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyAnalytics>> {
        let mut query = Query::new();
        query.push("start", start.format("%Y-%m-%d"));
        query.push("end", end.format("%Y-%m-%d"));
        let key = cache_key("analytics:range", query.pairs());
        self.backend
            .fetch_cached(&key, CacheTtl::ANALYTICS, "/api/analytics/range", &query)
            .await
    }

    pub async fn sentiment_trends(&self, days: Option<u32>) -> Result<Vec<SentimentTrendPoint>> {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS);
        let mut query = Query::new();
        query.push("days", days);
        let key = cache_key("analytics:sentiment-trends", query.pairs());
        self.backend
            .fetch_cached(
                &key,
                CacheTtl::ANALYTICS,
                "/api/analytics/sentiment-trends",
                &query,
            )
            .await
    }

    pub async fn topic_trends(
        &self,
        days: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<TopicTrend>> {
        let mut query = Query::new();
        query.push("days", days.unwrap_or(DEFAULT_TREND_DAYS));
        query.push("limit", limit.unwrap_or(DEFAULT_TOPIC_LIMIT));
        let key = cache_key("analytics:topic-trends", query.pairs());
        self.backend
            .fetch_cached(
                &key,
                CacheTtl::ANALYTICS,
                "/api/analytics/topic-trends",
                &query,
            )
            .await
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary> {
        self.backend
            .fetch_cached(
                SUMMARY_KEY,
                CacheTtl::ANALYTICS,
                "/api/analytics/summary",
                &Query::new(),
            )
            .await
    }
}
