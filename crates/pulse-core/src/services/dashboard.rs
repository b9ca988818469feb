//! Dashboard service: overview counters, recent activity, trends.

use super::Backend;
use crate::cache::cache_key;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{
    DashboardOverview, HealthScore, Post, RefreshReport, SentimentPoint, TopicTrend,
};
use crate::network::Query;
use futures::try_join;

const OVERVIEW_KEY: &str = "dashboard:overview";
const HEALTH_KEY: &str = "dashboard:health-score";

const DEFAULT_RECENT_LIMIT: u32 = 10;
const DEFAULT_TRENDING_LIMIT: u32 = 10;
const DEFAULT_TIMELINE_DAYS: u32 = 7;

fn recent_posts_key(limit: u32) -> String {
    cache_key(
        "dashboard:recent-posts",
        &[("limit".to_string(), limit.to_string())],
    )
}

fn trending_key(limit: u32) -> String {
    cache_key(
        "dashboard:trending-topics",
        &[("limit".to_string(), limit.to_string())],
    )
}

fn timeline_key(days: u32) -> String {
    cache_key(
        "dashboard:sentiment-timeline",
        &[("days".to_string(), days.to_string())],
    )
}

/// Everything the main dashboard view needs in one fetch.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub overview: DashboardOverview,
    pub recent_posts: Vec<Post>,
    pub trending_topics: Vec<TopicTrend>,
}

/// Typed façade over `/api/dashboard/*`.
#[derive(Clone)]
pub struct DashboardService {
    backend: Backend,
}

impl DashboardService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn overview(&self) -> Result<DashboardOverview> {
        self.backend
            .fetch_cached(
                OVERVIEW_KEY,
                CacheTtl::OVERVIEW,
                "/api/dashboard/overview",
                &Query::new(),
            )
            .await
    }

    pub async fn recent_posts(&self, limit: Option<u32>) -> Result<Vec<Post>> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let mut query = Query::new();
        query.push("limit", limit);
        self.backend
            .fetch_cached(
                &recent_posts_key(limit),
                CacheTtl::RECENT_POSTS,
                "/api/dashboard/recent-posts",
                &query,
            )
            .await
    }

    pub async fn trending_topics(&self, limit: Option<u32>) -> Result<Vec<TopicTrend>> {
        let limit = limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
        let mut query = Query::new();
        query.push("limit", limit);
        self.backend
            .fetch_cached(
                &trending_key(limit),
                CacheTtl::TRENDING_TOPICS,
                "/api/dashboard/trending-topics",
                &query,
            )
            .await
    }

    pub async fn sentiment_timeline(&self, days: Option<u32>) -> Result<Vec<SentimentPoint>> {
        let days = days.unwrap_or(DEFAULT_TIMELINE_DAYS);
        let mut query = Query::new();
        query.push("days", days);
        self.backend
            .fetch_cached(
                &timeline_key(days),
                CacheTtl::SENTIMENT_TIMELINE,
                "/api/dashboard/sentiment-timeline",
                &query,
            )
            .await
    }

    pub async fn health_score(&self) -> Result<HealthScore> {
        self.backend
            .fetch_cached(
                HEALTH_KEY,
                CacheTtl::HEALTH_SCORE,
                "/api/dashboard/health-score",
                &Query::new(),
            )
            .await
    }

    /// Fetch overview, recent posts, and trending topics concurrently.
    /// Fails on the first branch that errors; no ordering between branches.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot> {
        let (overview, recent_posts, trending_topics) = try_join!(
            self.overview(),
            self.recent_posts(None),
            self.trending_topics(None),
        )?;
        Ok(DashboardSnapshot {
            overview,
            recent_posts,
            trending_topics,
        })
    }

    /// Trigger a backend data refresh, then drop this service's known
    /// cache keys so the next reads see the refreshed data.
    ///
    /// Issued without retry: the scrape it triggers is not idempotent.
    pub async fn refresh_data(&self) -> Result<RefreshReport> {
        let report: RefreshReport = self
            .backend
            .post("/api/dashboard/refresh-data", None)
            .await?;
        self.backend.invalidate(&Self::known_cache_keys());
        Ok(report)
    }

    /// The fixed list of keys `refresh_data` clears. Parameterized reads
    /// outside the default limits keep their entries until TTL.
    fn known_cache_keys() -> Vec<String> {
        vec![
            OVERVIEW_KEY.to_string(),
            HEALTH_KEY.to_string(),
            recent_posts_key(DEFAULT_RECENT_LIMIT),
            trending_key(DEFAULT_TRENDING_LIMIT),
            timeline_key(DEFAULT_TIMELINE_DAYS),
        ]
    }
}
