//! Forum activity service.

use super::Backend;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{ForumAnalytics, ForumOverview};
use crate::network::Query;

const OVERVIEW_KEY: &str = "forums:overview";
const ANALYTICS_KEY: &str = "forums:analytics";

/// Typed façade over `/api/forums/*`.
#[derive(Clone)]
pub struct ForumsService {
    backend: Backend,
}

impl ForumsService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn overview(&self) -> Result<ForumOverview> {
        self.backend
            .fetch_cached(
                OVERVIEW_KEY,
                CacheTtl::FORUMS,
                "/api/forums/overview",
                &Query::new(),
            )
            .await
    }

    pub async fn analytics(&self) -> Result<ForumAnalytics> {
        self.backend
            .fetch_cached(
                ANALYTICS_KEY,
                CacheTtl::FORUMS,
                "/api/forums/analytics",
                &Query::new(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockTransport;
    use crate::services::test_support::backend_over;
    use std::sync::Arc;

    const OVERVIEW_BODY: &str = r#"{
        "total_posts": 120,
        "forums": [
            {"name": "jira", "post_count": 80, "average_sentiment": 0.2},
            {"name": "confluence", "post_count": 40, "average_sentiment": -0.1}
        ]
    }"#;

    #[tokio::test]
    async fn test_overview_decodes_and_caches() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, OVERVIEW_BODY);
        let service = ForumsService::new(backend_over(transport.clone()));

        let overview = service.overview().await.unwrap();
        assert_eq!(overview.total_posts, 120);
        assert_eq!(overview.forums.len(), 2);
        assert_eq!(overview.forums[0].name, "jira");

        service.overview().await.unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_overview_and_analytics_cache_separately() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, OVERVIEW_BODY);
        transport.reply(200, r#"{"most_active": "jira", "busiest_day": "2026-08-24", "forums": []}"#);
        let service = ForumsService::new(backend_over(transport.clone()));

        service.overview().await.unwrap();
        let analytics = service.analytics().await.unwrap();
        assert_eq!(analytics.most_active.as_deref(), Some("jira"));
        assert_eq!(transport.calls(), 2);
    }
}
