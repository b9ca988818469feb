//! Cloud news service.

use super::Backend;
use crate::cache::cache_key;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{CloudNewsItem, ContentStats, ContentSummary, ScrapeReport};
use crate::network::Query;

const SUMMARY_KEY: &str = "cloud-news:summary";
const STATS_KEY: &str = "cloud-news:stats";

/// Filters for `/api/cloud-news/`.
#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub product_area: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl NewsFilter {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("product_area", self.product_area.as_deref());
        query.push_opt("limit", self.limit);
        query.push_opt("offset", self.offset);
        query
    }
}

/// Typed façade over `/api/cloud-news/*`.
#[derive(Clone)]
pub struct CloudNewsService {
    backend: Backend,
}

impl CloudNewsService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self, filter: &NewsFilter) -> Result<Vec<CloudNewsItem>> {
        let query = filter.to_query();
        let key = cache_key("cloud-news:list", query.pairs());
        self.backend
            .fetch_cached(&key, CacheTtl::CLOUD_NEWS, "/api/cloud-news/", &query)
            .await
    }

    pub async fn summary(&self) -> Result<ContentSummary> {
        self.backend
            .fetch_cached(
                SUMMARY_KEY,
                CacheTtl::CLOUD_NEWS,
                "/api/cloud-news/summary",
                &Query::new(),
            )
            .await
    }

    pub async fn stats(&self) -> Result<ContentStats> {
        self.backend
            .fetch_cached(
                STATS_KEY,
                CacheTtl::CLOUD_NEWS,
                "/api/cloud-news/stats/overview",
                &Query::new(),
            )
            .await
    }

    /// Trigger a scrape run. Issued once, never retried.
    pub async fn scrape(&self) -> Result<ScrapeReport> {
        self.backend.post("/api/cloud-news/scrape", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockTransport;
    use crate::services::test_support::backend_over;
    use std::sync::Arc;

    fn service_over(transport: Arc<MockTransport>) -> CloudNewsService {
        CloudNewsService::new(backend_over(transport))
    }

    #[tokio::test]
    async fn test_list_queries_product_area() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, "[]");
        let service = service_over(transport.clone());

        let filter = NewsFilter {
            product_area: Some("platform".into()),
            limit: Some(10),
            offset: Some(20),
        };
        service.list(&filter).await.unwrap();

        let url = &transport.requests()[0].url;
        assert!(url.contains("product_area=platform"));
        assert!(url.contains("limit=10"));
        assert!(url.contains("offset=20"));
    }

    #[tokio::test]
    async fn test_summary_cached_across_calls() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(200, r#"{"total": 3, "highlights": ["new editor"]}"#);
        let service = service_over(transport.clone());

        let first = service.summary().await.unwrap();
        let second = service.summary().await.unwrap();
        assert_eq!(first.total, 3);
        assert_eq!(second.highlights, vec!["new editor".to_string()]);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_scrape_failure_not_retried() {
        let transport = Arc::new(MockTransport::new());
        transport.reply(503, r#"{"detail": "scraper busy"}"#);
        let service = service_over(transport.clone());

        let err = service.scrape().await.unwrap_err();
        assert_eq!(err.status_code(), 503);
        assert_eq!(transport.calls(), 1);
    }
}
