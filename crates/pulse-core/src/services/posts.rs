//! Posts service: listing, lookup, and content search.

use super::Backend;
use crate::cache::cache_key;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{Category, Post, PostStats, SentimentLabel};
use crate::network::{fill_path, Query};

const STATS_KEY: &str = "posts:stats";
const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Filters for `/api/posts/`.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category: Option<Category>,
    pub sentiment: Option<SentimentLabel>,
    /// Tag filters; repeated in the query string, one `tag=` per element.
    pub tags: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PostFilter {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("category", self.category);
        query.push_opt("sentiment", self.sentiment);
        query.push_all("tag", &self.tags);
        query.push_opt("limit", self.limit);
        query.push_opt("offset", self.offset);
        query
    }
}

/// Typed façade over `/api/posts/*`.
#[derive(Clone)]
pub struct PostsService {
    backend: Backend,
}

impl PostsService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        let query = filter.to_query();
        let key = cache_key("posts:list", query.pairs());
        self.backend
            .fetch_cached(&key, CacheTtl::POSTS, "/api/posts/", &query)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Post> {
        let path = fill_path("/api/posts/:id", &[("id", id)]);
        let key = cache_key("posts:get", &[("id".to_string(), id.to_string())]);
        self.backend
            .fetch_cached(&key, CacheTtl::POSTS, &path, &Query::new())
            .await
    }

    /// Full-text search. Uncached: queries are too varied to be worth
    /// cache slots, but still retried since search is a plain GET.
    pub async fn search_by_content(&self, text: &str, limit: Option<u32>) -> Result<Vec<Post>> {
        let mut query = Query::new();
        query.push("q", text);
        query.push("limit", limit.unwrap_or(DEFAULT_SEARCH_LIMIT));
        self.backend
            .fetch("/api/posts/search/by-content", &query)
            .await
    }

    pub async fn stats_summary(&self) -> Result<PostStats> {
        self.backend
            .fetch_cached(
                STATS_KEY,
                CacheTtl::POST_STATS,
                "/api/posts/stats/summary",
                &Query::new(),
            )
            .await
    }
}
