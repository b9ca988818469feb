//! Release notes service.

use super::Backend;
use crate::cache::cache_key;
use crate::config::CacheTtl;
use crate::error::Result;
use crate::models::{ContentStats, ContentSummary, ReleaseNote, ScrapeReport};
use crate::network::Query;
use futures::join;
use tracing::warn;

const SUMMARY_KEY: &str = "release-notes:summary";
const STATS_KEY: &str = "release-notes:stats";

/// Filters for `/api/release-notes/`.
#[derive(Debug, Clone, Default)]
pub struct NotesFilter {
    pub product: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl NotesFilter {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("product", self.product.as_deref());
        query.push_opt("limit", self.limit);
        query.push_opt("offset", self.offset);
        query
    }
}

/// Combined stats + list fetch for the release-notes page.
///
/// Branches settle independently: a failed branch is recorded in `errors`
/// and does not cancel its sibling.
#[derive(Debug, Clone, Default)]
pub struct NotesPage {
    pub stats: Option<ContentStats>,
    pub notes: Vec<ReleaseNote>,
    pub errors: Vec<String>,
}

/// Typed façade over `/api/release-notes/*`.
#[derive(Clone)]
pub struct ReleaseNotesService {
    backend: Backend,
}

impl ReleaseNotesService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self, filter: &NotesFilter) -> Result<Vec<ReleaseNote>> {
        let query = filter.to_query();
        let key = cache_key("release-notes:list", query.pairs());
        self.backend
            .fetch_cached(&key, CacheTtl::RELEASE_NOTES, "/api/release-notes/", &query)
            .await
    }

    pub async fn summary(&self) -> Result<ContentSummary> {
        self.backend
            .fetch_cached(
                SUMMARY_KEY,
                CacheTtl::RELEASE_NOTES,
                "/api/release-notes/summary",
                &Query::new(),
            )
            .await
    }

    pub async fn stats(&self) -> Result<ContentStats> {
        self.backend
            .fetch_cached(
                STATS_KEY,
                CacheTtl::RELEASE_NOTES,
                "/api/release-notes/stats/overview",
                &Query::new(),
            )
            .await
    }

    /// Trigger a scrape run. Issued once, never retried.
    pub async fn scrape(&self) -> Result<ScrapeReport> {
        self.backend.post("/api/release-notes/scrape", None).await
    }

    /// Fetch stats and the note list concurrently, tolerating per-branch
    /// failure so the page can render whatever arrived.
    pub async fn page(&self, filter: &NotesFilter) -> NotesPage {
        let (stats, notes) = join!(self.stats(), self.list(filter));

        let mut page = NotesPage::default();
        match stats {
            Ok(stats) => page.stats = Some(stats),
            Err(e) => {
                warn!(error = %e, "release-notes stats branch failed");
                page.errors.push(e.to_string());
            }
        }
        match notes {
            Ok(notes) => page.notes = notes,
            Err(e) => {
                warn!(error = %e, "release-notes list branch failed");
                page.errors.push(e.to_string());
            }
        }
        page
    }
}
