//! Release note and cloud news records.
//!
//! Both groups share the fetch-and-render lifecycle: product metadata plus
//! optional AI-generated summary fields, read-only on the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product release note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseNote {
    pub id: String,
    pub product: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Backend-generated condensed summary, absent until summarization runs.
    #[serde(default)]
    pub ai_summary: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// A cloud platform news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudNewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub product_area: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Counters from the `/stats/overview` endpoints, shared by both groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStats {
    pub total: u64,
    #[serde(default)]
    pub by_product: HashMap<String, u64>,
    #[serde(default)]
    pub latest_published_at: Option<DateTime<Utc>>,
}

/// Condensed view from the `/summary` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    pub total: u64,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
}

/// Acknowledgement of a `/scrape` trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub started: bool,
    #[serde(default)]
    pub scraped: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}
