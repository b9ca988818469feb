//! Forum post records and their enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product forum a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jira,
    Jsm,
    Confluence,
    Rovo,
    Announcements,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jira => "jira",
            Category::Jsm => "jsm",
            Category::Confluence => "confluence",
            Category::Rovo => "rovo",
            Category::Announcements => "announcements",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier verdict for a post's sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A community-forum post as returned by the backend.
///
/// Immutable once fetched; the client never writes posts back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub author: String,
    pub category: Category,
    pub url: String,
    pub date: DateTime<Utc>,
    /// Sentiment score in −1..1, absent for unscored posts.
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_label: Option<SentimentLabel>,
}

/// Aggregate counters from `/api/posts/stats/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStats {
    pub total_posts: u64,
    #[serde(default)]
    pub posts_today: u64,
    #[serde(default)]
    pub by_category: std::collections::HashMap<String, u64>,
}
