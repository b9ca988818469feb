//! Forum-level activity types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity line for one forum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumActivity {
    pub name: String,
    pub post_count: u64,
    pub average_sentiment: f64,
}

/// Response of `/api/forums/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumOverview {
    pub total_posts: u64,
    #[serde(default)]
    pub forums: Vec<ForumActivity>,
}

/// Response of `/api/forums/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumAnalytics {
    #[serde(default)]
    pub most_active: Option<String>,
    #[serde(default)]
    pub busiest_day: Option<NaiveDate>,
    #[serde(default)]
    pub forums: Vec<ForumActivity>,
}
