//! Client-side aggregations over fetched posts.
//!
//! These run on data already in hand; nothing here talks to the backend.

use crate::models::{Category, Post, SentimentBreakdown, SentimentLabel};
use std::collections::HashMap;

/// Per-author activity derived from a post list.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorActivity {
    pub author: String,
    pub post_count: usize,
    /// Mean of the scored posts only; `None` when the author has no scores.
    pub average_sentiment: Option<f64>,
}

/// Rank authors by post count, most active first. Ties break by author
/// name so the ordering is stable across refreshes.
pub fn author_leaderboard(posts: &[Post], top: usize) -> Vec<AuthorActivity> {
    let mut by_author: HashMap<&str, (usize, Vec<f64>)> = HashMap::new();
    for post in posts {
        let entry = by_author.entry(post.author.as_str()).or_default();
        entry.0 += 1;
        if let Some(score) = post.sentiment_score {
            entry.1.push(score);
        }
    }

    let mut ranked: Vec<AuthorActivity> = by_author
        .into_iter()
        .map(|(author, (post_count, scores))| AuthorActivity {
            author: author.to_string(),
            post_count,
            average_sentiment: if scores.is_empty() {
                None
            } else {
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            },
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.post_count
            .cmp(&a.post_count)
            .then_with(|| a.author.cmp(&b.author))
    });
    ranked.truncate(top);
    ranked
}

/// Count posts per sentiment label. Unlabeled posts count as neutral.
pub fn sentiment_distribution(posts: &[Post]) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();
    for post in posts {
        match post.sentiment_label {
            Some(SentimentLabel::Positive) => breakdown.positive += 1,
            Some(SentimentLabel::Negative) => breakdown.negative += 1,
            Some(SentimentLabel::Neutral) | None => breakdown.neutral += 1,
        }
    }
    breakdown
}

/// Count posts per category, largest first (ties by category name).
pub fn category_breakdown(posts: &[Post]) -> Vec<(Category, usize)> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for post in posts {
        *counts.entry(post.category).or_default() += 1;
    }
    let mut ranked: Vec<(Category, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    ranked
}

/// Percentage change from `previous` to `current`.
///
/// A zero baseline yields 0.0 when nothing changed and 100.0 when activity
/// appeared from nothing, avoiding a division by zero.
pub fn growth_rate(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return if current == 0 { 0.0 } else { 100.0 };
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(author: &str, category: Category, score: Option<f64>, label: Option<SentimentLabel>) -> Post {
        Post {
            id: "p-1".into(),
            title: "title".into(),
            excerpt: None,
            author: author.into(),
            category,
            url: "https://community.example/p/1".into(),
            date: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
            sentiment_score: score,
            sentiment_label: label,
        }
    }

    #[test]
    fn test_leaderboard_ranks_by_count_then_name() {
        let posts = vec![
            post("beth", Category::Jira, Some(0.4), None),
            post("beth", Category::Jira, Some(0.2), None),
            post("adam", Category::Jsm, None, None),
            post("adam", Category::Jsm, None, None),
            post("zoe", Category::Rovo, Some(-0.5), None),
        ];

        let ranked = author_leaderboard(&posts, 10);
        assert_eq!(ranked.len(), 3);
        // adam and beth tie at 2 posts; name breaks the tie.
        assert_eq!(ranked[0].author, "adam");
        assert_eq!(ranked[0].average_sentiment, None);
        assert_eq!(ranked[1].author, "beth");
        assert!((ranked[1].average_sentiment.unwrap() - 0.3).abs() < 1e-9);
        assert_eq!(ranked[2].author, "zoe");
    }

    #[test]
    fn test_leaderboard_truncates_to_top() {
        let posts = vec![
            post("a", Category::Jira, None, None),
            post("b", Category::Jira, None, None),
            post("c", Category::Jira, None, None),
        ];
        assert_eq!(author_leaderboard(&posts, 2).len(), 2);
    }

    #[test]
    fn test_sentiment_distribution_defaults_to_neutral() {
        let posts = vec![
            post("a", Category::Jira, None, Some(SentimentLabel::Positive)),
            post("b", Category::Jira, None, Some(SentimentLabel::Negative)),
            post("c", Category::Jira, None, None),
        ];
        let breakdown = sentiment_distribution(&posts);
        assert_eq!(breakdown.positive, 1);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 1);
        assert_eq!(breakdown.total(), 3);
    }

    #[test]
    fn test_category_breakdown_orders_by_count() {
        let posts = vec![
            post("a", Category::Confluence, None, None),
            post("b", Category::Jira, None, None),
            post("c", Category::Jira, None, None),
        ];
        let ranked = category_breakdown(&posts);
        assert_eq!(ranked[0], (Category::Jira, 2));
        assert_eq!(ranked[1], (Category::Confluence, 1));
    }

    #[test]
    fn test_growth_rate_handles_zero_baseline() {
        assert_eq!(growth_rate(0, 0), 0.0);
        assert_eq!(growth_rate(5, 0), 100.0);
        assert_eq!(growth_rate(150, 100), 50.0);
        assert_eq!(growth_rate(50, 100), -50.0);
    }
}
