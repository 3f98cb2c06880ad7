//! News feed: a static item list with tag and free-text filtering.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The news feed, newest first.
#[derive(Debug, Clone, Default)]
pub struct NewsFeed {
    items: Vec<NewsItem>,
}

impl NewsFeed {
    #[must_use]
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Every distinct tag in the feed, sorted, deduplicated
    /// case-insensitively. First spelling wins.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| &item.tags)
            .unique_by(|tag| tag.to_lowercase())
            .cloned()
            .sorted_by_key(|tag| tag.to_lowercase())
            .collect()
    }

    /// Items carrying a tag (case-insensitive exact match). An empty tag
    /// selects everything.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&NewsItem> {
        if tag.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Free-text filter over title and summary, case-insensitive substring.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&NewsItem> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.summary.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> NewsFeed {
        NewsFeed::new(vec![
            NewsItem {
                id: "n1".to_string(),
                title: "SaaS Valuations Rebound in Q3".to_string(),
                source: "Deal Wire".to_string(),
                date: "2023-10-02".to_string(),
                summary: "Median multiples recover across vertical software.".to_string(),
                tags: vec!["SaaS".to_string(), "Valuations".to_string()],
            },
            NewsItem {
                id: "n2".to_string(),
                title: "Family Offices Step Up Direct Deals".to_string(),
                source: "PE Daily".to_string(),
                date: "2023-10-01".to_string(),
                summary: "Allocators bypass funds for lower-middle-market buyouts.".to_string(),
                tags: vec!["Family Office".to_string(), "Buyouts".to_string()],
            },
        ])
    }

    #[test]
    fn test_by_tag_case_insensitive_exact() {
        let feed = feed();
        assert_eq!(feed.by_tag("saas").len(), 1);
        assert_eq!(feed.by_tag("family office").len(), 1);
        // Substring of a tag is not a tag match.
        assert!(feed.by_tag("family").is_empty());
        // Empty tag selects everything.
        assert_eq!(feed.by_tag("").len(), 2);
    }

    #[test]
    fn test_search_spans_title_and_summary() {
        let feed = feed();
        assert_eq!(feed.search("REBOUND").len(), 1);
        assert_eq!(feed.search("buyouts").len(), 1);
        assert_eq!(feed.search("").len(), 2);
        assert!(feed.search("crypto").is_empty());
    }

    #[test]
    fn test_tags_unique_sorted() {
        let feed = feed();
        assert_eq!(
            feed.tags(),
            vec!["Buyouts", "Family Office", "SaaS", "Valuations"]
        );
    }
}
