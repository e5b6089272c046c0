//! Twitter/X placeholder collector.
//!
//! Reports itself available only when API credentials were injected, but
//! generates demo posts either way.

use chrono::Utc;
use osmon_core::text::{extract_hashtags, extract_mentions};
use osmon_core::{Engagement, RawRecord};

use super::{Collector, CollectorSettings, TwitterCredentials};
use crate::error::SentimentError;

const SOURCE: &str = "twitter";

const POSTS: &[&str] = &[
    "Just tried {keyword} and it's amazing! #tech #innovation",
    "Not impressed with {keyword}. Expected more.",
    "Looking for alternatives to {keyword}. Any suggestions?",
    "Great experience with {keyword} today! Highly recommend.",
    "{keyword} is trending right now! Check it out @techdaily",
];

#[derive(Debug, Clone)]
pub struct TwitterCollector {
    keywords: Vec<String>,
    max_results: usize,
    credentials: Option<TwitterCredentials>,
}

impl TwitterCollector {
    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            max_results: settings.max_results,
            credentials: settings.twitter.clone(),
        }
    }

    fn posts_for(&self, keyword_idx: usize, keyword: &str) -> Vec<RawRecord> {
        POSTS
            .iter()
            .take(self.max_results)
            .enumerate()
            .map(|(i, template)| {
                let text = template.replace("{keyword}", keyword);
                let n = i as u64 + 1;
                let status_id = 1_000_000 + keyword_idx * 100 + i;
                let hashtags = extract_hashtags(&text);
                let handles = extract_mentions(&text);
                RawRecord::new(text, SOURCE, Utc::now())
                    .with_author(format!("@user{n}"))
                    .with_url(format!("https://twitter.com/user{n}/status/{status_id}"))
                    .with_engagement(Engagement::new(10 * n, 5 * n, 2 * n))
                    .with_metadata("verified", i % 2 == 0)
                    .with_metadata("followers", 1000 * n)
                    .with_metadata("hashtags", hashtags)
                    .with_metadata("mentions", handles)
                    .with_metadata("keyword", keyword)
            })
            .collect()
    }
}

impl Collector for TwitterCollector {
    fn platform(&self) -> &str {
        SOURCE
    }

    fn is_available(&self) -> bool {
        self.credentials.is_some()
    }

    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError> {
        if !self.is_available() {
            tracing::debug!("twitter credentials not configured; generating demo posts");
        }
        Ok(self
            .keywords
            .iter()
            .enumerate()
            .flat_map(|(idx, keyword)| self.posts_for(idx, keyword))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(max_results: usize) -> CollectorSettings {
        CollectorSettings::new(vec!["rust".into(), "ai".into()], max_results)
    }

    #[test]
    fn availability_follows_credentials() {
        assert!(!TwitterCollector::new(&settings(5)).is_available());

        let with_creds = settings(5).with_twitter(Some(TwitterCredentials {
            api_key: "k".into(),
            api_secret: "s".into(),
        }));
        assert!(TwitterCollector::new(&with_creds).is_available());
    }

    #[test]
    fn generates_demo_posts_without_credentials() {
        let records = TwitterCollector::new(&settings(10)).collect().unwrap();
        assert_eq!(records.len(), POSTS.len() * 2);
        assert_eq!(records[0].author, "@user1");
        assert_eq!(records[0].engagement, Engagement::new(10, 5, 2));
        assert_eq!(
            records[0].metadata["hashtags"],
            serde_json::json!(["#tech", "#innovation"])
        );
    }

    #[test]
    fn handles_in_post_text_are_recorded() {
        let records = TwitterCollector::new(&settings(10)).collect().unwrap();
        assert_eq!(records[4].metadata["mentions"], serde_json::json!(["@techdaily"]));
        assert_eq!(records[0].metadata["mentions"], serde_json::json!([]));
    }

    #[test]
    fn status_urls_differ_across_keywords() {
        let records = TwitterCollector::new(&settings(1)).collect().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].url, records[1].url);
    }
}
