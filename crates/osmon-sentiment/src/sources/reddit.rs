//! Reddit placeholder collector.
//!
//! Like the twitter collector, availability follows the injected app
//! credentials while demo posts are generated either way.

use chrono::Utc;
use osmon_core::text::extract_mentions;
use osmon_core::{Engagement, RawRecord};

use super::{Collector, CollectorSettings, RedditCredentials};
use crate::error::SentimentError;

const SOURCE: &str = "reddit";

const POSTS: &[&str] = &[
    "Discussion: What do you think about {keyword}?",
    "PSA: {keyword} has some great new features!",
    "Looking for feedback on {keyword}, cc @maintainers",
    "Has anyone else tried {keyword}? Thoughts?",
];

#[derive(Debug, Clone)]
pub struct RedditCollector {
    keywords: Vec<String>,
    max_results: usize,
    credentials: Option<RedditCredentials>,
}

impl RedditCollector {
    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            max_results: settings.max_results,
            credentials: settings.reddit.clone(),
        }
    }
}

impl Collector for RedditCollector {
    fn platform(&self) -> &str {
        SOURCE
    }

    fn is_available(&self) -> bool {
        self.credentials.is_some()
    }

    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError> {
        if !self.is_available() {
            tracing::debug!("reddit credentials not configured; generating demo posts");
        }
        let mut records = Vec::new();
        for (keyword_idx, keyword) in self.keywords.iter().enumerate() {
            for (i, template) in POSTS.iter().take(self.max_results).enumerate() {
                let n = i as u64 + 1;
                let post_id = 100_000 + keyword_idx * 100 + i;
                let text = template.replace("{keyword}", keyword);
                let handles = extract_mentions(&text);
                records.push(
                    RawRecord::new(text, SOURCE, Utc::now())
                        .with_author(format!("u/redditor{n}"))
                        .with_url(format!(
                            "https://reddit.com/r/technology/comments/{post_id}"
                        ))
                        .with_engagement(Engagement::new(50 * n, 0, 15 * n))
                        .with_metadata("subreddit", "r/technology")
                        .with_metadata("awards", i)
                        .with_metadata("mentions", handles)
                        .with_metadata("keyword", keyword.as_str()),
                );
            }
        }
        Ok(records)
    }
}
