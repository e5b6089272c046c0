//! Web search placeholder collector.

use chrono::Utc;
use osmon_core::{Engagement, RawRecord};

use super::{encode, Collector, CollectorSettings};
use crate::error::SentimentError;

const SOURCE: &str = "web_search";

/// `(template, kind)`; `{keyword}` is replaced with the tracked keyword.
const RESULTS: &[(&str, &str)] = &[
    ("Sample mention of {keyword} from web search", "search_result"),
    ("News: {keyword} Launches New Initiative", "article"),
    ("Blog Post: My Experience with {keyword}", "article"),
    ("Review: Is {keyword} Worth It?", "article"),
];

/// Generates web search hits and articles for each tracked keyword.
#[derive(Debug, Clone)]
pub struct WebSearchCollector {
    keywords: Vec<String>,
    max_results: usize,
}

impl WebSearchCollector {
    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            max_results: settings.max_results,
        }
    }

    fn results_for(&self, keyword: &str) -> Vec<RawRecord> {
        let encoded = encode(keyword);
        RESULTS
            .iter()
            .take(self.max_results)
            .enumerate()
            .map(|(i, &(template, kind))| {
                let text = template.replace("{keyword}", keyword);
                let record = RawRecord::new(text, SOURCE, Utc::now())
                    .with_metadata("keyword", keyword)
                    .with_metadata("domain", "example.com")
                    .with_metadata("type", kind);

                if i == 0 {
                    record
                        .with_url(format!("https://example.com/search?q={encoded}"))
                        .with_author("web_crawler")
                } else {
                    let n = i as u64;
                    record
                        .with_url(format!("https://example.com/{encoded}/article-{i}"))
                        .with_author(format!("Author {i}"))
                        .with_engagement(Engagement::new(30 * n, 10 * n, 8 * n))
                }
            })
            .collect()
    }
}

impl Collector for WebSearchCollector {
    fn platform(&self) -> &str {
        SOURCE
    }

    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError> {
        Ok(self
            .keywords
            .iter()
            .flat_map(|keyword| self.results_for(keyword))
            .collect())
    }
}
