//! News placeholder collector.

use chrono::Utc;
use osmon_core::RawRecord;

use super::{encode, Collector, CollectorSettings};
use crate::error::SentimentError;

const SOURCE: &str = "news";

const HEADLINES: &[(&str, &str)] = &[
    ("Breaking news about {keyword}", "general"),
    ("{keyword} announces quarterly results", "business"),
    ("Analysts weigh in on the future of {keyword}", "analysis"),
];

#[derive(Debug, Clone)]
pub struct NewsCollector {
    keywords: Vec<String>,
    max_results: usize,
}

impl NewsCollector {
    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            keywords: settings.keywords.clone(),
            max_results: settings.max_results,
        }
    }
}

impl Collector for NewsCollector {
    fn platform(&self) -> &str {
        SOURCE
    }

    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError> {
        let mut records = Vec::new();
        for keyword in &self.keywords {
            let encoded = encode(keyword);
            for (i, &(template, category)) in
                HEADLINES.iter().take(self.max_results).enumerate()
            {
                records.push(
                    RawRecord::new(template.replace("{keyword}", keyword), SOURCE, Utc::now())
                        .with_url(format!("https://example.com/news/{encoded}/{}", i + 1))
                        .with_author("News Source")
                        .with_metadata("category", category),
                );
            }
        }
        Ok(records)
    }
}
