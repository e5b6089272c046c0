//! Combined social-media collector: Twitter and Reddit together.

use osmon_core::RawRecord;

use super::{Collector, CollectorSettings, RedditCollector, TwitterCollector};
use crate::error::SentimentError;

pub struct SocialCollector {
    platforms: Vec<Box<dyn Collector>>,
}

impl SocialCollector {
    #[must_use]
    pub fn new(settings: &CollectorSettings) -> Self {
        Self {
            platforms: vec![
                Box::new(TwitterCollector::new(settings)),
                Box::new(RedditCollector::new(settings)),
            ],
        }
    }
}

impl Collector for SocialCollector {
    fn platform(&self) -> &str {
        "social"
    }

    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError> {
        let mut records = Vec::new();
        for platform in &self.platforms {
            records.extend(platform.collect()?);
        }
        Ok(records)
    }
}
