//! Mention collectors and the platform factory.
//!
//! Every collector here is a placeholder generator: it builds plausible raw
//! records from the tracked keywords without touching the network.

mod news;
mod reddit;
mod social;
mod twitter;
mod web;

pub use news::NewsCollector;
pub use reddit::RedditCollector;
pub use social::SocialCollector;
pub use twitter::TwitterCollector;
pub use web::WebSearchCollector;

use std::collections::HashSet;

use osmon_core::RawRecord;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::SentimentError;

/// A source of raw mention records.
pub trait Collector {
    /// Identifier of the platform this collector reads from.
    fn platform(&self) -> &str;

    /// Whether the collector is configured to reach its real backend.
    fn is_available(&self) -> bool {
        true
    }

    /// Collect raw records for the keywords the collector was built with.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Collector`] if the source cannot be read.
    fn collect(&self) -> Result<Vec<RawRecord>, SentimentError>;
}

#[derive(Clone, PartialEq, Eq)]
pub struct TwitterCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("api_key", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &"[redacted]")
            .field("client_secret", &"[redacted]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Everything a collector needs at construction.
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub keywords: Vec<String>,
    /// Cap on records generated per keyword.
    pub max_results: usize,
    pub twitter: Option<TwitterCredentials>,
    pub reddit: Option<RedditCredentials>,
}

impl CollectorSettings {
    #[must_use]
    pub fn new(keywords: Vec<String>, max_results: usize) -> Self {
        Self {
            keywords,
            max_results,
            twitter: None,
            reddit: None,
        }
    }

    #[must_use]
    pub fn with_twitter(mut self, credentials: Option<TwitterCredentials>) -> Self {
        self.twitter = credentials;
        self
    }

    #[must_use]
    pub fn with_reddit(mut self, credentials: Option<RedditCredentials>) -> Self {
        self.reddit = credentials;
        self
    }
}

/// Platform keys accepted by [`collector_for`].
pub const SUPPORTED_PLATFORMS: &[&str] = &["web", "news", "social", "twitter", "reddit"];

/// Build the collector for a platform key (case-insensitive).
///
/// # Errors
///
/// Returns [`SentimentError::UnsupportedPlatform`] for unknown keys.
pub fn collector_for(
    platform: &str,
    settings: &CollectorSettings,
) -> Result<Box<dyn Collector>, SentimentError> {
    let collector: Box<dyn Collector> = match platform.trim().to_lowercase().as_str() {
        "web" | "web_search" => Box::new(WebSearchCollector::new(settings)),
        "news" => Box::new(NewsCollector::new(settings)),
        "social" => Box::new(SocialCollector::new(settings)),
        "twitter" => Box::new(TwitterCollector::new(settings)),
        "reddit" => Box::new(RedditCollector::new(settings)),
        _ => return Err(SentimentError::UnsupportedPlatform(platform.to_string())),
    };
    Ok(collector)
}

/// Collect raw records from every requested platform, in order.
///
/// All platform keys are resolved before anything is collected, so an unknown
/// key fails the whole call. Individual collector failures are logged and
/// skipped. Records sharing a non-empty URL are kept only once.
///
/// # Errors
///
/// Returns [`SentimentError::UnsupportedPlatform`] if any key is unknown.
pub fn collect_from<S: AsRef<str>>(
    platforms: &[S],
    settings: &CollectorSettings,
) -> Result<Vec<RawRecord>, SentimentError> {
    let collectors = platforms
        .iter()
        .map(|p| collector_for(p.as_ref(), settings))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::new();
    for collector in &collectors {
        match collector.collect() {
            Ok(batch) => {
                tracing::debug!(
                    platform = collector.platform(),
                    count = batch.len(),
                    "collected raw records"
                );
                records.extend(batch);
            }
            Err(e) => {
                tracing::warn!(
                    platform = collector.platform(),
                    error = %e,
                    "collector failed; skipping"
                );
            }
        }
    }

    let mut seen_urls: HashSet<String> = HashSet::new();
    records.retain(|r| r.url.is_empty() || seen_urls.insert(r.url.clone()));

    Ok(records)
}

/// Percent-encode a keyword for use inside a generated URL.
pub(crate) fn encode(keyword: &str) -> String {
    utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string()
}
