//! Conjunctive mention predicates.

use osmon_core::{Mention, SentimentLabel};

use crate::StoreError;

/// A conjunction of optional predicates. An unset predicate matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionFilter {
    /// Exact, case-sensitive match on the stored source.
    pub source: Option<String>,
    /// Membership in the mention's stored keyword list.
    pub keyword: Option<String>,
    pub sentiment: Option<SentimentLabel>,
}

impl MentionFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub fn sentiment(mut self, label: SentimentLabel) -> Self {
        self.sentiment = Some(label);
        self
    }

    /// Set a predicate by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnsupportedFilter`] for a key other than
    /// `source`, `keyword` or `sentiment`, and [`StoreError::InvalidFilter`]
    /// for an unknown sentiment label.
    pub fn with(self, key: &str, value: &str) -> Result<Self, StoreError> {
        match key.trim() {
            "source" => Ok(self.source(value)),
            "keyword" => Ok(self.keyword(value)),
            "sentiment" => {
                let label = value
                    .parse::<SentimentLabel>()
                    .map_err(|e| StoreError::InvalidFilter {
                        key: "sentiment".to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(self.sentiment(label))
            }
            other => Err(StoreError::UnsupportedFilter(other.to_string())),
        }
    }

    /// Parse a `key=value` pair and set that predicate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFilter`] if `pair` has no `=`, otherwise
    /// whatever [`MentionFilter::with`] returns.
    pub fn with_pair(self, pair: &str) -> Result<Self, StoreError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| StoreError::InvalidFilter {
                key: pair.to_string(),
                reason: "expected key=value".to_string(),
            })?;
        self.with(key, value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.keyword.is_none() && self.sentiment.is_none()
    }

    #[must_use]
    pub fn matches(&self, mention: &Mention) -> bool {
        if let Some(source) = &self.source {
            if &mention.source != source {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !mention.has_keyword(keyword) {
                return false;
            }
        }
        if let Some(label) = self.sentiment {
            if mention.sentiment_label() != Some(label) {
                return false;
            }
        }
        true
    }
}
