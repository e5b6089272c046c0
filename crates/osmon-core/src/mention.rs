//! The normalized mention record and the values attached to it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Open key/value bag for source-specific extras. Opaque to the engine.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Map a polarity onto a label. Both thresholds are exclusive, so a
    /// polarity of exactly `0.1` or `-0.1` is neutral.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(CoreError::InvalidSentiment(s.to_string())),
        }
    }
}

/// Mentions per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Number of classified mentions counted.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Output of classifying one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
    /// In `[0.0, 1.0]`.
    pub subjectivity: f64,
    /// Display/ranking aid; never used to pick the label.
    pub score: f64,
}

impl SentimentResult {
    /// Build a result from raw model output.
    ///
    /// Inputs are clamped into their documented ranges before the label and
    /// score are derived.
    #[must_use]
    pub fn from_scores(polarity: f64, subjectivity: f64) -> Self {
        let polarity = clamp_or_zero(polarity, -1.0, 1.0);
        let subjectivity = clamp_or_zero(subjectivity, 0.0, 1.0);
        Self {
            label: SentimentLabel::from_polarity(polarity),
            polarity,
            subjectivity,
            score: polarity * 0.7 + (1.0 - subjectivity) * 0.3,
        }
    }

    /// The neutral zero result used when analysis fails.
    #[must_use]
    pub fn neutral_fallback() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            polarity: 0.0,
            subjectivity: 0.0,
            score: 0.0,
        }
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// Interaction counters for a mention.
///
/// `total` is never stored on the struct: it is derived on read and written
/// out alongside the components when serialized. A `total` present in input
/// is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EngagementRecord", into = "EngagementRecord")]
pub struct Engagement {
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

impl Engagement {
    #[must_use]
    pub fn new(likes: u64, shares: u64, comments: u64) -> Self {
        Self {
            likes,
            shares,
            comments,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.likes
            .saturating_add(self.shares)
            .saturating_add(self.comments)
    }
}

#[derive(Serialize, Deserialize)]
struct EngagementRecord {
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    shares: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    total: u64,
}

impl From<EngagementRecord> for Engagement {
    fn from(record: EngagementRecord) -> Self {
        Engagement::new(record.likes, record.shares, record.comments)
    }
}

impl From<Engagement> for EngagementRecord {
    fn from(engagement: Engagement) -> Self {
        EngagementRecord {
            likes: engagement.likes,
            shares: engagement.shares,
            comments: engagement.comments,
            total: engagement.total(),
        }
    }
}

/// A raw sighting as produced by a collector, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub text: String,
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub metadata: Metadata,
}

impl RawRecord {
    #[must_use]
    pub fn new(text: impl Into<String>, source: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            url: String::new(),
            author: String::new(),
            timestamp,
            engagement: Engagement::default(),
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = engagement;
        self
    }

    #[must_use]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A normalized keyword sighting.
///
/// Created once by the ingestion boundary, classified once, then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Origin identifier, e.g. `"twitter"` or `"web_search"`. Case is kept as
    /// collected.
    #[serde(alias = "platform")]
    pub source: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    /// When the mention was observed, not necessarily when it was posted.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
    /// Tracked keywords found in `content` at creation time.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Mention {
    /// Normalize a raw record against the caller's tracked keywords.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyContent`] if the record text is blank.
    pub fn from_raw<S: AsRef<str>>(raw: RawRecord, tracked: &[S]) -> Result<Self, CoreError> {
        if raw.text.trim().is_empty() {
            return Err(CoreError::EmptyContent {
                platform: raw.source,
            });
        }

        let keywords = match_keywords(&raw.text, tracked);
        Ok(Self {
            source: raw.source,
            content: raw.text,
            author: raw.author,
            url: raw.url,
            timestamp: raw.timestamp,
            engagement: raw.engagement,
            sentiment: None,
            keywords,
            metadata: raw.metadata,
        })
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Case-insensitive platform comparison.
    #[must_use]
    pub fn is_from(&self, platform: &str) -> bool {
        self.source.eq_ignore_ascii_case(platform)
    }

    /// Exact membership in the stored keyword list.
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    #[must_use]
    pub fn sentiment_label(&self) -> Option<SentimentLabel> {
        self.sentiment.map(|s| s.label)
    }
}

impl AsRef<Mention> for Mention {
    fn as_ref(&self) -> &Mention {
        self
    }
}

/// Return the tracked keywords that occur in `text`, ignoring case.
///
/// Order follows `tracked`. Blank entries never match, and a keyword that
/// repeats (ignoring case) is only reported the first time.
#[must_use]
pub fn match_keywords<S: AsRef<str>>(text: &str, tracked: &[S]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for keyword in tracked {
        let keyword = keyword.as_ref();
        if keyword.trim().is_empty() {
            continue;
        }
        let needle = keyword.to_lowercase();
        if !haystack.contains(&needle) {
            continue;
        }
        if found.iter().any(|k| k.to_lowercase() == needle) {
            continue;
        }
        found.push(keyword.to_string());
    }

    found
}

#[cfg(test)]
#[path = "mention_test.rs"]
mod tests;
