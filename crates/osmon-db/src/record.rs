//! Row types held by a store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use osmon_core::{Mention, SentimentCounts};
use serde::{Deserialize, Serialize};

/// Store-assigned mention id. Sequential from 1 and never reused.
pub type MentionId = u64;

/// A mention as held by a store.
///
/// Serializes flat: the mention fields plus `id` and `saved_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMention {
    pub id: MentionId,
    /// When the store accepted the mention. Distinct from `mention.timestamp`.
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub mention: Mention,
}

impl AsRef<Mention> for StoredMention {
    fn as_ref(&self) -> &Mention {
        &self.mention
    }
}

/// One logged search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
    pub results_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl QueryRecord {
    #[must_use]
    pub fn new(keywords: Vec<String>, sources: Vec<String>, results_count: usize) -> Self {
        Self {
            keywords,
            sources,
            results_count,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuery {
    pub id: u64,
    #[serde(flatten)]
    pub query: QueryRecord,
}

/// Full-scan counts over a store's current contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_mentions: usize,
    /// Keyed by the stored source value.
    pub sources: BTreeMap<String, usize>,
    /// Unclassified mentions are not counted.
    pub sentiments: SentimentCounts,
    pub total_queries: usize,
}
