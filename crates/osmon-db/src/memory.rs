//! In-process mention store.

use chrono::Utc;
use osmon_core::Mention;
use serde::{Deserialize, Serialize};

use crate::filter::MentionFilter;
use crate::record::{MentionId, QueryRecord, StoreStatistics, StoredMention, StoredQuery};
use crate::{MentionStore, StoreError};

/// Mentions and the query log held in insertion order.
///
/// Also the on-disk document of [`JsonFileStore`](crate::JsonFileStore). The
/// id counters survive clears so an id is never handed out twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    mentions: Vec<StoredMention>,
    #[serde(default)]
    queries: Vec<StoredQuery>,
    #[serde(default)]
    last_mention_id: MentionId,
    #[serde(default)]
    last_query_id: u64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    fn push(&mut self, mention: Mention) -> MentionId {
        self.last_mention_id += 1;
        let id = self.last_mention_id;
        self.mentions.push(StoredMention {
            id,
            saved_at: Utc::now(),
            mention,
        });
        id
    }
}

impl MentionStore for MemoryStore {
    fn insert(&mut self, mention: Mention) -> Result<MentionId, StoreError> {
        Ok(self.push(mention))
    }

    fn insert_many(&mut self, mentions: Vec<Mention>) -> Result<Vec<MentionId>, StoreError> {
        Ok(mentions.into_iter().map(|m| self.push(m)).collect())
    }

    fn query(
        &self,
        filter: &MentionFilter,
        limit: Option<usize>,
    ) -> Result<Vec<StoredMention>, StoreError> {
        let matching = self.mentions.iter().filter(|m| filter.matches(&m.mention));
        let rows = match limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        };
        Ok(rows)
    }

    fn log_query(&mut self, record: QueryRecord) -> Result<u64, StoreError> {
        self.last_query_id += 1;
        let id = self.last_query_id;
        self.queries.push(StoredQuery { id, query: record });
        Ok(id)
    }

    fn queries(&self) -> Result<Vec<StoredQuery>, StoreError> {
        Ok(self.queries.clone())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.mentions.clear();
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.mentions.clear();
        self.queries.clear();
        Ok(())
    }

    fn statistics(&self) -> Result<StoreStatistics, StoreError> {
        let mut stats = StoreStatistics {
            total_mentions: self.mentions.len(),
            total_queries: self.queries.len(),
            ..StoreStatistics::default()
        };
        for stored in &self.mentions {
            *stats
                .sources
                .entry(stored.mention.source.clone())
                .or_insert(0) += 1;
            if let Some(label) = stored.mention.sentiment_label() {
                stats.sentiments.record(label);
            }
        }
        Ok(stats)
    }
}
