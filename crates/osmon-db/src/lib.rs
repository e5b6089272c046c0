//! Mention persistence for osmon.
//!
//! [`MentionStore`] is the storage seam: insertion, predicate queries, the
//! query log, bulk clears and full-scan statistics. [`MemoryStore`] keeps
//! everything in process; [`JsonFileStore`] wraps it and rewrites a JSON file
//! after every mutation.

pub mod filter;
pub mod json_file;
pub mod memory;
pub mod record;

pub use filter::MentionFilter;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{MentionId, QueryRecord, StoreStatistics, StoredMention, StoredQuery};

use std::path::PathBuf;

use osmon_core::{Mention, SentimentLabel};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unsupported filter: {0} (expected source, keyword or sentiment)")]
    UnsupportedFilter(String),
    #[error("invalid value for filter {key}: {reason}")]
    InvalidFilter { key: String, reason: String },
    #[error("store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {} could not be (de)serialized: {source}", path.display())]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage operations over mentions and the query log.
///
/// Implementations are synchronous and expect a single session at a time.
pub trait MentionStore {
    /// Persist one mention and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the mention cannot be persisted.
    fn insert(&mut self, mention: Mention) -> Result<MentionId, StoreError>;

    /// Persist mentions in input order and return their ids in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the batch cannot be persisted.
    fn insert_many(&mut self, mentions: Vec<Mention>) -> Result<Vec<MentionId>, StoreError>;

    /// Mentions matching every predicate in `filter`, in store order, capped
    /// at `limit` when given.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn query(
        &self,
        filter: &MentionFilter,
        limit: Option<usize>,
    ) -> Result<Vec<StoredMention>, StoreError>;

    /// Append a search to the query log and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be persisted.
    fn log_query(&mut self, record: QueryRecord) -> Result<u64, StoreError>;

    /// Logged searches, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn queries(&self) -> Result<Vec<StoredQuery>, StoreError>;

    /// Remove every stored mention. The query log is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change cannot be persisted.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Remove every stored mention and every query log entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the change cannot be persisted.
    fn clear_all(&mut self) -> Result<(), StoreError>;

    /// Recount the current contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn statistics(&self) -> Result<StoreStatistics, StoreError>;

    /// Mentions carrying `label`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn by_sentiment(
        &self,
        label: SentimentLabel,
        limit: Option<usize>,
    ) -> Result<Vec<StoredMention>, StoreError> {
        self.query(&MentionFilter::new().sentiment(label), limit)
    }
}
