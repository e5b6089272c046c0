//! Mention store persisted as a single JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use osmon_core::Mention;

use crate::filter::MentionFilter;
use crate::memory::MemoryStore;
use crate::record::{MentionId, QueryRecord, StoreStatistics, StoredMention, StoredQuery};
use crate::{MentionStore, StoreError};

/// A [`MemoryStore`] mirrored to a JSON file.
///
/// The whole document is rewritten after every mutation through a temporary
/// sibling file and a rename. In-memory state only changes once the write has
/// succeeded, so a failed write leaves the store as it was.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Serde`] if its contents are not a valid store document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            if raw.trim().is_empty() {
                MemoryStore::new()
            } else {
                serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            MemoryStore::new()
        };

        tracing::debug!(
            path = %path.display(),
            mentions = inner.len(),
            "opened mention store"
        );
        Ok(Self { path, inner })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let out = op(&mut next)?;
        self.write(&next)?;
        self.inner = next;
        Ok(out)
    }

    fn write(&self, contents: &MemoryStore) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(contents).map_err(|source| StoreError::Serde {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl MentionStore for JsonFileStore {
    fn insert(&mut self, mention: Mention) -> Result<MentionId, StoreError> {
        self.mutate(|store| store.insert(mention))
    }

    fn insert_many(&mut self, mentions: Vec<Mention>) -> Result<Vec<MentionId>, StoreError> {
        let count = mentions.len();
        let ids = self.mutate(|store| store.insert_many(mentions))?;
        tracing::debug!(count, path = %self.path.display(), "saved mentions");
        Ok(ids)
    }

    fn query(
        &self,
        filter: &MentionFilter,
        limit: Option<usize>,
    ) -> Result<Vec<StoredMention>, StoreError> {
        self.inner.query(filter, limit)
    }

    fn log_query(&mut self, record: QueryRecord) -> Result<u64, StoreError> {
        self.mutate(|store| store.log_query(record))
    }

    fn queries(&self) -> Result<Vec<StoredQuery>, StoreError> {
        self.inner.queries()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.mutate(|store| store.clear())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.mutate(|store| store.clear_all())
    }

    fn statistics(&self) -> Result<StoreStatistics, StoreError> {
        self.inner.statistics()
    }
}
