//! In-memory record store
//!
//! The collection backing one view. Insertion order is preserved so an
//! unsorted listing matches the order records were added, and stable
//! sorting has a defined baseline to tie-break against.

use crate::core::error::RecordError;
use crate::core::record::Record;
use crate::storage::RecordStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory record store implementation
///
/// Uses RwLock for thread-safe access; clones are cheap handles onto the
/// same collection.
#[derive(Clone)]
pub struct InMemoryStore<R: Record> {
    records: Arc<RwLock<IndexMap<Uuid, R>>>,
}

impl<R: Record> InMemoryStore<R> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store seeded with records (e.g. fixtures)
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let map: IndexMap<Uuid, R> = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    async fn insert(&self, record: R) -> Result<R> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.contains_key(&record.id()) {
            return Err(RecordError::AlreadyExists {
                record_type: R::record_type().to_string(),
                id: record.id(),
            }
            .into());
        }

        tracing::debug!(
            record_type = R::record_type(),
            id = %record.id(),
            "record inserted"
        );
        records.insert(record.id(), record.clone());

        Ok(record)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<R>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<R>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn replace(&self, id: &Uuid, record: R) -> Result<Option<R>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // Missing id is a silent no-op; the record keeps its slot so
        // insertion order survives edits.
        match records.get_mut(id) {
            Some(slot) => {
                let previous = slot.clone();
                *slot = record;
                tracing::debug!(
                    record_type = R::record_type(),
                    id = %id,
                    "record replaced"
                );
                Ok(Some(previous))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let removed = records.shift_remove(id).is_some();
        if removed {
            tracing::debug!(
                record_type = R::record_type(),
                id = %id,
                "record removed"
            );
        }
        Ok(removed)
    }

    async fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }
}
