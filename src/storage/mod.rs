//! Record storage services
//!
//! The store trait is async so the same call surface can later sit in
//! front of a real backend; the shipped implementation is in-memory and
//! synchronous inside.

pub mod in_memory;

pub use in_memory::InMemoryStore;

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for one view's record collection
///
/// Implementations own the records exclusively; the pipeline only ever
/// sees cloned snapshots from [`RecordStore::list`].
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Insert a new record
    ///
    /// Fails if the identifier is already present; identifiers are never
    /// reused within a store.
    async fn insert(&self, record: R) -> Result<R>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> Result<Option<R>>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<R>>;

    /// Replace the record with the given id
    ///
    /// Returns the previous record, or `None` when no record matched
    /// (a silent no-op, per the mutation contract).
    async fn replace(&self, id: &Uuid, record: R) -> Result<Option<R>>;

    /// Remove the record with the given id
    ///
    /// Returns whether a record was removed; a missing id is a no-op.
    async fn remove(&self, id: &Uuid) -> Result<bool>;

    /// Number of records in the store
    async fn len(&self) -> Result<usize>;
}
