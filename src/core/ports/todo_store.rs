//! Todo store port
//!
//! Defines the interface for keyed persistence of todo records.

use thiserror::Error;

use super::super::models::{Todo, TodoId};

/// Internal storage key of a record
///
/// Distinct from [`TodoId`]: the id is what callers see, the slot is how the
/// store addresses the record. A key remembers the id it was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey {
    /// Slot holding the record
    pub slot: usize,
    /// Id of the record the key was resolved for
    pub id: TodoId,
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} (todo {})", self.slot, self.id)
    }
}

/// Errors surfaced by a todo store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record matches the given id
    #[error("no todo with id {0}")]
    NotFound(TodoId),

    /// A record with the same natural key (title) already exists
    #[error("a todo titled '{0}' already exists")]
    Duplicate(String),
}

/// Keyed store of todo records
///
/// Every method is individually atomic. No lock is held across calls, so a
/// read followed by a write may observe a concurrent mutation in between.
pub trait TodoStore: Send + Sync {
    /// All records, in store iteration order
    fn find_all(&self) -> Vec<Todo>;

    /// Find one record by its public id
    fn find_by_id(&self, id: TodoId) -> Result<Todo, StoreError>;

    /// All records currently assigned to the given login
    fn find_by_assignee(&self, login: &str) -> Vec<Todo>;

    /// Insert a new record and mint its id
    ///
    /// Fails with [`StoreError::Duplicate`] when the title is already taken.
    fn insert(&self, title: &str, creator: &str) -> Result<TodoId, StoreError>;

    /// Resolve the storage key of a record
    fn key_of(&self, todo: &Todo) -> Result<StoreKey, StoreError>;

    /// Replace the stored copy of a record (matched by id)
    fn save(&self, todo: &Todo) -> Result<(), StoreError>;

    /// Remove the record stored under a key
    ///
    /// Fails with [`StoreError::NotFound`] when the slot was emptied since
    /// the key was resolved.
    fn delete(&self, key: StoreKey) -> Result<(), StoreError>;
}
