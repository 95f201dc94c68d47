//! In-memory todo store
//!
//! Implements the `TodoStore` port on top of a lock-guarded ordered map.
//! Records keep their insertion order; the title acts as natural key.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::models::{Todo, TodoId};
use crate::core::ports::{StoreError, StoreKey, TodoStore};

#[derive(Debug)]
struct Slots {
    records: BTreeMap<usize, Todo>,
    next_slot: usize,
    next_id: u64,
}

/// Todo store held entirely in process memory
#[derive(Debug)]
pub struct InMemoryTodoStore {
    slots: RwLock<Slots>,
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: RwLock::new(Slots {
                records: BTreeMap::new(),
                next_slot: 0,
                next_id: 1,
            }),
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    /// Whether the store holds no record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-written record
    // behind, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Slots> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Slots {
    fn slot_of(&self, id: TodoId) -> Option<usize> {
        self.records.iter().find(|(_, t)| t.id == id).map(|(slot, _)| *slot)
    }
}

impl TodoStore for InMemoryTodoStore {
    fn find_all(&self) -> Vec<Todo> {
        self.read().records.values().cloned().collect()
    }

    fn find_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.read()
            .records
            .values()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn find_by_assignee(&self, login: &str) -> Vec<Todo> {
        self.read()
            .records
            .values()
            .filter(|t| t.is_assigned_to(login))
            .cloned()
            .collect()
    }

    fn insert(&self, title: &str, creator: &str) -> Result<TodoId, StoreError> {
        let mut slots = self.write();
        if slots.records.values().any(|t| t.title == title) {
            return Err(StoreError::Duplicate(title.to_string()));
        }

        let id = TodoId::new(slots.next_id);
        let slot = slots.next_slot;
        slots.next_id += 1;
        slots.next_slot += 1;
        slots.records.insert(slot, Todo::new(id, title, creator));
        Ok(id)
    }

    fn key_of(&self, todo: &Todo) -> Result<StoreKey, StoreError> {
        let slot = self.read().slot_of(todo.id).ok_or(StoreError::NotFound(todo.id))?;
        Ok(StoreKey { slot, id: todo.id })
    }

    fn save(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut slots = self.write();
        let slot = slots.slot_of(todo.id).ok_or(StoreError::NotFound(todo.id))?;
        slots.records.insert(slot, todo.clone());
        Ok(())
    }

    fn delete(&self, key: StoreKey) -> Result<(), StoreError> {
        self.write()
            .records
            .remove(&key.slot)
            .map(|_| ())
            .ok_or(StoreError::NotFound(key.id))
    }
}
