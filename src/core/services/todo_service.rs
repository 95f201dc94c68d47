//! Todo service - validated CRUD over a todo store
//!
//! Pure business logic: every operation validates its input, talks to the
//! store through the [`TodoStore`] port, and reports failures as a typed
//! [`ServiceError`]. Nothing in here knows about HTTP.

use log::debug;
use thiserror::Error;

use crate::core::models::{Todo, TodoId};
use crate::core::ports::{StoreError, TodoStore};

/// Failures raised by [`TodoService`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// The id does not resolve to a record
    #[error("todo {0} does not exist")]
    NotFound(TodoId),

    /// The store refused a duplicate natural key
    #[error("todo '{0}' is no longer available")]
    Conflict(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Duplicate(title) => Self::Conflict(title),
        }
    }
}

/// Create/read/update/delete operations on todos
#[derive(Debug)]
pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Create a service over the given store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Turn a raw path segment into a todo id
    pub fn resolve_id(raw: &str) -> Result<TodoId, ServiceError> {
        raw.parse().map_err(ServiceError::Validation)
    }

    /// Create a todo and return its id
    ///
    /// `title` must be present and non-empty, `creator` must be present.
    pub fn create(&self, title: Option<&str>, creator: Option<&str>) -> Result<TodoId, ServiceError> {
        let title = title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ServiceError::Validation("title must not be null or empty".to_string()))?;
        let creator =
            creator.ok_or_else(|| ServiceError::Validation("creator must not be null".to_string()))?;

        let id = self.store.insert(title, creator)?;
        debug!("created todo {id} ('{title}') for {creator}");
        Ok(id)
    }

    /// Ids of every todo, in store order
    pub fn read_all(&self) -> Vec<TodoId> {
        self.store.find_all().iter().map(|t| t.id).collect()
    }

    /// Fetch one todo
    pub fn read_one(&self, id: TodoId) -> Result<Todo, ServiceError> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Partially update a todo
    ///
    /// Empty or absent values leave the corresponding field untouched, so
    /// this cannot clear a field.
    pub fn update(
        &self,
        id: TodoId,
        new_title: Option<&str>,
        new_assignee: Option<&str>,
    ) -> Result<Todo, ServiceError> {
        let mut todo = self.read_one(id)?;
        let mut changed = false;

        if let Some(title) = new_title.filter(|t| !t.is_empty()) {
            todo.title = title.to_string();
            changed = true;
        }
        if let Some(assignee) = new_assignee.filter(|a| !a.is_empty()) {
            todo.assignee = Some(assignee.to_string());
            changed = true;
        }

        if changed {
            self.store.save(&todo)?;
            debug!("updated todo {id}");
        }
        Ok(todo)
    }

    /// Set the completion flag of a todo
    pub fn set_completed(&self, id: TodoId, completed: bool) -> Result<Todo, ServiceError> {
        let mut todo = self.read_one(id)?;
        if todo.completed != completed {
            todo.completed = completed;
            self.store.save(&todo)?;
            debug!("todo {id} completed={completed}");
        }
        Ok(todo)
    }

    /// Delete a todo
    pub fn delete(&self, id: TodoId) -> Result<(), ServiceError> {
        let todo = self.read_one(id)?;
        // A concurrent delete may win between the lookup and the removal.
        let key = self.store.key_of(&todo)?;
        self.store.delete(key)?;
        debug!("deleted todo {id}");
        Ok(())
    }

    /// Ids of the todos currently assigned to `login`
    pub fn todos_of(&self, login: &str) -> Vec<TodoId> {
        self.store.find_by_assignee(login).iter().map(|t| t.id).collect()
    }
}
