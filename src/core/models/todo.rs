//! Todo model
//!
//! A todo is the only resource managed by this crate. Its `id` is the
//! externally visible handle (serialized as `hash`) and never changes.

use serde::{Deserialize, Serialize};

/// Public identifier of a todo
///
/// Rendered as a plain decimal number in paths (`/todos/{id}`) and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wrap a raw identifier
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("todo id must not be empty".to_string());
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| format!("invalid todo id: '{s}'"))
    }
}

/// A todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable identifier, assigned by the store on insertion
    pub id: TodoId,

    /// What needs to be done (never empty)
    pub title: String,

    /// Login of the user who created the todo
    pub creator: String,

    /// Login of the user currently responsible, if any
    pub assignee: Option<String>,

    /// Whether the todo is done
    pub completed: bool,

    /// Optional display hint, opaque to this crate
    pub image: Option<String>,
}

impl Todo {
    /// Create a fresh, unassigned and uncompleted todo
    pub fn new(id: TodoId, title: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            creator: creator.into(),
            assignee: None,
            completed: false,
            image: None,
        }
    }

    /// Check whether this todo is assigned to the given login
    #[must_use]
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignee.as_deref() == Some(login)
    }
}
