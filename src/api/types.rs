//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::core::models::{Todo, TodoId};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.into()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating or updating a todo
///
/// Every field is optional at the wire level; which ones are required
/// depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoRequest {
    /// Title (required on create)
    #[serde(default)]
    pub title: Option<String>,
    /// Creator login (required on create)
    #[serde(default)]
    pub creator: Option<String>,
    /// New assignee login (update only)
    #[serde(default)]
    pub assignee: Option<String>,
    /// New completion flag (update only)
    #[serde(default)]
    pub completed: Option<bool>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Response for todo creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoCreatedData {
    /// Id assigned to the new todo
    pub hash: TodoId,
}

/// Collection endpoint response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListData {
    /// Ids of every todo
    pub todos: Vec<TodoId>,
}

/// Outbound representation of a todo
///
/// Fields that are not part of the requested view are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Todo id
    pub hash: TodoId,
    /// Title
    pub title: Option<String>,
    /// Creator login
    pub creator: Option<String>,
    /// Assignee login (empty when redacted)
    pub assignee: Option<String>,
    /// Completion flag
    pub completed: Option<bool>,
    /// Display hint
    pub image: Option<String>,
}

impl TodoView {
    /// Every field of the todo
    #[must_use]
    pub fn full(todo: &Todo) -> Self {
        Self {
            hash: todo.id,
            title: Some(todo.title.clone()),
            creator: Some(todo.creator.clone()),
            assignee: todo.assignee.clone(),
            completed: Some(todo.completed),
            image: todo.image.clone(),
        }
    }

    /// Only the id, everything else null
    #[must_use]
    pub const fn bare(id: TodoId) -> Self {
        Self {
            hash: id,
            title: None,
            creator: None,
            assignee: None,
            completed: None,
            image: None,
        }
    }
}
