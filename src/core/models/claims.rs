//! Token claims
//!
//! The claim set carried by a bearer token: who the caller is and which
//! todos are currently assigned to them.

use serde::{Deserialize, Serialize};

use super::TodoId;

/// Claims embedded in a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Login of the authenticated caller
    pub sub: String,
    /// Todos assigned to the caller when the token was issued
    #[serde(default)]
    pub todos: Vec<TodoId>,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    /// Check whether the claim set grants access to a todo
    #[must_use]
    pub fn covers(&self, id: TodoId) -> bool {
        self.todos.contains(&id)
    }
}
