//! Business logic services
//!
//! - [`todo_service`] - Validated CRUD over the todo store
//! - [`token_refresh`] - Re-issue a caller's token after a mutation

pub mod todo_service;
pub mod token_refresh;

pub use todo_service::{ServiceError, TodoService};
pub use token_refresh::refresh_token;
