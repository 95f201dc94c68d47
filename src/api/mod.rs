//! HTTP-agnostic API layer
//!
//! This module turns a method, a path and a [`RequestContext`] into an
//! [`ApiReply`] that any HTTP server implementation (`tiny_http`, axum, etc.)
//! can send as is.
//!
//! ## Design
//!
//! - **Routing is a table**: [`route::ROUTES`] is evaluated in order
//! - **Business logic stays in `core`**: the dispatcher only calls [`TodoService`]
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation
//!
//! [`TodoService`]: crate::core::services::TodoService

mod context;
mod dispatcher;
mod error;
pub mod redaction;
pub mod route;
mod types;

pub use context::RequestContext;
pub use dispatcher::{ApiReply, DEFAULT_USERS_BASE, HANDLER_HEADER, TodoDispatcher};
pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use types::{ApiResponse, TodoCreatedData, TodoListData, TodoRequest, TodoView};
