//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (record storage, token signing).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so tests can plug in their own stores and issuers.

mod todo_store;
mod token_issuer;

pub use todo_store::{StoreError, StoreKey, TodoStore};
pub use token_issuer::{TokenError, TokenIssuer};
