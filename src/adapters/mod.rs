//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `memory` - In-process todo store
//! - `token` - HMAC-signed bearer tokens

mod memory;
mod token;

pub use memory::InMemoryTodoStore;
pub use token::SignedTokenIssuer;
