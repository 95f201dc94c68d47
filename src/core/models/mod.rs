//! Domain models for todos
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Todo`] - The managed resource
//! - [`TodoId`] - Its public identifier
//! - [`Claims`] - What a bearer token says about its holder

mod claims;
mod todo;

pub use claims::Claims;
pub use todo::{Todo, TodoId};
