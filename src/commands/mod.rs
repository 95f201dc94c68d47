//! Command implementations

mod serve;
mod show_config;

pub use serve::{ServeOverrides, serve};
pub use show_config::show_config;
