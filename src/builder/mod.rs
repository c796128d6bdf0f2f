//! Builder API for ergonomic actor construction.
//!
//! This module provides a fluent builder, the actor configuration, and
//! macros for declaring method maps and state tables with little
//! boilerplate.

pub mod actor;
pub mod config;
pub mod macros;

pub use actor::ActorBuilder;
pub use config::{ActorConfig, DEFAULT_HISTORY_LIMIT};
