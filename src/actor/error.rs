//! Actor error types.

use thiserror::Error;

/// Errors returned when calling into an actor.
///
/// Transitions and definitions never fail: an unknown target degrades to
/// the null state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActorError {
    /// Neither the active state nor the actor's defaults provide the method
    #[error("method '{method}' is not available in {}", describe(.state))]
    MethodNotFound {
        method: String,
        state: Option<String>,
    },
}

fn describe(state: &Option<String>) -> String {
    match state {
        Some(name) => format!("state '{name}'"),
        None => "the null state".to_string(),
    }
}
