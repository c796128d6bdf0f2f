//! Core building blocks of a state-driven actor.
//!
//! This module contains the values the actor is assembled from:
//! - Method and hook callables, bundled into `MethodMap`s
//! - Named `StateDefinition`s that accumulate those callables
//! - Bounded history of the transitions an actor went through
//!
//! Nothing here performs a transition; the `actor` module owns that.

mod definition;
mod history;
mod method;

pub use definition::{StateDefinition, StateId};
pub use history::{TransitionHistory, TransitionRecord};
pub use method::{Hook, Method, MethodMap, StateTable, BEGIN, END};
