//! Demeanor: actors whose behavior changes with their state
//!
//! An [`Actor`] holds a registry of named states. Each state declares a set
//! of methods plus `begin`/`end` hooks. Moving the actor to a state swaps
//! its callable method set for that state's methods and runs the hooks in
//! a fixed order; the null state exposes no methods at all.
//!
//! # Core Concepts
//!
//! - **StateDefinition**: a named bundle of methods and lifecycle hooks,
//!   built up incrementally through `MethodMap`s
//! - **Transition**: `go_to_state` runs the old state's `end`, swaps the
//!   method table, then runs the new state's `begin`
//! - **Null state**: where unknown targets land, silently
//! - **Archetype**: states and default methods declared once per host type
//!
//! # Example
//!
//! ```rust
//! use demeanor::{Actor, MethodMap, StateTable};
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct Light {
//!     switched: u32,
//! }
//!
//! let mut light = Actor::with_states(
//!     Light::default(),
//!     StateTable::new()
//!         .state(
//!             "On",
//!             MethodMap::new()
//!                 .begin(|actor: &mut Actor<Light>, _| actor.context_mut().switched += 1)
//!                 .method("toggle", |actor, _| {
//!                     actor.go_to_state("Off");
//!                     Value::Null
//!                 }),
//!         )
//!         .state(
//!             "Off",
//!             MethodMap::new().method("toggle", |actor: &mut Actor<Light>, _| {
//!                 actor.go_to_state("On");
//!                 Value::Null
//!             }),
//!         ),
//! );
//!
//! assert_eq!(light.state(), None);
//! light.go_to_state("Off");
//! light.invoke("toggle", Value::Null).unwrap();
//! assert_eq!(light.state(), Some("On"));
//! assert_eq!(light.context().switched, 1);
//!
//! // Unknown states degrade to the null state.
//! light.go_to_state("Broken");
//! assert_eq!(light.state(), None);
//! assert!(light.methods().is_empty());
//! ```

pub mod actor;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use actor::{Actor, ActorError, Archetype};
pub use builder::{ActorBuilder, ActorConfig, DEFAULT_HISTORY_LIMIT};
pub use core::{Hook, Method, MethodMap, StateDefinition, StateId, StateTable};
