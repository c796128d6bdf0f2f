//! The actor: a container whose callable methods follow its current state.
//!
//! An actor owns a registry of named state definitions, the currently
//! active state (or none, the null state), and a dispatch table holding the
//! active state's methods. Transitions swap the dispatch table and run the
//! `end`/`begin` hooks in a fixed order.
//!
//! # Example
//!
//! ```rust
//! use demeanor::{Actor, MethodMap};
//! use serde_json::Value;
//!
//! #[derive(Default)]
//! struct Door {
//!     knocks: u32,
//! }
//!
//! let mut door = Actor::new(Door::default());
//! door.define_state(
//!     "Closed",
//!     MethodMap::new().method("knock", |actor: &mut Actor<Door>, _| {
//!         actor.context_mut().knocks += 1;
//!         Value::Null
//!     }),
//! );
//!
//! assert_eq!(door.state(), None);
//! assert!(door.invoke("knock", Value::Null).is_err());
//!
//! door.go_to_state("Closed");
//! door.invoke("knock", Value::Null).unwrap();
//! assert_eq!(door.context().knocks, 1);
//!
//! door.go_to_state(None);
//! assert!(!door.has_method("knock"));
//! ```

mod archetype;
mod dispatch;
mod error;
mod registry;
mod transition;

pub use archetype::Archetype;
pub use error::ActorError;

use crate::builder::ActorConfig;
use crate::core::{Hook, Method, StateDefinition, StateId, StateTable, TransitionHistory};
use dispatch::DispatchTable;
use std::collections::HashMap;
use std::fmt;

/// The state currently driving an actor.
struct ActiveState<C> {
    id: StateId,
    name: String,
    /// Captured on entry; this is the hook that runs when the state is left.
    end: Hook<C>,
}

/// A stateful container whose methods change with its active state.
///
/// `C` is the host context: the fields that state methods and hooks read
/// and write through [`Actor::context_mut`].
pub struct Actor<C> {
    context: C,
    /// `None` marks a state that was defined and later cleared.
    registry: HashMap<String, Option<StateDefinition<C>>>,
    active: Option<ActiveState<C>>,
    injected: DispatchTable<C>,
    defaults: HashMap<String, Method<C>>,
    history: TransitionHistory,
}

impl<C: 'static> Actor<C> {
    /// Create an actor in the null state with no states defined.
    pub fn new(context: C) -> Self {
        Self::with_config(context, ActorConfig::default())
    }

    /// Create an actor and define `states` on it right away.
    pub fn with_states(context: C, states: StateTable<C>) -> Self {
        let mut actor = Self::new(context);
        actor.define_states(states);
        actor
    }

    /// Create an actor in the null state using `config`.
    pub fn with_config(context: C, config: ActorConfig) -> Self {
        Self {
            context,
            registry: HashMap::new(),
            active: None,
            injected: DispatchTable::default(),
            defaults: HashMap::new(),
            history: TransitionHistory::with_limit(config.history_limit),
        }
    }

    /// Create an actor carrying an archetype's type-level states and
    /// default methods.
    pub fn from_archetype<A>(context: C) -> Self
    where
        A: Archetype<Context = C>,
    {
        let mut actor = Self::with_states(context, A::states());
        for (name, method) in A::defaults().into_methods() {
            actor.insert_default(name, method);
        }
        actor
    }
}

impl<C> Actor<C> {
    /// Name of the active state, or `None` in the null state.
    pub fn state(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.name.as_str())
    }

    /// Identity of the active state definition.
    pub fn state_id(&self) -> Option<StateId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Whether the active state is named `name`.
    pub fn is_in_state(&self, name: &str) -> bool {
        self.state() == Some(name)
    }

    /// Get the host context (pure)
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Get mutable access to the host context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the actor, returning its host context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Get the transition history (pure)
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }
}

impl<C: fmt::Debug> fmt::Debug for Actor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&str> = self.state_names().collect();
        states.sort_unstable();
        f.debug_struct("Actor")
            .field("state", &self.state())
            .field("states", &states)
            .field("methods", &self.methods())
            .field("context", &self.context)
            .finish()
    }
}
