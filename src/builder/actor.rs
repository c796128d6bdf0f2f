//! Builder for constructing actors.

use crate::actor::{Actor, Archetype};
use crate::builder::config::ActorConfig;
use crate::core::{Method, MethodMap, StateTable};
use serde_json::Value;
use std::rc::Rc;

/// Builder for constructing actors with a fluent API.
///
/// States are applied in the order they were added, archetype states
/// included, so a later entry for the same name merges into (or clears)
/// an earlier one.
///
/// # Example
///
/// ```rust
/// use demeanor::{ActorBuilder, MethodMap};
/// use serde_json::Value;
///
/// let mut actor = ActorBuilder::<()>::new()
///     .history_limit(Some(4))
///     .state("Idle", MethodMap::new().method("poke", |_, _| Value::from("zzz")))
///     .default_method("poke", |_, _| Value::from("?"))
///     .build(());
///
/// assert_eq!(actor.invoke("poke", Value::Null).unwrap(), "?");
/// actor.go_to_state("Idle");
/// assert_eq!(actor.invoke("poke", Value::Null).unwrap(), "zzz");
/// ```
pub struct ActorBuilder<C> {
    config: ActorConfig,
    states: StateTable<C>,
    defaults: Vec<(String, Method<C>)>,
}

impl<C: 'static> ActorBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: ActorConfig::default(),
            states: StateTable::new(),
            defaults: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ActorConfig) -> Self {
        self.config = config;
        self
    }

    /// Bound the transition history.
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Add a single state.
    pub fn state(mut self, name: impl Into<String>, methods: MethodMap<C>) -> Self {
        self.states = self.states.state(name, methods);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: StateTable<C>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a default method.
    pub fn default_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut Actor<C>, Value) -> Value + 'static,
    {
        self.defaults.push((name.into(), Rc::new(method)));
        self
    }

    /// Add an archetype's states and defaults.
    pub fn archetype<A>(mut self) -> Self
    where
        A: Archetype<Context = C>,
    {
        self.states.extend(A::states());
        self.defaults.extend(A::defaults().into_methods());
        self
    }

    /// Build the actor around `context`. It starts in the null state.
    pub fn build(self, context: C) -> Actor<C> {
        let mut actor = Actor::with_config(context, self.config);
        actor.define_states(self.states);
        for (name, method) in self.defaults {
            actor.insert_default(name, method);
        }
        actor
    }
}

impl<C: 'static> Default for ActorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
