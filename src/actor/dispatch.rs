//! Per-actor dispatch of state methods.
//!
//! The active state's methods live in a `DispatchTable` snapshotted on
//! entry. Calls consult that table first and then the actor's defaults.

use super::{Actor, ActorError};
use crate::core::{Method, StateDefinition};
use serde_json::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Methods currently callable on an actor, with their declaration order.
pub(super) struct DispatchTable<C> {
    names: Vec<String>,
    methods: HashMap<String, Method<C>>,
}

impl<C> DispatchTable<C> {
    pub(super) fn snapshot(definition: &StateDefinition<C>) -> Self {
        let names = definition.method_names().to_vec();
        let methods = names
            .iter()
            .filter_map(|name| {
                definition
                    .method(name)
                    .map(|method| (name.clone(), Rc::clone(method)))
            })
            .collect();
        Self { names, methods }
    }

    fn get(&self, name: &str) -> Option<&Method<C>> {
        self.methods.get(name)
    }

    fn remove(&mut self, name: &str) -> Option<Method<C>> {
        let method = self.methods.remove(name)?;
        self.names.retain(|n| n != name);
        Some(method)
    }
}

impl<C> Default for DispatchTable<C> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            methods: HashMap::new(),
        }
    }
}

impl<C: 'static> Actor<C> {
    /// Register a default method, used whenever the active state does not
    /// declare a method of that name.
    pub fn define_default<F>(&mut self, name: impl Into<String>, method: F) -> &mut Self
    where
        F: Fn(&mut Actor<C>, Value) -> Value + 'static,
    {
        self.insert_default(name.into(), Rc::new(method));
        self
    }
}

impl<C> Actor<C> {
    pub(crate) fn insert_default(&mut self, name: String, method: Method<C>) {
        self.defaults.insert(name, method);
    }

    /// Call `method` with the actor as receiver.
    ///
    /// The active state's methods take precedence over defaults. A method
    /// may transition the actor; the call still runs to completion.
    pub fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError> {
        let callable = self
            .injected
            .get(method)
            .or_else(|| self.defaults.get(method))
            .cloned()
            .ok_or_else(|| ActorError::MethodNotFound {
                method: method.to_owned(),
                state: self.state().map(str::to_owned),
            })?;
        Ok(callable(self, args))
    }

    /// True when the active state provides `method`. Defaults are not
    /// counted.
    pub fn has_method(&self, method: &str) -> bool {
        self.injected.get(method).is_some()
    }

    /// Whether `method` is registered as an actor-wide default.
    pub fn has_default(&self, method: &str) -> bool {
        self.defaults.contains_key(method)
    }

    /// Names of the methods the active state provides, in declaration
    /// order. Empty in the null state.
    pub fn methods(&self) -> &[String] {
        &self.injected.names
    }

    /// Remove a method from the actor until the next transition.
    ///
    /// Re-entering the already active state does not restore it.
    pub fn detach(&mut self, method: &str) -> Option<Method<C>> {
        self.injected.remove(method)
    }
}
