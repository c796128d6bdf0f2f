//! Named state definitions.

use super::method::{noop_hook, Entry, Hook, Method, MethodMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Identity of a state definition.
///
/// Minted when a definition is created. Merging more methods into a
/// definition keeps its id; clearing a state and defining it again yields a
/// new id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(Uuid);

impl StateId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named bundle of methods plus `begin`/`end` hooks.
///
/// Method names keep the order in which they were first declared. Hooks
/// are never part of the method set.
pub struct StateDefinition<C> {
    id: StateId,
    name: String,
    method_names: Vec<String>,
    methods: HashMap<String, Method<C>>,
    begin: Hook<C>,
    end: Hook<C>,
}

impl<C: 'static> StateDefinition<C> {
    /// Create an empty definition whose hooks do nothing.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: StateId::new(),
            name: name.into(),
            method_names: Vec::new(),
            methods: HashMap::new(),
            begin: noop_hook(),
            end: noop_hook(),
        }
    }
}

impl<C> StateDefinition<C> {
    /// Identity of this definition.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// The state name this definition is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the methods this state contributes, in declaration order.
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    /// Look up a declared method callable.
    pub fn method(&self, name: &str) -> Option<&Method<C>> {
        self.methods.get(name)
    }

    /// Whether `name` is one of the declared methods.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Hook run when the state is entered.
    pub fn begin_hook(&self) -> &Hook<C> {
        &self.begin
    }

    /// Hook run when the state is left.
    pub fn end_hook(&self) -> &Hook<C> {
        &self.end
    }

    /// Merge a method map into this definition.
    ///
    /// Hooks are replaced. Methods are added or overwritten by name; a
    /// name that is already declared keeps its original position.
    pub(crate) fn merge(&mut self, methods: MethodMap<C>) {
        for entry in methods.into_entries() {
            match entry {
                Entry::Begin(hook) => self.begin = hook,
                Entry::End(hook) => self.end = hook,
                Entry::Method(name, method) => {
                    if !self.methods.contains_key(&name) {
                        self.method_names.push(name.clone());
                    }
                    self.methods.insert(name, method);
                }
            }
        }
    }
}

impl<C> Clone for StateDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            method_names: self.method_names.clone(),
            methods: self
                .methods
                .iter()
                .map(|(name, method)| (name.clone(), Rc::clone(method)))
                .collect(),
            begin: Rc::clone(&self.begin),
            end: Rc::clone(&self.end),
        }
    }
}

impl<C> fmt::Debug for StateDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("methods", &self.method_names)
            .finish()
    }
}
