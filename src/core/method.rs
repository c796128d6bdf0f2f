//! Callables contributed by states, and the maps used to declare them.

use crate::actor::Actor;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Reserved key naming the hook that runs when a state is entered.
pub const BEGIN: &str = "begin";

/// Reserved key naming the hook that runs when a state is left.
pub const END: &str = "end";

/// A state method.
///
/// The actor is always passed as the receiver, so a method reads and writes
/// the actor's context no matter which closure it was created from.
pub type Method<C> = Rc<dyn Fn(&mut Actor<C>, Value) -> Value>;

/// A lifecycle hook.
///
/// `begin` receives the name of the state being left, `end` the name of the
/// state being entered. `None` stands for the null state.
pub type Hook<C> = Rc<dyn Fn(&mut Actor<C>, Option<&str>)>;

pub(crate) fn noop_hook<C: 'static>() -> Hook<C> {
    Rc::new(|_, _| {})
}

/// Wrap a method registered under a reserved key so it can run as a hook.
/// The adjacent state name arrives as a JSON string, or `null`.
fn hook_from_method<C: 'static>(method: Method<C>) -> Hook<C> {
    Rc::new(move |actor, name| {
        let arg = name.map_or(Value::Null, |n| Value::String(n.to_owned()));
        method(actor, arg);
    })
}

pub(crate) enum Entry<C> {
    Method(String, Method<C>),
    Begin(Hook<C>),
    End(Hook<C>),
}

/// Ordered set of methods and hooks to merge into a state definition.
///
/// # Example
///
/// ```rust
/// use demeanor::MethodMap;
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct Lamp {
///     lit: bool,
/// }
///
/// let on = MethodMap::<Lamp>::new()
///     .begin(|actor, _previous| actor.context_mut().lit = true)
///     .method("brightness", |_actor, _args| Value::from(100));
///
/// assert_eq!(on.len(), 2);
/// ```
pub struct MethodMap<C> {
    entries: Vec<Entry<C>>,
}

impl<C: 'static> MethodMap<C> {
    /// Create an empty method map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a method.
    ///
    /// The names `begin` and `end` are reserved: a method registered under
    /// either becomes that hook instead of an ordinary method.
    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut Actor<C>, Value) -> Value + 'static,
    {
        let name = name.into();
        let method: Method<C> = Rc::new(method);
        let entry = match name.as_str() {
            BEGIN => Entry::Begin(hook_from_method(method)),
            END => Entry::End(hook_from_method(method)),
            _ => Entry::Method(name, method),
        };
        self.entries.push(entry);
        self
    }

    /// Set the hook run when the state is entered.
    pub fn begin<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Actor<C>, Option<&str>) + 'static,
    {
        self.entries.push(Entry::Begin(Rc::new(hook)));
        self
    }

    /// Set the hook run when the state is left.
    pub fn end<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Actor<C>, Option<&str>) + 'static,
    {
        self.entries.push(Entry::End(Rc::new(hook)));
        self
    }
}

impl<C> MethodMap<C> {
    /// Number of entries, hooks included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<Entry<C>> {
        self.entries
    }

    /// Ordinary methods only, dropping any hooks.
    pub(crate) fn into_methods(self) -> impl Iterator<Item = (String, Method<C>)> {
        self.entries.into_iter().filter_map(|entry| match entry {
            Entry::Method(name, method) => Some((name, method)),
            Entry::Begin(_) => {
                warn!(hook = BEGIN, "hook outside a state definition is ignored");
                None
            }
            Entry::End(_) => {
                warn!(hook = END, "hook outside a state definition is ignored");
                None
            }
        })
    }
}

impl<C: 'static> Default for MethodMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for MethodMap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Method(name, _) => name.as_str(),
                Entry::Begin(_) => BEGIN,
                Entry::End(_) => END,
            })
            .collect();
        f.debug_struct("MethodMap").field("keys", &keys).finish()
    }
}

/// A collection of state definitions keyed by state name.
///
/// Entries are applied independently; callers should not rely on the order
/// in which they land in the registry.
pub struct StateTable<C> {
    states: Vec<(String, MethodMap<C>)>,
}

impl<C> StateTable<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state. An empty map clears that state when applied.
    pub fn state(mut self, name: impl Into<String>, methods: MethodMap<C>) -> Self {
        self.states.push((name.into(), methods));
        self
    }

    /// Number of state entries.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Append every state of `other` after this table's own.
    pub fn extend(&mut self, other: StateTable<C>) {
        self.states.extend(other.states);
    }
}

impl<C> Default for StateTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S: Into<String>> FromIterator<(S, MethodMap<C>)> for StateTable<C> {
    fn from_iter<I: IntoIterator<Item = (S, MethodMap<C>)>>(iter: I) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|(name, methods)| (name.into(), methods))
                .collect(),
        }
    }
}

impl<C> IntoIterator for StateTable<C> {
    type Item = (String, MethodMap<C>);
    type IntoIter = std::vec::IntoIter<(String, MethodMap<C>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<C> fmt::Debug for StateTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.states.iter().map(|(name, methods)| (name, methods)))
            .finish()
    }
}
