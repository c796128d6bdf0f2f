//! Incremental definition of named states.

use super::Actor;
use crate::core::{MethodMap, StateDefinition, StateTable};
use tracing::{trace, warn};

impl<C: 'static> Actor<C> {
    /// Define or extend the state `name`.
    ///
    /// Methods are merged into an existing definition, adding or
    /// overwriting by name, and `begin`/`end` replace the current hooks.
    /// Passing `None` or an empty map clears an existing definition; the
    /// state then behaves as if it were never defined. Clearing an unknown
    /// state does nothing.
    ///
    /// No callable runs during definition.
    pub fn define_state(
        &mut self,
        name: &str,
        methods: impl Into<Option<MethodMap<C>>>,
    ) -> &mut Self {
        if name.is_empty() {
            warn!("ignoring state definition with an empty name");
            return self;
        }

        let Some(methods) = methods.into().filter(|m| !m.is_empty()) else {
            if let Some(slot) = self.registry.get_mut(name) {
                if slot.take().is_some() {
                    trace!(state = name, "cleared state definition");
                }
            }
            return self;
        };

        trace!(state = name, entries = methods.len(), "merging state definition");
        self.registry
            .entry(name.to_owned())
            .or_default()
            .get_or_insert_with(|| StateDefinition::new(name))
            .merge(methods);
        self
    }

    /// Apply [`Actor::define_state`] to every entry of `states`.
    pub fn define_states(&mut self, states: impl Into<Option<StateTable<C>>>) -> &mut Self {
        for (name, methods) in states.into().into_iter().flatten() {
            self.define_state(&name, methods);
        }
        self
    }
}

impl<C> Actor<C> {
    /// Look up a live definition. Cleared states are reported as absent.
    pub fn definition(&self, name: &str) -> Option<&StateDefinition<C>> {
        self.registry.get(name).and_then(Option::as_ref)
    }

    /// Whether `name` has a live (defined, not cleared) definition.
    pub fn is_defined(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    /// Names of every live state definition, in no particular order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.registry
            .iter()
            .filter(|(_, slot)| slot.is_some())
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn noop(_: &mut Actor<()>, _: Value) -> Value {
        Value::Null
    }

    fn methods(names: &[&str]) -> MethodMap<()> {
        names
            .iter()
            .fold(MethodMap::new(), |map, name| map.method(*name, noop))
    }

    #[test]
    fn define_state_creates_definition() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["m"]));

        let definition = actor.definition("A").unwrap();
        assert_eq!(definition.name(), "A");
        assert_eq!(definition.method_names(), ["m"]);
    }

    #[test]
    fn redefinition_merges_methods() {
        let mut actor = Actor::new(());
        actor
            .define_state("A", methods(&["m"]))
            .define_state("A", methods(&["n", "m"]));

        assert_eq!(actor.definition("A").unwrap().method_names(), ["m", "n"]);
    }

    #[test]
    fn redefinition_keeps_identity() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["m"]));
        let id = actor.definition("A").unwrap().id();

        actor.define_state("A", methods(&["n"]));
        assert_eq!(actor.definition("A").unwrap().id(), id);
    }

    #[test]
    fn absent_map_clears_definition() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["m"]));
        actor.define_state("A", None);

        assert!(!actor.is_defined("A"));
        assert_eq!(actor.state_names().count(), 0);
    }

    #[test]
    fn empty_map_clears_definition() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["m"]));
        actor.define_state("A", MethodMap::new());

        assert!(!actor.is_defined("A"));
    }

    #[test]
    fn clearing_unknown_state_is_noop() {
        let mut actor = Actor::new(());
        actor.define_state("Ghost", None);

        assert!(!actor.is_defined("Ghost"));
        assert!(actor.registry.is_empty());
    }

    #[test]
    fn redefining_cleared_state_mints_new_identity() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["m"]));
        let first = actor.definition("A").unwrap().id();

        actor.define_state("A", None);
        actor.define_state("A", methods(&["n"]));

        let definition = actor.definition("A").unwrap();
        assert_ne!(definition.id(), first);
        assert_eq!(definition.method_names(), ["n"]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut actor = Actor::new(());
        actor.define_state("", methods(&["m"]));

        assert!(actor.registry.is_empty());
    }

    #[test]
    fn define_states_applies_every_entry() {
        let mut actor = Actor::new(());
        actor.define_states(
            StateTable::new()
                .state("A", methods(&["a"]))
                .state("B", methods(&["b"])),
        );

        let mut names: Vec<&str> = actor.state_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn define_states_accepts_nothing() {
        let mut actor = Actor::new(());
        actor.define_states(None);

        assert_eq!(actor.state_names().count(), 0);
    }

    #[test]
    fn define_states_can_clear() {
        let mut actor = Actor::new(());
        actor.define_state("A", methods(&["a"]));
        actor.define_states(StateTable::new().state("A", MethodMap::new()));

        assert!(!actor.is_defined("A"));
    }
}
