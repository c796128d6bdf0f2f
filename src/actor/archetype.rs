//! Type-level state declarations.

use crate::core::{MethodMap, StateTable};

/// A host type that declares states and default methods shared by all of
/// its actors.
///
/// Archetype states land in each actor's own registry, next to any states
/// defined on the instance, and can be extended or cleared per instance.
/// Defaults answer calls the active state does not handle.
///
/// Defaults are plain methods. A `begin` or `end` hook in the map returned by
/// [`Archetype::defaults`] belongs to no state, so it is dropped with a
/// warning and never runs; declare hooks on a state in
/// [`Archetype::states`] instead.
///
/// # Example
///
/// ```rust
/// use demeanor::{Actor, Archetype, MethodMap, StateTable};
/// use serde_json::Value;
///
/// struct Guard;
///
/// impl Archetype for Guard {
///     type Context = u32;
///
///     fn states() -> StateTable<u32> {
///         StateTable::new().state(
///             "Alert",
///             MethodMap::new().method("greet", |_, _| Value::from("Halt!")),
///         )
///     }
///
///     fn defaults() -> MethodMap<u32> {
///         MethodMap::new().method("greet", |_, _| Value::from("Hello."))
///     }
/// }
///
/// let mut guard = Actor::from_archetype::<Guard>(0);
/// assert_eq!(guard.invoke("greet", Value::Null).unwrap(), "Hello.");
///
/// guard.go_to_state("Alert");
/// assert_eq!(guard.invoke("greet", Value::Null).unwrap(), "Halt!");
/// ```
pub trait Archetype {
    type Context: 'static;

    /// States every actor of this type starts with.
    fn states() -> StateTable<Self::Context>;

    /// Methods used when the active state does not provide one.
    fn defaults() -> MethodMap<Self::Context> {
        MethodMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Actor;
    use serde_json::Value;

    #[derive(Default)]
    struct Lamp {
        lit: bool,
        stray_hooks: u32,
    }

    struct LampType;

    impl Archetype for LampType {
        type Context = Lamp;

        fn states() -> StateTable<Lamp> {
            StateTable::new()
                .state(
                    "On",
                    MethodMap::new()
                        .begin(|actor: &mut Actor<Lamp>, _| actor.context_mut().lit = true)
                        .method("glow", |_, _| Value::Bool(true)),
                )
                .state(
                    "Off",
                    MethodMap::new()
                        .begin(|actor: &mut Actor<Lamp>, _| actor.context_mut().lit = false)
                        .method("glow", |_, _| Value::Bool(false)),
                )
        }

        fn defaults() -> MethodMap<Lamp> {
            MethodMap::new()
                .begin(|actor: &mut Actor<Lamp>, _| actor.context_mut().stray_hooks += 1)
                .end(|actor: &mut Actor<Lamp>, _| actor.context_mut().stray_hooks += 1)
                .method("describe", |actor: &mut Actor<Lamp>, _| {
                    Value::from(actor.state().unwrap_or("unplugged"))
                })
        }
    }

    #[test]
    fn archetype_states_are_registered() {
        let actor = Actor::from_archetype::<LampType>(Lamp::default());

        assert!(actor.is_defined("On"));
        assert!(actor.is_defined("Off"));
        assert_eq!(actor.state(), None);
    }

    #[test]
    fn defaults_use_the_actor_as_receiver() {
        let mut actor = Actor::from_archetype::<LampType>(Lamp::default());
        assert_eq!(actor.invoke("describe", Value::Null), Ok(Value::from("unplugged")));

        actor.go_to_state("On");
        assert!(actor.context().lit);
        assert_eq!(actor.invoke("describe", Value::Null), Ok(Value::from("On")));
    }

    #[test]
    fn hooks_in_defaults_are_ignored() {
        let mut actor = Actor::from_archetype::<LampType>(Lamp::default());

        assert!(!actor.has_default("begin"));
        assert!(!actor.has_default("end"));
        assert!(actor.has_default("describe"));
        assert!(actor.invoke("begin", Value::Null).is_err());

        actor.go_to_state("On").go_to_state("Off").go_to_state(None);
        assert_eq!(actor.context().stray_hooks, 0);
    }

    #[test]
    fn instance_definitions_extend_archetype_states() {
        let mut actor = Actor::from_archetype::<LampType>(Lamp::default());
        actor.define_state("On", MethodMap::new().method("hum", |_, _| Value::Null));
        actor.go_to_state("On");

        assert_eq!(actor.methods(), ["glow", "hum"]);
    }
}
