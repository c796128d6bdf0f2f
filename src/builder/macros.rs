//! Macros for ergonomic state declaration.

/// Build a `MethodMap` from `name: callable` pairs.
///
/// Every callable has the method signature `Fn(&mut Actor<C>, Value) -> Value`.
/// The keys `begin` and `end` declare hooks, which receive the adjacent
/// state's name as a JSON string or `null`.
///
/// # Example
///
/// ```
/// use demeanor::method_map;
/// use serde_json::Value;
///
/// let methods = method_map!(Vec<String> {
///     begin: |actor, previous| {
///         actor.context_mut().push(format!("entered from {previous}"));
///         Value::Null
///     },
///     shout: |_, args| Value::from(args.as_str().unwrap_or("").to_uppercase()),
/// });
///
/// assert_eq!(methods.len(), 2);
/// ```
#[macro_export]
macro_rules! method_map {
    ($ctx:ty { $($key:ident : $method:expr),* $(,)? }) => {{
        let map = $crate::MethodMap::<$ctx>::new();
        $(let map = map.method(stringify!($key), $method);)*
        map
    }};
}

/// Build a `StateTable` from state names and their methods.
///
/// # Example
///
/// ```
/// use demeanor::{state_table, Actor};
/// use serde_json::Value;
///
/// let states = state_table!(u32 {
///     Idle => {
///         wake: |actor, _| {
///             actor.go_to_state("Busy");
///             Value::Null
///         },
///     },
///     Busy => {
///         begin: |actor, _| {
///             *actor.context_mut() += 1;
///             Value::Null
///         },
///     },
/// });
///
/// let mut actor = Actor::with_states(0, states);
/// actor.go_to_state("Idle");
/// actor.invoke("wake", Value::Null).unwrap();
/// assert_eq!(actor.state(), Some("Busy"));
/// assert_eq!(*actor.context(), 1);
/// ```
#[macro_export]
macro_rules! state_table {
    ($ctx:ty { $($state:ident => { $($key:ident : $method:expr),* $(,)? }),* $(,)? }) => {
        $crate::StateTable::<$ctx>::new()
            $(.state(stringify!($state), $crate::method_map!($ctx { $($key : $method),* })))*
    };
}

#[cfg(test)]
mod tests {
    use crate::Actor;
    use serde_json::Value;

    #[derive(Default)]
    struct Log {
        entries: Vec<String>,
    }

    #[test]
    fn method_map_routes_reserved_keys_to_hooks() {
        let methods = method_map!(Log {
            begin: |actor, previous| {
                actor.context_mut().entries.push(format!("begin {previous}"));
                Value::Null
            },
            end: |actor, next| {
                actor.context_mut().entries.push(format!("end {next}"));
                Value::Null
            },
            ping: |_, _| Value::from("pong"),
        });

        let mut actor = Actor::new(Log::default());
        actor.define_state("Up", methods);
        actor.go_to_state("Up").go_to_state(None);

        assert_eq!(actor.context().entries, vec!["begin null", "end null"]);
        assert!(actor.definition("Up").unwrap().method_names() == ["ping"]);
    }

    #[test]
    fn method_map_accepts_no_entries() {
        let methods = method_map!(Log {});
        assert!(methods.is_empty());
    }

    #[test]
    fn state_table_declares_every_state() {
        let states = state_table!(Log {
            Red => { next: |actor, _| { actor.go_to_state("Green"); Value::Null } },
            Green => { next: |actor, _| { actor.go_to_state("Red"); Value::Null } },
        });

        let mut actor = Actor::with_states(Log::default(), states);
        actor.go_to_state("Red");
        actor.invoke("next", Value::Null).unwrap();
        assert_eq!(actor.state(), Some("Green"));
        actor.invoke("next", Value::Null).unwrap();
        assert_eq!(actor.state(), Some("Red"));
    }
}
