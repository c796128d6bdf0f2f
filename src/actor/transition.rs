//! The transition engine.

use super::dispatch::DispatchTable;
use super::{ActiveState, Actor};
use crate::core::TransitionRecord;
use std::rc::Rc;
use tracing::{debug, trace};

impl<C> Actor<C> {
    /// Move to the state `name`, or to the null state for `None`.
    ///
    /// An undefined or cleared name silently resolves to the null state.
    /// Re-entering the active definition is a no-op: no hooks run and the
    /// method table is left alone.
    ///
    /// Otherwise, in order: the active state's `end` hook runs with the
    /// target's name, the target becomes active, the previous methods are
    /// removed, the target's methods are installed, and its `begin` hook
    /// runs with the previous state's name. Entering the null state skips
    /// the last two steps.
    ///
    /// The target is looked up again once `end` returns, so methods and
    /// hooks that `end` defines on it are the ones installed. If `end`
    /// clears the target, the actor lands in the null state instead.
    pub fn go_to_state<'a>(&mut self, name: impl Into<Option<&'a str>>) -> &mut Self {
        let requested = name.into();
        let target = requested
            .and_then(|n| self.definition(n))
            .map(|d| (d.id(), d.name().to_owned()));

        if self.state_id() == target.as_ref().map(|(id, _)| *id) {
            trace!(state = ?self.state(), "already in requested state");
            return self;
        }

        if let (Some(unknown), None) = (requested, &target) {
            debug!(state = unknown, "unknown state, falling back to the null state");
        }

        let previous = self.state().map(str::to_owned);

        if let Some(end) = self.active.as_ref().map(|active| Rc::clone(&active.end)) {
            end(self, target.as_ref().map(|(_, name)| name.as_str()));
        }

        let (active, entry) = target
            .and_then(|(id, name)| {
                let definition = self.definition(&name);
                match definition {
                    None => debug!(state = %name, "target cleared by end hook, falling back to the null state"),
                    Some(d) if d.id() != id => debug!(state = %name, "target redefined by end hook"),
                    Some(_) => {}
                }
                definition.map(|d| {
                    let active = ActiveState {
                        id: d.id(),
                        name: d.name().to_owned(),
                        end: Rc::clone(d.end_hook()),
                    };
                    (active, (DispatchTable::snapshot(d), Rc::clone(d.begin_hook())))
                })
            })
            .unzip();
        let next_name = active.as_ref().map(|active| active.name.clone());

        self.active = active;
        self.injected = DispatchTable::default();

        debug!(from = ?previous, to = ?next_name, "state transition");
        self.history
            .push(TransitionRecord::now(previous.as_deref(), next_name.as_deref()));

        let Some((methods, begin)) = entry else {
            return self;
        };

        self.injected = methods;
        begin(self, previous.as_deref());
        self
    }

    /// Write the current state; equivalent to [`Actor::go_to_state`].
    pub fn set_state<'a>(&mut self, name: impl Into<Option<&'a str>>) {
        self.go_to_state(name);
    }
}
