//! Builder for constructing transitions.

use crate::core::{
    after_n_occurrences, call, check, from_states, not_check, on_event, to_state, Action, Event,
    Guard, State,
};
use crate::engine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// Guards and actions keep the order in which they are added. There is no
/// validation: a transition without guards simply never matches.
pub struct TransitionBuilder<S, E> {
    guards: Vec<Guard<S, E>>,
    actions: Vec<Action<S>>,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            guards: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Only apply while the machine is in one of `states`.
    pub fn from<I>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.guard(from_states(states))
    }

    /// Only apply to `event`.
    pub fn on(self, event: E) -> Self {
        self.guard(on_event(event))
    }

    /// Only apply while `predicate` returns `true`.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        self.guard(check(predicate))
    }

    /// Only apply while `predicate` returns `false`.
    pub fn unless<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        self.guard(not_check(predicate))
    }

    /// Fire on the `n`th consecutive match.
    pub fn times(self, n: usize) -> Self {
        self.guard(after_n_occurrences(n))
    }

    /// Add any guard.
    pub fn guard(mut self, guard: Guard<S, E>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Move to `state` when the transition fires.
    pub fn to(self, state: S) -> Self {
        self.action(to_state(state))
    }

    /// Run `callback` when the transition fires.
    #[track_caller]
    pub fn call<F>(self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.action(call(callback))
    }

    /// Add any action.
    pub fn action(mut self, action: Action<S>) -> Self {
        self.actions.push(action);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Transition<S, E> {
        Transition::new(self.guards, self.actions)
    }
}

impl<S: State, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
