//! Transitions: ordered guards plus ordered actions.

use crate::core::{Action, Event, Guard, GuardContext, GuardResult, State};
use crate::engine::hooks::Hooks;
use std::fmt;

/// A declared rule: all guards must pass for the actions to run.
///
/// Position in the machine's transition list is significant: the first
/// transition whose guards do not reject wins.
pub struct Transition<S, E> {
    guards: Vec<Guard<S, E>>,
    actions: Vec<Action<S>>,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(guards: Vec<Guard<S, E>>, actions: Vec<Action<S>>) -> Self {
        Self { guards, actions }
    }

    pub fn guards(&self) -> &[Guard<S, E>] {
        &self.guards
    }

    pub fn actions(&self) -> &[Action<S>] {
        &self.actions
    }

    /// Combined result of this transition's guards (pure with respect to the
    /// machine). Evaluation stops at the first rejecting guard.
    pub fn evaluate(&self, ctx: &GuardContext<'_, S, E>) -> GuardResult {
        GuardResult::fold(self.guards.iter().map(|guard| guard.evaluate(ctx)))
    }

    /// Run every action in declaration order.
    pub(crate) fn apply(&mut self, current: &mut S, hooks: &mut Hooks<S>) {
        for action in &mut self.actions {
            match action {
                Action::MoveTo(destination) => {
                    hooks.move_to(current, destination);
                }
                Action::Call { callback, .. } => callback(),
            }
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("guards", &self.guards)
            .field("actions", &self.actions)
            .finish()
    }
}
