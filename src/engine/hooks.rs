//! Enter/exit hook registry.

use crate::core::State;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Callback fired when a state is entered or exited. Receives that state.
pub type Hook<S> = Box<dyn FnMut(&S) + Send>;

/// Global and per-state enter/exit hooks. Registering again for the same
/// slot replaces the previous hook.
pub(crate) struct Hooks<S> {
    enter_all: Option<Hook<S>>,
    exit_all: Option<Hook<S>>,
    enter_by_state: HashMap<S, Hook<S>>,
    exit_by_state: HashMap<S, Hook<S>>,
}

impl<S: State> Hooks<S> {
    pub(crate) fn new() -> Self {
        Self {
            enter_all: None,
            exit_all: None,
            enter_by_state: HashMap::new(),
            exit_by_state: HashMap::new(),
        }
    }

    pub(crate) fn set_enter(&mut self, state: Option<S>, hook: Hook<S>) {
        match state {
            Some(state) => {
                self.enter_by_state.insert(state, hook);
            }
            None => self.enter_all = Some(hook),
        }
    }

    pub(crate) fn set_exit(&mut self, state: Option<S>, hook: Hook<S>) {
        match state {
            Some(state) => {
                self.exit_by_state.insert(state, hook);
            }
            None => self.exit_all = Some(hook),
        }
    }

    /// Move `current` to `destination`, firing hooks in order: state exit,
    /// global exit, state enter, global enter. Returns `false` without firing
    /// anything when `current` already equals `destination`.
    pub(crate) fn move_to(&mut self, current: &mut S, destination: &S) -> bool {
        if current == destination {
            return false;
        }

        self.fire_exit(current);
        *current = destination.clone();
        self.fire_enter(current);
        true
    }

    fn fire_exit(&mut self, state: &S) {
        if let Some(hook) = self.exit_by_state.get_mut(state) {
            debug!(state = ?state, "firing state exit hook");
            hook(state);
        }
        if let Some(hook) = self.exit_all.as_mut() {
            hook(state);
        }
    }

    fn fire_enter(&mut self, state: &S) {
        if let Some(hook) = self.enter_by_state.get_mut(state) {
            debug!(state = ?state, "firing state enter hook");
            hook(state);
        }
        if let Some(hook) = self.enter_all.as_mut() {
            hook(state);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Hooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("enter_all", &self.enter_all.is_some())
            .field("exit_all", &self.exit_all.is_some())
            .field("enter_by_state", &self.enter_by_state.keys().collect::<Vec<_>>())
            .field("exit_by_state", &self.exit_by_state.keys().collect::<Vec<_>>())
            .finish()
    }
}
