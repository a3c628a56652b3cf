//! The state machine and its event dispatch algorithm.

use crate::core::{Action, Event, Guard, GuardContext, GuardResult, State};
use crate::engine::hooks::Hooks;
use crate::engine::transition::Transition;
use crate::inspect::{MachineSnapshot, TransitionDescriptor};
use std::fmt;
use tracing::{debug, trace};

/// Finite state machine driven one event at a time.
///
/// Single-owner and synchronous: `dispatch` runs guards, actions and hooks
/// inline on the calling thread. Hosts sharing a machine across threads must
/// wrap it in a lock themselves.
///
/// # Example
///
/// ```rust
/// use switchyard::prelude::*;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Off,
///     On,
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Switch {
///     Flip,
/// }
///
/// let mut machine = StateMachine::new(Light::Off);
/// machine.add_transition(
///     vec![from_states([Light::Off]), on_event(Switch::Flip)],
///     vec![to_state(Light::On)],
/// );
/// machine.add_transition(
///     vec![from_states([Light::On]), on_event(Switch::Flip)],
///     vec![to_state(Light::Off)],
/// );
///
/// assert!(machine.dispatch(Switch::Flip));
/// assert_eq!(machine.current_state(), &Light::On);
/// assert!(machine.dispatch(Switch::Flip));
/// assert_eq!(machine.current_state(), &Light::Off);
/// ```
pub struct StateMachine<S, E> {
    transitions: Vec<Transition<S, E>>,
    hooks: Hooks<S>,
    current: S,
    initial: S,
    /// Index of the transition that matched (accepted or deferred) on the
    /// previous dispatch.
    last_matched: Option<usize>,
    /// Consecutive dispatches that matched `last_matched`.
    consecutive: usize,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine whose current and initial state are `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            transitions: Vec::new(),
            hooks: Hooks::new(),
            current: initial.clone(),
            initial,
            last_matched: None,
            consecutive: 0,
        }
    }

    /// Append a transition built from `guards` and `actions`.
    pub fn add_transition(&mut self, guards: Vec<Guard<S, E>>, actions: Vec<Action<S>>) {
        self.add(Transition::new(guards, actions));
    }

    /// Append a pre-built transition.
    pub fn add(&mut self, transition: Transition<S, E>) {
        self.transitions.push(transition);
    }

    /// Deliver `event`, applying at most one transition.
    ///
    /// Transitions are tried in declaration order; the first whose guards do
    /// not reject is the match. Returns `true` only when that match accepted
    /// and its actions ran. A deferred match returns `false` but still counts
    /// as an attempt for that transition.
    pub fn dispatch(&mut self, event: E) -> bool {
        for index in 0..self.transitions.len() {
            let attempt = self.attempt_for(index);
            let result = self.transitions[index].evaluate(&GuardContext {
                event: &event,
                attempt,
                current: &self.current,
            });
            trace!(index, attempt, %result, "evaluated transition");

            match result {
                GuardResult::Reject => continue,
                GuardResult::Defer => {
                    debug!(index, attempt, event = ?event, "transition deferred");
                    self.record_match(index, attempt);
                    return false;
                }
                GuardResult::Accept => {
                    debug!(index, attempt, event = ?event, from = ?self.current, "transition accepted");
                    self.transitions[index].apply(&mut self.current, &mut self.hooks);
                    self.record_match(index, attempt);
                    debug!(index, current = ?self.current, "transition applied");
                    return true;
                }
            }
        }

        trace!(event = ?event, current = ?self.current, "no transition matched");
        self.clear_match();
        false
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn is_in(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Return to the initial state without firing hooks, and restart any
    /// consecutive-occurrence count.
    pub fn reset(&mut self) {
        debug!(from = ?self.current, to = ?self.initial, "resetting machine");
        self.current = self.initial.clone();
        self.clear_match();
    }

    /// Register an enter hook: global when `state` is `None`, otherwise for
    /// that state only. Replaces any hook previously registered for the slot.
    pub fn on_enter<F>(&mut self, state: Option<S>, hook: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.hooks.set_enter(state, Box::new(hook));
    }

    /// Register an exit hook: global when `state` is `None`, otherwise for
    /// that state only. Replaces any hook previously registered for the slot.
    pub fn on_exit<F>(&mut self, state: Option<S>, hook: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.hooks.set_exit(state, Box::new(hook));
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// Read-only description of the declared rules, for diagram tooling.
    pub fn snapshot(&self) -> MachineSnapshot<S, E> {
        MachineSnapshot {
            initial: self.initial.clone(),
            current: self.current.clone(),
            transitions: self
                .transitions
                .iter()
                .enumerate()
                .map(|(index, transition)| TransitionDescriptor::describe(index, transition))
                .collect(),
        }
    }

    fn attempt_for(&self, index: usize) -> usize {
        if self.last_matched == Some(index) {
            self.consecutive + 1
        } else {
            1
        }
    }

    fn record_match(&mut self, index: usize, attempt: usize) {
        self.last_matched = Some(index);
        self.consecutive = attempt;
    }

    fn clear_match(&mut self) {
        self.last_matched = None;
        self.consecutive = 0;
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("initial", &self.initial)
            .field("transitions", &self.transitions)
            .field("hooks", &self.hooks)
            .field("last_matched", &self.last_matched)
            .field("consecutive", &self.consecutive)
            .finish()
    }
}
