//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::engine::{Hook, StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::{StateMachineBuilder, TransitionBuilder};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Push {
///     Knock,
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Door::Closed)
///     .transition(
///         TransitionBuilder::new()
///             .from([Door::Closed])
///             .on(Push::Knock)
///             .times(3)
///             .to(Door::Open),
///     )
///     .build()
///     .unwrap();
///
/// assert!(!machine.dispatch(Push::Knock));
/// assert!(!machine.dispatch(Push::Knock));
/// assert!(machine.dispatch(Push::Knock));
/// assert_eq!(machine.current_state(), &Door::Open);
/// ```
pub struct StateMachineBuilder<S, E> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    enter_hooks: Vec<(Option<S>, Hook<S>)>,
    exit_hooks: Vec<(Option<S>, Hook<S>)>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            enter_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Self {
        self.transitions.push(builder.build());
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Register an enter hook; `None` registers the global one.
    pub fn on_enter<F>(mut self, state: Option<S>, hook: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.enter_hooks.push((state, Box::new(hook)));
        self
    }

    /// Register an exit hook; `None` registers the global one.
    pub fn on_exit<F>(mut self, state: Option<S>, hook: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.exit_hooks.push((state, Box::new(hook)));
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add(transition);
        }
        for (state, hook) in self.enter_hooks {
            machine.on_enter(state, hook);
        }
        for (state, hook) in self.exit_hooks {
            machine.on_exit(state, hook);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::simple_transition;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum TestEvent {
        Advance,
    }

    #[test]
    fn builder_validates_initial_state() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_empty_transition_table() {
        let machine = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .build()
            .unwrap();

        assert_eq!(machine.transition_count(), 0);
        assert_eq!(machine.current_state(), &TestState::Initial);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .add_transition(simple_transition(
                TestState::Initial,
                TestEvent::Advance,
                TestState::Processing,
            ))
            .transition(
                TransitionBuilder::new()
                    .from([TestState::Processing])
                    .on(TestEvent::Advance)
                    .to(TestState::Complete),
            )
            .build()
            .unwrap();

        assert!(machine.dispatch(TestEvent::Advance));
        assert!(machine.dispatch(TestEvent::Advance));
        assert_eq!(machine.current_state(), &TestState::Complete);
        assert!(!machine.dispatch(TestEvent::Advance));
    }

    #[test]
    fn add_multiple_transitions_keeps_order() {
        let machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .transitions(vec![
                simple_transition(TestState::Initial, TestEvent::Advance, TestState::Processing),
                simple_transition(TestState::Initial, TestEvent::Advance, TestState::Complete),
            ])
            .build()
            .unwrap();

        let snapshot = machine.snapshot();
        assert_eq!(snapshot.transitions[0].destination, Some(TestState::Processing));
        assert_eq!(snapshot.transitions[1].destination, Some(TestState::Complete));
    }

    #[test]
    fn builder_registers_hooks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let enter_log = Arc::clone(&log);
        let exit_log = Arc::clone(&log);

        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .add_transition(simple_transition(
                TestState::Initial,
                TestEvent::Advance,
                TestState::Processing,
            ))
            .on_enter(None, move |s: &TestState| {
                enter_log.lock().unwrap().push(format!("enter {:?}", s))
            })
            .on_exit(Some(TestState::Initial), move |s: &TestState| {
                exit_log.lock().unwrap().push(format!("exit {:?}", s))
            })
            .build()
            .unwrap();

        assert!(machine.dispatch(TestEvent::Advance));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["exit Initial", "enter Processing"]
        );
    }
}
