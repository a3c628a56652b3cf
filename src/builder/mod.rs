//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for declaring transitions and whole
//! machines, plus shorthands for the most common transition shapes.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::engine::Transition;

/// Create a transition moving from `from` to `to` on `event`.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::StateMachine;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Job {
///     Queued,
///     Running,
/// }
///
/// let mut machine = StateMachine::new(Job::Queued);
/// machine.add(simple_transition(Job::Queued, "start", Job::Running));
///
/// assert!(machine.dispatch("start"));
/// assert_eq!(machine.current_state(), &Job::Running);
/// ```
pub fn simple_transition<S, E>(from: S, event: E, to: S) -> Transition<S, E>
where
    S: State,
    E: Event,
{
    TransitionBuilder::new().from([from]).on(event).to(to).build()
}

/// Create a transition like [`simple_transition`] that also requires
/// `guard` to return `true`.
pub fn guarded_transition<S, E, F>(from: S, event: E, to: S, guard: F) -> Transition<S, E>
where
    S: State,
    E: Event,
    F: Fn() -> bool + Send + 'static,
{
    TransitionBuilder::new()
        .from([from])
        .on(event)
        .when(guard)
        .to(to)
        .build()
}
