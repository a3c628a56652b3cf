//! Building blocks of a machine's rules.
//!
//! - Identifier traits for states and events
//! - Guards with their tri-state [`GuardResult`]
//! - Actions run when a transition fires
//!
//! Guards and actions are tagged values rather than opaque closures, so a
//! machine's declared rules stay inspectable.

mod action;
mod guard;
mod state;

pub use action::{call, to_state, Action, CallSite, Callback};
pub use guard::{
    after_n_occurrences, check, custom, from_states, not_check, on_event, CustomGuard, Guard,
    GuardContext, GuardResult, Predicate,
};
pub use state::{Event, State};
