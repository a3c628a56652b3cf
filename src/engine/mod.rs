//! Machine runtime: transition table, hooks and event dispatch.
//!
//! # Dispatch
//!
//! For each event the transition list is scanned in declaration order. The
//! first transition whose guards do not reject is the match:
//!
//! - `Accept`: its actions run and `dispatch` returns `true`
//! - `Defer`: nothing runs and `dispatch` returns `false`, but the attempt
//!   is recorded for consecutive-occurrence guards
//!
//! Only one transition is "in progress" for counting purposes. A match of any
//! other transition, a dispatch that matches nothing, or a reset restarts
//! the count.

mod hooks;
mod machine;
mod transition;

pub use hooks::Hook;
pub use machine::StateMachine;
pub use transition::Transition;
