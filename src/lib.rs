//! Switchyard: an embeddable finite state machine engine
//!
//! A host declares states, events, guarded transitions and enter/exit hooks,
//! then drives the machine one event at a time with
//! [`StateMachine::dispatch`]. The engine is synchronous and single-owner; it
//! holds no resources beyond its transition table and hook maps.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque host tokens, compared for equality only
//! - **Guards**: conditions yielding `Reject`, `Accept` or `Defer`
//! - **Actions**: state moves and host callbacks, run when a transition fires
//! - **Times**: a transition may require several consecutive matches
//! - **Hooks**: global or per-state callbacks around every state change
//! - **Snapshots**: read-only export of the declared rules for diagram tools
//!
//! # Example
//!
//! ```rust
//! use switchyard::prelude::*;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Connection {
//!     Idle,
//!     Handshaking,
//!     Established,
//! }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Packet {
//!     Syn,
//!     Ack,
//! }
//!
//! let mut machine = StateMachine::new(Connection::Idle);
//! machine.add_transition(
//!     vec![from_states([Connection::Idle]), on_event(Packet::Syn)],
//!     vec![to_state(Connection::Handshaking)],
//! );
//! machine.add_transition(
//!     vec![
//!         from_states([Connection::Handshaking]),
//!         on_event(Packet::Ack),
//!         after_n_occurrences(2),
//!     ],
//!     vec![to_state(Connection::Established)],
//! );
//!
//! assert!(machine.dispatch(Packet::Syn));
//! assert!(!machine.dispatch(Packet::Ack)); // first of two required acks
//! assert!(machine.dispatch(Packet::Ack));
//! assert_eq!(machine.current_state(), &Connection::Established);
//!
//! machine.reset();
//! assert_eq!(machine.current_state(), &Connection::Idle);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod inspect;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Action, CallSite, Event, Guard, GuardContext, GuardResult, State};
pub use crate::engine::{StateMachine, Transition};
pub use crate::inspect::{InspectError, MachineSnapshot, TransitionDescriptor};

/// Everything needed to declare and drive a machine.
pub mod prelude {
    pub use crate::builder::{
        guarded_transition, simple_transition, StateMachineBuilder, TransitionBuilder,
    };
    pub use crate::core::{
        after_n_occurrences, call, check, custom, from_states, not_check, on_event, to_state,
        Action, Event, Guard, GuardContext, GuardResult, State,
    };
    pub use crate::engine::{StateMachine, Transition};
    pub use crate::inspect::MachineSnapshot;
}
