//! Read-only export of a machine's declared rules.
//!
//! Diagram generators and other tooling consume a [`MachineSnapshot`]
//! instead of the live machine: it never dispatches and never mutates.
//! Rendering is left to the consumer.

pub mod error;
mod snapshot;

pub use error::InspectError;
pub use snapshot::{MachineSnapshot, TransitionDescriptor};
