//! Identifier traits for machine states and events.
//!
//! States and events are opaque tokens supplied by the host. The engine only
//! compares them; it never inspects or invents values. Both traits are
//! blanket-implemented, so deriving the standard traits on a host enum is all
//! that is needed.

use std::fmt::Debug;
use std::hash::Hash;

/// Token naming one mode of a machine.
///
/// `Hash` is required because enter/exit hooks are stored per state.
/// `Debug` is used for log fields and for labels in diagrams.
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
/// assert_state(&Door::Open);
/// ```
pub trait State: Clone + Eq + Hash + Debug + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Token naming one stimulus delivered to a machine.
pub trait Event: Clone + PartialEq + Debug + 'static {}

impl<T> Event for T where T: Clone + PartialEq + Debug + 'static {}
