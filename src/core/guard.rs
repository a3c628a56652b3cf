//! Guards decide whether a transition applies to a dispatched event.
//!
//! Every guard yields a [`GuardResult`]. A transition's guards are combined
//! with [`GuardResult::fold`]: any `Reject` rejects the whole transition, and
//! otherwise `Defer` dominates `Accept`.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of evaluating a guard, ordered `Reject < Accept < Defer`.
///
/// # Example
///
/// ```rust
/// use switchyard::core::GuardResult;
///
/// assert_eq!(GuardResult::Accept.combine(GuardResult::Defer), GuardResult::Defer);
/// assert_eq!(
///     GuardResult::fold([GuardResult::Accept, GuardResult::Accept]),
///     GuardResult::Accept
/// );
/// assert_eq!(
///     GuardResult::fold([GuardResult::Defer, GuardResult::Reject]),
///     GuardResult::Reject
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GuardResult {
    /// The transition does not apply.
    Reject,
    /// The guard's condition holds.
    Accept,
    /// The condition holds but the transition must not fire yet.
    Defer,
}

impl GuardResult {
    /// Combine two non-rejecting results; the larger one wins.
    pub fn combine(self, other: GuardResult) -> GuardResult {
        self.max(other)
    }

    /// Fold a sequence of guard results into a transition's overall result.
    ///
    /// Stops pulling from `results` at the first `Reject`, so guards after a
    /// rejecting one are never evaluated. An empty sequence yields `Reject`:
    /// a transition without guards never matches.
    pub fn fold<I>(results: I) -> GuardResult
    where
        I: IntoIterator<Item = GuardResult>,
    {
        let mut combined = GuardResult::Reject;
        for result in results {
            if result == GuardResult::Reject {
                return GuardResult::Reject;
            }
            combined = combined.combine(result);
        }
        combined
    }

    pub fn is_accept(self) -> bool {
        self == GuardResult::Accept
    }

    pub fn is_reject(self) -> bool {
        self == GuardResult::Reject
    }

    pub fn is_defer(self) -> bool {
        self == GuardResult::Defer
    }
}

impl fmt::Display for GuardResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reject => "reject",
            Self::Accept => "accept",
            Self::Defer => "defer",
        };
        f.write_str(name)
    }
}

/// Inputs available to a guard while a transition is evaluated.
#[derive(Debug)]
pub struct GuardContext<'a, S, E> {
    /// The event being dispatched.
    pub event: &'a E,
    /// 1-based count of consecutive dispatches that reached this transition.
    pub attempt: usize,
    /// The machine's current state.
    pub current: &'a S,
}

/// Host predicate consulted by `Check` and `NotCheck` guards.
pub type Predicate = Box<dyn Fn() -> bool + Send>;

/// Host guard with access to the full evaluation context.
pub type CustomGuard<S, E> = Box<dyn Fn(&GuardContext<'_, S, E>) -> GuardResult + Send>;

/// One condition attached to a transition.
///
/// Guards are plain data so a machine's rules can be inspected without
/// running them.
pub enum Guard<S, E> {
    /// Accept iff the current state is one of these.
    From(Vec<S>),
    /// Accept iff the dispatched event equals this one.
    On(E),
    /// Accept iff the predicate returns `true`.
    Check(Predicate),
    /// Accept iff the predicate returns `false`.
    NotCheck(Predicate),
    /// Defer below the threshold, accept at it, reject above it.
    Times(usize),
    /// Host-defined tri-state guard.
    Custom(CustomGuard<S, E>),
}

impl<S: State, E: Event> Guard<S, E> {
    pub fn evaluate(&self, ctx: &GuardContext<'_, S, E>) -> GuardResult {
        match self {
            Self::From(states) => accept_if(states.contains(ctx.current)),
            Self::On(event) => accept_if(event == ctx.event),
            Self::Check(predicate) => accept_if(predicate()),
            Self::NotCheck(predicate) => accept_if(!predicate()),
            Self::Times(threshold) => match ctx.attempt.cmp(threshold) {
                Ordering::Less => GuardResult::Defer,
                Ordering::Equal => GuardResult::Accept,
                Ordering::Greater => GuardResult::Reject,
            },
            Self::Custom(guard) => guard(ctx),
        }
    }

    /// Short name of the guard kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::From(_) => "from",
            Self::On(_) => "on",
            Self::Check(_) => "check",
            Self::NotCheck(_) => "not_check",
            Self::Times(_) => "times",
            Self::Custom(_) => "custom",
        }
    }
}

fn accept_if(condition: bool) -> GuardResult {
    if condition {
        GuardResult::Accept
    } else {
        GuardResult::Reject
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for Guard<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From(states) => f.debug_tuple("From").field(states).finish(),
            Self::On(event) => f.debug_tuple("On").field(event).finish(),
            Self::Check(_) => f.write_str("Check(..)"),
            Self::NotCheck(_) => f.write_str("NotCheck(..)"),
            Self::Times(n) => f.debug_tuple("Times").field(n).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Guard accepting only while the machine is in one of `states`.
pub fn from_states<S, E, I>(states: I) -> Guard<S, E>
where
    I: IntoIterator<Item = S>,
{
    Guard::From(states.into_iter().collect())
}

/// Guard accepting only the given event.
pub fn on_event<S, E>(event: E) -> Guard<S, E> {
    Guard::On(event)
}

/// Guard accepting while `predicate` returns `true`.
pub fn check<S, E, F>(predicate: F) -> Guard<S, E>
where
    F: Fn() -> bool + Send + 'static,
{
    Guard::Check(Box::new(predicate))
}

/// Guard accepting while `predicate` returns `false`.
pub fn not_check<S, E, F>(predicate: F) -> Guard<S, E>
where
    F: Fn() -> bool + Send + 'static,
{
    Guard::NotCheck(Box::new(predicate))
}

/// Guard requiring `n` consecutive matching dispatches before the transition fires.
///
/// Only meaningful when no other transition can match in between: any other
/// outcome restarts the count.
pub fn after_n_occurrences<S, E>(n: usize) -> Guard<S, E> {
    Guard::Times(n)
}

/// Guard backed by an arbitrary host function over the evaluation context.
pub fn custom<S, E, F>(guard: F) -> Guard<S, E>
where
    F: Fn(&GuardContext<'_, S, E>) -> GuardResult + Send + 'static,
{
    Guard::Custom(Box::new(guard))
}
