//! Actions run when a transition fires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// Host callback run by a `Call` action.
pub type Callback = Box<dyn FnMut() + Send>;

/// Source location where a callback was attached to a transition.
///
/// Serves as the callback's identifier in machine snapshots, since closures
/// have no name of their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Location of the caller of the function this is invoked from.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One step executed, in declaration order, when a transition's guards accept.
///
/// Actions of one transition are not atomic: if a later action panics, the
/// effects of earlier ones (including a state change) remain.
pub enum Action<S> {
    /// Move to the given state, firing exit then enter hooks. A no-op when
    /// the machine is already in that state.
    MoveTo(S),
    /// Run a host callback.
    Call { callback: Callback, site: CallSite },
}

impl<S> Action<S> {
    pub fn destination(&self) -> Option<&S> {
        match self {
            Self::MoveTo(state) => Some(state),
            Self::Call { .. } => None,
        }
    }

    pub fn call_site(&self) -> Option<&CallSite> {
        match self {
            Self::MoveTo(_) => None,
            Self::Call { site, .. } => Some(site),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(state) => f.debug_tuple("MoveTo").field(state).finish(),
            Self::Call { site, .. } => write!(f, "Call({})", site),
        }
    }
}

/// Action moving the machine to `state`.
pub fn to_state<S>(state: S) -> Action<S> {
    Action::MoveTo(state)
}

/// Action running `callback`. The caller's source location becomes the
/// callback's identifier.
#[track_caller]
pub fn call<S, F>(callback: F) -> Action<S>
where
    F: FnMut() + Send + 'static,
{
    Action::Call {
        callback: Box::new(callback),
        site: CallSite::caller(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Open,
    }

    #[test]
    fn to_state_exposes_destination() {
        let action = to_state(TestState::Open);
        assert_eq!(action.destination(), Some(&TestState::Open));
        assert!(action.call_site().is_none());
    }

    #[test]
    fn call_records_its_call_site() {
        let line = line!() + 1;
        let action: Action<TestState> = call(|| {});

        let site = action.call_site().expect("call action has a site");
        assert_eq!(site.line, line);
        assert!(site.file.ends_with("action.rs"));
        assert!(action.destination().is_none());
    }

    #[test]
    fn call_site_displays_as_file_and_line() {
        let site = CallSite {
            file: "src/door.rs".to_string(),
            line: 42,
        };
        assert_eq!(site.to_string(), "src/door.rs:42");
    }

    #[test]
    fn call_callback_is_fn_mut() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut local = 0;
        let mut action: Action<TestState> = call(move || {
            local += 1;
            counter.store(local, Ordering::SeqCst);
        });

        if let Action::Call { callback, .. } = &mut action {
            callback();
            callback();
        }

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(format!("{:?}", to_state(TestState::Open)), "MoveTo(Open)");
    }
}
