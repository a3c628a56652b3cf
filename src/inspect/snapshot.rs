//! Snapshot types describing a machine's transition table.

use crate::core::{Action, CallSite, Event, Guard, State};
use crate::engine::Transition;
use crate::inspect::error::InspectError;
use serde::{Deserialize, Serialize};

/// Static description of one transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor<S, E> {
    /// Position in the machine's transition list.
    pub index: usize,
    /// Source states from every `From` guard, in declaration order.
    pub sources: Vec<S>,
    /// Event of the first `On` guard.
    pub event: Option<E>,
    /// Target of the last `MoveTo` action, where the machine ends up.
    pub destination: Option<S>,
    /// Threshold of the first consecutive-occurrence guard.
    pub threshold: Option<usize>,
    /// Number of host predicate guards (`Check`, `NotCheck`, `Custom`).
    pub checks: usize,
    /// Where each callback action was registered, in declaration order.
    pub calls: Vec<CallSite>,
}

impl<S: State, E: Event> TransitionDescriptor<S, E> {
    pub fn describe(index: usize, transition: &Transition<S, E>) -> Self {
        let mut descriptor = Self {
            index,
            sources: Vec::new(),
            event: None,
            destination: None,
            threshold: None,
            checks: 0,
            calls: Vec::new(),
        };

        for guard in transition.guards() {
            match guard {
                Guard::From(states) => descriptor.sources.extend(states.iter().cloned()),
                Guard::On(event) => {
                    if descriptor.event.is_none() {
                        descriptor.event = Some(event.clone());
                    }
                }
                Guard::Times(n) => {
                    if descriptor.threshold.is_none() {
                        descriptor.threshold = Some(*n);
                    }
                }
                Guard::Check(_) | Guard::NotCheck(_) | Guard::Custom(_) => descriptor.checks += 1,
            }
        }

        for action in transition.actions() {
            match action {
                Action::MoveTo(state) => descriptor.destination = Some(state.clone()),
                Action::Call { site, .. } => descriptor.calls.push(site.clone()),
            }
        }

        descriptor
    }
}

/// Static description of a whole machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot<S, E> {
    pub initial: S,
    pub current: S,
    pub transitions: Vec<TransitionDescriptor<S, E>>,
}

impl<S: State, E: Event> MachineSnapshot<S, E> {
    /// Every state the machine references, in first-seen order: the initial
    /// state, then sources and destination of each transition.
    pub fn states(&self) -> Vec<S> {
        let mut states = vec![self.initial.clone()];
        for transition in &self.transitions {
            for state in transition.sources.iter().chain(&transition.destination) {
                if !states.contains(state) {
                    states.push(state.clone());
                }
            }
        }
        states
    }
}

impl<S: Serialize, E: Serialize> MachineSnapshot<S, E> {
    pub fn to_json(&self) -> Result<String, InspectError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, InspectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
