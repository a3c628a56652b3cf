//! Behavioural tests for event dispatch, hooks and reset.

use std::sync::{Arc, Mutex};
use switchyard::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Mode {
    A,
    B,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Signal {
    E,
    Other,
}

fn single_transition() -> StateMachine<Mode, Signal> {
    let mut machine = StateMachine::new(Mode::A);
    machine.add_transition(
        vec![from_states([Mode::A]), on_event(Signal::E)],
        vec![to_state(Mode::B)],
    );
    machine
}

fn twice_then_b() -> StateMachine<Mode, Signal> {
    let mut machine = StateMachine::new(Mode::A);
    machine.add_transition(
        vec![
            from_states([Mode::A]),
            on_event(Signal::E),
            after_n_occurrences(2),
        ],
        vec![to_state(Mode::B)],
    );
    machine
}

#[test]
fn matching_event_moves_to_destination() {
    let mut machine = single_transition();

    assert!(machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::B);
}

#[test]
fn unrelated_event_leaves_state_alone() {
    let mut machine = single_transition();

    assert!(!machine.dispatch(Signal::Other));
    assert_eq!(machine.current_state(), &Mode::A);
}

#[test]
fn times_two_fires_on_second_dispatch() {
    let mut machine = twice_then_b();

    assert!(!machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::A);

    assert!(machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::B);
}

#[test]
fn unmatched_event_between_attempts_restarts_count() {
    let mut machine = twice_then_b();

    assert!(!machine.dispatch(Signal::E));
    assert!(!machine.dispatch(Signal::Other));
    assert!(!machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::A);
}

#[test]
fn global_hooks_record_exited_and_entered_states() {
    let exited = Arc::new(Mutex::new(None));
    let entered = Arc::new(Mutex::new(None));
    let mut machine = single_transition();

    let slot = Arc::clone(&exited);
    machine.on_exit(None, move |state| *slot.lock().unwrap() = Some(*state));
    let slot = Arc::clone(&entered);
    machine.on_enter(None, move |state| *slot.lock().unwrap() = Some(*state));

    assert!(machine.dispatch(Signal::E));

    assert_eq!(*exited.lock().unwrap(), Some(Mode::A));
    assert_eq!(*entered.lock().unwrap(), Some(Mode::B));
}

#[test]
fn same_state_transition_fires_no_hooks() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let mut machine = StateMachine::new(Mode::A);
    machine.add_transition(
        vec![from_states([Mode::A]), on_event(Signal::E)],
        vec![to_state(Mode::A)],
    );

    let log = Arc::clone(&fired);
    machine.on_exit(None, move |state| log.lock().unwrap().push(*state));
    let log = Arc::clone(&fired);
    machine.on_enter(None, move |state| log.lock().unwrap().push(*state));
    let log = Arc::clone(&fired);
    machine.on_enter(Some(Mode::A), move |state| log.lock().unwrap().push(*state));

    assert!(machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::A);
    assert!(fired.lock().unwrap().is_empty());
}

#[test]
fn reset_restores_initial_state_and_clears_count() {
    let mut machine = twice_then_b();

    assert!(!machine.dispatch(Signal::E));
    machine.reset();
    assert_eq!(machine.current_state(), &Mode::A);

    assert!(!machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::A);
    assert!(machine.dispatch(Signal::E));
    assert_eq!(machine.current_state(), &Mode::B);

    machine.reset();
    assert_eq!(machine.current_state(), &Mode::A);
}

#[test]
fn deferred_and_unmatched_dispatch_look_the_same() {
    let mut deferring = twice_then_b();
    let mut empty: StateMachine<Mode, Signal> = StateMachine::new(Mode::A);

    assert_eq!(deferring.dispatch(Signal::E), empty.dispatch(Signal::E));
    assert_eq!(deferring.current_state(), empty.current_state());
}

#[test]
fn actions_before_a_panicking_action_are_kept() {
    let mut machine = StateMachine::new(Mode::A);
    machine.add_transition(
        vec![on_event(Signal::E)],
        vec![
            to_state(Mode::B),
            call(|| panic!("host callback failed")),
        ],
    );

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        machine.dispatch(Signal::E)
    }));

    assert!(outcome.is_err());
    assert_eq!(machine.current_state(), &Mode::B);
}

#[test]
fn builder_and_direct_registration_agree() {
    let mut built = StateMachineBuilder::new()
        .initial(Mode::A)
        .transition(
            TransitionBuilder::new()
                .from([Mode::A])
                .on(Signal::E)
                .times(2)
                .to(Mode::B),
        )
        .build()
        .unwrap();
    let mut direct = twice_then_b();

    for signal in [Signal::E, Signal::Other, Signal::E, Signal::E, Signal::E] {
        assert_eq!(built.dispatch(signal), direct.dispatch(signal));
        assert_eq!(built.current_state(), direct.current_state());
    }
}
