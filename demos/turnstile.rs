//! Coin-operated Turnstile
//!
//! This example demonstrates a classic two-state machine with hooks.
//!
//! Key concepts:
//! - Transitions declared with the builder API
//! - Global and per-state enter/exit hooks
//! - Consecutive-occurrence guard raising an alarm after repeated pushes
//! - Dispatch results for ignored events
//!
//! Run with: RUST_LOG=switchyard=debug cargo run --example turnstile

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use switchyard::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Turnstile {
    Locked,
    Unlocked,
    Alarm,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Input {
    Coin,
    Push,
    Service,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let coins = Arc::new(AtomicUsize::new(0));
    let collected = Arc::clone(&coins);

    let mut machine = StateMachineBuilder::new()
        .initial(Turnstile::Locked)
        .transition(
            TransitionBuilder::new()
                .from([Turnstile::Locked])
                .on(Input::Coin)
                .call(move || {
                    collected.fetch_add(1, Ordering::SeqCst);
                })
                .to(Turnstile::Unlocked),
        )
        .transition(
            TransitionBuilder::new()
                .from([Turnstile::Unlocked])
                .on(Input::Push)
                .to(Turnstile::Locked),
        )
        .transition(
            TransitionBuilder::new()
                .from([Turnstile::Locked])
                .on(Input::Push)
                .times(3)
                .to(Turnstile::Alarm),
        )
        .transition(
            TransitionBuilder::new()
                .from([Turnstile::Alarm])
                .on(Input::Service)
                .to(Turnstile::Locked),
        )
        .on_enter(Some(Turnstile::Alarm), |_| println!("  !! alarm raised"))
        .on_exit(Some(Turnstile::Alarm), |_| println!("  !! alarm cleared"))
        .on_enter(None, |state| println!("  entered {:?}", state))
        .build()
        .expect("initial state is set");

    let inputs = [
        Input::Coin,
        Input::Push,
        Input::Push,
        Input::Push,
        Input::Push,
        Input::Coin,
        Input::Service,
        Input::Coin,
    ];

    for input in inputs {
        let fired = machine.dispatch(input);
        println!(
            "{:<8} -> {:<9} ({})",
            format!("{:?}", input),
            format!("{:?}", machine.current_state()),
            if fired { "transition" } else { "no transition" }
        );
    }

    println!("\nCoins collected: {}", coins.load(Ordering::SeqCst));
    println!("\n=== Example Complete ===");
}
