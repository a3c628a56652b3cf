//! Protocol Handshake
//!
//! This example models a connection handshake that needs two acknowledgements
//! and an external readiness check, then exports its rules for tooling.
//!
//! Key concepts:
//! - Direct registration with guard and action constructors
//! - External checks consulted at dispatch time
//! - Deferred matches reporting "no transition"
//! - JSON snapshot consumed by diagram generators
//!
//! Run with: RUST_LOG=switchyard=trace cargo run --example handshake

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use switchyard::prelude::*;
use switchyard::InspectError;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
enum Link {
    Closed,
    SynSent,
    Established,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
enum Frame {
    Open,
    Ack,
    Reset,
}

fn main() -> Result<(), InspectError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Protocol Handshake ===\n");

    let peer_ready = Arc::new(AtomicBool::new(false));
    let ready = Arc::clone(&peer_ready);

    let mut machine = StateMachine::new(Link::Closed);
    machine.add_transition(
        vec![
            from_states([Link::Closed]),
            on_event(Frame::Open),
            check(move || ready.load(Ordering::SeqCst)),
        ],
        vec![to_state(Link::SynSent)],
    );
    machine.add_transition(
        vec![
            from_states([Link::SynSent]),
            on_event(Frame::Ack),
            after_n_occurrences(2),
        ],
        vec![
            to_state(Link::Established),
            call(|| println!("  link up")),
        ],
    );
    machine.add_transition(
        vec![
            from_states([Link::SynSent, Link::Established]),
            on_event(Frame::Reset),
        ],
        vec![to_state(Link::Closed)],
    );

    println!("Open before peer is ready: {}", machine.dispatch(Frame::Open));
    peer_ready.store(true, Ordering::SeqCst);
    println!("Open after peer is ready:  {}", machine.dispatch(Frame::Open));
    println!("First ack (deferred):      {}", machine.dispatch(Frame::Ack));
    println!("Second ack:                {}", machine.dispatch(Frame::Ack));
    println!("State: {:?}\n", machine.current_state());

    println!("Snapshot for diagram tooling:");
    println!("{}", machine.snapshot().to_json_pretty()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
