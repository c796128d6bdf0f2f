//! Traffic Light Actor
//!
//! This example demonstrates a cyclic actor whose `advance` method means
//! something different in each state.
//!
//! Key concepts:
//! - Cyclic transitions driven from inside state methods
//! - `begin` hooks that see the previous state
//! - Transition history
//!
//! Run with: RUST_LOG=demeanor=debug cargo run --example traffic_light

use demeanor::{state_table, Actor};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Lamp {
    cycles: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light Actor ===\n");

    let states = state_table!(Lamp {
        Red => {
            begin: |actor, previous| {
                actor.context_mut().cycles += 1;
                println!("  Red     (Stop)     after {previous}");
                Value::Null
            },
            advance: |actor, _| {
                actor.go_to_state("Green");
                Value::Null
            },
        },
        Green => {
            begin: |_, previous| {
                println!("  Green   (Go!)      after {previous}");
                Value::Null
            },
            advance: |actor, _| {
                actor.go_to_state("Yellow");
                Value::Null
            },
        },
        Yellow => {
            begin: |_, previous| {
                println!("  Yellow  (Caution)  after {previous}");
                Value::Null
            },
            advance: |actor, _| {
                actor.go_to_state("Red");
                Value::Null
            },
        },
    });

    let mut light = Actor::with_states(Lamp::default(), states);
    println!("Initial state: {:?}\n", light.state());

    println!("Transition sequence:");
    light.go_to_state("Red");
    for _ in 0..6 {
        if let Err(error) = light.invoke("advance", Value::Null) {
            eprintln!("{error}");
            return;
        }
    }

    println!("\nCompleted {} red phases", light.context().cycles);
    println!("States visited: {:?}", light.history().path());

    light.go_to_state(None);
    println!("Switched off, can still advance: {}", light.has_method("advance"));

    println!("\n=== Example Complete ===");
}
