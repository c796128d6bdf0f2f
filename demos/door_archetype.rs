//! Door Archetype
//!
//! This example demonstrates type-level states and default methods shared
//! by every actor of a host type, extended per instance.
//!
//! Key concepts:
//! - `Archetype` declares common states once
//! - Defaults answer calls the current state does not handle
//! - Instance definitions merge into archetype states
//!
//! Run with: cargo run --example door_archetype

use demeanor::{Actor, ActorBuilder, Archetype, MethodMap, StateTable};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Door {
    code: String,
    attempts: u32,
}

struct DoorType;

impl Archetype for DoorType {
    type Context = Door;

    fn states() -> StateTable<Door> {
        StateTable::new()
            .state(
                "Open",
                MethodMap::new().method("close", |actor: &mut Actor<Door>, _| {
                    actor.go_to_state("Closed");
                    Value::from("closed")
                }),
            )
            .state(
                "Closed",
                MethodMap::new()
                    .method("open", |actor: &mut Actor<Door>, _| {
                        actor.go_to_state("Open");
                        Value::from("opened")
                    })
                    .method("lock", |actor: &mut Actor<Door>, code| {
                        actor.context_mut().code = code.as_str().unwrap_or_default().to_owned();
                        actor.go_to_state("Locked");
                        Value::from("locked")
                    }),
            )
            .state(
                "Locked",
                MethodMap::new()
                    .begin(|actor: &mut Actor<Door>, _| actor.context_mut().attempts = 0)
                    .method("unlock", |actor: &mut Actor<Door>, code| {
                        if code.as_str() == Some(actor.context().code.as_str()) {
                            actor.go_to_state("Closed");
                            Value::from("unlocked")
                        } else {
                            actor.context_mut().attempts += 1;
                            Value::from("wrong code")
                        }
                    }),
            )
    }

    fn defaults() -> MethodMap<Door> {
        MethodMap::new().method("knock", |actor: &mut Actor<Door>, _| {
            Value::from(format!("knock knock ({})", actor.state().unwrap_or("nowhere")))
        })
    }
}

fn call(door: &mut Actor<Door>, method: &str, args: Value) {
    match door.invoke(method, args) {
        Ok(reply) => println!("  {method:<7} -> {reply}"),
        Err(error) => println!("  {method:<7} -> {error}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Door Archetype ===\n");

    // This door also rings a bell while it is closed.
    let mut door = ActorBuilder::new()
        .archetype::<DoorType>()
        .state(
            "Closed",
            MethodMap::new().method("ring", |_, _| Value::from("ding dong")),
        )
        .build(Door::default());

    door.go_to_state("Closed");
    call(&mut door, "ring", Value::Null);
    call(&mut door, "knock", Value::Null);
    call(&mut door, "lock", Value::from("1234"));
    call(&mut door, "open", Value::Null);
    call(&mut door, "unlock", Value::from("0000"));
    call(&mut door, "unlock", Value::from("1234"));
    call(&mut door, "open", Value::Null);
    call(&mut door, "close", Value::Null);

    println!("\nFinal door: {door:?}");
    println!("\n=== Example Complete ===");
}
