//! Pattern 1: Behavioral Selection
//! Example: State — transitions expressed as variant rebinding
//!
//! Run with: cargo run --example p1_state

use composition_patterns::{Outcome, PatternError, Registry, Reply};

/// What a state does with an event: a visible effect plus the state to
/// rebind to afterwards.
#[derive(Clone, PartialEq, Debug)]
struct Transition {
    effect: String,
    next: &'static str,
}

fn transition(effect: &str, next: &'static str) -> Reply<Transition> {
    Reply::Handled(Transition {
        effect: effect.to_string(),
        next,
    })
}

fn main() -> Result<(), PatternError> {
    println!("=== State: Turnstile ===\n");

    let mut registry = Registry::new();
    let handle = registry.define_capability::<String, Transition>("turnstile-event")?;

    let locked = handle.register_variant(|event: &String| match event.as_str() {
        "coin" => transition("unlocks", "unlocked"),
        "push" => transition("stays shut", "locked"),
        _ => Reply::Declined,
    });
    let unlocked = handle.register_variant(|event: &String| match event.as_str() {
        "coin" => transition("returns the coin", "unlocked"),
        "push" => transition("lets one person through, then locks", "locked"),
        _ => Reply::Declined,
    });

    let turnstile = handle.create_context_with(locked);
    let mut current = "locked";

    for event in ["push", "coin", "coin", "push", "push"] {
        match handle.invoke(turnstile, &event.to_string()) {
            Outcome::Handled(t) => {
                println!("[{current}] {event:>4} -> {} (now {})", t.effect, t.next);
                // The transition picks the next state; the context is rebound.
                current = t.next;
                handle.set_variant(
                    turnstile,
                    if current == "locked" { locked } else { unlocked },
                );
            }
            Outcome::Unhandled => println!("[{current}] {event:>4} -> ignored"),
        }
    }

    Ok(())
}
