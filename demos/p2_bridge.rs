//! Pattern 2: Structural Composition
//! Example: Bridge — one abstraction over interchangeable implementors
//!
//! Run with: cargo run --example p2_bridge

use composition_patterns::{Outcome, PatternError, Registry, Reply};

fn main() -> Result<(), PatternError> {
    println!("=== Bridge: Remote Control over Devices ===\n");

    let mut registry = Registry::new();
    // The implementor side of the bridge: how a device reacts to a command.
    let device = registry.define_capability::<String, String>("device-command")?;

    let tv = device.register_variant(|cmd: &String| match cmd.as_str() {
        "power" => Reply::Handled("TV toggles standby".into()),
        "up" => Reply::Handled("TV channel up".into()),
        "down" => Reply::Handled("TV channel down".into()),
        _ => Reply::Declined,
    });
    let radio = device.register_variant(|cmd: &String| match cmd.as_str() {
        "power" => Reply::Handled("radio clicks on".into()),
        "up" => Reply::Handled("radio volume up".into()),
        "down" => Reply::Handled("radio volume down".into()),
        _ => Reply::Declined,
    });

    // The abstraction side: a remote is just a context bridged to a device.
    let remote = device.create_context_with(tv);

    let run = |label: &str| {
        println!("controlling the {label}:");
        for cmd in ["power", "up", "mute"] {
            match device.invoke(remote, &cmd.to_string()) {
                Outcome::Handled(effect) => println!("  {cmd:>5}: {effect}"),
                Outcome::Unhandled => println!("  {cmd:>5}: this device cannot do that"),
            }
        }
    };

    run("TV");
    // Same remote, different implementor — the abstraction never changes.
    device.set_variant(remote, radio);
    println!();
    run("radio");

    Ok(())
}
