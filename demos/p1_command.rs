//! Pattern 1: Behavioral Selection
//! Example: Command — requests reified as registered variants
//!
//! Run with: cargo run --example p1_command

use composition_patterns::{Outcome, PatternError, Registry, Reply};

fn main() -> Result<(), PatternError> {
    println!("=== Command: Programmable Remote ===\n");

    let mut registry = Registry::new();
    // A command takes no input and reports what it did.
    let commands = registry.define_capability::<(), String>("remote-button")?;

    let lights_on = commands.register_variant(|_: &()| Reply::Handled("living room lights on".into()));
    let lights_off = commands.register_variant(|_: &()| Reply::Handled("living room lights off".into()));
    let brew = commands.register_variant(|_: &()| Reply::Handled("coffee machine brewing".into()));

    // The invoker knows buttons, not commands.
    let button_a = commands.create_context_with(lights_on);
    let button_b = commands.create_context_with(brew);

    let press = |label: &str, button| match commands.invoke(button, &()) {
        Outcome::Handled(done) => println!("  press {label}: {done}"),
        Outcome::Unhandled => println!("  press {label}: not assigned"),
    };

    println!("Morning profile:");
    press("A", button_a);
    press("B", button_b);

    // Reassigning a button is just rebinding its variant.
    println!("\nEvening profile:");
    commands.set_variant(button_a, lights_off);
    press("A", button_a);
    press("B", button_b);

    // An unassigned button declines rather than failing.
    let button_c = commands.create_context();
    press("C", button_c);

    Ok(())
}
