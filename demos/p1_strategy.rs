//! Pattern 1: Behavioral Selection
//! Example: Strategy — swapping the algorithm behind a fixed context
//!
//! Run with: cargo run --example p1_strategy

use composition_patterns::{Outcome, PatternError, Registry, Reply};

struct Order {
    distance_km: f64,
    weight_kg: f64,
}

fn main() -> Result<(), PatternError> {
    println!("=== Strategy: Shipping Quotes ===\n");

    let mut registry = Registry::new();
    let cost = registry.define_capability::<Order, f64>("shipping-cost")?;

    // Three interchangeable pricing strategies under one contract.
    let road = cost.register_variant(|o: &Order| Reply::Handled(1.0 + 0.25 * o.distance_km));
    let air = cost.register_variant(|o: &Order| Reply::Handled(10.0 + 1.5 * o.weight_kg));
    let pickup = cost.register_variant(|_: &Order| Reply::Handled(0.0));

    let quote = cost.create_context_with(road);
    let order = Order {
        distance_km: 120.0,
        weight_kg: 4.0,
    };

    println!("Order: 120 km, 4 kg\n");
    for (label, strategy) in [("road", road), ("air", air), ("pickup", pickup)] {
        // The context stays the same; only the bound strategy changes.
        cost.set_variant(quote, strategy);
        match cost.invoke(quote, &order) {
            Outcome::Handled(total) => println!("  {label:>6}: {total:.2} EUR"),
            Outcome::Unhandled => println!("  {label:>6}: no quote"),
        }
    }

    println!("\n=== Key Points ===");
    println!("- The caller only ever talks to the context");
    println!("- set_variant swaps the algorithm without touching call sites");
    Ok(())
}
