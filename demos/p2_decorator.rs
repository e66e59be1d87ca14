//! Pattern 2: Structural Composition
//! Example: Decorator — cost accumulation through nested wraps
//!
//! Run with: cargo run --example p2_decorator

use composition_patterns::{Layer, Outcome, PatternError, Registry, Reply, WrapOrder};

/// An add-on that surcharges whatever the wrapped drink costs.
struct AddOn {
    label: &'static str,
    surcharge: f64,
}

impl Layer<String, f64> for AddOn {
    fn wrap(&self, _order: &String, inner: Outcome<f64>) -> Reply<f64> {
        match inner {
            // Inner first, own contribution on the way out.
            Outcome::Handled(cost) => {
                println!("    + {} ({:.2})", self.label, self.surcharge);
                Reply::Handled(cost + self.surcharge)
            }
            Outcome::Unhandled => Reply::Declined,
        }
    }
}

fn main() -> Result<(), PatternError> {
    println!("=== Decorator: Coffee Order ===\n");

    let mut registry = Registry::new();
    let pricing = registry.define_capability::<String, f64>("drink-price")?;

    let espresso = pricing.register_variant(|_: &String| Reply::Handled(5.0));
    let plain = pricing.create_context_with(espresso);

    // Later-applied wrappers are outer layers.
    let with_milk = pricing.compose(
        AddOn { label: "milk", surcharge: 1.0 },
        WrapOrder::InsideOut,
        plain,
    );
    let with_vanilla = pricing.compose(
        AddOn { label: "vanilla", surcharge: 0.5 },
        WrapOrder::InsideOut,
        with_milk,
    );

    let order = "espresso".to_string();
    let show = |label: &str, ctx| {
        if let Outcome::Handled(total) = pricing.invoke(ctx, &order) {
            println!("  {label:<24} {total:.2}");
        }
    };

    show("espresso", plain);
    show("espresso + milk", with_milk);
    show("espresso + milk + vanilla", with_vanilla);

    println!("\n=== Key Points ===");
    println!("- Each wrap is a fresh context; the plain drink is untouched");
    println!("- Evaluation is inside-out: base cost first, surcharges on the way out");
    Ok(())
}
