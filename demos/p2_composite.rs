//! Pattern 2: Structural Composition
//! Example: Composite — uniform treatment of leaves and groups
//!
//! Run with: cargo run --example p2_composite

use composition_patterns::{PatternError, Registry, Reply, TraversalOrder};

fn main() -> Result<(), PatternError> {
    println!("=== Composite: Pricing a Packed Order ===\n");

    let mut registry = Registry::new();
    let pricing = registry.define_capability::<(), f64>("item-price")?;

    let product = |price: f64| pricing.register_variant(move |_: &()| Reply::Handled(price));
    // A box contributes its own packaging fee on top of its contents.
    let packaging = pricing.register_variant(|_: &()| Reply::Handled(0.5));

    // big box               0.50 packaging
    // ├── phone            300.00
    // ├── charger           25.00
    // └── small box          0.50 packaging
    //     ├── headphones    90.00
    //     └── cable          5.00
    let big_box = pricing.create_context_with(packaging);
    let small_box = pricing.create_context_with(packaging);
    let phone = pricing.create_context_with(product(300.0));
    let charger = pricing.create_context_with(product(25.0));
    let headphones = pricing.create_context_with(product(90.0));
    let cable = pricing.create_context_with(product(5.0));

    pricing.add_child(big_box, phone)?;
    pricing.add_child(big_box, charger)?;
    pricing.add_child(big_box, small_box)?;
    pricing.add_child(small_box, headphones)?;
    pricing.add_child(small_box, cable)?;

    let contributions = pricing.traverse(big_box, &(), TraversalOrder::NodeFirst);
    println!("contributions (depth-first): {contributions:?}");
    println!("order total: {:.2}\n", contributions.iter().sum::<f64>());

    // Removing a subtree removes all of its contributions.
    pricing.remove_child(big_box, small_box);
    let trimmed = pricing.traverse(big_box, &(), TraversalOrder::NodeFirst);
    println!("without the small box: {:.2}", trimmed.iter().sum::<f64>());

    Ok(())
}
