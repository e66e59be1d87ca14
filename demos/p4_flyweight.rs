//! Pattern 4: Creational Sharing
//! Example: Flyweight — heavy shared state behind a keyed cache
//!
//! Run with: cargo run --example p4_flyweight

use composition_patterns::{Outcome, PatternError, Registry, Reply};

/// The intrinsic, shared part of a tree species: one instance per species
/// no matter how many trees reference it.
struct Species {
    name: &'static str,
    texture_kb: usize,
}

impl composition_patterns::Variant<(u32, u32), String> for Species {
    fn invoke(&self, position: &(u32, u32)) -> Reply<String> {
        let (x, y) = position;
        Reply::Handled(format!(
            "{} at ({x}, {y}) using the {} KB texture",
            self.name, self.texture_kb
        ))
    }
}

fn main() -> Result<(), PatternError> {
    println!("=== Flyweight: Forest Renderer ===\n");

    let mut registry = Registry::new();
    let render = registry.define_capability::<(u32, u32), String>("draw-tree")?;

    // Extrinsic state (the position) comes in per call; the species data is
    // created once per key and shared by every tree of that kind.
    let forest = [
        ("oak", (10, 4)),
        ("pine", (12, 9)),
        ("oak", (3, 7)),
        ("oak", (25, 1)),
        ("pine", (30, 14)),
    ];

    for (species, position) in forest {
        let shared = render.shared_variant(species, || Species {
            name: species,
            texture_kb: if species == "oak" { 640 } else { 480 },
        });
        let tree = render.create_context_with(shared);
        if let Outcome::Handled(line) = render.invoke(tree, &position) {
            println!("  {line}");
        }
    }

    println!("\ntrees drawn: {}", forest.len());
    println!("species instances actually created: {}", render.variant_count());
    Ok(())
}
