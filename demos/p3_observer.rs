//! Pattern 3: Notification & Traversal
//! Example: Observer — fan-out to listeners in registration order
//!
//! Run with: cargo run --example p3_observer

use composition_patterns::{NotifyMode, PatternError, Registry, Reply};

fn main() -> Result<(), PatternError> {
    println!("=== Observer: Weather Station ===\n");

    let mut registry = Registry::new();
    // An observer acknowledges a reading with a description of its reaction.
    let listeners = registry.define_capability::<f64, String>("temperature-reading")?;

    let display = listeners.register_variant(|celsius: &f64| {
        Reply::Handled(format!("display shows {celsius:.1} C"))
    });
    let logger = listeners.register_variant(|celsius: &f64| {
        Reply::Handled(format!("logger appends {celsius:.1}"))
    });
    // Only reacts above a threshold; below it, the decline is collected
    // without disturbing the rest of the fan-out.
    let alarm = listeners.register_variant(|celsius: &f64| {
        Reply::from_option((*celsius > 30.0).then(|| "alarm sounds!".to_string()))
    });

    let station = listeners.create_context();
    listeners.subscribe(station, display);
    listeners.subscribe(station, logger);
    listeners.subscribe(station, alarm);

    for reading in [21.5, 33.2] {
        println!("reading {reading:.1} C:");
        let report = listeners.notify_all(station, &reading, NotifyMode::CollectFailures);
        for (_, reaction) in &report.delivered {
            println!("  {reaction}");
        }
        println!(
            "  ({} delivered, {} declined)\n",
            report.delivered.len(),
            report.declined.len()
        );
    }

    println!("=== Key Points ===");
    println!("- Observers fire in registration order");
    println!("- A declining observer never blocks the ones after it");
    Ok(())
}
