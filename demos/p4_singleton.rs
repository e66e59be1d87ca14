//! Pattern 4: Creational Sharing
//! Example: Singleton — an explicit create-or-return cell, not a hidden global
//!
//! Run with: cargo run --example p4_singleton

use composition_patterns::SingletonCell;

#[derive(Debug)]
struct AppConfig {
    environment: &'static str,
    connections_opened: u32,
}

// The one instance lives here, created on first access. There is no other
// way to reach it than through the cell.
static CONFIG: SingletonCell<AppConfig> = SingletonCell::new();

fn load_config() -> AppConfig {
    println!("  (loading configuration once)");
    AppConfig {
        environment: "production",
        connections_opened: 0,
    }
}

fn open_connection() -> u32 {
    CONFIG.with(load_config, |cfg| {
        cfg.connections_opened += 1;
        cfg.connections_opened
    })
}

fn main() {
    println!("=== Singleton: Shared App Config ===\n");

    println!("first access:");
    let first = open_connection();
    println!("second access:");
    let second = open_connection();
    println!("  connections so far: {first}, then {second}");

    CONFIG.with(load_config, |cfg| {
        println!("  environment: {}", cfg.environment);
    });

    // Tests need isolation from process-wide state; the reset hook drops
    // the instance so the next access starts over.
    println!("\nafter reset:");
    CONFIG.reset();
    let restarted = open_connection();
    println!("  connections so far: {restarted}");
}
