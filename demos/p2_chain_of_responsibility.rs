//! Pattern 2: Structural Composition
//! Example: Chain of Responsibility — fall-through along successor links
//!
//! Run with: cargo run --example p2_chain_of_responsibility

use composition_patterns::{Outcome, PatternError, Registry, Reply};

struct Ticket {
    subject: &'static str,
    severity: u8,
}

fn main() -> Result<(), PatternError> {
    println!("=== Chain of Responsibility: Support Desk ===\n");

    let mut registry = Registry::new();
    let triage = registry.define_capability::<Ticket, String>("ticket-triage")?;

    // Each link handles what it can and explicitly declines the rest.
    let helpdesk = triage.register_variant(|t: &Ticket| {
        Reply::from_option((t.severity <= 1).then(|| format!("helpdesk resolves `{}`", t.subject)))
    });
    let supervisor = triage.register_variant(|t: &Ticket| {
        Reply::from_option((t.severity <= 3).then(|| format!("supervisor takes `{}`", t.subject)))
    });
    let manager = triage.register_variant(|t: &Ticket| {
        Reply::from_option((t.severity <= 5).then(|| format!("manager escalates `{}`", t.subject)))
    });

    let front = triage.create_context_with(helpdesk);
    let second = triage.create_context_with(supervisor);
    let last = triage.create_context_with(manager);
    triage.chain(front, second)?;
    triage.chain(second, last)?;

    let tickets = [
        Ticket { subject: "password reset", severity: 1 },
        Ticket { subject: "billing dispute", severity: 3 },
        Ticket { subject: "data loss", severity: 5 },
        Ticket { subject: "server room on fire", severity: 9 },
    ];

    for ticket in &tickets {
        match triage.invoke(front, ticket) {
            Outcome::Handled(who) => println!("  sev {}: {who}", ticket.severity),
            // Nobody in the chain took it; that is a result, not an error.
            Outcome::Unhandled => {
                println!("  sev {}: `{}` left unhandled", ticket.severity, ticket.subject)
            }
        }
    }

    // Closing the chain back on itself is refused up front.
    println!("\nTrying to chain the manager back to the front desk:");
    match triage.chain(last, front) {
        Err(e) => println!("  refused: {e}"),
        Ok(()) => unreachable!("cycle must be refused"),
    }

    Ok(())
}
