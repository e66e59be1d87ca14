//! # Composition Patterns
//!
//! A small library of the machinery the classic object-oriented design
//! patterns share, plus one runnable demo per pattern. Strategy, State,
//! Command, Chain of Responsibility, Decorator, Composite, Bridge, Observer
//! and Visitor all reduce to the same shape: a *context* holds references to
//! objects implementing a shared *capability*, and invoking the context
//! delegates through that abstraction boundary — directly, along a chain,
//! through nested wraps, across a tree, or fanned out to listeners.
//!
//! ## The pieces
//!
//! - [`Registry`] — names an operation contract `fn(&I) -> O` and hands out
//!   typed [`Capability`] handles; duplicate names with clashing signatures
//!   are refused.
//! - [`Capability`] — registers interchangeable [`Variant`]s, allocates
//!   contexts, wires chains, decorator wraps and composite trees, and
//!   dispatches: [`Capability::invoke`], [`Capability::notify_all`],
//!   [`Capability::traverse`].
//! - [`Caretaker`] / [`Memento`] — external snapshot history for
//!   Memento-style undo.
//! - [`SingletonCell`] — an explicit create-or-return cell replacing the
//!   hidden global of the classic Singleton, with a reset hook for tests.
//!
//! A chain link that passes on an input answers [`Reply::Declined`]; a chain
//! walked to its end yields [`Outcome::Unhandled`], which is a value for the
//! caller to judge, never an error. Everything is single-threaded and
//! synchronous; a multi-threaded host must wrap each capability in its own
//! lock.
//!
//! ## Running the demos
//!
//! ```bash
//! # Behavioral selection
//! cargo run --example p1_strategy
//! cargo run --example p1_state
//! cargo run --example p1_command
//!
//! # Structural composition
//! cargo run --example p2_chain_of_responsibility
//! cargo run --example p2_decorator
//! cargo run --example p2_composite
//! cargo run --example p2_bridge
//!
//! # Notification & traversal
//! cargo run --example p3_observer
//! cargo run --example p3_visitor
//! cargo run --example p3_memento
//!
//! # Creational sharing
//! cargo run --example p4_flyweight
//! cargo run --example p4_singleton
//! ```

pub mod capability;
pub mod error;
pub mod memento;
pub mod registry;
pub mod singleton;
pub mod variant;

pub use capability::{
    Capability, ContextId, NotifyMode, NotifyReport, TraversalOrder, VariantId,
};
pub use error::PatternError;
pub use memento::{Caretaker, Memento, Originator};
pub use registry::Registry;
pub use singleton::SingletonCell;
pub use variant::{Layer, Outcome, Reply, Variant, WrapOrder};
