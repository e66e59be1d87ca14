//! The capability directory: named operation contracts and their stores.
//!
//! The registry owns one signature table keyed by capability name. Defining
//! a name twice with the same `(input, output)` type pair hands back another
//! handle onto the same store; redefining it with a different pair is the
//! one thing this layer refuses.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use crate::capability::{Capability, SharedStore, Store};
use crate::error::PatternError;

/// An operation signature as recorded for duplicate detection.
///
/// Equality is decided by the `TypeId` pair; the type names ride along only
/// to make the error message readable.
#[derive(Debug, Clone)]
struct Signature {
    input: TypeId,
    output: TypeId,
    input_name: &'static str,
    output_name: &'static str,
}

impl Signature {
    fn of<I: 'static, O: 'static>() -> Self {
        Signature {
            input: TypeId::of::<I>(),
            output: TypeId::of::<O>(),
            input_name: type_name::<I>(),
            output_name: type_name::<O>(),
        }
    }

    fn matches(&self, other: &Signature) -> bool {
        self.input == other.input && self.output == other.output
    }

    fn describe(&self) -> String {
        format!("fn(&{}) -> {}", self.input_name, self.output_name)
    }
}

struct CapabilitySlot {
    signature: Signature,
    // Holds an Rc<RefCell<Store<I, O>>> behind type erasure; the signature
    // check above guarantees the downcast in define_capability.
    store: Box<dyn Any>,
}

/// Directory of capabilities, each a named operation contract.
#[derive(Default)]
pub struct Registry {
    capabilities: HashMap<String, CapabilitySlot>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register (or re-open) the operation contract `fn(&I) -> O` under
    /// `name`.
    ///
    /// A compatible redefinition returns a second handle sharing the
    /// original store; an incompatible one fails with
    /// [`PatternError::DuplicateCapability`].
    pub fn define_capability<I: 'static, O: 'static>(
        &mut self,
        name: &str,
    ) -> Result<Capability<I, O>, PatternError> {
        let signature = Signature::of::<I, O>();
        match self.capabilities.entry(name.to_string()) {
            Entry::Occupied(slot) => {
                let slot = slot.into_mut();
                if slot.signature.matches(&signature) {
                    if let Some(store) = slot.store.downcast_ref::<SharedStore<I, O>>() {
                        return Ok(Capability::from_parts(name, Rc::clone(store)));
                    }
                }
                Err(PatternError::DuplicateCapability {
                    name: name.to_string(),
                    existing: slot.signature.describe(),
                    requested: signature.describe(),
                })
            }
            Entry::Vacant(slot) => {
                let store: SharedStore<I, O> = Rc::new(RefCell::new(Store::new()));
                slot.insert(CapabilitySlot {
                    signature,
                    store: Box::new(Rc::clone(&store)),
                });
                Ok(Capability::from_parts(name, store))
            }
        }
    }

    /// Whether `name` has been defined (under any signature).
    pub fn is_defined(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    pub fn capability_count(&self) -> usize {
        self.capabilities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Outcome, Reply};

    #[test]
    fn fresh_names_define_cleanly() {
        let mut registry = Registry::new();
        let price = registry.define_capability::<String, f64>("price").unwrap();
        assert_eq!(price.name(), "price");
        assert!(registry.is_defined("price"));
        assert_eq!(registry.capability_count(), 1);
    }

    #[test]
    fn compatible_redefinition_shares_the_store() {
        let mut registry = Registry::new();
        let first = registry.define_capability::<String, f64>("price").unwrap();
        let base = first.register_variant(|_: &String| Reply::Handled(5.0));
        let ctx = first.create_context_with(base);

        // Same name, same signature: the second handle sees the first's
        // variants and contexts.
        let second = registry.define_capability::<String, f64>("price").unwrap();
        assert_eq!(second.invoke(ctx, &"x".into()), Outcome::Handled(5.0));
        assert_eq!(registry.capability_count(), 1);
    }

    #[test]
    fn incompatible_redefinition_is_refused() {
        let mut registry = Registry::new();
        registry.define_capability::<String, f64>("price").unwrap();
        let err = registry
            .define_capability::<String, u32>("price")
            .unwrap_err();
        match err {
            PatternError::DuplicateCapability {
                name,
                existing,
                requested,
            } => {
                assert_eq!(name, "price");
                assert!(existing.contains("f64"));
                assert!(requested.contains("u32"));
            }
            other => panic!("expected DuplicateCapability, got {other:?}"),
        }
    }

    #[test]
    fn distinct_names_are_independent() {
        let mut registry = Registry::new();
        let price = registry.define_capability::<String, f64>("price").unwrap();
        let label = registry.define_capability::<String, String>("label").unwrap();
        price.register_variant(|_: &String| Reply::Handled(1.0));
        assert_eq!(price.variant_count(), 1);
        assert_eq!(label.variant_count(), 0);
    }
}
