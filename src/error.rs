//! Error types for the dispatch and composition registry.
//!
//! The taxonomy is small and purely structural: everything is detected
//! synchronously at the call that triggers it, and nothing is retried.
//! An exhausted chain is *not* an error — see [`crate::variant::Outcome`].

use thiserror::Error;

/// Every way a registry operation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A capability name was redefined with a different operation signature.
    #[error("capability `{name}` is already defined as `{existing}`, cannot redefine as `{requested}`")]
    DuplicateCapability {
        name: String,
        existing: String,
        requested: String,
    },

    /// Adding this edge would let a context reach itself. Chains and trees
    /// are traversed without cycle detection, so the edge is refused up front.
    #[error("edge from context {from} to context {to} would close a cycle")]
    CycleDetected { from: usize, to: usize },

    /// A caretaker was asked for a snapshot index it does not hold.
    #[error("snapshot index {index} is out of range ({len} snapshots held)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = PatternError::DuplicateCapability {
            name: "price".into(),
            existing: "fn(&Item) -> f64".into(),
            requested: "fn(&Item) -> u32".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("price"));
        assert!(msg.contains("fn(&Item) -> f64"));

        let err = PatternError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "snapshot index 3 is out of range (2 snapshots held)"
        );
    }
}
