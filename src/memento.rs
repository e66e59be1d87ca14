//! Snapshot-and-restore: mementos and the caretaker that holds them.
//!
//! The originator exposes its state only through [`Originator::capture`] and
//! [`Originator::restore`]; the caretaker stores opaque snapshots and never
//! looks inside. Restoring copies a snapshot back out, so restoring the same
//! index twice yields the same state both times.

use crate::error::PatternError;

/// A type whose state can be snapshotted and later replaced wholesale.
pub trait Originator {
    type State: Clone;

    /// Copy the current state out into a snapshot.
    fn capture(&self) -> Self::State;

    /// Replace the current state with a previously captured one.
    fn restore(&mut self, state: Self::State);
}

/// An immutable snapshot of an originator's state.
#[derive(Debug, Clone)]
pub struct Memento<S> {
    state: S,
}

impl<S: Clone> Memento<S> {
    pub fn of(origin: &impl Originator<State = S>) -> Self {
        Memento {
            state: origin.capture(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// External holder of snapshots, in the order they were saved.
#[derive(Debug)]
pub struct Caretaker<S> {
    snapshots: Vec<Memento<S>>,
}

impl<S> Default for Caretaker<S> {
    fn default() -> Self {
        Caretaker {
            snapshots: Vec::new(),
        }
    }
}

impl<S: Clone> Caretaker<S> {
    pub fn new() -> Self {
        Caretaker::default()
    }

    /// Snapshot the originator's current state onto the end of the list.
    pub fn save(&mut self, origin: &impl Originator<State = S>) {
        self.snapshots.push(Memento::of(origin));
    }

    /// The snapshot at `index`, oldest first.
    pub fn get(&self, index: usize) -> Result<&Memento<S>, PatternError> {
        self.snapshots.get(index).ok_or(PatternError::IndexOutOfRange {
            index,
            len: self.snapshots.len(),
        })
    }

    /// Replace the originator's state with a copy of snapshot `index`.
    /// Out-of-range indexes fail and leave the originator untouched.
    pub fn restore_into(
        &self,
        index: usize,
        origin: &mut impl Originator<State = S>,
    ) -> Result<(), PatternError> {
        let memento = self.get(index)?;
        origin.restore(memento.state.clone());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
