//! A process-wide create-or-return cell with a reset hook.
//!
//! The classic singleton's hidden global is replaced by an explicit
//! `static` cell: the instance is created on first access, lives until the
//! process ends or [`SingletonCell::reset`] is called, and is only reachable
//! through the accessor. Tests must either call `reset` between cases or use
//! their own local cell — shared `static` state leaks across tests otherwise.

use std::sync::{Mutex, MutexGuard};

/// Holder of at most one `T`, constructible in `const` context so it can
/// back a `static`.
pub struct SingletonCell<T> {
    slot: Mutex<Option<T>>,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        SingletonCell {
            slot: Mutex::new(None),
        }
    }

    /// Run `body` against the instance, creating it with `init` first if
    /// this is the first access (or the first after a reset).
    pub fn with<R>(&self, init: impl FnOnce() -> T, body: impl FnOnce(&mut T) -> R) -> R {
        let mut slot = self.lock();
        body(slot.get_or_insert_with(init))
    }

    /// Whether an instance currently exists.
    pub fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the instance; the next access creates a fresh one.
    pub fn reset(&self) {
        self.lock().take();
    }

    // A panic while holding the lock poisons it; the cell's state is just
    // an Option, so the stored value is still coherent and we keep going.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        SingletonCell::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_or_return_yields_one_instance() {
        let cell: SingletonCell<Vec<u32>> = SingletonCell::new();
        assert!(!cell.is_initialized());

        cell.with(Vec::new, |v| v.push(1));
        cell.with(Vec::new, |v| v.push(2));
        // Both accesses hit the same instance; init ran once.
        let len = cell.with(Vec::new, |v| v.len());
        assert_eq!(len, 2);
    }

    #[test]
    fn reset_forces_a_fresh_instance() {
        let cell: SingletonCell<u32> = SingletonCell::new();
        cell.with(|| 10, |n| *n += 5);
        assert!(cell.is_initialized());

        cell.reset();
        assert!(!cell.is_initialized());
        let value = cell.with(|| 10, |n| *n);
        assert_eq!(value, 10);
    }

    #[test]
    fn works_behind_a_static() {
        static COUNTER: SingletonCell<u32> = SingletonCell::new();
        COUNTER.reset(); // isolate from any other test using this static
        let a = COUNTER.with(|| 0, |n| {
            *n += 1;
            *n
        });
        let b = COUNTER.with(|| 0, |n| {
            *n += 1;
            *n
        });
        assert_eq!((a, b), (1, 2));
    }
}
