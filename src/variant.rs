//! The capability contract: variants, their replies, and decorator layers.
//!
//! A *variant* is one concrete implementation of a capability's operation
//! signature `fn(&I) -> O`. Variants are the interchangeable half of every
//! pattern here: a strategy, a state, a command, a handler in a chain, an
//! observer. The fixed half — the context graph that decides which variants
//! run and in what order — lives in [`crate::capability`].

/// What a single variant reports for one input.
///
/// `Declined` is the fall-through signal used by chains: the link looked at
/// the input and explicitly passed it on. It is a normal value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<O> {
    /// The variant handled the input and produced a value.
    Handled(O),
    /// The variant declined; a chain moves on to the next link.
    Declined,
}

impl<O> Reply<O> {
    /// `Some` handles, `None` declines.
    pub fn from_option(value: Option<O>) -> Self {
        match value {
            Some(v) => Reply::Handled(v),
            None => Reply::Declined,
        }
    }
}

/// The overall result of invoking a context.
///
/// `Unhandled` means a chain was walked to its end and no link accepted the
/// input. Callers decide whether that is acceptable; the registry never
/// turns it into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<O> {
    Handled(O),
    Unhandled,
}

impl<O> Outcome<O> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled(_))
    }

    /// The handled value, if any.
    pub fn handled(self) -> Option<O> {
        match self {
            Outcome::Handled(v) => Some(v),
            Outcome::Unhandled => None,
        }
    }
}

/// One concrete implementation of a capability.
///
/// Implemented directly for structs that carry state, and via the blanket
/// impl below for plain closures, so demo code can register either.
pub trait Variant<I, O> {
    fn invoke(&self, input: &I) -> Reply<O>;
}

impl<I, O, F> Variant<I, O> for F
where
    F: Fn(&I) -> Reply<O>,
{
    fn invoke(&self, input: &I) -> Reply<O> {
        self(input)
    }
}

/// Which side of the inner context a decorator layer runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapOrder {
    /// Evaluate the inner context first, then combine (the usual decorator).
    InsideOut,
    /// Let the layer rewrite the input before it reaches the inner context.
    OutsideIn,
}

/// A decorator: wraps an inner context and combines its outcome with the
/// layer's own contribution.
///
/// For [`WrapOrder::OutsideIn`] wraps, [`Layer::rewrite`] runs before the
/// inner context is invoked; returning `None` leaves the input untouched.
/// Layers must not call back into their own capability — the store is
/// exclusively borrowed for the duration of an invoke.
pub trait Layer<I, O> {
    /// Combine the inner context's outcome with this layer's contribution.
    fn wrap(&self, input: &I, inner: Outcome<O>) -> Reply<O>;

    /// Rewrite the input on the way in. Only consulted for outside-in wraps.
    fn rewrite(&self, _input: &I) -> Option<I> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_variants() {
        let double = |n: &i32| Reply::Handled(n * 2);
        assert_eq!(double.invoke(&21), Reply::Handled(42));

        let odd_only = |n: &i32| Reply::from_option((n % 2 == 1).then(|| *n));
        assert_eq!(odd_only.invoke(&3), Reply::Handled(3));
        assert_eq!(odd_only.invoke(&4), Reply::Declined);
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Handled(1).is_handled());
        assert!(!Outcome::<i32>::Unhandled.is_handled());
        assert_eq!(Outcome::Handled("x").handled(), Some("x"));
        assert_eq!(Outcome::<&str>::Unhandled.handled(), None);
    }
}
