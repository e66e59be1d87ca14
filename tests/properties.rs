//! Property-based tests for the dispatch mechanics.

use composition_patterns::{
    Caretaker, Layer, Originator, Outcome, Registry, Reply, WrapOrder,
};
use proptest::prelude::*;

/// Build a chain of `length` links where only the link at `handler_at`
/// accepts, and return the head context's capability pair.
fn chain_with_single_handler(
    length: usize,
    handler_at: usize,
) -> (
    composition_patterns::Capability<u32, usize>,
    composition_patterns::ContextId,
) {
    let mut registry = Registry::new();
    let cap = registry.define_capability::<u32, usize>("probe").unwrap();

    let head = {
        let mut contexts = Vec::with_capacity(length);
        for position in 0..length {
            let variant = if position == handler_at {
                cap.register_variant(move |_: &u32| Reply::Handled(position))
            } else {
                cap.register_variant(move |_: &u32| Reply::<usize>::Declined)
            };
            contexts.push(cap.create_context_with(variant));
        }
        for pair in contexts.windows(2) {
            cap.chain(pair[0], pair[1]).unwrap();
        }
        contexts[0]
    };
    (cap, head)
}

proptest! {
    // Property 1: with exactly one handling link at position k, invoke
    // returns that link's result regardless of chain length.
    #[test]
    fn single_handler_wins_wherever_it_sits(length in 1usize..40, input in any::<u32>()) {
        for handler_at in 0..length {
            let (cap, head) = chain_with_single_handler(length, handler_at);
            prop_assert_eq!(cap.invoke(head, &input), Outcome::Handled(handler_at));
        }
    }

    // Property 2: a chain with no handling link yields Unhandled for any input.
    #[test]
    fn empty_handed_chains_yield_unhandled(length in 1usize..40, input in any::<u32>()) {
        let mut registry = Registry::new();
        let cap = registry.define_capability::<u32, usize>("probe").unwrap();
        let contexts: Vec<_> = (0..length)
            .map(|_| {
                let v = cap.register_variant(|_: &u32| Reply::<usize>::Declined);
                cap.create_context_with(v)
            })
            .collect();
        for pair in contexts.windows(2) {
            cap.chain(pair[0], pair[1]).unwrap();
        }
        prop_assert_eq!(cap.invoke(contexts[0], &input), Outcome::Unhandled);
    }

    // Property 3: when two links both handle, the earlier one answers.
    #[test]
    fn earlier_links_shadow_later_ones(
        length in 2usize..30,
        picks in prop::collection::vec(any::<bool>(), 2..30),
    ) {
        let mut registry = Registry::new();
        let cap = registry.define_capability::<u32, usize>("probe").unwrap();
        let mut first_handler = None;
        let contexts: Vec<_> = (0..length)
            .map(|position| {
                let handles = picks.get(position).copied().unwrap_or(false);
                if handles && first_handler.is_none() {
                    first_handler = Some(position);
                }
                let v = if handles {
                    cap.register_variant(move |_: &u32| Reply::Handled(position))
                } else {
                    cap.register_variant(move |_: &u32| Reply::<usize>::Declined)
                };
                cap.create_context_with(v)
            })
            .collect();
        for pair in contexts.windows(2) {
            cap.chain(pair[0], pair[1]).unwrap();
        }

        let expected = match first_handler {
            Some(position) => Outcome::Handled(position),
            None => Outcome::Unhandled,
        };
        prop_assert_eq!(cap.invoke(contexts[0], &7), expected);
    }
}

struct Add(f64);

impl Layer<(), f64> for Add {
    fn wrap(&self, _input: &(), inner: Outcome<f64>) -> Reply<f64> {
        match inner {
            Outcome::Handled(v) => Reply::Handled(v + self.0),
            Outcome::Unhandled => Reply::Declined,
        }
    }
}

proptest! {
    // Property 4: wrapping layers one at a time equals the explicit
    // inside-out nesting base -> l1 -> l2 -> ... -> ln.
    #[test]
    fn wrap_application_order_is_associative(
        base in -1000.0f64..1000.0,
        layers in prop::collection::vec(-100.0f64..100.0, 0..8),
    ) {
        let mut registry = Registry::new();
        let cap = registry.define_capability::<(), f64>("cost").unwrap();
        let seed = cap.register_variant(move |_: &()| Reply::Handled(base));

        let mut wrapped = cap.create_context_with(seed);
        for &surcharge in &layers {
            wrapped = cap.compose(Add(surcharge), WrapOrder::InsideOut, wrapped);
        }

        // Same association order as the nested evaluation, so the float
        // comparison is exact.
        let expected = layers.iter().fold(base, |acc, s| acc + s);
        prop_assert_eq!(cap.invoke(wrapped, &()), Outcome::Handled(expected));
    }
}

#[derive(Default)]
struct Counter {
    value: i64,
}

impl Originator for Counter {
    type State = i64;

    fn capture(&self) -> i64 {
        self.value
    }

    fn restore(&mut self, state: i64) {
        self.value = state;
    }
}

proptest! {
    // Property 5: restoring the same index twice in a row yields the same
    // state both times, no matter what happened in between the restores.
    #[test]
    fn restore_is_idempotent(
        states in prop::collection::vec(any::<i64>(), 1..20),
        index in 0usize..20,
        noise in any::<i64>(),
    ) {
        let mut counter = Counter::default();
        let mut history = Caretaker::new();
        for &s in &states {
            counter.value = s;
            history.save(&counter);
        }

        let index = index % states.len();
        history.restore_into(index, &mut counter).unwrap();
        let first = counter.value;
        counter.value = noise;
        history.restore_into(index, &mut counter).unwrap();
        prop_assert_eq!(counter.value, first);
        prop_assert_eq!(first, states[index]);
    }
}
