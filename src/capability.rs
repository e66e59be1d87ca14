//! Typed capability handles and the context graph behind them.
//!
//! A [`Capability<I, O>`] is a handle onto one operation contract
//! `fn(&I) -> O` defined through [`crate::registry::Registry`]. The handle
//! carries the signature in its type parameters, so variant conformance is
//! checked by the compiler at composition time rather than at call time.
//!
//! Behind each handle sits a single shared store holding:
//!
//! - an arena of registered variants (`Rc<dyn Variant<I, O>>`),
//! - an arena of contexts, each with a binding, an optional chain successor,
//!   an ordered child list, and an ordered observer list,
//! - a flyweight cache of shared variants keyed by state.
//!
//! All composition edges (successor, wrap, child) are checked for cycles
//! before they land, because traversal has no cycle detection of its own.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::PatternError;
use crate::variant::{Layer, Outcome, Reply, Variant, WrapOrder};

/// Index of a registered variant within its capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantId(pub(crate) usize);

/// Index of a context within its capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub(crate) usize);

/// Order in which a composite tree visits a node relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Node contribution before its children (pre-order).
    NodeFirst,
    /// Children before the node's own contribution (post-order).
    ChildrenFirst,
}

/// How [`Capability::notify_all`] reacts to a declining observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMode {
    /// Record the decline and keep notifying the rest (the default stance).
    CollectFailures,
    /// Stop at the first decline; remaining observers are reported as skipped.
    FailFast,
}

/// Outcome of a fan-out notification, in registration order.
#[derive(Debug)]
pub struct NotifyReport<O> {
    /// Observers that handled the event, with their produced values.
    pub delivered: Vec<(VariantId, O)>,
    /// Observers that declined the event.
    pub declined: Vec<VariantId>,
    /// Observers never reached (only under [`NotifyMode::FailFast`]).
    pub skipped: Vec<VariantId>,
}

impl<O> NotifyReport<O> {
    fn new() -> Self {
        NotifyReport {
            delivered: Vec::new(),
            declined: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// True when every observer handled the event.
    pub fn all_delivered(&self) -> bool {
        self.declined.is_empty() && self.skipped.is_empty()
    }
}

enum Binding<I, O> {
    Empty,
    Bound(VariantId),
    Wrap {
        layer: Rc<dyn Layer<I, O>>,
        order: WrapOrder,
        inner: ContextId,
    },
}

struct ContextEntry<I, O> {
    binding: Binding<I, O>,
    successor: Option<ContextId>,
    children: Vec<ContextId>,
    observers: Vec<VariantId>,
}

impl<I, O> ContextEntry<I, O> {
    fn new(binding: Binding<I, O>) -> Self {
        ContextEntry {
            binding,
            successor: None,
            children: Vec::new(),
            observers: Vec::new(),
        }
    }
}

pub(crate) struct Store<I, O> {
    variants: Vec<Rc<dyn Variant<I, O>>>,
    contexts: Vec<ContextEntry<I, O>>,
    shared: HashMap<String, VariantId>,
}

pub(crate) type SharedStore<I, O> = Rc<RefCell<Store<I, O>>>;

impl<I, O> Store<I, O> {
    pub(crate) fn new() -> Self {
        Store {
            variants: Vec::new(),
            contexts: Vec::new(),
            shared: HashMap::new(),
        }
    }

    fn push_variant(&mut self, variant: Rc<dyn Variant<I, O>>) -> VariantId {
        self.variants.push(variant);
        VariantId(self.variants.len() - 1)
    }

    fn push_context(&mut self, entry: ContextEntry<I, O>) -> ContextId {
        self.contexts.push(entry);
        ContextId(self.contexts.len() - 1)
    }

    /// Walk every outgoing edge kind from `start` looking for `target`.
    fn reaches(&self, start: ContextId, target: ContextId) -> bool {
        let mut seen = vec![false; self.contexts.len()];
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if seen[id.0] {
                continue;
            }
            seen[id.0] = true;
            let entry = &self.contexts[id.0];
            if let Some(next) = entry.successor {
                stack.push(next);
            }
            if let Binding::Wrap { inner, .. } = &entry.binding {
                stack.push(*inner);
            }
            stack.extend(entry.children.iter().copied());
        }
        false
    }

    /// One context's own reply, resolving wraps but not chain successors.
    fn invoke_binding(&self, id: ContextId, input: &I) -> Reply<O> {
        match &self.contexts[id.0].binding {
            Binding::Empty => Reply::Declined,
            Binding::Bound(variant) => self.variants[variant.0].invoke(input),
            Binding::Wrap {
                layer,
                order,
                inner,
            } => match order {
                WrapOrder::InsideOut => {
                    let inner_outcome = self.invoke_chain(*inner, input);
                    layer.wrap(input, inner_outcome)
                }
                WrapOrder::OutsideIn => {
                    let rewritten = layer.rewrite(input);
                    let effective = rewritten.as_ref().unwrap_or(input);
                    let inner_outcome = self.invoke_chain(*inner, effective);
                    layer.wrap(effective, inner_outcome)
                }
            },
        }
    }

    /// Iterative fall-through along successor links. Each link either fully
    /// handles the input or declines and passes it on; running off the end
    /// yields `Unhandled`.
    fn invoke_chain(&self, start: ContextId, input: &I) -> Outcome<O> {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            match self.invoke_binding(id, input) {
                Reply::Handled(value) => return Outcome::Handled(value),
                Reply::Declined => cursor = self.contexts[id.0].successor,
            }
        }
        Outcome::Unhandled
    }

    /// Depth-first contribution collection, children in insertion order.
    fn collect(&self, node: ContextId, input: &I, order: TraversalOrder, out: &mut Vec<O>) {
        if order == TraversalOrder::NodeFirst {
            if let Reply::Handled(value) = self.invoke_binding(node, input) {
                out.push(value);
            }
        }
        // Children are copied out so the recursion does not hold a borrow
        // of the entry across its own subtree.
        let children: Vec<ContextId> = self.contexts[node.0].children.clone();
        for child in children {
            self.collect(child, input, order, out);
        }
        if order == TraversalOrder::ChildrenFirst {
            if let Reply::Handled(value) = self.invoke_binding(node, input) {
                out.push(value);
            }
        }
    }
}

/// A typed handle onto one capability's variants and contexts.
///
/// Cloning the handle is cheap and shares the underlying store; handles
/// obtained from compatible redefinitions of the same name also share it.
/// Variant and context ids are only meaningful with the capability that
/// issued them — the registry trusts its callers on that point.
pub struct Capability<I, O> {
    name: Rc<str>,
    store: SharedStore<I, O>,
    _signature: PhantomData<fn(&I) -> O>,
}

impl<I, O> std::fmt::Debug for Capability<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.store.borrow();
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("variants", &store.variants.len())
            .field("contexts", &store.contexts.len())
            .finish()
    }
}

impl<I, O> Clone for Capability<I, O> {
    fn clone(&self) -> Self {
        Capability {
            name: Rc::clone(&self.name),
            store: Rc::clone(&self.store),
            _signature: PhantomData,
        }
    }
}

impl<I, O> Capability<I, O> {
    pub(crate) fn from_parts(name: &str, store: SharedStore<I, O>) -> Self {
        Capability {
            name: Rc::from(name),
            store,
            _signature: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap a concrete behavior under this capability.
    pub fn register_variant(&self, variant: impl Variant<I, O> + 'static) -> VariantId {
        let variant: Rc<dyn Variant<I, O>> = Rc::new(variant);
        self.store.borrow_mut().push_variant(variant)
    }

    /// Flyweight access: create-or-return a variant keyed by shared state.
    ///
    /// The same key always yields the same instance; the factory only runs
    /// on the first request for a key.
    pub fn shared_variant<V, F>(&self, key: &str, make: F) -> VariantId
    where
        V: Variant<I, O> + 'static,
        F: FnOnce() -> V,
    {
        let mut store = self.store.borrow_mut();
        if let Some(&id) = store.shared.get(key) {
            return id;
        }
        let id = store.push_variant(Rc::new(make()));
        store.shared.insert(key.to_string(), id);
        id
    }

    /// Number of distinct variant instances registered, shared ones included.
    pub fn variant_count(&self) -> usize {
        self.store.borrow().variants.len()
    }

    /// Allocate an unbound context. Invoking it declines everything.
    pub fn create_context(&self) -> ContextId {
        self.store
            .borrow_mut()
            .push_context(ContextEntry::new(Binding::Empty))
    }

    /// Allocate a context pre-bound to a variant.
    pub fn create_context_with(&self, variant: VariantId) -> ContextId {
        self.store
            .borrow_mut()
            .push_context(ContextEntry::new(Binding::Bound(variant)))
    }

    /// Replace the context's bound variant. The previous binding is dropped
    /// from the context; wraps are replaced wholesale as well.
    pub fn set_variant(&self, context: ContextId, variant: VariantId) {
        self.store.borrow_mut().contexts[context.0].binding = Binding::Bound(variant);
    }

    /// Establish `to` as the fall-through successor of `from`, replacing any
    /// previous successor. Refused if the edge would close a cycle.
    pub fn chain(&self, from: ContextId, to: ContextId) -> Result<(), PatternError> {
        let mut store = self.store.borrow_mut();
        if from == to || store.reaches(to, from) {
            return Err(PatternError::CycleDetected {
                from: from.0,
                to: to.0,
            });
        }
        store.contexts[from.0].successor = Some(to);
        Ok(())
    }

    /// Decorator wrap: allocate a fresh context whose invocation runs
    /// `layer` around the inner context. Later-applied layers are outer.
    /// The outer node is new, so no cycle check is needed.
    pub fn compose(
        &self,
        layer: impl Layer<I, O> + 'static,
        order: WrapOrder,
        inner: ContextId,
    ) -> ContextId {
        let mut store = self.store.borrow_mut();
        store.push_context(ContextEntry::new(Binding::Wrap {
            layer: Rc::new(layer),
            order,
            inner,
        }))
    }

    /// Append `child` to `parent`'s child list (composite tree edge).
    /// Refused if the edge would close a cycle.
    pub fn add_child(&self, parent: ContextId, child: ContextId) -> Result<(), PatternError> {
        let mut store = self.store.borrow_mut();
        if parent == child || store.reaches(child, parent) {
            return Err(PatternError::CycleDetected {
                from: parent.0,
                to: child.0,
            });
        }
        store.contexts[parent.0].children.push(child);
        Ok(())
    }

    /// Detach `child` from `parent`. Returns whether anything was removed.
    pub fn remove_child(&self, parent: ContextId, child: ContextId) -> bool {
        let mut store = self.store.borrow_mut();
        let children = &mut store.contexts[parent.0].children;
        let before = children.len();
        children.retain(|c| *c != child);
        children.len() != before
    }

    /// Register `observer` for fan-out notification on `context`.
    /// Observers are notified in registration order.
    pub fn subscribe(&self, context: ContextId, observer: VariantId) {
        self.store.borrow_mut().contexts[context.0]
            .observers
            .push(observer);
    }

    /// Fan-out dispatch of `event` to every observer of `context`.
    ///
    /// A declining observer never prevents later observers from running
    /// under [`NotifyMode::CollectFailures`]; the decline is collected in
    /// the report instead.
    pub fn notify_all(&self, context: ContextId, event: &I, mode: NotifyMode) -> NotifyReport<O> {
        let store = self.store.borrow();
        let observers = store.contexts[context.0].observers.clone();
        let mut report = NotifyReport::new();
        for (position, observer) in observers.iter().enumerate() {
            match store.variants[observer.0].invoke(event) {
                Reply::Handled(value) => report.delivered.push((*observer, value)),
                Reply::Declined => {
                    report.declined.push(*observer);
                    if mode == NotifyMode::FailFast {
                        report.skipped.extend(observers[position + 1..].iter().copied());
                        break;
                    }
                }
            }
        }
        report
    }

    /// Execute the context's binding (or chain, or wrap) against `input`.
    pub fn invoke(&self, context: ContextId, input: &I) -> Outcome<O> {
        self.store.borrow().invoke_chain(context, input)
    }

    /// Depth-first tree traversal from `root`, children in insertion order.
    /// Returns each node's own contribution in visit order; declining nodes
    /// contribute nothing. The caller aggregates.
    pub fn traverse(&self, root: ContextId, input: &I, order: TraversalOrder) -> Vec<O> {
        let store = self.store.borrow();
        let mut out = Vec::new();
        store.collect(root, input, order, &mut out);
        out
    }
}
