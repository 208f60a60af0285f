//! Breakpoint/state resolution with inheritance fallback
//!
//! Resolves a requested (breakpoint, state, sub-key) triple against an
//! attribute tree. The cascade is monotonic: a slot falls back to its own
//! breakpoint's base state, then to progressively wider breakpoints at the
//! base state, terminating at the base breakpoint and finally the caller's
//! default. Non-base states never consult another breakpoint's non-base
//! state.

use crate::resolve::{Breakpoint, BreakpointOrder, State};
use crate::tree::{AttrTree, AttrValue};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::trace;

/// How a lookup treats missing slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    /// The exact slot or the default. No inheritance.
    Exact,
    /// Walk the fallback chain; the first hit wins whole.
    Inherit,
    /// Walk the fallback chain and deep-merge composite values, so leaf
    /// keys missing from a narrow override backfill individually from
    /// wider slots instead of discarding the whole object.
    InheritAll,
}

/// Resolves values against trees under one declared breakpoint order.
///
/// Stateless and cheap to copy; every lookup is a pure function of its
/// arguments.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    order: &'a BreakpointOrder,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a declared breakpoint order.
    #[must_use]
    pub const fn new(order: &'a BreakpointOrder) -> Self {
        Self { order }
    }

    /// The declared order this resolver walks.
    #[must_use]
    pub const fn order(&self) -> &'a BreakpointOrder {
        self.order
    }

    /// Resolve `(breakpoint, state, sub_key)` against `tree`.
    ///
    /// Returns `None` when nothing is set anywhere on the chain and no
    /// default was supplied, or when the cascade hits the clear sentinel.
    /// Borrows from the tree wherever possible; only a merged composite
    /// allocates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modcss_core::{AttrTree, AttrValue, Breakpoint, BreakpointOrder, ResolveMode, Resolver, State};
    ///
    /// let order = BreakpointOrder::default();
    /// let tree = AttrTree::new()
    ///     .with(Breakpoint::Desktop, State::Value, AttrValue::from("16px"));
    ///
    /// let resolver = Resolver::new(&order);
    /// let hit = resolver.resolve(&tree, &Breakpoint::Phone, &State::Hover, None, None, ResolveMode::Inherit);
    /// assert_eq!(hit.unwrap().as_str(), Some("16px"));
    /// ```
    #[must_use]
    pub fn resolve<'t>(
        &self,
        tree: &'t AttrTree,
        breakpoint: &Breakpoint,
        state: &State,
        sub_key: Option<&str>,
        default: Option<&'t AttrValue>,
        mode: ResolveMode,
    ) -> Option<Cow<'t, AttrValue>> {
        let path = sub_key.unwrap_or("");
        match mode {
            ResolveMode::Exact => match tree.get_sub(breakpoint, state, path) {
                Some(v) if v.is_clear() => None,
                Some(v) => Some(Cow::Borrowed(v)),
                None => default.map(Cow::Borrowed),
            },
            ResolveMode::Inherit => {
                for (bp, st) in self.chain(breakpoint, state) {
                    if let Some(v) = tree.get_sub(bp, st, path) {
                        if v.is_clear() {
                            return None;
                        }
                        if bp != breakpoint || st != state {
                            trace!(
                                requested = %breakpoint,
                                hit = %bp,
                                "resolved by inheritance"
                            );
                        }
                        return Some(Cow::Borrowed(v));
                    }
                }
                default.map(Cow::Borrowed)
            }
            ResolveMode::InheritAll => {
                let mut layers: Vec<&'t AttrValue> = Vec::new();
                let mut cleared = false;
                for (bp, st) in self.chain(breakpoint, state) {
                    if let Some(v) = tree.get_sub(bp, st, path) {
                        if v.is_clear() {
                            cleared = true;
                            break;
                        }
                        layers.push(v);
                    }
                }
                if let Some(d) = default.filter(|_| !cleared) {
                    layers.push(d);
                }
                merge_layers(layers)
            }
        }
    }

    /// The fallback chain for a slot, most specific first.
    fn chain<'s>(
        &'s self,
        breakpoint: &'s Breakpoint,
        state: &'s State,
    ) -> Vec<(&'s Breakpoint, &'s State)> {
        static BASE_STATE: State = State::Value;

        let mut slots: Vec<(&Breakpoint, &State)> = vec![(breakpoint, state)];
        if !state.is_base() {
            slots.push((breakpoint, &BASE_STATE));
        }
        for wider in self.order.wider(breakpoint) {
            slots.push((wider, &BASE_STATE));
        }
        slots
    }
}

/// Collapse a most-specific-first layer stack into one value.
///
/// A scalar at the most specific layer wins wholesale. Map layers merge
/// key-wise, narrow over wide; scalar layers beneath a map are malformed
/// for merging purposes and read as absent.
fn merge_layers(layers: Vec<&AttrValue>) -> Option<Cow<'_, AttrValue>> {
    let first = *layers.first()?;
    if layers.len() == 1 || !first.is_map() {
        return Some(Cow::Borrowed(first));
    }

    let mut merged = BTreeMap::new();
    for layer in layers.iter().rev() {
        if let AttrValue::Map(entries) = layer {
            overlay(&mut merged, entries);
        }
    }
    Some(Cow::Owned(AttrValue::Map(merged)))
}

fn overlay(acc: &mut BTreeMap<String, AttrValue>, over: &BTreeMap<String, AttrValue>) {
    for (key, incoming) in over {
        if let (Some(AttrValue::Map(existing)), AttrValue::Map(sub)) =
            (acc.get_mut(key), incoming)
        {
            overlay(existing, sub);
        } else {
            acc.insert(key.clone(), incoming.clone());
        }
    }
}
