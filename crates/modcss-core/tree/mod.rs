//! Attribute tree data model
//!
//! The breakpoint → state → value structure every module attribute is stored
//! in. Trees are constructed once per module per render and are read-only to
//! the engine: resolution borrows, it never mutates.
//!
//! # Shape invariant
//!
//! `desktop.value` is the only slot guaranteed to exist for a genuinely-set
//! attribute; every other breakpoint/state slot is an optional override.

pub mod value;

pub use value::AttrValue;

use crate::resolve::{Breakpoint, State};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// One attribute's full responsive/state value set.
///
/// # Example
///
/// ```rust
/// use modcss_core::{AttrTree, AttrValue, Breakpoint, State};
///
/// let tree = AttrTree::new()
///     .with(Breakpoint::Desktop, State::Value, AttrValue::from("16px"))
///     .with(Breakpoint::Phone, State::Value, AttrValue::from("14px"));
///
/// assert_eq!(
///     tree.get(&Breakpoint::Desktop, &State::Value).and_then(AttrValue::as_str),
///     Some("16px")
/// );
/// assert!(tree.get(&Breakpoint::Tablet, &State::Value).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrTree {
    slots: BTreeMap<Breakpoint, BTreeMap<State, AttrValue>>,
}

impl AttrTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Set a slot value.
    pub fn set(&mut self, breakpoint: Breakpoint, state: State, value: AttrValue) {
        self.slots
            .entry(breakpoint)
            .or_default()
            .insert(state, value);
    }

    /// Chainable [`set`](Self::set), for construction sites and tests.
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, state: State, value: AttrValue) -> Self {
        self.set(breakpoint, state, value);
        self
    }

    /// Read the exact slot, no inheritance.
    #[must_use]
    pub fn get(&self, breakpoint: &Breakpoint, state: &State) -> Option<&AttrValue> {
        self.slots.get(breakpoint).and_then(|s| s.get(state))
    }

    /// Read a dotted sub-path under the exact slot, no inheritance.
    ///
    /// An empty path reads the slot value itself. Malformed shapes (scalar
    /// where a mapping was expected) read as absent.
    #[must_use]
    pub fn get_sub(&self, breakpoint: &Breakpoint, state: &State, path: &str) -> Option<&AttrValue> {
        self.get(breakpoint, state).and_then(|v| v.get_path(path))
    }

    /// Whether the exact slot holds a value.
    #[must_use]
    pub fn has(&self, breakpoint: &Breakpoint, state: &State) -> bool {
        self.get(breakpoint, state).is_some()
    }

    /// Whether any state slot exists for this breakpoint.
    #[must_use]
    pub fn has_breakpoint(&self, breakpoint: &Breakpoint) -> bool {
        self.slots
            .get(breakpoint)
            .is_some_and(|states| !states.is_empty())
    }

    /// Whether the tree holds no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(BTreeMap::is_empty)
    }

    /// The base slot most callers mean by "the attribute's value".
    #[must_use]
    pub fn base_value(&self) -> Option<&AttrValue> {
        self.get(&Breakpoint::Desktop, &State::Value)
    }

    /// Breakpoints with at least one state slot, in key order.
    pub fn breakpoints(&self) -> impl Iterator<Item = &Breakpoint> {
        self.slots
            .iter()
            .filter(|(_, states)| !states.is_empty())
            .map(|(bp, _)| bp)
    }

    /// Build a tree from a JSON object shaped `breakpoint → state → value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Tree`] when the outer two levels are not
    /// JSON objects.
    #[cfg(feature = "serde")]
    pub fn from_json(value: &serde_json::Value) -> crate::Result<Self> {
        let outer = value
            .as_object()
            .ok_or_else(|| crate::CoreError::tree("attribute tree must be a JSON object"))?;

        let mut tree = Self::new();
        for (bp_name, states) in outer {
            let states = states.as_object().ok_or_else(|| {
                crate::CoreError::tree(format!("breakpoint '{bp_name}' must map states to values"))
            })?;
            for (state_name, raw) in states {
                tree.set(
                    Breakpoint::from_name(bp_name),
                    State::from_name(state_name),
                    AttrValue::from_json(raw),
                );
            }
        }
        Ok(tree)
    }
}

impl Hash for AttrTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.slots.len());
        for (breakpoint, states) in &self.slots {
            breakpoint.hash(state);
            state.write_usize(states.len());
            for (st, value) in states {
                st.hash(state);
                value.hash(state);
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AttrTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut outer = serializer.serialize_map(Some(self.slots.len()))?;
        for (breakpoint, states) in &self.slots {
            let by_state: BTreeMap<&str, &AttrValue> =
                states.iter().map(|(s, v)| (s.name(), v)).collect();
            outer.serialize_entry(breakpoint.name(), &by_state)?;
        }
        outer.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AttrTree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, BTreeMap<String, AttrValue>> =
            serde::Deserialize::deserialize(deserializer)?;
        let mut tree = Self::new();
        for (bp_name, states) in raw {
            for (state_name, value) in states {
                tree.set(
                    Breakpoint::from_name(&bp_name),
                    State::from_name(&state_name),
                    value,
                );
            }
        }
        Ok(tree)
    }
}
