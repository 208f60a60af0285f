//! Pseudo-state identity
//!
//! States are the pseudo-conditions an attribute may hold an independent
//! value at, orthogonal to breakpoints. `value` is the base state every
//! other state inherits from within its breakpoint; non-base states never
//! fall back to another breakpoint's non-base state.

use std::fmt;

/// A named pseudo-condition tier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// The base state (`value`).
    Value,
    /// Pointer-hover overrides.
    Hover,
    /// Sticky-position overrides.
    Sticky,
    /// A caller-defined pseudo-state.
    Custom(String),
}

impl State {
    /// Canonical name used in JSON trees.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Value => "value",
            Self::Hover => "hover",
            Self::Sticky => "sticky",
            Self::Custom(name) => name,
        }
    }

    /// Parse a state name; unrecognized names become [`Self::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "value" => Self::Value,
            "hover" => Self::Hover,
            "sticky" => Self::Sticky,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Whether this is the base state.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Value)
    }

    /// Whether this state renders through a `:hover` selector.
    #[must_use]
    pub fn is_hover(&self) -> bool {
        matches!(self, Self::Hover)
    }

    /// The stock iteration order builders visit.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::Value, Self::Hover, Self::Sticky]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
