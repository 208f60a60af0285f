//! Build inputs: rules, selector groups, settings, important policy
//!
//! A module styles itself by handing the builder a list of [`StyleRule`]s
//! (one per attribute family) plus per-invocation [`BuildSettings`]. All
//! strategies arrive as borrowed trait objects; rules own no behavior.

use crate::declaration::DeclarationFn;
use crate::resolve::{Breakpoint, ResolveMode, State};
use crate::selector::SelectorFn;
use crate::tree::{AttrTree, AttrValue};

/// Which declarations render with `!important`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImportantPolicy {
    /// Nothing is important.
    #[default]
    Off,
    /// Every declaration is important.
    All,
    /// Only the listed properties are important.
    PerProperty(Vec<String>),
}

impl ImportantPolicy {
    /// Whether the policy marks this property important.
    #[must_use]
    pub fn applies(&self, property: &str) -> bool {
        match self {
            Self::Off => false,
            Self::All => true,
            Self::PerProperty(properties) => properties.iter().any(|p| p == property),
        }
    }

    /// Whether the policy marks every property important.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// A property-selector override: routes a subset of a rule's declarations
/// to a different selector template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorGroup {
    /// Selector template for this group (order-class token allowed).
    pub template: String,
    /// Properties this group accepts; `None` accepts everything.
    pub properties: Option<Vec<String>>,
}

impl SelectorGroup {
    /// Group accepting every declaration.
    #[must_use]
    pub fn all(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            properties: None,
        }
    }

    /// Group accepting only the listed properties.
    #[must_use]
    pub fn for_properties(
        template: impl Into<String>,
        properties: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            template: template.into(),
            properties: Some(properties.into_iter().collect()),
        }
    }

    /// Whether a property routes through this group.
    #[must_use]
    pub fn accepts(&self, property: &str) -> bool {
        self.properties
            .as_ref()
            .is_none_or(|list| list.iter().any(|p| p == property))
    }
}

/// One attribute family's styling instruction.
pub struct StyleRule<'r> {
    /// The attribute tree driving this rule. Read-only to the engine.
    pub tree: &'r AttrTree,
    /// Declaration strategy.
    pub declaration: &'r dyn DeclarationFn,
    /// Selector strategy; `None` uses template substitution.
    pub selector_fn: Option<&'r dyn SelectorFn>,
    /// Selector template override; `None` uses the settings' base selector.
    pub selector: Option<String>,
    /// Property-selector overrides; empty means one statement per visit.
    pub groups: Vec<SelectorGroup>,
    /// Dotted sub-key resolved for the request value.
    pub sub_key: Option<String>,
    /// Resolution mode for the request value.
    pub mode: ResolveMode,
    /// Caller default when the cascade comes up empty.
    pub default: Option<AttrValue>,
    /// Per-rule important override; `None` uses the settings' policy.
    pub important: Option<ImportantPolicy>,
    /// Visit every declared breakpoint/state even without direct data,
    /// resolving through the fallback chain. The explicit replacement for
    /// padding the tree with synthetic entries.
    pub visit_all_breakpoints: bool,
}

impl<'r> StyleRule<'r> {
    /// A rule with the default knobs: full composite backfill, settings
    /// selector, settings important policy, direct-data visits only.
    #[must_use]
    pub fn new(tree: &'r AttrTree, declaration: &'r dyn DeclarationFn) -> Self {
        Self {
            tree,
            declaration,
            selector_fn: None,
            selector: None,
            groups: Vec::new(),
            sub_key: None,
            mode: ResolveMode::InheritAll,
            default: None,
            important: None,
            visit_all_breakpoints: false,
        }
    }

    /// Use a selector strategy.
    #[must_use]
    pub fn with_selector_fn(mut self, selector_fn: &'r dyn SelectorFn) -> Self {
        self.selector_fn = Some(selector_fn);
        self
    }

    /// Override the selector template.
    #[must_use]
    pub fn with_selector(mut self, template: impl Into<String>) -> Self {
        self.selector = Some(template.into());
        self
    }

    /// Route declarations through property-selector groups.
    #[must_use]
    pub fn with_groups(mut self, groups: Vec<SelectorGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Resolve a dotted sub-key instead of the slot value.
    #[must_use]
    pub fn with_sub_key(mut self, sub_key: impl Into<String>) -> Self {
        self.sub_key = Some(sub_key.into());
        self
    }

    /// Change the resolution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Supply a default for empty cascades.
    #[must_use]
    pub fn with_default(mut self, default: AttrValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Override the important policy for this rule.
    #[must_use]
    pub fn with_important(mut self, policy: ImportantPolicy) -> Self {
        self.important = Some(policy);
        self
    }

    /// Visit all declared breakpoints and states.
    #[must_use]
    pub fn visit_all(mut self) -> Self {
        self.visit_all_breakpoints = true;
        self
    }
}

/// Per-invocation settings bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// The module instance's render-order-scoped class.
    pub order_class: String,
    /// Base selector template rules fall back to.
    pub base_selector: String,
    /// States visited per breakpoint, in order.
    pub states: Vec<State>,
    /// Invocation-wide important policy.
    pub important: ImportantPolicy,
    /// Breakpoints where the module is disabled and hidden outright.
    pub disabled_on: Vec<Breakpoint>,
}

impl BuildSettings {
    /// Settings for one module instance, visiting the stock states with
    /// the order class itself as the base selector.
    #[must_use]
    pub fn new(order_class: impl Into<String>) -> Self {
        Self {
            order_class: order_class.into(),
            base_selector: crate::selector::ORDER_CLASS_TOKEN.to_string(),
            states: State::defaults(),
            important: ImportantPolicy::Off,
            disabled_on: Vec::new(),
        }
    }

    /// Override the base selector template.
    #[must_use]
    pub fn with_base_selector(mut self, template: impl Into<String>) -> Self {
        self.base_selector = template.into();
        self
    }

    /// Override the visited states.
    #[must_use]
    pub fn with_states(mut self, states: Vec<State>) -> Self {
        self.states = states;
        self
    }

    /// Set the invocation-wide important policy.
    #[must_use]
    pub fn with_important(mut self, policy: ImportantPolicy) -> Self {
        self.important = policy;
        self
    }

    /// Hide the module at these breakpoints.
    #[must_use]
    pub fn with_disabled_on(mut self, breakpoints: Vec<Breakpoint>) -> Self {
        self.disabled_on = breakpoints;
        self
    }
}
