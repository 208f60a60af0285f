//! Declaration functions and their registry
//!
//! A declaration function is a pure strategy mapping a resolved attribute
//! value to CSS property/value pairs. Functions are total over their input
//! domain: when the resolved value does not warrant output they return an
//! empty list, never an error. A panic inside a declaration function is a
//! programming defect and propagates to the caller.
//!
//! The [`DeclarationRegistry`] holds named functions for callers that
//! assemble rule lists from configuration (the CLI does); direct
//! construction of rule structs does not need it.
//!
//! # Example
//!
//! ```rust
//! use modcss_core::declaration::create_default_registry;
//!
//! let registry = create_default_registry();
//! assert!(registry.has("force_fullwidth"));
//! assert!(registry.has("overflow_on_radius"));
//! ```

pub mod rules;

use crate::resolve::{Breakpoint, Resolver, State};
use crate::tree::{AttrTree, AttrValue};
use crate::utils::hashers::create_hash_map;
use ahash::RandomState;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// One CSS property/value pair, optionally `!important`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Declaration {
    /// CSS property name.
    pub property: String,
    /// CSS value text.
    pub value: String,
    /// Whether the declaration renders with `!important`.
    pub important: bool,
}

impl Declaration {
    /// Create a non-important declaration.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Mark the declaration `!important`.
    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        Ok(())
    }
}

/// Everything a declaration function may consult.
///
/// All context flows through this record; declaration functions must not
/// capture outer state.
#[derive(Debug, Clone)]
pub struct DeclarationRequest<'a> {
    /// The resolved value for the rule's sub-key at this slot, if any.
    pub value: Option<Cow<'a, AttrValue>>,
    /// The full attribute tree, for rules that resolve sibling sub-keys.
    pub tree: &'a AttrTree,
    /// Breakpoint being rendered.
    pub breakpoint: &'a Breakpoint,
    /// State being rendered.
    pub state: &'a State,
    /// The already-computed selector the output will attach to.
    pub selector: &'a str,
    /// Whether the caller's important policy applies to every property.
    pub important: bool,
    /// Resolver over the render's breakpoint order.
    pub resolver: Resolver<'a>,
}

impl DeclarationRequest<'_> {
    /// The resolved value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&AttrValue> {
        self.value.as_deref()
    }

    /// Resolved sub-attribute under the request value.
    #[must_use]
    pub fn sub(&self, path: &str) -> Option<&AttrValue> {
        self.value().and_then(|v| v.get_path(path))
    }

    /// Resolved sub-attribute rendered to CSS text, empty strings skipped.
    #[must_use]
    pub fn sub_css(&self, path: &str) -> Option<String> {
        self.sub(path)
            .and_then(AttrValue::to_css)
            .filter(|s| !s.is_empty())
    }
}

/// A pure strategy turning a resolved attribute value into declarations.
pub trait DeclarationFn: Send + Sync {
    /// Unique name identifier for this declaration function.
    fn name(&self) -> &'static str;

    /// Produce declarations for one (breakpoint, state) visit.
    ///
    /// Returns an empty list when the resolved value does not warrant a
    /// declaration.
    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration>;
}

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Function with the same name already registered.
    #[error("declaration function '{0}' already registered")]
    Duplicate(String),
    /// Function not found for the given name.
    #[error("declaration function '{0}' not found")]
    NotFound(String),
}

impl From<RegistryError> for crate::CoreError {
    fn from(err: RegistryError) -> Self {
        Self::registry(err)
    }
}

/// Central registry of named declaration functions.
#[derive(Default)]
pub struct DeclarationRegistry {
    functions: HashMap<String, Box<dyn DeclarationFn>, RandomState>,
}

impl DeclarationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: create_hash_map(),
        }
    }

    /// Register a declaration function.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already taken.
    pub fn register(&mut self, function: Box<dyn DeclarationFn>) -> Result<(), RegistryError> {
        let name = function.name().to_string();
        if self.functions.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.functions.insert(name, function);
        Ok(())
    }

    /// Look up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn DeclarationFn> {
        self.functions.get(name).map(AsRef::as_ref)
    }

    /// Whether a function is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Remove a function by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn DeclarationFn>> {
        self.functions.remove(name)
    }

    /// Registered function names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for DeclarationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclarationRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

/// Registry preloaded with every built-in rule.
#[must_use]
pub fn create_default_registry() -> DeclarationRegistry {
    let mut registry = DeclarationRegistry::new();
    for function in rules::create_default_rules() {
        // Built-in names are unique by construction.
        registry
            .register(function)
            .unwrap_or_else(|e| unreachable!("{e}"));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopFn;

    impl DeclarationFn for NoopFn {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn declare(&self, _request: &DeclarationRequest<'_>) -> Vec<Declaration> {
            Vec::new()
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = DeclarationRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(NoopFn)).unwrap();
        assert!(registry.has("noop"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("noop").unwrap().name(), "noop");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut registry = DeclarationRegistry::new();
        registry.register(Box::new(NoopFn)).unwrap();

        let err = registry.register(Box::new(NoopFn)).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("noop".to_string()));

        let core: crate::CoreError = err.into();
        assert!(matches!(core, crate::CoreError::Registry(_)));
    }

    #[test]
    fn removal() {
        let mut registry = DeclarationRegistry::new();
        registry.register(Box::new(NoopFn)).unwrap();
        assert!(registry.remove("noop").is_some());
        assert!(registry.remove("noop").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn default_registry_holds_builtins() {
        let registry = create_default_registry();
        for name in [
            "border_radius",
            "overflow_on_radius",
            "icon_placement",
            "force_fullwidth",
            "flex_sizing",
            "svg_sizing",
            "collapsible_borders",
            "required_indicator_color",
        ] {
            assert!(registry.has(name), "missing builtin '{name}'");
        }
    }

    #[test]
    fn declaration_display() {
        assert_eq!(Declaration::new("width", "100%").to_string(), "width:100%");
        assert_eq!(
            Declaration::new("width", "100%").important().to_string(),
            "width:100% !important"
        );
    }
}
