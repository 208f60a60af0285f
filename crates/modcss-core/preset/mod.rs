//! Preset attribute maps
//!
//! Static metadata classifying each dotted attribute path into propagation
//! categories. Preset/conversion tooling consults this registry to decide
//! which raw attribute values survive into a reusable preset; nothing at
//! render time depends on it beyond sharing the dotted-path naming
//! convention.
//!
//! Maps are append-only per module type: a dotted path registers once and
//! re-registration is rejected. [`PresetRegistry::get_map`] is a pure
//! lookup with no side effects.

use crate::utils::hashers::create_hash_map;
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

bitflags::bitflags! {
    /// Propagation categories an attribute may belong to.
    ///
    /// The set is closed; an attribute may carry several categories at
    /// once (an icon setting is both HTML- and style-relevant).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PresetCategories: u8 {
        /// Content values (text, URLs) that stay with the instance.
        const CONTENT = 1 << 0;
        /// Style values that travel with the preset.
        const STYLE = 1 << 1;
        /// Values affecting generated markup.
        const HTML = 1 << 2;
        /// Values affecting enqueued behavior scripts.
        const SCRIPT = 1 << 3;
        /// Editor-only metadata (labels, admin state).
        const META = 1 << 4;
    }
}

/// One attribute path's preset classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetMapEntry {
    /// The attribute name (first dotted segment).
    pub attr_name: String,
    /// Sub-attribute name for composite attributes.
    pub sub_name: Option<String>,
    /// Categories the attribute belongs to.
    pub categories: PresetCategories,
}

impl PresetMapEntry {
    /// Entry for a plain attribute.
    #[must_use]
    pub fn new(attr_name: impl Into<String>, categories: PresetCategories) -> Self {
        Self {
            attr_name: attr_name.into(),
            sub_name: None,
            categories,
        }
    }

    /// Entry for a composite sub-attribute.
    #[must_use]
    pub fn with_sub(
        attr_name: impl Into<String>,
        sub_name: impl Into<String>,
        categories: PresetCategories,
    ) -> Self {
        Self {
            attr_name: attr_name.into(),
            sub_name: Some(sub_name.into()),
            categories,
        }
    }

    /// The dotted path keying this entry.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.sub_name {
            Some(sub) => format!("{}.{sub}", self.attr_name),
            None => self.attr_name.clone(),
        }
    }
}

/// Errors from preset map registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    /// Dotted path already registered in this map.
    #[error("preset path '{0}' already registered")]
    DuplicatePath(String),
    /// Module type already holds a map.
    #[error("preset map for module '{0}' already registered")]
    DuplicateModule(String),
}

impl From<PresetError> for crate::CoreError {
    fn from(err: PresetError) -> Self {
        Self::registry(err)
    }
}

/// One module type's append-only attribute classification map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetMap {
    entries: BTreeMap<String, PresetMapEntry>,
}

impl PresetMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register an entry under its dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::DuplicatePath`] when the path is taken; the
    /// map is append-only and never silently reclassifies.
    pub fn insert(&mut self, entry: PresetMapEntry) -> Result<(), PresetError> {
        let path = entry.path();
        if self.entries.contains_key(&path) {
            return Err(PresetError::DuplicatePath(path));
        }
        self.entries.insert(path, entry);
        Ok(())
    }

    /// Look up an entry by dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PresetMapEntry> {
        self.entries.get(path)
    }

    /// Categories for a dotted path; empty set when unclassified.
    #[must_use]
    pub fn categories_of(&self, path: &str) -> PresetCategories {
        self.get(path)
            .map_or(PresetCategories::empty(), |e| e.categories)
    }

    /// Entries intersecting a category, in path order.
    pub fn in_category(
        &self,
        category: PresetCategories,
    ) -> impl Iterator<Item = &PresetMapEntry> {
        self.entries
            .values()
            .filter(move |e| e.categories.intersects(category))
    }

    /// All entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = &PresetMapEntry> {
        self.entries.values()
    }

    /// Number of classified paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map classifies nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-module-type registry of preset maps.
#[derive(Default)]
pub struct PresetRegistry {
    modules: HashMap<String, PresetMap, RandomState>,
}

impl PresetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: create_hash_map(),
        }
    }

    /// Register a module type's map.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::DuplicateModule`] when the module type
    /// already holds a map.
    pub fn register_module(
        &mut self,
        module: impl Into<String>,
        map: PresetMap,
    ) -> Result<(), PresetError> {
        let module = module.into();
        if self.modules.contains_key(&module) {
            return Err(PresetError::DuplicateModule(module));
        }
        self.modules.insert(module, map);
        Ok(())
    }

    /// Pure lookup of a module type's map.
    #[must_use]
    pub fn get_map(&self, module: &str) -> Option<&PresetMap> {
        self.modules.get(module)
    }

    /// Registered module type names.
    #[must_use]
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Number of registered module types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetRegistry")
            .field("modules", &self.module_names())
            .finish()
    }
}

/// Registry preloaded with the stock module maps.
#[must_use]
pub fn create_default_registry() -> PresetRegistry {
    let mut registry = PresetRegistry::new();
    // Stock maps register under reserved names; duplicates are impossible.
    registry
        .register_module("button", button_map())
        .unwrap_or_else(|e| unreachable!("{e}"));
    registry
        .register_module("image", image_map())
        .unwrap_or_else(|e| unreachable!("{e}"));
    registry
}

fn button_map() -> PresetMap {
    let mut map = PresetMap::new();
    let entries = [
        PresetMapEntry::new("text", PresetCategories::CONTENT),
        PresetMapEntry::new("link", PresetCategories::CONTENT),
        PresetMapEntry::new("force_fullwidth", PresetCategories::STYLE),
        PresetMapEntry::new("border_radius", PresetCategories::STYLE),
        PresetMapEntry::with_sub(
            "icon",
            "placement",
            PresetCategories::HTML | PresetCategories::STYLE,
        ),
        PresetMapEntry::with_sub("icon", "color", PresetCategories::STYLE),
        PresetMapEntry::new("rel", PresetCategories::HTML),
        PresetMapEntry::new("admin_label", PresetCategories::META),
    ];
    for entry in entries {
        map.insert(entry).unwrap_or_else(|e| unreachable!("{e}"));
    }
    map
}

fn image_map() -> PresetMap {
    let mut map = PresetMap::new();
    let entries = [
        PresetMapEntry::new("src", PresetCategories::CONTENT),
        PresetMapEntry::new("alt", PresetCategories::CONTENT),
        PresetMapEntry::new("force_fullwidth", PresetCategories::STYLE),
        PresetMapEntry::new("border_radius", PresetCategories::STYLE),
        PresetMapEntry::new("show_in_lightbox", PresetCategories::SCRIPT),
        PresetMapEntry::new("admin_label", PresetCategories::META),
    ];
    for entry in entries {
        map.insert(entry).unwrap_or_else(|e| unreachable!("{e}"));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_paths() {
        assert_eq!(
            PresetMapEntry::new("text", PresetCategories::CONTENT).path(),
            "text"
        );
        assert_eq!(
            PresetMapEntry::with_sub("icon", "placement", PresetCategories::HTML).path(),
            "icon.placement"
        );
    }

    #[test]
    fn append_only_maps() {
        let mut map = PresetMap::new();
        map.insert(PresetMapEntry::new("text", PresetCategories::CONTENT))
            .unwrap();

        let err = map
            .insert(PresetMapEntry::new("text", PresetCategories::STYLE))
            .unwrap_err();
        assert_eq!(err, PresetError::DuplicatePath("text".to_string()));

        // The original classification survives.
        assert_eq!(map.categories_of("text"), PresetCategories::CONTENT);
    }

    #[test]
    fn multi_category_membership() {
        let registry = create_default_registry();
        let map = registry.get_map("button").unwrap();

        let categories = map.categories_of("icon.placement");
        assert!(categories.contains(PresetCategories::HTML));
        assert!(categories.contains(PresetCategories::STYLE));
        assert!(!categories.contains(PresetCategories::SCRIPT));
    }

    #[test]
    fn unknown_lookups_are_empty() {
        let registry = create_default_registry();
        assert!(registry.get_map("accordion").is_none());

        let map = registry.get_map("image").unwrap();
        assert_eq!(map.categories_of("missing"), PresetCategories::empty());
    }

    #[test]
    fn category_filtering() {
        let registry = create_default_registry();
        let map = registry.get_map("image").unwrap();

        let content: Vec<_> = map
            .in_category(PresetCategories::CONTENT)
            .map(PresetMapEntry::path)
            .collect();
        assert_eq!(content, ["alt", "src"]);
    }

    #[test]
    fn duplicate_module_rejected() {
        let mut registry = PresetRegistry::new();
        registry.register_module("button", PresetMap::new()).unwrap();
        assert_eq!(
            registry
                .register_module("button", PresetMap::new())
                .unwrap_err(),
            PresetError::DuplicateModule("button".to_string())
        );
    }
}
