//! # modcss-core
//!
//! Responsive attribute-resolution and style-declaration engine for
//! visual-builder modules. Turns a declarative breakpoint → state → value
//! attribute tree into concrete CSS rule text through pure, individually
//! testable strategies.
//!
//! ## Features
//!
//! - **Monotonic inheritance**: narrow breakpoints and pseudo-states fall
//!   back toward `desktop`/`value`, never sideways
//! - **Composite backfill**: partially-overridden objects merge leaf-wise
//!   across the cascade instead of discarding the wider object
//! - **Strategy-based declarations**: `DeclarationFn`/`SelectorFn` trait
//!   objects, registered by name, pure over a request record
//! - **Read-only trees**: the engine never mutates a caller's attributes;
//!   padding tricks are replaced by an explicit visit-all option
//! - **Render-scoped caching**: content-hash memoization with an explicit
//!   lifetime boundary, nothing process-global
//!
//! ## Quick Start
//!
//! ```rust
//! use modcss_core::builder::{BuildSettings, StyleBuilder, StyleRule};
//! use modcss_core::declaration::rules::FullwidthFn;
//! use modcss_core::{AttrTree, AttrValue, Breakpoint, BreakpointOrder, State};
//!
//! let tree = AttrTree::new()
//!     .with(Breakpoint::Desktop, State::Value, AttrValue::from("on"))
//!     .with(Breakpoint::Phone, State::Value, AttrValue::from("off"));
//!
//! let order = BreakpointOrder::default();
//! let builder = StyleBuilder::new(&order, BuildSettings::new(".hero_button_0"));
//! let css = builder.build_css(&[StyleRule::new(&tree, &FullwidthFn)]);
//! assert_eq!(css, ".hero_button_0{width:100%}");
//! ```
//!
//! ## Performance Targets
//!
//! - Resolution: O(declared breakpoints) per lookup, zero allocation for
//!   scalar hits
//! - Statement building: one pass over breakpoints × states × rules
//! - Memory: statements live for one render pass; trees are borrowed

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod builder;
pub mod declaration;
pub mod preset;
pub mod resolve;
pub mod selector;
pub mod tree;
pub mod utils;

pub use builder::{
    render_statements, BuildSettings, ImportantPolicy, SelectorGroup, StyleAggregator,
    StyleBuilder, StyleOutput, StyleRule, StyleStatement,
};
pub use declaration::{Declaration, DeclarationFn, DeclarationRegistry, DeclarationRequest};
pub use preset::{PresetCategories, PresetMap, PresetMapEntry, PresetRegistry};
pub use resolve::{
    Breakpoint, BreakpointOrder, BreakpointSpec, RenderCache, ResolveMode, Resolver, State,
};
pub use selector::{SelectorContext, SelectorFn, ORDER_CLASS_TOKEN};
pub use tree::{AttrTree, AttrValue};
pub use utils::CoreError;

/// Result type for engine operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::declaration::rules::{FullwidthFn, IconPlacementFn, IconPlacementSelector};

    /// Core flow: trees in, ordered CSS out, aggregation across modules.
    #[test]
    fn engine_flow_integration() {
        let order = BreakpointOrder::default();

        let fullwidth = AttrTree::new()
            .with(Breakpoint::Desktop, State::Value, AttrValue::from("on"));
        let icon = AttrTree::new().with(
            Breakpoint::Desktop,
            State::Value,
            AttrValue::map([("placement", AttrValue::from("left"))]),
        );
        let selector_fn = IconPlacementSelector::default();

        let builder = StyleBuilder::new(&order, BuildSettings::new(".cta_0"));
        let statements = builder.build(&[
            StyleRule::new(&fullwidth, &FullwidthFn),
            StyleRule::new(&icon, &IconPlacementFn).with_selector_fn(&selector_fn),
        ]);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].selector, ".cta_0");
        assert_eq!(statements[1].selector, ".cta_0:before");

        let mut aggregator = StyleAggregator::new();
        aggregator.extend(statements.clone());
        assert_eq!(aggregator.into_css(), render_statements(&statements));
    }

    #[test]
    fn registry_surfaces_are_wired() {
        let declarations = declaration::create_default_registry();
        assert!(declarations.has("svg_sizing"));

        let presets = preset::create_default_registry();
        assert!(presets.get_map("button").is_some());
        assert!(presets.get_map("unknown_module").is_none());
    }
}
