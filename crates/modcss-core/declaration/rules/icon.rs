//! Icon placement rules
//!
//! An icon descriptor is a composite (`placement`, `size`, `color`, `gap`)
//! frequently only partially overridden at narrower breakpoints, so both
//! the declaration side and the selector side resolve it with full
//! backfill. Placement drives the pseudo-element: `left` renders on
//! `:before`, every other placement (including the default `right`) on
//! `:after`.

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::resolve::ResolveMode;
use crate::selector::{with_hover, with_pseudo_element, SelectorContext, SelectorFn};
use crate::tree::AttrValue;

/// Default spacing between icon and label when a placement is set.
const DEFAULT_GAP: &str = "0.3em";

/// Declarations for the icon pseudo-element.
pub struct IconPlacementFn;

impl DeclarationFn for IconPlacementFn {
    fn name(&self) -> &'static str {
        "icon_placement"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        let Some(placement) = request.sub_css("placement") else {
            return Vec::new();
        };

        let gap = request.sub_css("gap").unwrap_or_else(|| DEFAULT_GAP.into());
        let mut declarations = Vec::new();
        if placement == "left" {
            declarations.push(Declaration::new("margin-right", gap));
        } else {
            declarations.push(Declaration::new("margin-left", gap));
        }
        if let Some(size) = request.sub_css("size") {
            declarations.push(Declaration::new("font-size", size));
        }
        if let Some(color) = request.sub_css("color") {
            declarations.push(Declaration::new("color", color));
        }
        declarations
    }
}

/// Selector strategy choosing the icon pseudo-element from placement.
///
/// Hover-state visits add `:hover` to the base selector before the
/// pseudo-element, guarded against duplication.
pub struct IconPlacementSelector {
    /// Dotted path to the placement value inside the rule's tree.
    pub placement_path: String,
}

impl Default for IconPlacementSelector {
    fn default() -> Self {
        Self {
            placement_path: "placement".to_string(),
        }
    }
}

impl IconPlacementSelector {
    /// Strategy reading placement from a custom dotted path.
    #[must_use]
    pub fn at(placement_path: impl Into<String>) -> Self {
        Self {
            placement_path: placement_path.into(),
        }
    }
}

impl SelectorFn for IconPlacementSelector {
    fn name(&self) -> &'static str {
        "icon_placement"
    }

    fn select(&self, context: &SelectorContext<'_>) -> String {
        let placement = context
            .resolver
            .resolve(
                context.tree,
                context.breakpoint,
                context.state,
                Some(self.placement_path.as_str()),
                None,
                ResolveMode::InheritAll,
            )
            .as_deref()
            .and_then(AttrValue::as_str)
            .map(str::to_string);

        let mut base = context.base_selector();
        if context.state.is_hover() {
            base = with_hover(&base);
        }
        let pseudo = match placement.as_deref() {
            Some("left") => ":before",
            _ => ":after",
        };
        with_pseudo_element(&base, pseudo)
    }
}
