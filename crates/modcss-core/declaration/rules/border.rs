//! Border radius declaration rules
//!
//! Two rules share the corner composite: one renders the radii themselves,
//! the other decides whether clipped overflow is required. A radius value
//! is either a scalar applied to all four corners or a map keyed by corner
//! name.

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::tree::AttrValue;
use crate::utils::css::is_effectively_nonzero;

/// Corner keys in render order.
const CORNERS: [(&str, &str); 4] = [
    ("top_left", "border-top-left-radius"),
    ("top_right", "border-top-right-radius"),
    ("bottom_right", "border-bottom-right-radius"),
    ("bottom_left", "border-bottom-left-radius"),
];

/// Renders the corner radii of a border-radius composite.
pub struct RadiusCornersFn;

impl DeclarationFn for RadiusCornersFn {
    fn name(&self) -> &'static str {
        "border_radius"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        let Some(value) = request.value() else {
            return Vec::new();
        };

        match value {
            AttrValue::Map(_) => CORNERS
                .iter()
                .filter_map(|(key, property)| {
                    let raw = value.get(key)?.to_css()?;
                    if raw.is_empty() {
                        return None;
                    }
                    Some(Declaration::new(*property, raw))
                })
                .collect(),
            scalar => scalar
                .to_css()
                .filter(|raw| !raw.is_empty())
                .map(|raw| vec![Declaration::new("border-radius", raw)])
                .unwrap_or_default(),
        }
    }
}

/// Emits `overflow: hidden` when any corner is effectively non-zero.
///
/// Symbolic/global references cannot be parsed numerically and count as
/// non-zero, so a preset-driven radius still clips. All corners zero or
/// absent emit nothing.
pub struct RadiusOverflowFn;

impl DeclarationFn for RadiusOverflowFn {
    fn name(&self) -> &'static str {
        "overflow_on_radius"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        let Some(value) = request.value() else {
            return Vec::new();
        };

        let any_nonzero = match value {
            AttrValue::Map(_) => CORNERS.iter().any(|(key, _)| {
                value
                    .get(key)
                    .and_then(AttrValue::to_css)
                    .is_some_and(|raw| is_effectively_nonzero(&raw))
            }),
            scalar => scalar
                .to_css()
                .is_some_and(|raw| is_effectively_nonzero(&raw)),
        };

        if any_nonzero {
            vec![Declaration::new("overflow", "hidden")]
        } else {
            Vec::new()
        }
    }
}
