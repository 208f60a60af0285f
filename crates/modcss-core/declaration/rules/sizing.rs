//! Sizing rules: forced fullwidth and flex sizing

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::tree::AttrValue;

/// `width: 100%` when the fullwidth flag is on; nothing otherwise.
///
/// No defensive `width: auto` is ever emitted for `off` or absent; the
/// module's stylesheet default must win untouched.
pub struct FullwidthFn;

impl DeclarationFn for FullwidthFn {
    fn name(&self) -> &'static str {
        "force_fullwidth"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        if request.value().is_some_and(AttrValue::is_on) {
            vec![Declaration::new("width", "100%")]
        } else {
            Vec::new()
        }
    }
}

/// `flex-grow`/`flex-shrink`/`flex-basis` from a flex composite.
pub struct FlexSizingFn;

impl DeclarationFn for FlexSizingFn {
    fn name(&self) -> &'static str {
        "flex_sizing"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        [
            ("grow", "flex-grow"),
            ("shrink", "flex-shrink"),
            ("basis", "flex-basis"),
        ]
        .iter()
        .filter_map(|(key, property)| {
            request
                .sub_css(key)
                .map(|value| Declaration::new(*property, value))
        })
        .collect()
    }
}
