//! Collapsible table borders

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::tree::AttrValue;

/// Border declarations for tables that collapse their cell borders.
///
/// Fires only when the composite's `collapse` toggle is on; the border
/// width/style/color sub-values then render alongside
/// `border-collapse: collapse`.
pub struct CollapsibleBordersFn;

impl DeclarationFn for CollapsibleBordersFn {
    fn name(&self) -> &'static str {
        "collapsible_borders"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        if !request.sub("collapse").is_some_and(AttrValue::is_on) {
            return Vec::new();
        }

        let mut declarations = vec![Declaration::new("border-collapse", "collapse")];
        for (key, property) in [
            ("width", "border-width"),
            ("style", "border-style"),
            ("color", "border-color"),
        ] {
            if let Some(value) = request.sub_css(key) {
                declarations.push(Declaration::new(property, value));
            }
        }
        declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::rules::tests::RequestFixture;

    #[test]
    fn collapsed_borders_render() {
        let fixture = RequestFixture::new();
        let request = fixture.request(Some(AttrValue::map([
            ("collapse", AttrValue::from("on")),
            ("width", AttrValue::from("1px")),
            ("color", AttrValue::from("#ddd")),
        ])));

        let declarations = CollapsibleBordersFn.declare(&request);
        assert_eq!(
            declarations,
            vec![
                Declaration::new("border-collapse", "collapse"),
                Declaration::new("border-width", "1px"),
                Declaration::new("border-color", "#ddd"),
            ]
        );
    }

    #[test]
    fn collapse_off_or_absent_is_silent() {
        let fixture = RequestFixture::new();

        let request = fixture.request(Some(AttrValue::map([
            ("collapse", AttrValue::from("off")),
            ("width", AttrValue::from("1px")),
        ])));
        assert!(CollapsibleBordersFn.declare(&request).is_empty());

        let request = fixture.request(Some(AttrValue::map([(
            "width",
            AttrValue::from("1px"),
        )])));
        assert!(CollapsibleBordersFn.declare(&request).is_empty());

        let request = fixture.request(None);
        assert!(CollapsibleBordersFn.declare(&request).is_empty());
    }

    #[test]
    fn collapse_alone_still_collapses() {
        let fixture = RequestFixture::new();
        let request = fixture.request(Some(AttrValue::map([(
            "collapse",
            AttrValue::from("on"),
        )])));
        assert_eq!(
            CollapsibleBordersFn.declare(&request),
            vec![Declaration::new("border-collapse", "collapse")]
        );
    }
}
