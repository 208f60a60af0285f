//! Form field rules

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::tree::AttrValue;

/// Color for the required-field indicator glyph.
///
/// A set color renders; `Null`, empty, and absent all mean "inherit the
/// theme" and emit nothing.
pub struct RequiredIndicatorFn;

impl DeclarationFn for RequiredIndicatorFn {
    fn name(&self) -> &'static str {
        "required_indicator_color"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        let color = request
            .value()
            .and_then(AttrValue::to_css)
            .filter(|c| !c.is_empty());
        match color {
            Some(color) => vec![Declaration::new("color", color)],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::rules::tests::RequestFixture;

    #[test]
    fn set_color_renders() {
        let fixture = RequestFixture::new();
        let request = fixture.request(Some(AttrValue::from("#e02b20")));
        assert_eq!(
            RequiredIndicatorFn.declare(&request),
            vec![Declaration::new("color", "#e02b20")]
        );
    }

    #[test]
    fn unset_color_is_silent() {
        let fixture = RequestFixture::new();

        for value in [None, Some(AttrValue::from("")), Some(AttrValue::Null)] {
            let request = fixture.request(value);
            assert!(RequiredIndicatorFn.declare(&request).is_empty());
        }
    }
}
