//! SVG-aware image sizing
//!
//! Raster images keep their intrinsic dimensions; vector sources render at
//! 0×0 in some engines unless sized explicitly. This rule only fires when
//! the resolved `src`, after inheriting across breakpoints, names a
//! vector image (query string and fragment ignored), and then forces
//! width/height to the user's values or the `100%`/`auto` fallbacks.

use crate::declaration::{Declaration, DeclarationFn, DeclarationRequest};
use crate::resolve::ResolveMode;
use crate::tree::AttrValue;
use crate::utils::css::has_vector_extension;

/// Width/height overrides for vector image sources.
pub struct SvgSizingFn;

impl SvgSizingFn {
    fn inherited_sub(request: &DeclarationRequest<'_>, path: &str) -> Option<String> {
        request
            .resolver
            .resolve(
                request.tree,
                request.breakpoint,
                request.state,
                Some(path),
                None,
                ResolveMode::Inherit,
            )
            .as_deref()
            .and_then(AttrValue::to_css)
            .filter(|s| !s.is_empty())
    }
}

impl DeclarationFn for SvgSizingFn {
    fn name(&self) -> &'static str {
        "svg_sizing"
    }

    fn declare(&self, request: &DeclarationRequest<'_>) -> Vec<Declaration> {
        let Some(src) = Self::inherited_sub(request, "src") else {
            return Vec::new();
        };
        if !has_vector_extension(&src) {
            return Vec::new();
        }

        let width = Self::inherited_sub(request, "width").unwrap_or_else(|| "100%".into());
        let height = Self::inherited_sub(request, "height").unwrap_or_else(|| "auto".into());
        vec![
            Declaration::new("width", width),
            Declaration::new("height", height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::rules::tests::RequestFixture;
    use crate::resolve::{Breakpoint, State};
    use crate::tree::AttrTree;

    fn image_tree(src: &str) -> AttrTree {
        AttrTree::new().with(
            Breakpoint::Desktop,
            State::Value,
            AttrValue::map([("src", AttrValue::from(src))]),
        )
    }

    #[test]
    fn vector_source_gets_fallback_dimensions() {
        let fixture = RequestFixture::with_tree(image_tree("img/logo.svg"));
        let request = fixture.request(None);

        let declarations = SvgSizingFn.declare(&request);
        assert_eq!(
            declarations,
            vec![
                Declaration::new("width", "100%"),
                Declaration::new("height", "auto"),
            ]
        );
    }

    #[test]
    fn user_dimensions_win_over_fallbacks() {
        let tree = AttrTree::new().with(
            Breakpoint::Desktop,
            State::Value,
            AttrValue::map([
                ("src", AttrValue::from("img/logo.svg")),
                ("width", AttrValue::from("320px")),
            ]),
        );
        let fixture = RequestFixture::with_tree(tree);
        let request = fixture.request(None);

        let declarations = SvgSizingFn.declare(&request);
        assert_eq!(
            declarations,
            vec![
                Declaration::new("width", "320px"),
                Declaration::new("height", "auto"),
            ]
        );
    }

    #[test]
    fn query_and_fragment_do_not_hide_the_extension() {
        let fixture = RequestFixture::with_tree(image_tree("cdn/logo.svg?v=3#icon"));
        let request = fixture.request(None);
        assert_eq!(SvgSizingFn.declare(&request).len(), 2);
    }

    #[test]
    fn raster_source_is_untouched() {
        let fixture = RequestFixture::with_tree(image_tree("img/photo.png"));
        let request = fixture.request(None);
        assert!(SvgSizingFn.declare(&request).is_empty());
    }

    #[test]
    fn missing_source_is_untouched() {
        let fixture = RequestFixture::new();
        let request = fixture.request(None);
        assert!(SvgSizingFn.declare(&request).is_empty());
    }

    #[test]
    fn src_inherits_across_breakpoints() {
        let fixture = RequestFixture::with_tree(image_tree("img/logo.svg")).at_breakpoint(Breakpoint::Phone);
        let request = fixture.request(None);
        assert_eq!(SvgSizingFn.declare(&request).len(), 2);
    }
}
