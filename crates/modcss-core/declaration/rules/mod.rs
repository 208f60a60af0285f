//! Built-in declaration rules
//!
//! One struct per stable business rule, each individually unit-testable by
//! feeding a request and asserting the emitted property list. Callers that
//! assemble rule lists from configuration get all of them via
//! [`create_default_rules`].

pub mod border;
pub mod form;
pub mod icon;
pub mod image;
pub mod sizing;
pub mod table;

pub use border::{RadiusCornersFn, RadiusOverflowFn};
pub use form::RequiredIndicatorFn;
pub use icon::{IconPlacementFn, IconPlacementSelector};
pub use image::SvgSizingFn;
pub use sizing::{FlexSizingFn, FullwidthFn};
pub use table::CollapsibleBordersFn;

use crate::declaration::DeclarationFn;

/// Every built-in declaration rule, boxed for registration.
#[must_use]
pub fn create_default_rules() -> Vec<Box<dyn DeclarationFn>> {
    vec![
        Box::new(RadiusCornersFn),
        Box::new(RadiusOverflowFn),
        Box::new(IconPlacementFn),
        Box::new(FullwidthFn),
        Box::new(FlexSizingFn),
        Box::new(SvgSizingFn),
        Box::new(CollapsibleBordersFn),
        Box::new(RequiredIndicatorFn),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::declaration::DeclarationRequest;
    use crate::resolve::{Breakpoint, BreakpointOrder, Resolver, State};
    use crate::tree::{AttrTree, AttrValue};
    use std::borrow::Cow;

    /// Shared harness assembling a request around a tree and order.
    pub(crate) struct RequestFixture {
        pub order: BreakpointOrder,
        pub tree: AttrTree,
        pub breakpoint: Breakpoint,
        pub state: State,
    }

    impl RequestFixture {
        pub(crate) fn new() -> Self {
            Self::with_tree(AttrTree::new())
        }

        pub(crate) fn with_tree(tree: AttrTree) -> Self {
            Self {
                order: BreakpointOrder::default(),
                tree,
                breakpoint: Breakpoint::Desktop,
                state: State::Value,
            }
        }

        pub(crate) fn at_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
            self.breakpoint = breakpoint;
            self
        }

        pub(crate) fn request(&self, value: Option<AttrValue>) -> DeclarationRequest<'_> {
            DeclarationRequest {
                value: value.map(Cow::Owned),
                tree: &self.tree,
                breakpoint: &self.breakpoint,
                state: &self.state,
                selector: ".m",
                important: false,
                resolver: Resolver::new(&self.order),
            }
        }
    }

    #[test]
    fn every_builtin_has_a_unique_name() {
        let rules = super::create_default_rules();
        let mut names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
        assert_eq!(before, 8);
    }
}
