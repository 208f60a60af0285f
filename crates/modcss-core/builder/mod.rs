//! Style statement building
//!
//! The orchestrator over three nested dimensions: breakpoints in declared
//! order, states in declared order, then each rule's property-selector
//! groups. Per visit it resolves the rule's value, computes the selector,
//! invokes the declaration function, applies the important policy, and
//! merges the output into the statement keyed by (selector, media).
//!
//! Statements come out in breakpoint-then-state order. Cross-breakpoint
//! blocks never overwrite each other; the browser's media cascade resolves
//! that precedence at runtime. The engine owns only per-block declaration
//! content.
//!
//! # Example
//!
//! ```rust
//! use modcss_core::builder::{BuildSettings, StyleBuilder, StyleRule};
//! use modcss_core::declaration::rules::FullwidthFn;
//! use modcss_core::{AttrTree, AttrValue, Breakpoint, BreakpointOrder, State};
//!
//! let order = BreakpointOrder::default();
//! let tree = AttrTree::new()
//!     .with(Breakpoint::Desktop, State::Value, AttrValue::from("on"));
//!
//! let builder = StyleBuilder::new(&order, BuildSettings::new(".mod_1"));
//! let css = builder.build_css(&[StyleRule::new(&tree, &FullwidthFn)]);
//! assert_eq!(css, ".mod_1{width:100%}");
//! ```

pub mod aggregate;
pub mod rule;
pub mod statement;

pub use aggregate::{render_statements, StyleAggregator, StyleOutput};
pub use rule::{BuildSettings, ImportantPolicy, SelectorGroup, StyleRule};
pub use statement::StyleStatement;

use crate::declaration::{Declaration, DeclarationRequest};
use crate::resolve::{BreakpointOrder, RenderCache, Resolver};
use crate::selector::{resolve_selector, substitute_order_class, with_hover, SelectorContext};
use crate::utils::hashers::create_hash_map;
use ahash::RandomState;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Statement index key: selector text within a media scope.
type BlockKey = (String, Option<String>);

/// Drives rules through the breakpoint × state × group iteration.
pub struct StyleBuilder<'b> {
    order: &'b BreakpointOrder,
    settings: BuildSettings,
}

impl<'b> StyleBuilder<'b> {
    /// Create a builder over a breakpoint order and invocation settings.
    #[must_use]
    pub const fn new(order: &'b BreakpointOrder, settings: BuildSettings) -> Self {
        Self { order, settings }
    }

    /// The invocation settings.
    #[must_use]
    pub const fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Build the ordered statement list for a rule set.
    #[must_use]
    pub fn build(&self, rules: &[StyleRule<'_>]) -> Vec<StyleStatement> {
        self.build_inner(rules, None)
    }

    /// [`build`](Self::build) with resolution memoized in a render cache.
    #[must_use]
    pub fn build_cached(
        &self,
        rules: &[StyleRule<'_>],
        cache: &mut RenderCache,
    ) -> Vec<StyleStatement> {
        self.build_inner(rules, Some(cache))
    }

    /// Build straight to CSS text.
    #[must_use]
    pub fn build_css(&self, rules: &[StyleRule<'_>]) -> String {
        render_statements(&self.build(rules))
    }

    /// Build in the caller's requested output form. Both forms flatten to
    /// identical text.
    #[must_use]
    pub fn build_output(&self, rules: &[StyleRule<'_>], as_css: bool) -> StyleOutput {
        let statements = self.build(rules);
        if as_css {
            StyleOutput::Css(render_statements(&statements))
        } else {
            StyleOutput::Statements(statements)
        }
    }

    fn build_inner(
        &self,
        rules: &[StyleRule<'_>],
        mut cache: Option<&mut RenderCache>,
    ) -> Vec<StyleStatement> {
        let resolver = Resolver::new(self.order);
        let mut statements: Vec<StyleStatement> = Vec::new();
        let mut index: HashMap<BlockKey, usize, RandomState> = create_hash_map();

        for spec in self.order.iter() {
            let breakpoint = &spec.breakpoint;
            let media = spec.media_query();

            for state in &self.settings.states {
                for rule in rules {
                    if !(rule.visit_all_breakpoints || rule.tree.has(breakpoint, state)) {
                        continue;
                    }

                    let value = match cache.as_deref_mut() {
                        Some(cache) => cache
                            .resolve(
                                &resolver,
                                rule.tree,
                                breakpoint,
                                state,
                                rule.sub_key.as_deref(),
                                rule.default.as_ref(),
                                rule.mode,
                            )
                            .map(Cow::Owned),
                        None => resolver.resolve(
                            rule.tree,
                            breakpoint,
                            state,
                            rule.sub_key.as_deref(),
                            rule.default.as_ref(),
                            rule.mode,
                        ),
                    };
                    // Absent resolution is a no-op, never an error.
                    if value.is_none() {
                        continue;
                    }

                    let template = rule
                        .selector
                        .as_deref()
                        .unwrap_or(&self.settings.base_selector);
                    let context = SelectorContext {
                        template,
                        order_class: &self.settings.order_class,
                        breakpoint,
                        state,
                        tree: rule.tree,
                        resolver,
                    };
                    let selector = resolve_selector(&context, rule.selector_fn);

                    let policy = rule.important.as_ref().unwrap_or(&self.settings.important);
                    let request = DeclarationRequest {
                        value,
                        tree: rule.tree,
                        breakpoint,
                        state,
                        selector: &selector,
                        important: policy.is_all(),
                        resolver,
                    };
                    let mut declarations = rule.declaration.declare(&request);
                    if declarations.is_empty() {
                        continue;
                    }
                    for declaration in &mut declarations {
                        declaration.important =
                            declaration.important || policy.applies(&declaration.property);
                    }

                    if rule.groups.is_empty() {
                        Self::write(&mut statements, &mut index, selector, media.clone(), declarations);
                    } else {
                        for group in &rule.groups {
                            let accepted: Vec<Declaration> = declarations
                                .iter()
                                .filter(|d| group.accepts(&d.property))
                                .cloned()
                                .collect();
                            if accepted.is_empty() {
                                continue;
                            }
                            let mut group_selector =
                                substitute_order_class(&group.template, &self.settings.order_class);
                            if state.is_hover() {
                                group_selector = with_hover(&group_selector);
                            }
                            Self::write(
                                &mut statements,
                                &mut index,
                                group_selector,
                                media.clone(),
                                accepted,
                            );
                        }
                    }
                }
            }

            if self.settings.disabled_on.contains(breakpoint) {
                let selector =
                    substitute_order_class(&self.settings.base_selector, &self.settings.order_class);
                Self::write(
                    &mut statements,
                    &mut index,
                    selector,
                    media.clone(),
                    vec![Declaration::new("display", "none").important()],
                );
            }
        }

        debug!(statements = statements.len(), "built style statements");
        statements
    }

    /// Merge declarations into the statement for (selector, media),
    /// creating it at the current tail position on first sight.
    fn write(
        statements: &mut Vec<StyleStatement>,
        index: &mut HashMap<BlockKey, usize, RandomState>,
        selector: String,
        media: Option<String>,
        declarations: Vec<Declaration>,
    ) {
        let key = (selector.clone(), media.clone());
        let at = *index.entry(key).or_insert_with(|| {
            statements.push(StyleStatement::new(selector, media));
            statements.len() - 1
        });
        statements[at].extend(declarations);
    }
}
