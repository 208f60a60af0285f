//! Selector synthesis
//!
//! Computes the concrete CSS selector for a (breakpoint, state) visit:
//! order-class substitution into a template, pseudo-element suffixing with
//! multi-selector expansion, hover suffixing with a no-duplicate guard, and
//! the [`SelectorFn`] strategy trait for rules that branch on resolved
//! sub-values.

use crate::resolve::{Breakpoint, Resolver, State};
use crate::tree::AttrTree;

/// Template token replaced by the module's render-order-scoped class.
pub const ORDER_CLASS_TOKEN: &str = "{order_class}";

/// Legacy single-colon pseudo-elements that still mark a selector tail.
const PSEUDO_ELEMENT_TAILS: [&str; 4] = [":before", ":after", ":first-line", ":first-letter"];

/// Everything a selector function may consult.
#[derive(Debug, Clone)]
pub struct SelectorContext<'a> {
    /// Selector template for this rule (may contain the order-class token).
    pub template: &'a str,
    /// The module instance's order class (e.g. `.module_3`).
    pub order_class: &'a str,
    /// Breakpoint being rendered.
    pub breakpoint: &'a Breakpoint,
    /// State being rendered.
    pub state: &'a State,
    /// The rule's attribute tree.
    pub tree: &'a AttrTree,
    /// Resolver over the render's breakpoint order.
    pub resolver: Resolver<'a>,
}

impl SelectorContext<'_> {
    /// The template with the order class substituted in.
    #[must_use]
    pub fn base_selector(&self) -> String {
        substitute_order_class(self.template, self.order_class)
    }
}

/// A pure strategy computing the selector for one visit.
pub trait SelectorFn: Send + Sync {
    /// Unique name identifier for this selector function.
    fn name(&self) -> &'static str;

    /// Compute the final selector text.
    fn select(&self, context: &SelectorContext<'_>) -> String;
}

/// Substitute the order class into a selector template.
///
/// A template without the token is returned unchanged, so plain selectors
/// pass through.
#[must_use]
pub fn substitute_order_class(template: &str, order_class: &str) -> String {
    template.replace(ORDER_CLASS_TOKEN, order_class)
}

/// Suffix every comma-separated part with a pseudo-element.
///
/// ```rust
/// use modcss_core::selector::with_pseudo_element;
///
/// assert_eq!(with_pseudo_element("a, b", ":before"), "a:before, b:before");
/// ```
#[must_use]
pub fn with_pseudo_element(selector: &str, pseudo: &str) -> String {
    join_parts(selector, |part| format!("{part}{pseudo}"))
}

/// Add `:hover` to every comma-separated part that does not carry it yet.
///
/// The suffix lands on the base selector, before any pseudo-element, so
/// `.m:after` becomes `.m:hover:after`. Applying the function twice
/// yields the same text; a selector never gains `:hover:hover`.
///
/// ```rust
/// use modcss_core::selector::with_hover;
///
/// assert_eq!(with_hover(".m:after"), ".m:hover:after");
/// assert_eq!(with_hover(".m:hover:after"), ".m:hover:after");
/// ```
#[must_use]
pub fn with_hover(selector: &str) -> String {
    join_parts(selector, |part| {
        if part.contains(":hover") {
            return part.to_string();
        }
        let split = pseudo_element_start(part).unwrap_or(part.len());
        format!("{}:hover{}", &part[..split], &part[split..])
    })
}

/// Resolve the selector for one visit: the strategy when supplied,
/// otherwise template substitution with automatic hover suffixing for
/// hover-state visits.
#[must_use]
pub fn resolve_selector(context: &SelectorContext<'_>, strategy: Option<&dyn SelectorFn>) -> String {
    match strategy {
        Some(f) => f.select(context),
        None => {
            let base = context.base_selector();
            if context.state.is_hover() {
                with_hover(&base)
            } else {
                base
            }
        }
    }
}

/// Byte offset where a pseudo-element suffix begins, if any.
fn pseudo_element_start(part: &str) -> Option<usize> {
    let mut earliest = part.find("::");
    for tail in PSEUDO_ELEMENT_TAILS {
        if let Some(at) = part.find(tail) {
            earliest = Some(earliest.map_or(at, |e| e.min(at)));
        }
    }
    earliest
}

fn join_parts(selector: &str, transform: impl Fn(&str) -> String) -> String {
    selector
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(transform)
        .collect::<Vec<_>>()
        .join(", ")
}
