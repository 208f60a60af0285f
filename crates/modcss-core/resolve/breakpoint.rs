//! Breakpoint identity and declared ordering
//!
//! Breakpoints are the responsive viewport tiers an attribute may hold an
//! independent value at. `desktop` is the base tier; everything else is an
//! override that inherits toward wider tiers. The declared order in a
//! [`BreakpointOrder`] is authoritative for both iteration and inheritance:
//! lookups only ever walk toward wider breakpoints, so non-monotonic
//! fallback (tablet inheriting from phone) is unrepresentable.

use std::fmt;

/// A named responsive viewport tier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// The base tier. The only breakpoint guaranteed to hold a value for a
    /// genuinely-set attribute.
    Desktop,
    /// Stock tablet tier (≤980px by default).
    Tablet,
    /// Stock phone tier (≤767px by default).
    Phone,
    /// A caller-registered tier.
    Custom(String),
}

impl Breakpoint {
    /// Canonical name used in JSON trees and selectors.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Phone => "phone",
            Self::Custom(name) => name,
        }
    }

    /// Parse a breakpoint name; unrecognized names become [`Self::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "desktop" => Self::Desktop,
            "tablet" => Self::Tablet,
            "phone" => Self::Phone,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Whether this is the base tier.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One declared breakpoint plus the viewport bound used for media queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSpec {
    /// The breakpoint this spec declares.
    pub breakpoint: Breakpoint,
    /// Upper viewport bound in pixels; `None` for the unbounded base tier.
    pub max_width: Option<u32>,
}

impl BreakpointSpec {
    /// Declare a breakpoint with an upper viewport bound.
    #[must_use]
    pub const fn bounded(breakpoint: Breakpoint, max_width: u32) -> Self {
        Self {
            breakpoint,
            max_width: Some(max_width),
        }
    }

    /// Media query text for this tier, `None` for the unbounded base.
    #[must_use]
    pub fn media_query(&self) -> Option<String> {
        self.max_width
            .map(|w| format!("only screen and (max-width:{w}px)"))
    }
}

/// The declared, authoritative breakpoint order: base first, then
/// progressively narrower tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointOrder {
    specs: Vec<BreakpointSpec>,
}

impl Default for BreakpointOrder {
    /// The stock three-tier order: desktop, tablet ≤980px, phone ≤767px.
    fn default() -> Self {
        Self {
            specs: vec![
                BreakpointSpec {
                    breakpoint: Breakpoint::Desktop,
                    max_width: None,
                },
                BreakpointSpec::bounded(Breakpoint::Tablet, 980),
                BreakpointSpec::bounded(Breakpoint::Phone, 767),
            ],
        }
    }
}

impl BreakpointOrder {
    /// An order holding only the base tier; customs are registered onto it.
    #[must_use]
    pub fn base_only() -> Self {
        Self {
            specs: vec![BreakpointSpec {
                breakpoint: Breakpoint::Desktop,
                max_width: None,
            }],
        }
    }

    /// Append a tier at the narrow end of the declared order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Config`] if the breakpoint is already
    /// declared.
    pub fn register(&mut self, spec: BreakpointSpec) -> crate::Result<()> {
        self.ensure_absent(&spec.breakpoint)?;
        self.specs.push(spec);
        Ok(())
    }

    /// Insert a tier directly after an existing one, for intermediate
    /// custom breakpoints (e.g. between desktop and tablet).
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Config`] if the anchor is unknown or the
    /// breakpoint is already declared.
    pub fn register_after(&mut self, after: &Breakpoint, spec: BreakpointSpec) -> crate::Result<()> {
        self.ensure_absent(&spec.breakpoint)?;
        let anchor = self.position(after).ok_or_else(|| {
            crate::CoreError::config(format!("unknown anchor breakpoint '{after}'"))
        })?;
        self.specs.insert(anchor + 1, spec);
        Ok(())
    }

    fn ensure_absent(&self, breakpoint: &Breakpoint) -> crate::Result<()> {
        if self.contains(breakpoint) {
            return Err(crate::CoreError::config(format!(
                "breakpoint '{breakpoint}' already declared"
            )));
        }
        Ok(())
    }

    /// Declared specs, widest first.
    pub fn iter(&self) -> impl Iterator<Item = &BreakpointSpec> {
        self.specs.iter()
    }

    /// Number of declared tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether only nothing is declared (never true for constructed orders).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Whether a breakpoint is declared.
    #[must_use]
    pub fn contains(&self, breakpoint: &Breakpoint) -> bool {
        self.position(breakpoint).is_some()
    }

    /// Index in declared order.
    #[must_use]
    pub fn position(&self, breakpoint: &Breakpoint) -> Option<usize> {
        self.specs.iter().position(|s| &s.breakpoint == breakpoint)
    }

    /// The base tier (first declared).
    #[must_use]
    pub fn base(&self) -> &Breakpoint {
        &self.specs[0].breakpoint
    }

    /// The spec for a declared breakpoint.
    #[must_use]
    pub fn spec(&self, breakpoint: &Breakpoint) -> Option<&BreakpointSpec> {
        self.specs.iter().find(|s| &s.breakpoint == breakpoint)
    }

    /// Wider tiers than `breakpoint`, nearest first, ending at the base.
    ///
    /// An undeclared breakpoint is treated as narrower than everything
    /// declared, so its chain walks the whole order from the narrow end.
    pub fn wider(&self, breakpoint: &Breakpoint) -> impl Iterator<Item = &Breakpoint> {
        let position = self.position(breakpoint).unwrap_or(self.specs.len());
        self.specs[..position]
            .iter()
            .rev()
            .map(|s| &s.breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ["desktop", "tablet", "phone", "widescreen"] {
            assert_eq!(Breakpoint::from_name(name).name(), name);
        }
        assert!(Breakpoint::Desktop.is_base());
        assert!(!Breakpoint::Phone.is_base());
    }

    #[test]
    fn default_order_and_media_queries() {
        let order = BreakpointOrder::default();
        let tiers: Vec<_> = order.iter().map(|s| s.breakpoint.name()).collect();
        assert_eq!(tiers, ["desktop", "tablet", "phone"]);

        assert_eq!(order.spec(&Breakpoint::Desktop).unwrap().media_query(), None);
        assert_eq!(
            order.spec(&Breakpoint::Tablet).unwrap().media_query(),
            Some("only screen and (max-width:980px)".to_string())
        );
        assert_eq!(
            order.spec(&Breakpoint::Phone).unwrap().media_query(),
            Some("only screen and (max-width:767px)".to_string())
        );
    }

    #[test]
    fn wider_walks_nearest_first() {
        let order = BreakpointOrder::default();

        let wider_of_phone: Vec<_> = order.wider(&Breakpoint::Phone).map(Breakpoint::name).collect();
        assert_eq!(wider_of_phone, ["tablet", "desktop"]);

        let wider_of_tablet: Vec<_> = order
            .wider(&Breakpoint::Tablet)
            .map(Breakpoint::name)
            .collect();
        assert_eq!(wider_of_tablet, ["desktop"]);

        assert_eq!(order.wider(&Breakpoint::Desktop).count(), 0);
    }

    #[test]
    fn intermediate_custom_breakpoint_sits_in_declared_order() {
        let mut order = BreakpointOrder::default();
        order
            .register_after(
                &Breakpoint::Desktop,
                BreakpointSpec::bounded(Breakpoint::from_name("laptop"), 1280),
            )
            .unwrap();

        let tiers: Vec<_> = order.iter().map(|s| s.breakpoint.name()).collect();
        assert_eq!(tiers, ["desktop", "laptop", "tablet", "phone"]);

        let wider_of_tablet: Vec<_> = order
            .wider(&Breakpoint::Tablet)
            .map(Breakpoint::name)
            .collect();
        assert_eq!(wider_of_tablet, ["laptop", "desktop"]);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut order = BreakpointOrder::default();
        assert!(order
            .register(BreakpointSpec::bounded(Breakpoint::Phone, 500))
            .is_err());
        assert!(order
            .register_after(
                &Breakpoint::from_name("missing"),
                BreakpointSpec::bounded(Breakpoint::from_name("tiny"), 320),
            )
            .is_err());
    }

    #[test]
    fn undeclared_breakpoint_inherits_through_everything() {
        let order = BreakpointOrder::default();
        let chain: Vec<_> = order
            .wider(&Breakpoint::from_name("watch"))
            .map(Breakpoint::name)
            .collect();
        assert_eq!(chain, ["phone", "tablet", "desktop"]);
    }
}
