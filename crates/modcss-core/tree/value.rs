//! Attribute value variants and dotted-path access
//!
//! Provides the `AttrValue` enum, the single value type stored at every
//! breakpoint/state slot of an attribute tree. A value is either a scalar
//! (string, number, boolean, explicit null) or a further nested mapping
//! keyed by sub-attribute name.
//!
//! # Absence vs emptiness
//!
//! An explicitly-set empty string or `Null` is a *real* value: it stops the
//! inheritance cascade like any other hit. Absence is the key not existing
//! at all. Callers that want "clear the inherited value" store the
//! documented clear sentinel ([`AttrValue::clear`]) instead of relying on
//! emptiness.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One attribute value: a scalar or a nested sub-attribute mapping.
///
/// Maps use [`BTreeMap`] so sub-attribute iteration order is deterministic,
/// which keeps rendered declaration order stable across runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AttrValue {
    /// Explicitly-set null. A real value, distinct from an absent key.
    Null,
    /// Raw string value (`"10px"`, `"on"`, `"left"`, ...).
    Str(String),
    /// Numeric value.
    Num(f64),
    /// Boolean toggle.
    Bool(bool),
    /// Nested mapping keyed by sub-attribute name.
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Scalar stored by callers that want "clear the inherited value".
    ///
    /// Resolution treats an exact hit on this sentinel as "stop the cascade
    /// and resolve as absent". Empty strings and `Null` stay ordinary values.
    pub const CLEAR_SENTINEL: &'static str = "@clear";

    /// Construct the clear sentinel.
    #[must_use]
    pub fn clear() -> Self {
        Self::Str(Self::CLEAR_SENTINEL.into())
    }

    /// Check whether this value is the clear sentinel.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Str(s) if s == Self::CLEAR_SENTINEL)
    }

    /// Construct a map value from key/value pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modcss_core::AttrValue;
    ///
    /// let icon = AttrValue::map([
    ///     ("placement", AttrValue::from("left")),
    ///     ("size", AttrValue::from("16px")),
    /// ]);
    /// assert_eq!(icon.get("placement").and_then(AttrValue::as_str), Some("left"));
    /// ```
    #[must_use]
    pub fn map<const N: usize>(entries: [(&str, AttrValue); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Borrow the string content, if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the nested mapping, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric content, if this is a number.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean content, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is a nested mapping.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Toggle check: `"on"` or `true` count as enabled, everything else off.
    #[must_use]
    pub fn is_on(&self) -> bool {
        match self {
            Self::Str(s) => s == "on",
            Self::Bool(b) => *b,
            _ => false,
        }
    }

    /// Look up a direct sub-attribute. Scalars have no sub-attributes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Descend a dotted sub-attribute path (`"icon.placement"`).
    ///
    /// An empty path returns the value itself. A scalar encountered where a
    /// mapping was expected reads as absent, never an error, so partially
    /// migrated or hand-edited attribute data degrades gracefully.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&AttrValue> {
        if path.is_empty() {
            return Some(self);
        }
        let mut current = self;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Render a scalar to CSS value text. Maps and `Null` have no text form.
    #[must_use]
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Num(n) => Some(crate::utils::css::format_number(*n)),
            Self::Bool(b) => Some(if *b { "true".into() } else { "false".into() }),
            Self::Null | Self::Map(_) => None,
        }
    }

    /// Convert a JSON value into an attribute value.
    ///
    /// Arrays are not part of the attribute model; they convert to maps
    /// keyed by element index so migrated data stays addressable.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Num),
            serde_json::Value::String(s) => Self::Str(s.clone()),
            serde_json::Value::Array(items) => Self::Map(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), Self::from_json(v)))
                    .collect(),
            ),
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Num(n) => write!(f, "{}", crate::utils::css::format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Map(m) => write!(f, "{{{} entries}}", m.len()),
        }
    }
}

// Hashed for the render cache; f64 goes through its bit pattern.
impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Null => state.write_u8(0),
            Self::Str(s) => {
                state.write_u8(1);
                s.hash(state);
            }
            Self::Num(n) => {
                state.write_u8(2);
                state.write_u64(n.to_bits());
            }
            Self::Bool(b) => {
                state.write_u8(3);
                b.hash(state);
            }
            Self::Map(m) => {
                state.write_u8(4);
                state.write_usize(m.len());
                for (k, v) in m {
                    k.hash(state);
                    v.hash(state);
                }
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(value: BTreeMap<String, AttrValue>) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_accessors() {
        assert_eq!(AttrValue::from("10px").as_str(), Some("10px"));
        assert_eq!(AttrValue::from(2.0).as_num(), Some(2.0));
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert!(AttrValue::Null.as_str().is_none());
    }

    #[test]
    fn dotted_path_descent() {
        let value = AttrValue::map([(
            "icon",
            AttrValue::map([("placement", AttrValue::from("left"))]),
        )]);

        assert_eq!(
            value.get_path("icon.placement").and_then(AttrValue::as_str),
            Some("left")
        );
        assert_eq!(value.get_path("").unwrap(), &value);
        assert!(value.get_path("icon.missing").is_none());
    }

    #[test]
    fn scalar_where_map_expected_reads_as_absent() {
        let value = AttrValue::map([("icon", AttrValue::from("not-a-map"))]);
        assert!(value.get_path("icon.placement").is_none());
    }

    #[test]
    fn clear_sentinel_is_distinct_from_empty() {
        assert!(AttrValue::clear().is_clear());
        assert!(!AttrValue::from("").is_clear());
        assert!(!AttrValue::Null.is_clear());
    }

    #[test]
    fn toggle_semantics() {
        assert!(AttrValue::from("on").is_on());
        assert!(AttrValue::from(true).is_on());
        assert!(!AttrValue::from("off").is_on());
        assert!(!AttrValue::from("").is_on());
        assert!(!AttrValue::Null.is_on());
    }

    #[test]
    fn css_text_rendering() {
        assert_eq!(AttrValue::from("10px").to_css(), Some("10px".to_string()));
        assert_eq!(AttrValue::from(12.0).to_css(), Some("12".to_string()));
        assert_eq!(AttrValue::from(1.5).to_css(), Some("1.5".to_string()));
        assert!(AttrValue::Null.to_css().is_none());
        assert!(AttrValue::map([]).to_css().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_conversion() {
        let json: serde_json::Value = serde_json::json!({
            "placement": "left",
            "size": 16,
            "enabled": true,
            "layers": ["a", "b"],
            "reset": null,
        });
        let value = AttrValue::from_json(&json);

        assert_eq!(
            value.get_path("placement").and_then(AttrValue::as_str),
            Some("left")
        );
        assert_eq!(value.get_path("size").and_then(AttrValue::as_num), Some(16.0));
        assert_eq!(
            value.get_path("layers.1").and_then(AttrValue::as_str),
            Some("b")
        );
        assert_eq!(value.get_path("reset"), Some(&AttrValue::Null));
    }
}
