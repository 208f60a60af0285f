//! CSS value text helpers
//!
//! Small parsing utilities for raw attribute strings: length parsing with
//! unit splitting, the symbolic-reference guard, and the URL/extension
//! checks the image sizing rule relies on.
//!
//! # Coercion policy
//!
//! Symbolic and global references (`var(…)`, `calc(…)`, preset tokens) can
//! never be numerically coerced. Rules that branch on "is this zero" must
//! treat anything unparseable as non-zero, which is what
//! [`is_effectively_nonzero`] encodes.

/// A parsed CSS length: numeric magnitude plus unit text.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    /// Numeric magnitude.
    pub value: f32,
    /// Unit suffix, possibly empty (`px`, `em`, `%`, ...).
    pub unit: String,
}

/// File extensions recognized as vector images.
const VECTOR_EXTENSIONS: [&str; 2] = ["svg", "svgz"];

/// Prefixes marking a value as a symbolic/global reference.
const SYMBOLIC_PREFIXES: [&str; 5] = ["var(", "calc(", "env(", "--", "$"];

/// Parse a raw length value. Returns `None` for empty or symbolic input
/// and for anything whose numeric prefix does not parse.
#[must_use]
pub fn parse_length(raw: &str) -> Option<Length> {
    let raw = raw.trim();
    if raw.is_empty() || is_symbolic_reference(raw) {
        return None;
    }

    let split = raw
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+')
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    number.parse::<f32>().ok().map(|value| Length {
        value,
        unit: unit.trim().to_string(),
    })
}

/// Whether a raw value is a symbolic/global reference that must never be
/// numerically coerced.
#[must_use]
pub fn is_symbolic_reference(raw: &str) -> bool {
    let raw = raw.trim();
    SYMBOLIC_PREFIXES.iter().any(|p| raw.starts_with(p))
}

/// Conservative zero test for rules that only fire on non-zero values.
///
/// Empty/absent text counts as zero; parseable lengths compare their
/// magnitude; anything else (symbolic references included) counts as
/// non-zero.
#[must_use]
pub fn is_effectively_nonzero(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }
    parse_length(raw).is_none_or(|l| l.value != 0.0)
}

/// Strip query string and fragment from a source URL or path.
#[must_use]
pub fn strip_url_decorations(src: &str) -> &str {
    let end = src.find(['?', '#']).unwrap_or(src.len());
    &src[..end]
}

/// Whether a source path (query/fragment ignored) names a vector image.
#[must_use]
pub fn has_vector_extension(src: &str) -> bool {
    let path = strip_url_decorations(src);
    let Some((_, extension)) = path.rsplit_once('.') else {
        return false;
    };
    VECTOR_EXTENSIONS
        .iter()
        .any(|v| extension.eq_ignore_ascii_case(v))
}

/// Format a number the way CSS text expects: integral values lose the
/// fractional point.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parsing() {
        let l = parse_length("10px").unwrap();
        assert_eq!(l.value, 10.0);
        assert_eq!(l.unit, "px");

        let l = parse_length("-2.5em").unwrap();
        assert_eq!(l.value, -2.5);
        assert_eq!(l.unit, "em");

        let l = parse_length("0").unwrap();
        assert_eq!(l.value, 0.0);
        assert_eq!(l.unit, "");

        assert!(parse_length("").is_none());
        assert!(parse_length("auto").is_none());
        assert!(parse_length("var(--radius)").is_none());
    }

    #[test]
    fn symbolic_references_detected() {
        assert!(is_symbolic_reference("var(--x)"));
        assert!(is_symbolic_reference("calc(100% - 20px)"));
        assert!(is_symbolic_reference("$preset.radius"));
        assert!(is_symbolic_reference("--token"));
        assert!(!is_symbolic_reference("10px"));
        assert!(!is_symbolic_reference("hidden"));
    }

    #[test]
    fn zero_test_is_conservative() {
        assert!(!is_effectively_nonzero("0"));
        assert!(!is_effectively_nonzero("0px"));
        assert!(!is_effectively_nonzero("0.0em"));
        assert!(!is_effectively_nonzero(""));
        assert!(!is_effectively_nonzero("   "));

        assert!(is_effectively_nonzero("4px"));
        assert!(is_effectively_nonzero("50%"));
        // Unparseable and symbolic values must count as non-zero.
        assert!(is_effectively_nonzero("var(--radius)"));
        assert!(is_effectively_nonzero("$preset.radius"));
        assert!(is_effectively_nonzero("round"));
    }

    #[test]
    fn url_decoration_stripping() {
        assert_eq!(strip_url_decorations("a/logo.svg?v=2"), "a/logo.svg");
        assert_eq!(strip_url_decorations("a/logo.svg#icon"), "a/logo.svg");
        assert_eq!(strip_url_decorations("a/logo.png"), "a/logo.png");
    }

    #[test]
    fn vector_extension_detection() {
        assert!(has_vector_extension("img/logo.svg"));
        assert!(has_vector_extension("img/logo.SVG?cache=1"));
        assert!(has_vector_extension("img/logo.svgz#frag"));
        assert!(!has_vector_extension("img/logo.png"));
        assert!(!has_vector_extension("img/logo.svg.png"));
        assert!(!has_vector_extension("no-extension"));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }
}
