//! Output wrapping and cross-module aggregation
//!
//! Statement lists flatten to CSS text with non-base statements wrapped in
//! their media query. Both output forms are observably equivalent: string
//! mode is exactly the structured list passed through
//! [`render_statements`].

use crate::builder::StyleStatement;

/// Render a statement list to CSS text.
///
/// Empty statements are skipped; statement order is preserved so the
/// browser's media cascade resolves cross-breakpoint precedence.
#[must_use]
pub fn render_statements(statements: &[StyleStatement]) -> String {
    let mut out = String::new();
    for statement in statements {
        if statement.is_empty() {
            continue;
        }
        match &statement.media {
            None => statement.render_into(&mut out),
            Some(media) => {
                out.push_str("@media ");
                out.push_str(media);
                out.push('{');
                statement.render_into(&mut out);
                out.push('}');
            }
        }
    }
    out
}

/// A module's style output in the caller's requested form.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleOutput {
    /// Flat CSS text.
    Css(String),
    /// Structured statements for a parent aggregator.
    Statements(Vec<StyleStatement>),
}

impl StyleOutput {
    /// Flatten to CSS text. Already-flat output passes through.
    #[must_use]
    pub fn into_css(self) -> String {
        match self {
            Self::Css(css) => css,
            Self::Statements(statements) => render_statements(&statements),
        }
    }

    /// Whether the output renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Css(css) => css.is_empty(),
            Self::Statements(statements) => statements.iter().all(StyleStatement::is_empty),
        }
    }
}

/// Collects several modules' statements before one final string pass.
#[derive(Debug, Clone, Default)]
pub struct StyleAggregator {
    statements: Vec<StyleStatement>,
}

impl StyleAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append one module's statements, preserving order.
    pub fn extend(&mut self, statements: Vec<StyleStatement>) {
        self.statements.extend(statements);
    }

    /// The collected statements.
    #[must_use]
    pub fn statements(&self) -> &[StyleStatement] {
        &self.statements
    }

    /// Number of collected statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Flatten everything collected to CSS text.
    #[must_use]
    pub fn into_css(self) -> String {
        render_statements(&self.statements)
    }
}
