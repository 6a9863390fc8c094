//! Inline help indicator.
//!
//! [`HelpGlyph`] renders a small circular `?` whose native `title` tooltip
//! shows the given text:
//!
//! ```
//! use help_glyph::HelpGlyph;
//!
//! let html = HelpGlyph::new("Retries use exponential backoff").to_html();
//! assert!(html.contains(r#"title="Retries use exponential backoff""#));
//! ```

use askama::Template;

/// A fixed-size circular question-mark glyph with a hover tooltip.
///
/// Stateless: the markup depends only on `text`. The text is HTML-escaped
/// inside the `title` and `aria-label` attributes, so any string is valid,
/// the empty string included.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(
    source = r#"<span class="help-glyph" role="img" aria-label="{{ text }}" title="{{ text }}" style="display:inline-flex;align-items:center;justify-content:center;box-sizing:border-box;width:16px;height:16px;border-radius:50%;border:1px solid currentColor;font-size:11px;font-weight:600;line-height:1;cursor:help;user-select:none">?</span>"#,
    ext = "html"
)]
pub struct HelpGlyph {
    text: String,
}

impl HelpGlyph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The tooltip text, unescaped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the glyph as an HTML fragment.
    ///
    /// Same output as the `Display` impl generated by the template.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for HelpGlyph {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for HelpGlyph {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
