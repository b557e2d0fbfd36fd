//! Code container rendering.

use super::markup::HighlightedHtml;

/// CSS class of the element wrapping highlighted code.
pub const CODE_CONTAINER_CLASS: &str = "code-container";

/// Render highlighted markup inside a `div.code-container`.
///
/// The markup is inserted verbatim; `None` yields an empty container.
pub fn render_code_syntax(html: Option<&HighlightedHtml>) -> String {
    let inner = html.map(HighlightedHtml::as_str).unwrap_or_default();
    format!("<div class=\"{CODE_CONTAINER_CLASS}\">{inner}</div>")
}
