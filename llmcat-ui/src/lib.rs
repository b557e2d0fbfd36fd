//! `llmcat-ui` renders highlighted source code as HTML code containers.
//!
//! [`SyntaxHighlighter`] is the only producer of [`HighlightedHtml`] besides
//! [`HighlightedHtml::escaped`], so any markup reaching
//! [`render_code_syntax`] has already been escaped by syntect.

pub mod ui;

pub use ui::code_block::{CODE_CONTAINER_CLASS, render_code_syntax};
pub use ui::markup::HighlightedHtml;
pub use ui::syntax_highlight::{HighlightError, SyntaxHighlighter};
