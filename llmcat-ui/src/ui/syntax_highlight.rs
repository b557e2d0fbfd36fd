//! syntect-backed HTML highlighting.

use std::path::Path;
use std::sync::LazyLock;

use llmcat_config::SyntaxHighlightingConfig;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use thiserror::Error;

use super::markup::HighlightedHtml;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("unknown syntax theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },
    #[error("failed to highlight code: {0}")]
    Render(#[from] syntect::Error),
}

/// Produces [`HighlightedHtml`] for source code with one bundled theme.
#[derive(Clone, Debug)]
pub struct SyntaxHighlighter {
    theme_name: String,
    theme: &'static Theme,
    enabled: bool,
    max_input_bytes: Option<usize>,
}

impl SyntaxHighlighter {
    pub fn new(theme_name: &str) -> Result<Self, HighlightError> {
        let theme_name = theme_name.trim();
        Ok(Self {
            theme_name: theme_name.to_string(),
            theme: load_theme(theme_name)?,
            enabled: true,
            max_input_bytes: None,
        })
    }

    pub fn from_config(config: &SyntaxHighlightingConfig) -> Result<Self, HighlightError> {
        let mut highlighter = Self::new(&config.theme)?;
        highlighter.enabled = config.enabled;
        highlighter.max_input_bytes = Some(config.max_input_bytes());
        Ok(highlighter)
    }

    pub fn with_theme(self, theme_name: &str) -> Result<Self, HighlightError> {
        let theme_name = theme_name.trim();
        Ok(Self {
            theme_name: theme_name.to_string(),
            theme: load_theme(theme_name)?,
            ..self
        })
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Bundled theme names, sorted.
    pub fn available_themes() -> Vec<&'static str> {
        THEME_SET.themes.keys().map(String::as_str).collect()
    }

    /// Syntax for a language token (name or extension); plain text when unknown.
    pub fn find_syntax(language: Option<&str>) -> &'static SyntaxReference {
        language
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .and_then(|token| {
                SYNTAX_SET
                    .find_syntax_by_token(token)
                    .or_else(|| SYNTAX_SET.find_syntax_by_extension(token.trim_start_matches('.')))
            })
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
    }

    /// Language token inferred from a file extension.
    pub fn language_for_path(path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?;
        SYNTAX_SET
            .find_syntax_by_extension(extension)
            .map(|syntax| syntax.name.as_str())
    }

    pub fn should_highlight(&self, code: &str) -> bool {
        self.enabled
            && self
                .max_input_bytes
                .is_none_or(|limit| code.len() <= limit)
    }

    pub fn highlight(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<HighlightedHtml, HighlightError> {
        if !self.should_highlight(code) {
            tracing::debug!(
                enabled = self.enabled,
                bytes = code.len(),
                "rendering code as plain text"
            );
            return Ok(HighlightedHtml::escaped(code));
        }

        let syntax = Self::find_syntax(language);
        tracing::debug!(
            syntax = %syntax.name,
            theme = %self.theme_name,
            bytes = code.len(),
            "highlighting code"
        );
        let html = highlighted_html_for_string(code, &SYNTAX_SET, syntax, self.theme)?;
        Ok(HighlightedHtml::new(html))
    }
}

fn load_theme(theme_name: &str) -> Result<&'static Theme, HighlightError> {
    THEME_SET
        .themes
        .get(theme_name)
        .ok_or_else(|| HighlightError::UnknownTheme {
            name: theme_name.to_string(),
            available: SyntaxHighlighter::available_themes().join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new("base16-ocean.dark").expect("bundled theme")
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = SyntaxHighlighter::new("no-such-theme").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownTheme { ref name, .. } if name == "no-such-theme"));
        assert!(err.to_string().contains("base16-ocean.dark"));
    }

    #[test]
    fn highlights_known_language() {
        let html = highlighter()
            .highlight("fn main() {}\n", Some("rust"))
            .expect("highlight");
        assert!(html.as_str().starts_with("<pre style="));
        assert!(html.as_str().contains("<span"));
        assert!(html.as_str().contains("main"));
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        assert_eq!(
            SyntaxHighlighter::find_syntax(Some("definitely-not-a-language")).name,
            "Plain Text"
        );
        assert_eq!(SyntaxHighlighter::find_syntax(None).name, "Plain Text");
        assert_eq!(SyntaxHighlighter::find_syntax(Some("rs")).name, "Rust");
    }

    #[test]
    fn highlighted_output_escapes_source() {
        let html = highlighter()
            .highlight("<b>bold</b>\n", None)
            .expect("highlight");
        assert!(html.as_str().contains("&lt;b&gt;"));
        assert!(!html.as_str().contains("<b>"));
    }

    #[test]
    fn code_container_wraps_highlighter_output_verbatim() {
        let html = highlighter()
            .highlight("if a < b {}\n", Some("rust"))
            .expect("highlight");
        let rendered = crate::ui::code_block::render_code_syntax(Some(&html));
        assert_eq!(
            rendered,
            format!("<div class=\"code-container\">{}</div>", html.as_str())
        );
        assert!(rendered.contains("&lt;"));
        assert!(!rendered.contains("&amp;lt;"));
    }

    #[test]
    fn disabled_config_renders_escaped_text() {
        let config = SyntaxHighlightingConfig {
            enabled: false,
            ..SyntaxHighlightingConfig::default()
        };
        let highlighter = SyntaxHighlighter::from_config(&config).expect("default theme");
        let html = highlighter.highlight("a < b", Some("rust")).expect("highlight");
        assert_eq!(html.as_str(), "<pre>a &lt; b</pre>");
    }

    #[test]
    fn oversized_input_is_not_highlighted() {
        let config = SyntaxHighlightingConfig {
            max_input_kb: 1,
            ..SyntaxHighlightingConfig::default()
        };
        let highlighter = SyntaxHighlighter::from_config(&config).expect("default theme");
        let code = "x".repeat(2048);
        assert!(!highlighter.should_highlight(&code));
        assert!(highlighter.should_highlight("let x = 1;"));
    }

    #[test]
    fn language_is_inferred_from_extension() {
        assert_eq!(
            SyntaxHighlighter::language_for_path(Path::new("src/main.rs")),
            Some("Rust")
        );
        assert_eq!(SyntaxHighlighter::language_for_path(Path::new("README")), None);
    }

    #[test]
    fn with_theme_switches_theme() {
        let highlighter = highlighter().with_theme("InspiredGitHub").expect("bundled theme");
        assert_eq!(highlighter.theme_name(), "InspiredGitHub");
    }
}
