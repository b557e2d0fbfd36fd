use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use llmcat_ui::{SyntaxHighlighter, render_code_syntax};

use crate::StartupContext;

pub fn handle_highlight_command(
    startup: &StartupContext,
    file: &Path,
    lang: Option<&str>,
    theme: Option<&str>,
) -> Result<()> {
    let code = fs::read_to_string(file)
        .with_context(|| format!("Failed to read source file: {}", file.display()))?;
    println!("{}", render_file(startup, &code, file, lang, theme)?);
    Ok(())
}

/// Highlight `code` and wrap it in a code container.
pub fn render_file(
    startup: &StartupContext,
    code: &str,
    file: &Path,
    lang: Option<&str>,
    theme: Option<&str>,
) -> Result<String> {
    let mut highlighter = SyntaxHighlighter::from_config(&startup.config.syntax_highlighting)
        .context("Invalid [syntax_highlighting] configuration")?;
    if let Some(theme) = theme {
        highlighter = highlighter.with_theme(theme)?;
    }

    let language = lang.or_else(|| SyntaxHighlighter::language_for_path(file));
    let html = highlighter.highlight(code, language)?;
    Ok(render_code_syntax(Some(&html)))
}
