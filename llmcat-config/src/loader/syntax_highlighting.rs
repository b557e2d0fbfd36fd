use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Syntax highlighting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyntaxHighlightingConfig {
    /// Highlight code blocks; when off, code is rendered as escaped plain text
    #[serde(default = "defaults::syntax_highlighting::enabled")]
    pub enabled: bool,

    /// Bundled syntect theme name
    #[serde(default = "defaults::syntax_highlighting::theme")]
    pub theme: String,

    /// Inputs larger than this (in KB) are not highlighted
    #[serde(default = "defaults::syntax_highlighting::max_input_kb")]
    pub max_input_kb: usize,
}

impl Default for SyntaxHighlightingConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::syntax_highlighting::enabled(),
            theme: defaults::syntax_highlighting::theme(),
            max_input_kb: defaults::syntax_highlighting::max_input_kb(),
        }
    }
}

impl SyntaxHighlightingConfig {
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_kb.saturating_mul(1024)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        ensure!(
            self.max_input_kb >= defaults::syntax_highlighting::min_input_kb(),
            "Syntax highlighting max_input_kb must be at least {} KB",
            defaults::syntax_highlighting::min_input_kb()
        );

        ensure!(
            !self.theme.trim().is_empty(),
            "Syntax highlighting theme must not be empty"
        );

        Ok(())
    }
}
