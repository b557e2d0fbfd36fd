use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::debug::DebugConfig;
use crate::loader::{CatalogConfig, SyntaxHighlightingConfig};

/// Effective llmcat configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LlmCatConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub syntax_highlighting: SyntaxHighlightingConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

impl LlmCatConfig {
    pub fn validate(&self) -> Result<()> {
        self.catalog
            .validate()
            .context("Invalid catalog configuration")?;

        self.syntax_highlighting
            .validate()
            .context("Invalid syntax highlighting configuration")?;

        Ok(())
    }
}
