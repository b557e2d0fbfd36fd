use anyhow::{Context, Result};
use llmcat_config::{ConfigBuilder, ConfigManager, LlmCatConfig, ModelCatalog};

use crate::cli::args::Cli;

/// Configuration and catalog resolved once per invocation.
#[derive(Debug, Clone)]
pub struct StartupContext {
    pub config: LlmCatConfig,
    pub catalog: ModelCatalog,
}

impl StartupContext {
    pub fn from_cli_args(args: &Cli) -> Result<Self> {
        let overrides = args
            .config_overrides
            .iter()
            .map(|raw| ConfigBuilder::parse_override(raw))
            .collect::<Result<Vec<_>>>()
            .context("Invalid --config override")?;

        let mut builder = ConfigBuilder::new().cli_overrides(&overrides);
        if let Some(workspace) = &args.workspace {
            builder = builder.workspace(workspace.clone());
        }
        let manager = builder.build().context("Failed to load llmcat configuration")?;

        Self::from_manager(&manager)
    }

    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        let config = manager.config().clone();
        let catalog = config.catalog.build_catalog(ModelCatalog::mistral())?;
        tracing::debug!(
            workspace = ?manager.workspace_root(),
            config = ?manager.config_path(),
            models = catalog.len(),
            "startup context ready"
        );

        Ok(Self { config, catalog })
    }
}
