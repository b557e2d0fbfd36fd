use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::app::{ENV_CONFIG_PATH, ENV_WORKSPACE};
use crate::defaults;
use crate::loader::config::LlmCatConfig;
use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};

/// Configuration manager for loading and validating configurations
#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub(crate) config: LlmCatConfig,
    config_path: Option<PathBuf>,
    workspace_root: Option<PathBuf>,
    pub(crate) layer_stack: ConfigLayerStack,
}

impl ConfigManager {
    /// Load configuration from `LLMCAT_CONFIG_PATH`, `LLMCAT_WORKSPACE` or the
    /// current directory, in that order.
    pub(crate) fn load_with_home(home_paths: &[PathBuf]) -> Result<Self> {
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            let trimmed = config_path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_file_with_home(trimmed, home_paths).with_context(|| {
                    format!("Failed to load configuration from {ENV_CONFIG_PATH}={trimmed}")
                });
            }
        }

        if let Ok(workspace_path) = std::env::var(ENV_WORKSPACE) {
            let trimmed = workspace_path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_workspace_with_home(trimmed, home_paths).with_context(
                    || format!("Failed to load configuration from {ENV_WORKSPACE}={trimmed}"),
                );
            }
        }

        Self::load_from_workspace_with_home(std::env::current_dir()?, home_paths)
    }

    pub(crate) fn load_from_workspace_with_home(
        workspace: impl AsRef<Path>,
        home_paths: &[PathBuf],
    ) -> Result<Self> {
        let workspace_root = workspace.as_ref().to_path_buf();
        let mut layer_stack = Self::base_layers(home_paths);

        let workspace_config_path = workspace_root.join(defaults::config_file_name());
        if workspace_config_path.exists() {
            let toml = Self::load_toml_from_file(&workspace_config_path)?;
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Workspace {
                    file: workspace_config_path,
                },
                toml,
            ));
        }

        if layer_stack.is_empty() {
            let config = LlmCatConfig::default();
            config
                .validate()
                .context("Default configuration failed validation")?;

            return Ok(Self {
                config,
                config_path: None,
                workspace_root: Some(workspace_root),
                layer_stack,
            });
        }

        let config = Self::evaluate(&layer_stack).context("Configuration failed validation")?;
        let config_path = layer_stack.last_file().map(Path::to_path_buf);

        Ok(Self {
            config,
            config_path,
            workspace_root: Some(workspace_root),
            layer_stack,
        })
    }

    pub(crate) fn load_from_file_with_home(
        path: impl AsRef<Path>,
        home_paths: &[PathBuf],
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut layer_stack = Self::base_layers(home_paths);

        let toml = Self::load_toml_from_file(path)?;
        layer_stack.push(ConfigLayerEntry::new(
            ConfigLayerSource::Workspace {
                file: path.to_path_buf(),
            },
            toml,
        ));

        let config = Self::evaluate(&layer_stack).with_context(|| {
            format!(
                "Failed to validate effective config with file: {}",
                path.display()
            )
        })?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
            workspace_root: path.parent().map(Path::to_path_buf),
            layer_stack,
        })
    }

    /// System and user layers that exist and parse; broken files are skipped.
    fn base_layers(home_paths: &[PathBuf]) -> ConfigLayerStack {
        let mut layer_stack = ConfigLayerStack::default();

        #[cfg(unix)]
        {
            let system_config = PathBuf::from(crate::constants::app::SYSTEM_CONFIG_PATH);
            if system_config.exists() {
                match Self::load_toml_from_file(&system_config) {
                    Ok(toml) => layer_stack.push(ConfigLayerEntry::new(
                        ConfigLayerSource::System {
                            file: system_config,
                        },
                        toml,
                    )),
                    Err(err) => tracing::warn!(error = %err, "skipping system config"),
                }
            }
        }

        for home_config_path in home_paths {
            if !home_config_path.exists() {
                continue;
            }
            match Self::load_toml_from_file(home_config_path) {
                Ok(toml) => layer_stack.push(ConfigLayerEntry::new(
                    ConfigLayerSource::User {
                        file: home_config_path.clone(),
                    },
                    toml,
                )),
                Err(err) => tracing::warn!(error = %err, "skipping user config"),
            }
        }

        layer_stack
    }

    fn evaluate(layer_stack: &ConfigLayerStack) -> Result<LlmCatConfig> {
        let config: LlmCatConfig = layer_stack
            .effective_config()
            .try_into()
            .context("Failed to deserialize effective configuration")?;
        config.validate()?;
        tracing::debug!(layers = layer_stack.layers().len(), "configuration loaded");
        Ok(config)
    }

    /// Push a higher-precedence layer and re-evaluate the configuration.
    pub(crate) fn push_layer(&mut self, layer: ConfigLayerEntry) -> Result<()> {
        self.layer_stack.push(layer);
        self.config = Self::evaluate(&self.layer_stack)?;
        Ok(())
    }

    fn load_toml_from_file(path: &Path) -> Result<toml::Value> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let value: toml::Value = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(value)
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &LlmCatConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    pub fn layer_stack(&self) -> &ConfigLayerStack {
        &self.layer_stack
    }

    /// Get the effective TOML configuration
    pub fn effective_config(&self) -> toml::Value {
        self.layer_stack.effective_config()
    }
}
