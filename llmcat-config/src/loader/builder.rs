use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource};
use crate::loader::manager::ConfigManager;

/// Builder for creating a [`ConfigManager`] with custom overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    home_paths: Option<Vec<PathBuf>>,
    cli_overrides: Vec<(String, toml::Value)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace directory.
    pub fn workspace(mut self, path: PathBuf) -> Self {
        self.workspace = Some(path);
        self
    }

    /// Replace the user-level config locations.
    pub fn home_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.home_paths = Some(paths);
        self
    }

    /// Add a CLI override (e.g., "catalog.show_hidden", true).
    pub fn cli_override(mut self, key: String, value: toml::Value) -> Self {
        self.cli_overrides.push((key, value));
        self
    }

    /// Add multiple CLI overrides from string pairs.
    ///
    /// Values are parsed as TOML. If parsing fails, they are treated as strings.
    pub fn cli_overrides(mut self, overrides: &[(String, String)]) -> Self {
        for (key, value) in overrides {
            self.cli_overrides
                .push((key.clone(), Self::parse_override_value(value)));
        }
        self
    }

    /// Split a `key=value` argument.
    pub fn parse_override(raw: &str) -> Result<(String, String)> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected KEY=VALUE, got '{raw}'"))?;
        let key = key.trim();
        Self::split_key_path(key).with_context(|| format!("Invalid configuration key in '{raw}'"))?;
        Ok((key.to_string(), value.trim().to_string()))
    }

    /// Split a dotted key into segments. A segment wrapped in double quotes
    /// may contain dots, as in `catalog.price_overrides."mathstral-v0.1".input`.
    pub fn split_key_path(key: &str) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        let mut rest = key;
        loop {
            let (segment, tail) = if let Some(quoted) = rest.strip_prefix('"') {
                let (segment, after) = quoted
                    .split_once('"')
                    .ok_or_else(|| anyhow!("Unterminated quote in key '{key}'"))?;
                let tail = match after.strip_prefix('.') {
                    Some(tail) => Some(tail),
                    None if after.is_empty() => None,
                    None => return Err(anyhow!("Expected '.' after quoted segment in key '{key}'")),
                };
                (segment, tail)
            } else {
                match rest.split_once('.') {
                    Some((segment, tail)) => (segment, Some(tail)),
                    None => (rest, None),
                }
            };
            if segment.is_empty() {
                return Err(anyhow!("Empty segment in key '{key}'"));
            }
            segments.push(segment.to_string());

            match tail {
                Some(tail) => rest = tail,
                None => return Ok(segments),
            }
        }
    }

    fn parse_override_value(value: &str) -> toml::Value {
        toml::from_str::<toml::Table>(&format!("value = {value}"))
            .ok()
            .and_then(|mut table| table.remove("value"))
            .unwrap_or_else(|| toml::Value::String(value.to_string()))
    }

    /// Build the [`ConfigManager`].
    pub fn build(self) -> Result<ConfigManager> {
        let home_paths = self
            .home_paths
            .unwrap_or_else(|| crate::defaults::home_config_paths(crate::defaults::config_file_name()));

        let mut manager = if let Some(workspace) = self.workspace {
            ConfigManager::load_from_workspace_with_home(workspace, &home_paths)?
        } else {
            ConfigManager::load_with_home(&home_paths)?
        };

        if !self.cli_overrides.is_empty() {
            let mut runtime_toml = toml::Table::new();
            for (key, value) in self.cli_overrides {
                let path = Self::split_key_path(&key)
                    .with_context(|| format!("Invalid configuration key '{key}'"))?;
                Self::insert_key_path(&mut runtime_toml, &path, value);
            }

            manager
                .push_layer(ConfigLayerEntry::new(
                    ConfigLayerSource::Runtime,
                    toml::Value::Table(runtime_toml),
                ))
                .context("Configuration failed validation after runtime overrides")?;
        }

        Ok(manager)
    }

    pub(crate) fn insert_key_path(table: &mut toml::Table, path: &[String], value: toml::Value) {
        match path {
            [] => {}
            [key] => {
                table.insert(key.clone(), value);
            }
            [head, rest @ ..] => {
                let child = table
                    .entry(head.clone())
                    .or_insert_with(|| toml::Value::Table(toml::Table::new()));
                if !child.is_table() {
                    *child = toml::Value::Table(toml::Table::new());
                }
                if let toml::Value::Table(child) = child {
                    Self::insert_key_path(child, rest, value);
                }
            }
        }
    }
}
