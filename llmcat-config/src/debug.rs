//! Debug and tracing configuration

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Trace level for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// Debug and tracing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DebugConfig {
    /// Enable structured logging without setting `RUST_LOG`
    #[serde(default)]
    pub enable_tracing: bool,

    #[serde(default)]
    pub trace_level: TraceLevel,

    /// Tracing targets to enable, e.g. "llmcat_config::models"
    #[serde(default = "defaults::debug::trace_targets")]
    pub trace_targets: Vec<String>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enable_tracing: false,
            trace_level: TraceLevel::Info,
            trace_targets: defaults::debug::trace_targets(),
        }
    }
}

impl DebugConfig {
    /// `EnvFilter` directive, e.g. "llmcat=debug,llmcat_config=debug"
    pub fn filter_directive(&self) -> String {
        let level = self.trace_level.as_str();
        let targets = if self.trace_targets.is_empty() {
            defaults::debug::trace_targets()
        } else {
            self.trace_targets.clone()
        };
        targets
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
