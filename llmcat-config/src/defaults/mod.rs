//! Default values shared by the configuration structs and the loader.

use std::path::PathBuf;

use crate::constants::app::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

pub mod catalog {
    pub fn show_hidden() -> bool {
        false
    }

    pub fn show_legacy() -> bool {
        true
    }
}

pub mod syntax_highlighting {
    pub fn enabled() -> bool {
        true
    }

    pub fn theme() -> String {
        super::DEFAULT_SYNTAX_THEME.to_string()
    }

    /// Largest input, in KB, that will be highlighted
    pub fn max_input_kb() -> usize {
        512
    }

    pub fn min_input_kb() -> usize {
        1
    }
}

pub mod debug {
    pub fn trace_targets() -> Vec<String> {
        vec!["llmcat".to_string(), "llmcat_config".to_string(), "llmcat_ui".to_string()]
    }
}

pub fn config_file_name() -> &'static str {
    CONFIG_FILE_NAME
}

/// User-level configuration files, lowest precedence first.
pub fn home_config_paths(config_file_name: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("llmcat").join(config_file_name));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_DIR_NAME).join(config_file_name));
    }
    paths
}
