pub mod layers;

mod builder;
mod catalog;
mod config;
mod manager;
mod merge;
mod syntax_highlighting;


pub use builder::ConfigBuilder;
pub use catalog::CatalogConfig;
pub use config::LlmCatConfig;
pub use manager::ConfigManager;
pub use merge::merge_toml_values;
pub use syntax_highlighting::SyntaxHighlightingConfig;
