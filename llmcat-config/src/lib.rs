//! Model catalog and configuration for `llmcat`.
//!
//! - [`models`] resolves raw vendor model identifiers into display-ready
//!   [`ModelDescription`]s using a prefix-keyed [`ModelCatalog`], and orders
//!   them for presentation.
//! - [`loader`] reads layered `llmcat.toml` files into an [`LlmCatConfig`].
//!
//! ```
//! use llmcat_config::ModelCatalog;
//!
//! let catalog = ModelCatalog::mistral();
//! let model = catalog.resolve("mistral-large-2407", 1_721_260_800, None);
//! assert_eq!(model.label, "Mistral Large 2 (2407)");
//! assert_eq!(model.context_window, 131_072);
//! ```

pub mod constants;
pub mod debug;
pub mod defaults;
pub mod loader;
pub mod models;

pub use debug::{DebugConfig, TraceLevel};
pub use loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};
pub use loader::{
    CatalogConfig, ConfigBuilder, ConfigManager, LlmCatConfig, SyntaxHighlightingConfig,
    merge_toml_values,
};
pub use models::{
    AliasRecord, CatalogEntry, CatalogError, ChatPrice, FamilyOrder, FallbackTemplate,
    ModelCatalog, ModelDescription, ModelInterface, ModelRecord, PriceOverrides, Visibility,
    WireError, WireModel, WireModelList, compare_models,
};
