//! Model catalog and resolution module
//!
//! Maps raw vendor model identifiers onto curated metadata (labels, context
//! windows, pricing, capability tags) and orders the result for display.
//! Built-in vendor tables live in `crate::constants::models`.

mod catalog;
mod description;
mod errors;
mod interface;
mod ordering;
mod record;
pub mod wire;

pub use catalog::{
    CatalogRecord, DEFAULT_FALLBACK_CONTEXT_WINDOW, FallbackTemplate, ModelCatalog,
    PriceOverrides, Visibility, fallback_label,
};
pub use description::ModelDescription;
pub use errors::{CatalogError, WireError};
pub use interface::ModelInterface;
pub use ordering::{FamilyOrder, compare_models};
pub use record::{ALIAS_GLYPH, AliasRecord, CatalogEntry, ChatPrice, ModelRecord};
pub use wire::{WireModel, WireModelList};
