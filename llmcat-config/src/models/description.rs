use serde::{Deserialize, Serialize};

use super::record::ALIAS_GLYPH;
use super::{ChatPrice, ModelInterface, ModelRecord};

/// A model as observed at runtime, fully populated from the catalog.
///
/// Built once per raw vendor entry on refresh and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    /// Raw vendor identifier
    pub id: String,
    /// Prefix of the catalog record that produced this description
    pub id_prefix: String,
    pub label: String,
    /// Creation time reported by the vendor, in unix seconds
    pub created: i64,
    pub description: String,
    pub context_window: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    pub interfaces: Vec<ModelInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_price: Option<ChatPrice>,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sym_link: Option<String>,
}

impl ModelDescription {
    pub(crate) fn from_record(
        record: &ModelRecord,
        sym_link: Option<&str>,
        id: &str,
        created: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            id_prefix: record.id_prefix.clone(),
            label: record.label.clone(),
            created,
            description: record.description.clone(),
            context_window: record.context_window,
            max_completion_tokens: record.max_completion_tokens,
            interfaces: record.interfaces.clone(),
            chat_price: record.chat_price,
            is_legacy: record.is_legacy,
            hidden: record.hidden,
            sym_link: sym_link.map(ToOwned::to_owned),
        }
    }

    /// Whether this description points at another model
    pub fn is_alias(&self) -> bool {
        self.sym_link.is_some() || self.label.starts_with(ALIAS_GLYPH)
    }

    pub fn supports(&self, interface: ModelInterface) -> bool {
        self.interfaces.contains(&interface)
    }
}
