use serde::{Deserialize, Serialize};

use super::{CatalogError, ModelInterface};

/// Glyph prefixed to the display label of alias entries.
pub const ALIAS_GLYPH: &str = "🔗";

/// Cost per million tokens, in USD.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatPrice {
    pub input: f64,
    pub output: f64,
}

impl ChatPrice {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }

    pub fn is_valid(&self) -> bool {
        self.input.is_finite() && self.output.is_finite() && self.input >= 0.0 && self.output >= 0.0
    }
}

/// An authored description of one vendor model variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Prefix of the raw vendor identifiers matched by this record
    pub id_prefix: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Context window in tokens
    pub context_window: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[serde(default)]
    pub interfaces: Vec<ModelInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_price: Option<ChatPrice>,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl ModelRecord {
    pub fn new(
        id_prefix: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        context_window: u32,
    ) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            label: label.into(),
            description: description.into(),
            context_window,
            max_completion_tokens: None,
            interfaces: Vec::new(),
            chat_price: None,
            is_legacy: false,
            hidden: false,
        }
    }

    pub fn interfaces(mut self, interfaces: &[ModelInterface]) -> Self {
        self.interfaces = interfaces.to_vec();
        self
    }

    pub fn price(mut self, input: f64, output: f64) -> Self {
        self.chat_price = Some(ChatPrice::new(input, output));
        self
    }

    pub fn max_completion_tokens(mut self, tokens: u32) -> Self {
        self.max_completion_tokens = Some(tokens);
        self
    }

    pub fn legacy(mut self) -> Self {
        self.is_legacy = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id_prefix.trim().is_empty() {
            return Err(CatalogError::EmptyPrefix);
        }
        if self.context_window == 0 {
            return Err(CatalogError::InvalidContextWindow(self.id_prefix.clone()));
        }
        if self.max_completion_tokens == Some(0) {
            return Err(CatalogError::InvalidContextWindow(self.id_prefix.clone()));
        }
        if let Some(price) = &self.chat_price
            && !price.is_valid()
        {
            return Err(CatalogError::InvalidPrice(self.id_prefix.clone()));
        }
        Ok(())
    }
}

/// A pointer entry that designates another record as canonical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    pub id_prefix: String,
    /// Display name without the alias glyph, e.g. "Mistral Small (latest)"
    pub label: String,
    /// `id_prefix` of the concrete record this alias points to
    pub target: String,
}

impl AliasRecord {
    pub fn new(
        id_prefix: impl Into<String>,
        label: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            label: label.into(),
            target: target.into(),
        }
    }

    /// Label shown in listings, e.g. "🔗 Pixtral → pixtral-12b-2409"
    pub fn display_label(&self) -> String {
        format!("{ALIAS_GLYPH} {} → {}", self.label, self.target)
    }
}

/// One authored catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Concrete(ModelRecord),
    Alias(AliasRecord),
}

impl CatalogEntry {
    pub fn id_prefix(&self) -> &str {
        match self {
            CatalogEntry::Concrete(record) => &record.id_prefix,
            CatalogEntry::Alias(alias) => &alias.id_prefix,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, CatalogEntry::Alias(_))
    }
}

impl From<ModelRecord> for CatalogEntry {
    fn from(record: ModelRecord) -> Self {
        CatalogEntry::Concrete(record)
    }
}

impl From<AliasRecord> for CatalogEntry {
    fn from(alias: AliasRecord) -> Self {
        CatalogEntry::Alias(alias)
    }
}
