use std::collections::{BTreeMap, HashMap, HashSet};
use std::iter;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire::{self, WireModelList};
use super::{
    CatalogEntry, CatalogError, ChatPrice, FamilyOrder, ModelDescription, ModelInterface,
    ModelRecord, WireError,
};
use crate::constants::models::mistral;

/// Context window assumed for models the catalog does not know about.
pub const DEFAULT_FALLBACK_CONTEXT_WINDOW: u32 = 32_768;

/// Per-identifier price overrides applied during refresh.
pub type PriceOverrides = HashMap<String, ChatPrice>;

static MISTRAL_CATALOG: LazyLock<ModelCatalog> = LazyLock::new(|| {
    match ModelCatalog::from_entries(
        mistral::VENDOR,
        mistral::entries(),
        FamilyOrder::new(mistral::FAMILY_ORDER.iter().copied()),
        FallbackTemplate::new(mistral::FALLBACK_DESCRIPTION),
    ) {
        Ok(catalog) => catalog,
        // Covered by the `mistral_catalog_loads` test
        Err(err) => panic!("built-in Mistral catalog is invalid: {err}"),
    }
});

/// Defaults used to describe identifiers that match no catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallbackTemplate {
    pub description: String,
    pub context_window: u32,
    pub interfaces: Vec<ModelInterface>,
    pub hidden: bool,
}

impl FallbackTemplate {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            context_window: DEFAULT_FALLBACK_CONTEXT_WINDOW,
            interfaces: vec![ModelInterface::Chat],
            hidden: true,
        }
    }

    /// Build the record used for an unknown identifier.
    pub fn record_for(&self, raw_id: &str) -> ModelRecord {
        ModelRecord {
            id_prefix: raw_id.to_string(),
            label: fallback_label(raw_id),
            description: self.description.clone(),
            context_window: self.context_window,
            max_completion_tokens: None,
            interfaces: self.interfaces.clone(),
            chat_price: None,
            is_legacy: false,
            hidden: self.hidden,
        }
    }
}

/// Generic display label for an unknown identifier: every `-` and `_` becomes a space.
pub fn fallback_label(raw_id: &str) -> String {
    raw_id.replace(['-', '_'], " ")
}

/// A catalog entry with its alias already dereferenced.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogRecord {
    pub record: ModelRecord,
    /// Target prefix when this record is an alias
    pub sym_link: Option<String>,
}

impl CatalogRecord {
    pub fn is_alias(&self) -> bool {
        self.sym_link.is_some()
    }

    pub fn describe(&self, id: &str, created: i64) -> ModelDescription {
        ModelDescription::from_record(&self.record, self.sym_link.as_deref(), id, created)
    }
}

/// Which descriptions a listing should include.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub show_hidden: bool,
    pub show_legacy: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_legacy: true,
        }
    }
}

impl Visibility {
    pub fn all() -> Self {
        Self {
            show_hidden: true,
            show_legacy: true,
        }
    }

    pub fn allows(&self, model: &ModelDescription) -> bool {
        (self.show_hidden || !model.hidden) && (self.show_legacy || !model.is_legacy)
    }
}

/// Known models of one vendor, keyed by identifier prefix.
#[derive(Clone, Debug)]
pub struct ModelCatalog {
    vendor: String,
    entries: Vec<CatalogEntry>,
    records: BTreeMap<String, CatalogRecord>,
    family_order: FamilyOrder,
    fallback: FallbackTemplate,
}

impl ModelCatalog {
    /// Built-in Mistral catalog.
    pub fn mistral() -> &'static ModelCatalog {
        &MISTRAL_CATALOG
    }

    /// Assemble a catalog, dereferencing aliases up front.
    ///
    /// Fails on empty or duplicate prefixes, aliases whose target is missing,
    /// and aliases pointing at other aliases.
    pub fn from_entries(
        vendor: impl Into<String>,
        entries: Vec<CatalogEntry>,
        family_order: FamilyOrder,
        fallback: FallbackTemplate,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut concrete: HashMap<&str, &ModelRecord> = HashMap::new();
        let mut aliases = HashSet::new();

        for entry in &entries {
            let prefix = entry.id_prefix();
            if prefix.trim().is_empty() {
                return Err(CatalogError::EmptyPrefix);
            }
            if !seen.insert(prefix) {
                return Err(CatalogError::DuplicatePrefix(prefix.to_string()));
            }
            match entry {
                CatalogEntry::Concrete(record) => {
                    record.validate()?;
                    concrete.insert(prefix, record);
                }
                CatalogEntry::Alias(_) => {
                    aliases.insert(prefix);
                }
            }
        }

        let mut records = BTreeMap::new();
        for entry in &entries {
            let resolved = match entry {
                CatalogEntry::Concrete(record) => CatalogRecord {
                    record: record.clone(),
                    sym_link: None,
                },
                CatalogEntry::Alias(alias) => {
                    let Some(target) = concrete.get(alias.target.as_str()) else {
                        if aliases.contains(alias.target.as_str()) {
                            return Err(CatalogError::AliasChain {
                                alias: alias.id_prefix.clone(),
                                target: alias.target.clone(),
                            });
                        }
                        return Err(CatalogError::DanglingAlias {
                            alias: alias.id_prefix.clone(),
                            target: alias.target.clone(),
                        });
                    };
                    let mut record = (*target).clone();
                    record.id_prefix = alias.id_prefix.clone();
                    record.label = alias.display_label();
                    record.hidden = true;
                    CatalogRecord {
                        record,
                        sym_link: Some(alias.target.clone()),
                    }
                }
            };
            records.insert(entry.id_prefix().to_string(), resolved);
        }

        let vendor = vendor.into();
        tracing::debug!(
            vendor = %vendor,
            records = records.len(),
            aliases = aliases.len(),
            "model catalog loaded"
        );

        Ok(Self {
            vendor,
            entries,
            records,
            family_order,
            fallback,
        })
    }

    /// Copy of this catalog with extra entries; an entry whose prefix already
    /// exists replaces the existing one in place.
    pub fn with_entries(&self, extra: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut entries = self.entries.clone();
        for entry in extra {
            if let Some(slot) = entries
                .iter_mut()
                .find(|existing| existing.id_prefix() == entry.id_prefix())
            {
                tracing::warn!(prefix = entry.id_prefix(), "replacing catalog entry");
                *slot = entry;
            } else {
                entries.push(entry);
            }
        }
        Self::from_entries(
            self.vendor.clone(),
            entries,
            self.family_order.clone(),
            self.fallback.clone(),
        )
    }

    pub fn with_family_order(mut self, family_order: FamilyOrder) -> Self {
        self.family_order = family_order;
        self
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Entries in authored order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn family_order(&self) -> &FamilyOrder {
        &self.family_order
    }

    pub fn fallback(&self) -> &FallbackTemplate {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with the longest prefix of `raw_id`, if any.
    pub fn lookup(&self, raw_id: &str) -> Option<&CatalogRecord> {
        raw_id
            .char_indices()
            .map(|(idx, _)| idx)
            .filter(|&idx| idx > 0)
            .chain(iter::once(raw_id.len()))
            .rev()
            .filter_map(|end| raw_id.get(..end))
            .find_map(|prefix| self.records.get(prefix))
    }

    /// Resolve a raw identifier with this catalog's fallback template.
    pub fn resolve(
        &self,
        raw_id: &str,
        created: i64,
        price_override: Option<ChatPrice>,
    ) -> ModelDescription {
        self.resolve_with_fallback(raw_id, created, price_override, &self.fallback)
    }

    pub fn resolve_with_fallback(
        &self,
        raw_id: &str,
        created: i64,
        price_override: Option<ChatPrice>,
        fallback: &FallbackTemplate,
    ) -> ModelDescription {
        let mut description = match self.lookup(raw_id) {
            Some(found) => found.describe(raw_id, created),
            None => {
                tracing::debug!(
                    vendor = %self.vendor,
                    model = raw_id,
                    "no catalog entry matched, using fallback description"
                );
                ModelDescription::from_record(&fallback.record_for(raw_id), None, raw_id, created)
            }
        };
        if let Some(price) = price_override {
            description.chat_price = Some(price);
        }
        description
    }

    /// Validate one raw vendor model object and resolve it.
    pub fn describe(&self, raw: &Value) -> Result<ModelDescription, WireError> {
        let model = wire::parse_model(raw)?;
        Ok(self.resolve(&model.id, model.created, None))
    }

    /// Override for `raw_id`: exact id first, then the matched record prefix.
    pub fn price_override_for(&self, raw_id: &str, overrides: &PriceOverrides) -> Option<ChatPrice> {
        overrides.get(raw_id).copied().or_else(|| {
            self.lookup(raw_id)
                .and_then(|found| overrides.get(&found.record.id_prefix).copied())
        })
    }

    /// Build a fresh, display-ordered snapshot from a vendor listing.
    pub fn refresh(&self, list: &WireModelList, overrides: &PriceOverrides) -> Vec<ModelDescription> {
        let mut models: Vec<ModelDescription> = list
            .data
            .iter()
            .map(|model| {
                let price = self.price_override_for(&model.id, overrides);
                self.resolve(&model.id, model.created, price)
            })
            .collect();
        self.family_order.sort(&mut models);
        tracing::debug!(
            vendor = %self.vendor,
            models = models.len(),
            "catalog snapshot refreshed"
        );
        models
    }

    /// Every catalog entry described under its own prefix, in display order.
    pub fn known_models(&self) -> Vec<ModelDescription> {
        let mut models: Vec<ModelDescription> = self
            .records
            .iter()
            .map(|(prefix, record)| record.describe(prefix, 0))
            .collect();
        self.family_order.sort(&mut models);
        models
    }
}
