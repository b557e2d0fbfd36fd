use std::collections::BTreeMap;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::models::{CatalogEntry, ChatPrice, FamilyOrder, ModelCatalog, PriceOverrides, Visibility};

/// `[catalog]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Include hidden models in listings
    #[serde(default = "defaults::catalog::show_hidden")]
    pub show_hidden: bool,

    /// Include legacy models in listings
    #[serde(default = "defaults::catalog::show_legacy")]
    pub show_legacy: bool,

    /// Replaces the built-in family display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_order: Option<FamilyOrder>,

    /// Prices keyed by model id or catalog prefix
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub price_overrides: BTreeMap<String, ChatPrice>,

    /// Extra entries; an entry replaces the built-in one with the same prefix
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<CatalogEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            show_hidden: defaults::catalog::show_hidden(),
            show_legacy: defaults::catalog::show_legacy(),
            family_order: None,
            price_overrides: BTreeMap::new(),
            models: Vec::new(),
        }
    }
}

impl CatalogConfig {
    pub fn visibility(&self) -> Visibility {
        Visibility {
            show_hidden: self.show_hidden,
            show_legacy: self.show_legacy,
        }
    }

    pub fn price_overrides(&self) -> PriceOverrides {
        self.price_overrides
            .iter()
            .map(|(id, price)| (id.clone(), *price))
            .collect()
    }

    /// Apply configured entries and family order on top of `base`.
    pub fn build_catalog(&self, base: &ModelCatalog) -> Result<ModelCatalog> {
        let mut catalog = if self.models.is_empty() {
            base.clone()
        } else {
            base.with_entries(self.models.clone())
                .context("Invalid [[catalog.models]] entries")?
        };
        if let Some(order) = &self.family_order {
            catalog = catalog.with_family_order(order.clone());
        }
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        for (id, price) in &self.price_overrides {
            ensure!(
                price.is_valid(),
                "Price override for '{id}' must be finite and non-negative"
            );
        }

        if let Some(order) = &self.family_order {
            ensure!(
                order.prefixes().iter().all(|prefix| !prefix.trim().is_empty()),
                "catalog.family_order must not contain empty entries"
            );
        }

        self.build_catalog(ModelCatalog::mistral())?;
        Ok(())
    }
}
