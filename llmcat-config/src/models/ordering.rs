//! Display ordering for resolved model descriptions.
//!
//! Aliases always trail concrete models. Within each of those two groups,
//! models are grouped by product family in the order given by the family list,
//! newest label first inside a family, and models outside every known family
//! come last sorted by id.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ModelDescription;

/// Ordered list of product-family prefixes; earlier families sort first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyOrder {
    prefixes: Vec<String>,
}

impl FamilyOrder {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Index of the first family prefix that `id` starts with.
    pub fn family_of(&self, id: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .position(|prefix| id.starts_with(prefix.as_str()))
    }

    pub fn sort(&self, models: &mut [ModelDescription]) {
        models.sort_by(|a, b| compare_models(a, b, self));
    }
}

/// Total order over model descriptions for presentation.
pub fn compare_models(a: &ModelDescription, b: &ModelDescription, order: &FamilyOrder) -> Ordering {
    match (a.is_alias(), b.is_alias()) {
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        _ => {}
    }

    match (order.family_of(&a.id), order.family_of(&b.id)) {
        (Some(family_a), Some(family_b)) if family_a != family_b => family_a.cmp(&family_b),
        (Some(_), Some(_)) => b.label.cmp(&a.label).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}
