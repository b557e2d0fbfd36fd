//! Wire types for vendor `/v1/models` listings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WireError;

/// Minimal shape of one model in a vendor listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireModel {
    pub id: String,
    pub created: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

impl WireModel {
    pub fn new(id: impl Into<String>, created: i64) -> Self {
        Self {
            id: id.into(),
            created,
            object: None,
            owned_by: None,
        }
    }
}

/// A full `/v1/models` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireModelList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub data: Vec<WireModel>,
}

/// Validate a single model object.
pub fn parse_model(value: &Value) -> Result<WireModel, WireError> {
    let model = WireModel::deserialize(value)?;
    ensure_id(&model)?;
    Ok(model)
}

/// Validate a listing, given either as `{"data": [...]}` or a bare array.
pub fn parse_model_list(body: &str) -> Result<WireModelList, WireError> {
    let value: Value = serde_json::from_str(body)?;
    let list = match value {
        Value::Array(_) => WireModelList {
            object: None,
            data: Vec::<WireModel>::deserialize(&value)?,
        },
        other => WireModelList::deserialize(&other)?,
    };
    for model in &list.data {
        ensure_id(model)?;
    }
    Ok(list)
}

fn ensure_id(model: &WireModel) -> Result<(), WireError> {
    if model.id.trim().is_empty() {
        return Err(WireError::EmptyId);
    }
    Ok(())
}
