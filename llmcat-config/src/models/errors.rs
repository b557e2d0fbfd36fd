use thiserror::Error;

/// Errors raised while assembling a catalog from authored entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry has an empty id prefix")]
    EmptyPrefix,
    #[error("duplicate catalog prefix '{0}'")]
    DuplicatePrefix(String),
    #[error("alias '{alias}' points to unknown prefix '{target}'")]
    DanglingAlias { alias: String, target: String },
    #[error("alias '{alias}' points to another alias '{target}'")]
    AliasChain { alias: String, target: String },
    #[error("model '{0}' must declare a positive context window")]
    InvalidContextWindow(String),
    #[error("model '{0}' has a negative price")]
    InvalidPrice(String),
}

/// Errors raised while validating raw vendor model payloads.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed model payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("model payload has an empty id")]
    EmptyId,
}
