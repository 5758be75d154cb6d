//! # Store Errors
//!
//! `StoreError` adds failed lookups and failed exports on top of the
//! [`CoreError`]s raised while building entities. The report binary turns
//! all of them into `anyhow::Error`.

use bestell_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the given id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Every id of the entity's range has been handed out.
    #[error("No {entity} ids left")]
    IdsExhausted { entity: &'static str },

    /// An entity rejected the values it was built with.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Snapshot serialization failed.
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
