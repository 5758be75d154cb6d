//! # Errors
//!
//! ```text
//! ValidationError ──► CoreError ──► StoreError (bestell-store) ──► anyhow (binary)
//!  one bad field       one bad call    one failed lookup / export
//! ```
//!
//! A call that returns an error has not touched its receiver.
//!
//! Re-assigning an id and re-adding a known contact are silent no-ops and
//! never show up here.

use chrono::{DateTime, Utc};
use thiserror::Error;

// =============================================================================
// CoreError
// =============================================================================

/// Rejected operations on customers, articles and orders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An order needs a customer with a positive id.
    ///
    /// `None` for a customer that never got an id, `Some(0)` for id zero.
    #[error("Customer has no valid id: {0:?}")]
    CustomerWithoutId(Option<u64>),

    #[error("Creation date {date} outside accepted range {earliest} .. {latest}")]
    CreationDateOutOfRange {
        date: DateTime<Utc>,
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// ValidationError
// =============================================================================

/// A single field value that was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty or whitespace only.
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    /// Contact shorter than `min` characters, before or after cleanup.
    #[error("{field} must be at least {min} characters: \"{value}\"")]
    TooShort {
        field: &'static str,
        min: usize,
        value: String,
    },

    /// Prices, units and customer ids start at zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// An amount in cents that no longer fits an `i64`.
    #[error("{field} is too large: {value}")]
    TooLarge { field: &'static str, value: i64 },

    /// A name that matches none of the accepted keywords.
    #[error("unknown {field} '{value}'")]
    Unknown { field: &'static str, value: String },
}

impl ValidationError {
    pub fn blank(field: &'static str) -> Self {
        ValidationError::Blank { field }
    }

    pub fn negative(field: &'static str, value: i64) -> Self {
        ValidationError::Negative { field, value }
    }

    pub fn too_large(field: &'static str, value: i64) -> Self {
        ValidationError::TooLarge { field, value }
    }

    pub fn unknown(field: &'static str, value: &str) -> Self {
        ValidationError::Unknown {
            field,
            value: value.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_without_id_message() {
        assert_eq!(
            CoreError::CustomerWithoutId(None).to_string(),
            "Customer has no valid id: None"
        );
        assert_eq!(
            CoreError::CustomerWithoutId(Some(0)).to_string(),
            "Customer has no valid id: Some(0)"
        );
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(
            ValidationError::blank("description").to_string(),
            "description must not be blank"
        );
        assert_eq!(
            ValidationError::negative("unit price", -1).to_string(),
            "unit price must not be negative, got -1"
        );
        assert_eq!(
            ValidationError::too_large("units ordered", 7).to_string(),
            "units ordered is too large: 7"
        );
        assert_eq!(
            ValidationError::unknown("id strategy", "uuid").to_string(),
            "unknown id strategy 'uuid'"
        );

        let short = ValidationError::TooShort {
            field: "contact",
            min: 6,
            value: "a@b.c".to_string(),
        };
        assert_eq!(
            short.to_string(),
            "contact must be at least 6 characters: \"a@b.c\""
        );
    }

    #[test]
    fn test_field_error_shows_through_core_error() {
        let err: CoreError = ValidationError::negative("units ordered", -3).into();
        assert!(matches!(err, CoreError::Validation(ValidationError::Negative { value: -3, .. })));
        assert_eq!(err.to_string(), "units ordered must not be negative, got -3");
    }
}
