//! # Validation Module
//!
//! Field checks run by the entity setters before anything is stored.
//!
//! ```text
//! article.set_unit_price(p)
//!     └── validate_unit_price(p)
//!           ├── Err(Negative) ──► caller, article unchanged
//!           └── Ok            ──► price stored, &mut Article returned
//! ```
//!
//! ```rust
//! use bestell_core::validation::{validate_description, validate_units};
//!
//! assert!(validate_description("Tasse").is_ok());
//! assert!(validate_description("").is_err());
//! assert!(validate_units(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text
// =============================================================================

/// Article descriptions need at least one visible character.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::blank("description"));
    }
    Ok(())
}

/// Article and order ids, same rule as descriptions.
///
/// ```rust
/// use bestell_core::validation::validate_string_id;
///
/// assert!(validate_string_id("order id", "8592356245").is_ok());
/// assert!(validate_string_id("order id", " ").is_err());
/// ```
pub fn validate_string_id(field: &'static str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(())
}

// =============================================================================
// Numbers
// =============================================================================

/// Zero is a valid customer id here; orders additionally require it positive.
pub fn validate_customer_id(id: i64) -> ValidationResult<u64> {
    u64::try_from(id).map_err(|_| ValidationError::negative("customer id", id))
}

/// Free articles (price zero) are allowed.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::negative("unit price", price.cents()));
    }
    Ok(())
}

pub fn validate_units(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::negative("units ordered", units));
    }
    Ok(())
}
