//! # Contact Sanitizer
//!
//! Normalizes free-text contacts (email addresses, phone numbers) before they
//! are stored on a customer.
//!
//! ## Pipeline
//! ```text
//!  raw ──► empty? ──► len < 6? ──► strip ; , ' ──► strip " + trim ──► len < 6? ──► normalized
//!            │           │                                              │
//!            └── Err ────┴──────────────── Err ─────────────────────────┘
//! ```
//!
//! Lengths are counted in characters.

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Minimum contact length, checked before and after normalization.
pub const MIN_CONTACT_LEN: usize = 6;

/// Characters deleted from a contact.
pub const STRIPPED_CHARS: &[char] = &[';', ',', '\''];

/// Quotation marks dropped in the final normalization step.
pub const QUOTE_CHARS: &[char] = &['"'];

fn too_short(value: &str) -> ValidationError {
    ValidationError::TooShort {
        field: "contact",
        min: MIN_CONTACT_LEN,
        value: value.to_string(),
    }
}

/// Validates and normalizes a contact.
///
/// ## Example
/// ```rust
/// use bestell_core::contact::sanitize_contact;
///
/// assert_eq!(sanitize_contact("\"eric@yahoo.com\";").unwrap(), "eric@yahoo.com");
/// assert!(sanitize_contact("a@b.c").is_err());
/// ```
pub fn sanitize_contact(contact: &str) -> ValidationResult<String> {
    if contact.is_empty() {
        return Err(ValidationError::blank("contact"));
    }

    if contact.chars().count() < MIN_CONTACT_LEN {
        return Err(too_short(contact));
    }

    let stripped: String = contact
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    let normalized: String = stripped
        .chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string();

    if normalized.chars().count() < MIN_CONTACT_LEN {
        return Err(too_short(&stripped));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_contacts_pass_through() {
        assert_eq!(sanitize_contact("x@y.de").unwrap(), "x@y.de");
        assert_eq!(
            sanitize_contact("(030) 3945-642298").unwrap(),
            "(030) 3945-642298"
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            sanitize_contact(""),
            Err(ValidationError::blank("contact"))
        );
    }

    #[test]
    fn test_rejects_short_input() {
        assert!(matches!(
            sanitize_contact("a@b.c"),
            Err(ValidationError::TooShort { min: 6, .. })
        ));
    }

    #[test]
    fn test_strips_separators_and_quotes() {
        assert_eq!(sanitize_contact("eric@gmail.com;").unwrap(), "eric@gmail.com");
        assert_eq!(sanitize_contact("eric@gmail.com,").unwrap(), "eric@gmail.com");
        assert_eq!(sanitize_contact("'eric@gmail.com'").unwrap(), "eric@gmail.com");
        assert_eq!(
            sanitize_contact("  \"eric@gmail.com\"  ").unwrap(),
            "eric@gmail.com"
        );
    }

    #[test]
    fn test_rejects_short_after_normalization() {
        // 7 characters raw, 5 after stripping
        assert!(matches!(
            sanitize_contact("\"a@b.c\""),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(sanitize_contact(";;;;;;;").is_err());
        assert!(sanitize_contact("  x@y  ").is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(sanitize_contact("ä@ö.de").unwrap(), "ä@ö.de");
        assert!(sanitize_contact("ä@ö.d").is_err());
    }
}
