//! # Article
//!
//! A purchasable catalogue item. Orders reference articles through
//! [`crate::order::OrderItem`]; one article may appear in many orders.

use serde::Serialize;

use crate::error::CoreResult;
use crate::id::AssignOnce;
use crate::money::Money;
use crate::types::{Currency, TaxCategory};
use crate::validation::{validate_description, validate_string_id, validate_unit_price};

/// A purchasable item.
///
/// ## Invariants
/// - `description` is never blank
/// - `unit_price >= 0`
/// - `id` never changes once assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: AssignOnce<String>,
    description: String,
    unit_price: Money,
    currency: Currency,
    tax_category: TaxCategory,
}

impl Article {
    /// Creates an article quoted in the reference currency at the standard
    /// tax rate.
    ///
    /// ## Errors
    /// - blank `description`
    /// - negative `unit_price`
    ///
    /// ## Example
    /// ```rust
    /// use bestell_core::{Article, Money};
    ///
    /// let mut tasse = Article::new("Tasse", Money::from_cents(299))?;
    /// tasse.set_id("SKU-458362")?.set_id("SKU-000000")?;
    /// assert_eq!(tasse.id(), Some("SKU-458362"));
    /// # Ok::<(), bestell_core::CoreError>(())
    /// ```
    pub fn new(description: &str, unit_price: Money) -> CoreResult<Self> {
        validate_description(description)?;
        validate_unit_price(unit_price)?;

        Ok(Article {
            id: AssignOnce::Unassigned,
            description: description.to_string(),
            unit_price,
            currency: Currency::default(),
            tax_category: TaxCategory::default(),
        })
    }

    /// Article id, `None` while unassigned.
    pub fn id(&self) -> Option<&str> {
        self.id.get().map(String::as_str)
    }

    /// Assigns the id once. Later calls with a valid id are ignored; a blank
    /// id is always rejected.
    pub fn set_id(&mut self, id: &str) -> CoreResult<&mut Self> {
        validate_string_id("article id", id)?;
        self.id.assign(id.to_string());
        Ok(self)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) -> CoreResult<&mut Self> {
        validate_description(description)?;
        self.description = description.to_string();
        Ok(self)
    }

    /// Price of one unit, tax included.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn set_unit_price(&mut self, unit_price: Money) -> CoreResult<&mut Self> {
        validate_unit_price(unit_price)?;
        self.unit_price = unit_price;
        Ok(self)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) -> &mut Self {
        self.currency = currency;
        self
    }

    pub fn tax_category(&self) -> TaxCategory {
        self.tax_category
    }

    pub fn set_tax_category(&mut self, tax_category: TaxCategory) -> &mut Self {
        self.tax_category = tax_category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use proptest::prelude::*;

    fn tasse() -> Article {
        Article::new("Tasse", Money::from_cents(299)).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let article = tasse();
        assert_eq!(article.id(), None);
        assert_eq!(article.description(), "Tasse");
        assert_eq!(article.unit_price().cents(), 299);
        assert_eq!(article.currency(), Currency::Eur);
        assert_eq!(article.tax_category(), TaxCategory::Standard);
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert!(matches!(
            Article::new("", Money::from_cents(100)),
            Err(CoreError::Validation(ValidationError::Blank { .. }))
        ));
        assert!(matches!(
            Article::new("Kanne", Money::from_cents(-1)),
            Err(CoreError::Validation(ValidationError::Negative { .. }))
        ));
        assert!(Article::new("Kanne", Money::zero()).is_ok());
    }

    #[test]
    fn test_id_assign_once() {
        let mut article = tasse();
        article.set_id("SKU-458362").unwrap();
        article.set_id("SKU-693856").unwrap();
        assert_eq!(article.id(), Some("SKU-458362"));
    }

    #[test]
    fn test_blank_id_rejected_even_when_assigned() {
        let mut article = tasse();
        assert!(article.set_id("").is_err());
        assert_eq!(article.id(), None);

        article.set_id("SKU-458362").unwrap();
        assert!(article.set_id("").is_err());
        assert_eq!(article.id(), Some("SKU-458362"));
    }

    #[test]
    fn test_setters_chain() {
        let mut article = tasse();
        article
            .set_description("Becher")
            .unwrap()
            .set_unit_price(Money::from_cents(149))
            .unwrap()
            .set_currency(Currency::Eur)
            .set_tax_category(TaxCategory::Reduced);

        assert_eq!(article.description(), "Becher");
        assert_eq!(article.unit_price().cents(), 149);
        assert_eq!(article.tax_category(), TaxCategory::Reduced);
    }

    #[test]
    fn test_rejected_setter_leaves_fields_unchanged() {
        let mut article = tasse();
        let before = article.clone();

        assert!(article.set_unit_price(Money::from_cents(-5)).is_err());
        assert!(article.set_description("").is_err());
        assert_eq!(article, before);
    }

    #[test]
    fn test_serializes_fields() {
        let mut article = tasse();
        article.set_id("SKU-458362").unwrap();
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["id"], "SKU-458362");
        assert_eq!(json["unit_price"], 299);
        assert_eq!(json["tax_category"], "standard");
    }

    proptest! {
        #[test]
        fn prop_price_never_negative(cents in any::<i32>(), desc in "[A-Za-z][A-Za-z ]{0,20}") {
            let cents = i64::from(cents);
            match Article::new(&desc, Money::from_cents(cents)) {
                Ok(article) => {
                    prop_assert!(cents >= 0);
                    prop_assert!(!article.unit_price().is_negative());
                }
                Err(_) => prop_assert!(cents < 0),
            }
        }

        #[test]
        fn prop_first_id_wins(first in "[A-Z0-9-]{1,12}", second in "[A-Z0-9-]{1,12}") {
            let mut article = tasse();
            article.set_id(&first).unwrap();
            article.set_id(&second).unwrap();
            prop_assert_eq!(article.id(), Some(first.as_str()));
        }
    }
}
