//! # Domain Types
//!
//! Currencies, tax categories and the rate table behind them.
//!
//! ```text
//! TaxCategory      TaxRates::default()
//! ───────────      ───────────────────
//! TaxFree     ──►     0 bps   "0%"
//! Standard *  ──►  1900 bps   "19%"
//! Reduced     ──►   700 bps   "7%"
//!                                         * also used for `None`
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tax Rate
// =============================================================================

/// A VAT rate in hundredths of a percent: `1900` is 19%, `550` is 5.5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// `19.0` for 1900 bps. This is the `pct` of the VAT formula.
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Renders `"19%"`, `"7%"`, `"5.5%"`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.0 % 100 == 0 {
            format!("{}%", self.0 / 100)
        } else {
            format!("{}%", self.percentage())
        };
        f.pad(&text)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currency in which an article price is quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro, the reference currency.
    #[default]
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Chf => "CHF",
        }
    }

    /// Display symbol appended to prices.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Chf => "CHF",
        }
    }
}

// =============================================================================
// Tax Category
// =============================================================================

/// Tax class of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    /// No VAT applies.
    TaxFree,
    /// German regular VAT (MwSt).
    #[default]
    Standard,
    /// German reduced VAT, e.g. books and food.
    Reduced,
}

// =============================================================================
// Tax Rates
// =============================================================================

/// Rate table mapping each [`TaxCategory`] to its rate.
///
/// The defaults are the German regime: 0% / 19% / 7%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub tax_free: TaxRate,
    pub standard: TaxRate,
    pub reduced: TaxRate,
}

impl TaxRates {
    /// Returns the rate for a category. An unspecified category is charged
    /// at the standard rate.
    pub fn rate(&self, category: Option<TaxCategory>) -> TaxRate {
        match category.unwrap_or_default() {
            TaxCategory::TaxFree => self.tax_free,
            TaxCategory::Standard => self.standard,
            TaxCategory::Reduced => self.reduced,
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        TaxRates {
            tax_free: TaxRate::zero(),
            standard: TaxRate::from_bps(1900),
            reduced: TaxRate::from_bps(700),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        let rate = TaxRate::from_bps(1900);
        assert_eq!(rate.bps(), 1900);
        assert!((rate.percentage() - 19.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1900).to_string(), "19%");
        assert_eq!(TaxRate::from_bps(700).to_string(), "7%");
        assert_eq!(TaxRate::from_bps(550).to_string(), "5.5%");
        assert_eq!(format!("{:>4}", TaxRate::from_bps(700)), "  7%");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Currency::default(), Currency::Eur);
        assert_eq!(TaxCategory::default(), TaxCategory::Standard);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Eur.code(), "EUR");
        assert_eq!(Currency::Chf.symbol(), "CHF");
    }

    #[test]
    fn test_rate_table() {
        let rates = TaxRates::default();
        assert_eq!(rates.rate(Some(TaxCategory::TaxFree)).bps(), 0);
        assert_eq!(rates.rate(Some(TaxCategory::Standard)).bps(), 1900);
        assert_eq!(rates.rate(Some(TaxCategory::Reduced)).bps(), 700);
        assert_eq!(rates.rate(None).bps(), 1900);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TaxCategory::TaxFree).unwrap();
        assert_eq!(json, "\"tax_free\"");
        let json = serde_json::to_string(&Currency::Eur).unwrap();
        assert_eq!(json, "\"EUR\"");
    }
}
