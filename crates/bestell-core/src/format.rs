//! # Formatter
//!
//! Text formatting of names, prices and dates for the report tables.
//!
//! ```text
//!  fmt_name("Eric", "Meyer", LastFirst)    → "Meyer, Eric"
//!  fmt_price(1099, Symbol)                 → "10.99€"
//!  fmt_date(2026-10-18T14:05Z, DateTime)   → "18/10/2026, 14:05"
//! ```

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Currency;

// =============================================================================
// Styles
// =============================================================================

/// How a customer name is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyle {
    /// `"Meyer, Eric"`
    #[default]
    LastFirst,
    /// `"Eric Meyer"`
    FirstLast,
    /// `"Meyer, E."`
    LastInitial,
    /// `"E. Meyer"`
    InitialLast,
    /// `"Meyer"`
    LastOnly,
}

impl FromStr for NameStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-first" => Ok(NameStyle::LastFirst),
            "first-last" => Ok(NameStyle::FirstLast),
            "last-initial" => Ok(NameStyle::LastInitial),
            "initial-last" => Ok(NameStyle::InitialLast),
            "last-only" => Ok(NameStyle::LastOnly),
            other => Err(ValidationError::unknown("name style", other)),
        }
    }
}

/// How an amount is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStyle {
    /// `"10.99"`
    #[default]
    Plain,
    /// `"10.99€"`
    Symbol,
    /// `"10.99 EUR"`
    Code,
}

/// How a timestamp is rendered (always in UTC).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `"18/10/2026"`
    #[default]
    Date,
    /// `"18/10/2026, 14:05"`
    DateTime,
    /// RFC 3339, `"2026-10-18T14:05:00Z"`
    Iso,
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats names, prices and dates.
///
/// `currency` is the reference currency used when an amount has no currency
/// of its own, e.g. order subtotals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    currency: Currency,
}

impl Formatter {
    pub fn new(currency: Currency) -> Self {
        Formatter { currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Formats a name. Empty parts are left out together with their
    /// separator.
    ///
    /// ## Example
    /// ```rust
    /// use bestell_core::format::{Formatter, NameStyle};
    ///
    /// let f = Formatter::default();
    /// assert_eq!(f.fmt_name("Eric", "Meyer", NameStyle::LastFirst), "Meyer, Eric");
    /// assert_eq!(f.fmt_name("Eric", "Meyer", NameStyle::InitialLast), "E. Meyer");
    /// assert_eq!(f.fmt_name("", "Meyer", NameStyle::LastFirst), "Meyer");
    /// ```
    pub fn fmt_name(&self, first: &str, last: &str, style: NameStyle) -> String {
        let initial = first
            .chars()
            .next()
            .map(|c| format!("{c}."))
            .unwrap_or_default();

        match style {
            NameStyle::LastFirst => join(last, ", ", first),
            NameStyle::FirstLast => join(first, " ", last),
            NameStyle::LastInitial => join(last, ", ", &initial),
            NameStyle::InitialLast => join(&initial, " ", last),
            NameStyle::LastOnly => last.to_string(),
        }
    }

    /// Formats an amount in the reference currency.
    pub fn fmt_price(&self, amount: Money, style: PriceStyle) -> String {
        self.fmt_price_in(amount, self.currency, style)
    }

    /// Formats an amount in a given currency.
    pub fn fmt_price_in(&self, amount: Money, currency: Currency, style: PriceStyle) -> String {
        match style {
            PriceStyle::Plain => amount.to_string(),
            PriceStyle::Symbol => format!("{amount}{}", currency.symbol()),
            PriceStyle::Code => format!("{amount} {}", currency.code()),
        }
    }

    pub fn fmt_date(&self, date: DateTime<Utc>, style: DateStyle) -> String {
        match style {
            DateStyle::Date => date.format("%d/%m/%Y").to_string(),
            DateStyle::DateTime => date.format("%d/%m/%Y, %H:%M").to_string(),
            DateStyle::Iso => date.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

fn join(a: &str, sep: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (false, true) => a.to_string(),
        (false, false) => format!("{a}{sep}{b}"),
    }
}
