//! # Tax Calculator
//!
//! Derives the VAT embedded in gross (tax-included) amounts and aggregates
//! value and VAT over the items of an order.
//!
//! ## Included VAT
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gross = net + vat                vat = net × rate                      │
//! │                                                                         │
//! │  ⇒ vat = gross / (1 + rate) × rate, rounded half-up to whole cents     │
//! │                                                                         │
//! │  119.00€ at 19%  →  net 100.00€, vat 19.00€                             │
//! │    5.00€ at  7%  →  vat 0.327.. → 0.33€                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each line item is rounded on its own; order totals are sums of the
//! rounded item values.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::money::Money;
use crate::order::{Order, OrderItem};
use crate::types::{TaxCategory, TaxRate, TaxRates};

// =============================================================================
// Totals
// =============================================================================

/// Accumulated gross value and included VAT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub gross: Money,
    pub vat: Money,
}

impl Totals {
    pub const fn new(gross: Money, vat: Money) -> Self {
        Totals { gross, vat }
    }

    /// Gross value minus included VAT.
    pub fn net(&self) -> Money {
        self.gross - self.vat
    }
}

impl Add for Totals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Totals::new(self.gross + other.gross, self.vat + other.vat)
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Self) {
        self.gross += other.gross;
        self.vat += other.vat;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), Add::add)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// VAT calculator over a configurable [`TaxRates`] table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxCalculator {
    rates: TaxRates,
}

impl TaxCalculator {
    pub fn new(rates: TaxRates) -> Self {
        TaxCalculator { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Rate for a category; `None` is charged at the standard rate.
    pub fn tax_rate(&self, category: impl Into<Option<TaxCategory>>) -> TaxRate {
        self.rates.rate(category.into())
    }

    /// VAT contained in a gross amount.
    ///
    /// ## Example
    /// ```rust
    /// use bestell_core::{Money, TaxCalculator, TaxCategory};
    ///
    /// let calc = TaxCalculator::default();
    /// let vat = calc.vat_portion(Money::from_cents(11900), TaxCategory::Standard);
    /// assert_eq!(vat.cents(), 1900);
    /// ```
    pub fn vat_portion(&self, gross: Money, category: impl Into<Option<TaxCategory>>) -> Money {
        let rate = self.tax_rate(category);
        if rate.is_zero() {
            return Money::zero();
        }

        let pct = rate.percentage();
        let vat = gross.cents() as f64 / (pct / 100.0 + 1.0) * pct / 100.0;
        Money::from_cents(round_half_up(vat))
    }

    /// Gross value and VAT of one line item.
    pub fn item_totals(&self, item: &OrderItem) -> Totals {
        let gross = item.gross_value();
        let vat = self.vat_portion(gross, item.article().tax_category());
        Totals::new(gross, vat)
    }

    /// Gross value and VAT summed over all items; no order yields zero.
    pub fn order_totals<'a>(&self, order: impl Into<Option<&'a Order>>) -> Totals {
        order
            .into()
            .map(|order| self.items_totals(order.items()))
            .unwrap_or_default()
    }

    /// Gross value and VAT summed over a sequence of line items.
    pub fn items_totals<'a>(&self, items: impl IntoIterator<Item = &'a OrderItem>) -> Totals {
        items.into_iter().map(|item| self.item_totals(item)).sum()
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::customer::Customer;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn article(cents: i64, category: TaxCategory) -> Arc<Article> {
        let mut article = Article::new("Artikel", Money::from_cents(cents)).unwrap();
        article.set_tax_category(category);
        Arc::new(article)
    }

    fn empty_order() -> Order {
        let mut c = Customer::new("Eric Meyer");
        c.set_id(892474).unwrap();
        Order::new(Arc::new(c)).unwrap()
    }

    #[test]
    fn test_tax_rates() {
        let calc = TaxCalculator::default();
        assert_eq!(calc.tax_rate(TaxCategory::TaxFree).bps(), 0);
        assert_eq!(calc.tax_rate(TaxCategory::Standard).bps(), 1900);
        assert_eq!(calc.tax_rate(TaxCategory::Reduced).bps(), 700);
        assert_eq!(calc.tax_rate(None::<TaxCategory>).bps(), 1900);
    }

    #[test]
    fn test_vat_portion_standard() {
        let calc = TaxCalculator::default();
        assert_eq!(calc.vat_portion(Money::from_cents(11900), TaxCategory::Standard).cents(), 1900);
        assert_eq!(calc.vat_portion(Money::from_cents(11900), None::<TaxCategory>).cents(), 1900);
        // 2000 / 1.19 * 0.19 = 319.33
        assert_eq!(calc.vat_portion(Money::from_cents(2000), TaxCategory::Standard).cents(), 319);
    }

    #[test]
    fn test_vat_portion_reduced() {
        let calc = TaxCalculator::default();
        // 10700 / 1.07 * 0.07 = 700
        assert_eq!(calc.vat_portion(Money::from_cents(10700), TaxCategory::Reduced).cents(), 700);
        // 500 / 1.07 * 0.07 = 32.71
        assert_eq!(calc.vat_portion(Money::from_cents(500), TaxCategory::Reduced).cents(), 33);
    }

    #[test]
    fn test_vat_portion_tax_free() {
        let calc = TaxCalculator::default();
        assert!(calc.vat_portion(Money::from_cents(11900), TaxCategory::TaxFree).is_zero());
        assert!(calc.vat_portion(Money::from_cents(1), TaxCategory::TaxFree).is_zero());
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
    }

    #[test]
    fn test_custom_rates() {
        let calc = TaxCalculator::new(TaxRates {
            standard: TaxRate::from_bps(1000),
            ..TaxRates::default()
        });
        assert_eq!(calc.vat_portion(Money::from_cents(1100), TaxCategory::Standard).cents(), 100);
    }

    #[test]
    fn test_order_totals() {
        let calc = TaxCalculator::default();
        let mut order = empty_order();
        order
            .add_item(article(1000, TaxCategory::Standard), 2)
            .unwrap()
            .add_item(article(500, TaxCategory::Reduced), 1)
            .unwrap();

        let totals = calc.order_totals(&order);
        let expected_vat = calc.vat_portion(Money::from_cents(2000), TaxCategory::Standard)
            + calc.vat_portion(Money::from_cents(500), TaxCategory::Reduced);

        assert_eq!(totals.gross.cents(), 2500);
        assert_eq!(totals.vat, expected_vat);
        assert_eq!(totals.vat.cents(), 352);
        assert_eq!(totals.net().cents(), 2148);
    }

    #[test]
    fn test_order_totals_empty_and_absent() {
        let calc = TaxCalculator::default();
        assert_eq!(calc.order_totals(&empty_order()), Totals::default());
        assert_eq!(calc.order_totals(None::<&Order>), Totals::default());
    }

    #[test]
    fn test_totals_add() {
        let mut a = Totals::new(Money::from_cents(100), Money::from_cents(16));
        a += Totals::new(Money::from_cents(200), Money::from_cents(32));
        assert_eq!(a, Totals::new(Money::from_cents(300), Money::from_cents(48)));
    }

    proptest! {
        #[test]
        fn prop_vat_within_gross(cents in 0i64..10_000_000) {
            let calc = TaxCalculator::default();
            let gross = Money::from_cents(cents);
            for category in [TaxCategory::Standard, TaxCategory::Reduced] {
                let vat = calc.vat_portion(gross, category);
                prop_assert!(!vat.is_negative());
                prop_assert!(vat <= gross);
            }
            prop_assert!(calc.vat_portion(gross, TaxCategory::TaxFree).is_zero());
        }

        #[test]
        fn prop_order_totals_are_item_sums(
            lines in proptest::collection::vec((0i64..100_000, 0i64..20, 0u8..3), 0..12)
        ) {
            let calc = TaxCalculator::default();
            let mut order = empty_order();
            for (cents, units, category) in &lines {
                let category = match category {
                    0 => TaxCategory::TaxFree,
                    1 => TaxCategory::Standard,
                    _ => TaxCategory::Reduced,
                };
                order.add_item(article(*cents, category), *units).unwrap();
            }

            let totals = calc.order_totals(&order);
            let gross: i64 = lines.iter().map(|(cents, units, _)| cents * units).sum();
            let vat: Money = order
                .items()
                .iter()
                .map(|item| calc.vat_portion(item.gross_value(), item.article().tax_category()))
                .sum();

            prop_assert_eq!(totals.gross.cents(), gross);
            prop_assert_eq!(totals.vat, vat);
            prop_assert_eq!(totals.gross, order.total_value());
        }
    }
}
