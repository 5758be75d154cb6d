//! # Order Builder
//!
//! Seeds a [`Store`] with sample customers, articles and orders.
//!
//! ## Sample Data
//! ```text
//! ┌──────────────────────────────┬────────────────────────────────────────┐
//! │ build_orders (basic)         │ build_more_orders (additional)         │
//! ├──────────────────────────────┼────────────────────────────────────────┤
//! │ Eric    4 Teller, 8 Becher,  │ Eric    1 Kanne, 6 Tasse               │
//! │         1 Buch "OOP", 1 Kanne│ Nadine  12 Teller, 1 Pfanne            │
//! │ Anne    2 Tasse, 2 Becher    │ Khaled  1 Buch "Java", 1 Gutschein     │
//! │ Tim     1 Pfanne, 2 Teller   │                                        │
//! │ Nadine  1 Buch "Java",       │                                        │
//! │         1 Buch "OOP"         │                                        │
//! │ Khaled  3 Tasse              │                                        │
//! └──────────────────────────────┴────────────────────────────────────────┘
//! ```
//!
//! Customers are looked up by name and articles by description before they
//! are created, so running a build step again adds orders but never
//! duplicates the catalogue.

use std::sync::Arc;

use bestell_core::{Article, Customer, Money, TaxCategory};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::Store;

/// Sample customer: free-text name and contacts.
type CustomerSeed = (&'static str, &'static [&'static str]);

/// Sample article: description, unit price in cents and tax category.
type ArticleSeed = (&'static str, i64, TaxCategory);

const ERIC: CustomerSeed = ("Eric Meyer", &["eric98@yahoo.com", "(030) 3945-642298"]);
const ANNE: CustomerSeed = ("Bayer, Anne", &["anne24@yahoo.de", "(030) 3481-23352"]);
const TIM: CustomerSeed = ("Schulz-Mueller, Tim", &["tim2346@gmx.de"]);
const NADINE: CustomerSeed = ("Nadine Ulla Blumenfeld", &["+49 152-92454"]);
const KHALED: CustomerSeed = ("Khaled Saad Mohamed Abdelalim", &["+49 1524-12948210"]);

const TASSE: ArticleSeed = ("Tasse", 299, TaxCategory::Standard);
const BECHER: ArticleSeed = ("Becher", 149, TaxCategory::Standard);
const KANNE: ArticleSeed = ("Kanne", 2000, TaxCategory::Standard);
const TELLER: ArticleSeed = ("Teller", 649, TaxCategory::Standard);
const BUCH_JAVA: ArticleSeed = ("Buch \"Java\"", 4990, TaxCategory::Reduced);
const BUCH_OOP: ArticleSeed = ("Buch \"OOP\"", 7995, TaxCategory::Reduced);
const PFANNE: ArticleSeed = ("Pfanne", 4999, TaxCategory::Standard);
const GUTSCHEIN: ArticleSeed = ("Gutschein", 2500, TaxCategory::TaxFree);

/// Seeds a store with sample data.
///
/// ## Usage
/// ```rust
/// use bestell_store::{OrderBuilder, Store};
///
/// let mut store = Store::default();
/// OrderBuilder::new(&mut store).build_orders()?.build_more_orders()?;
/// assert_eq!(store.orders_count(), 8);
/// # Ok::<(), bestell_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct OrderBuilder<'s> {
    store: &'s mut Store,
}

impl<'s> OrderBuilder<'s> {
    pub fn new(store: &'s mut Store) -> Self {
        OrderBuilder { store }
    }

    /// Adds the basic set of five orders, one per sample customer.
    pub fn build_orders(&mut self) -> StoreResult<&mut Self> {
        let eric = self.customer(ERIC)?;
        let anne = self.customer(ANNE)?;
        let tim = self.customer(TIM)?;
        let nadine = self.customer(NADINE)?;
        let khaled = self.customer(KHALED)?;

        let tasse = self.article(TASSE)?;
        let becher = self.article(BECHER)?;
        let kanne = self.article(KANNE)?;
        let teller = self.article(TELLER)?;
        let java = self.article(BUCH_JAVA)?;
        let oop = self.article(BUCH_OOP)?;
        let pfanne = self.article(PFANNE)?;

        self.order(&eric, &[(&teller, 4), (&becher, 8), (&oop, 1), (&kanne, 1)])?;
        self.order(&anne, &[(&tasse, 2), (&becher, 2)])?;
        self.order(&tim, &[(&pfanne, 1), (&teller, 2)])?;
        self.order(&nadine, &[(&java, 1), (&oop, 1)])?;
        self.order(&khaled, &[(&tasse, 3)])?;

        info!(
            customers = self.store.customers_count(),
            articles = self.store.articles_count(),
            orders = self.store.orders_count(),
            "Built orders"
        );
        Ok(self)
    }

    /// Adds three more orders on the same customers and catalogue.
    pub fn build_more_orders(&mut self) -> StoreResult<&mut Self> {
        let eric = self.customer(ERIC)?;
        let nadine = self.customer(NADINE)?;
        let khaled = self.customer(KHALED)?;

        let tasse = self.article(TASSE)?;
        let kanne = self.article(KANNE)?;
        let teller = self.article(TELLER)?;
        let java = self.article(BUCH_JAVA)?;
        let pfanne = self.article(PFANNE)?;
        let gutschein = self.article(GUTSCHEIN)?;

        self.order(&eric, &[(&kanne, 1), (&tasse, 6)])?;
        self.order(&nadine, &[(&teller, 12), (&pfanne, 1)])?;
        self.order(&khaled, &[(&java, 1), (&gutschein, 1)])?;

        info!(orders = self.store.orders_count(), "Built more orders");
        Ok(self)
    }

    fn customer(&mut self, (name, contacts): CustomerSeed) -> StoreResult<Arc<Customer>> {
        let probe = Customer::new(name);
        if let Some(found) = self
            .store
            .find_customer_by_name(probe.first_name(), probe.last_name())
        {
            return Ok(found);
        }

        let mut customer = self.store.create_customer(name)?;
        for contact in contacts {
            customer.add_contact(contact)?;
        }
        Ok(self.store.add_customer(customer))
    }

    fn article(&mut self, (description, cents, category): ArticleSeed) -> StoreResult<Arc<Article>> {
        if let Some(found) = self.store.find_article_by_description(description) {
            return Ok(found);
        }

        let mut article = self.store.create_article(description, Money::from_cents(cents))?;
        article.set_tax_category(category);
        debug!(description = %description, category = ?category, "Added sample article");
        Ok(self.store.add_article(article))
    }

    fn order(&mut self, customer: &Arc<Customer>, items: &[(&Arc<Article>, i64)]) -> StoreResult<()> {
        let mut order = self.store.create_order(customer)?;
        for (article, units) in items {
            order.add_item(Arc::clone(article), *units)?;
        }
        self.store.add_order(order);
        Ok(())
    }
}
