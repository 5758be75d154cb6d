//! # In-Memory Store
//!
//! Creates entities with generated ids and keeps the finished ones.
//!
//! ## Lifecycle
//! ```text
//! create_customer("Eric Meyer")   → Customer (id assigned, not yet stored)
//!        │  add_contact(..)
//!        ▼
//! add_customer(customer)          → Arc<Customer> (stored, now read-only)
//!        │
//!        ▼
//! create_order(&Arc<Customer>)    → Order (id assigned) → add_item(..) → add_order
//! ```
//!
//! Stored entities are shared immutably; lists keep insertion order.

use std::sync::Arc;

use bestell_core::{Article, Customer, Money, Order};
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ids::{IdGenerator, IdStrategy};

/// Entity factory and in-memory repository.
#[derive(Debug, Clone, Default)]
pub struct Store {
    ids: IdGenerator,
    customers: Vec<Arc<Customer>>,
    articles: Vec<Arc<Article>>,
    orders: Vec<Arc<Order>>,
}

/// Serializable view of everything stored.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub customers: Vec<&'a Customer>,
    pub articles: Vec<&'a Article>,
    pub orders: Vec<&'a Order>,
}

impl Store {
    pub fn new(strategy: IdStrategy) -> Self {
        Store {
            ids: IdGenerator::new(strategy),
            ..Store::default()
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Creates a customer from a free-text name with a fresh id.
    pub fn create_customer(&mut self, name: &str) -> StoreResult<Customer> {
        let mut customer = Customer::new(name);
        let id = self.ids.next_customer_id()?;
        customer.set_id(id as i64)?;
        debug!(customer_id = id, name = %name, "Created customer");
        Ok(customer)
    }

    /// Creates an article with a fresh id.
    pub fn create_article(&mut self, description: &str, unit_price: Money) -> StoreResult<Article> {
        let mut article = Article::new(description, unit_price)?;
        let id = self.ids.next_article_id()?;
        article.set_id(&id)?;
        debug!(article_id = %id, description = %description, "Created article");
        Ok(article)
    }

    /// Creates an empty order for a customer with a fresh id.
    pub fn create_order(&mut self, customer: &Arc<Customer>) -> StoreResult<Order> {
        let mut order = Order::new(Arc::clone(customer))?;
        let id = self.ids.next_order_id()?;
        order.set_id(&id)?;
        debug!(order_id = %id, customer_id = ?customer.id(), "Created order");
        Ok(order)
    }

    // =========================================================================
    // Storage
    // =========================================================================

    pub fn add_customer(&mut self, customer: Customer) -> Arc<Customer> {
        let customer = Arc::new(customer);
        self.customers.push(Arc::clone(&customer));
        customer
    }

    pub fn add_article(&mut self, article: Article) -> Arc<Article> {
        let article = Arc::new(article);
        self.articles.push(Arc::clone(&article));
        article
    }

    pub fn add_order(&mut self, order: Order) -> Arc<Order> {
        debug!(
            order_id = ?order.id(),
            items = order.items_count(),
            "Stored order"
        );
        let order = Arc::new(order);
        self.orders.push(Arc::clone(&order));
        order
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn customers(&self) -> &[Arc<Customer>] {
        &self.customers
    }

    pub fn articles(&self) -> &[Arc<Article>] {
        &self.articles
    }

    pub fn orders(&self) -> &[Arc<Order>] {
        &self.orders
    }

    pub fn customers_count(&self) -> usize {
        self.customers.len()
    }

    pub fn articles_count(&self) -> usize {
        self.articles.len()
    }

    pub fn orders_count(&self) -> usize {
        self.orders.len()
    }

    pub fn find_customer_by_id(&self, id: u64) -> Option<Arc<Customer>> {
        self.customers
            .iter()
            .find(|c| c.id() == Some(id))
            .cloned()
    }

    pub fn find_article_by_id(&self, id: &str) -> Option<Arc<Article>> {
        self.articles
            .iter()
            .find(|a| a.id() == Some(id))
            .cloned()
    }

    pub fn find_order_by_id(&self, id: &str) -> Option<Arc<Order>> {
        self.orders.iter().find(|o| o.id() == Some(id)).cloned()
    }

    /// First stored article with exactly this description.
    pub fn find_article_by_description(&self, description: &str) -> Option<Arc<Article>> {
        self.articles
            .iter()
            .find(|a| a.description() == description)
            .cloned()
    }

    /// First stored customer with exactly these name parts.
    pub fn find_customer_by_name(&self, first: &str, last: &str) -> Option<Arc<Customer>> {
        self.customers
            .iter()
            .find(|c| c.first_name() == first && c.last_name() == last)
            .cloned()
    }

    /// Like [`Store::find_customer_by_id`], failing with `NotFound`.
    pub fn customer(&self, id: u64) -> StoreResult<Arc<Customer>> {
        self.find_customer_by_id(id)
            .ok_or_else(|| StoreError::not_found("Customer", id))
    }

    /// Like [`Store::find_article_by_id`], failing with `NotFound`.
    pub fn article(&self, id: &str) -> StoreResult<Arc<Article>> {
        self.find_article_by_id(id)
            .ok_or_else(|| StoreError::not_found("Article", id))
    }

    /// Like [`Store::find_order_by_id`], failing with `NotFound`.
    pub fn order(&self, id: &str) -> StoreResult<Arc<Order>> {
        self.find_order_by_id(id)
            .ok_or_else(|| StoreError::not_found("Order", id))
    }

    // =========================================================================
    // Export
    // =========================================================================

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            customers: self.customers.iter().map(Arc::as_ref).collect(),
            articles: self.articles.iter().map(Arc::as_ref).collect(),
            orders: self.orders.iter().map(Arc::as_ref).collect(),
        }
    }

    /// Pretty-printed JSON of [`Store::snapshot`].
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestell_core::{CoreError, TaxCategory, ValidationError};

    #[test]
    fn test_create_assigns_ids() {
        let mut store = Store::default();
        let customer = store.create_customer("Eric Meyer").unwrap();
        let article = store.create_article("Tasse", Money::from_cents(299)).unwrap();

        assert_eq!(customer.id(), Some(100001));
        assert_eq!(article.id(), Some("SKU-100001"));

        let customer = store.add_customer(customer);
        let order = store.create_order(&customer).unwrap();
        assert_eq!(order.id(), Some("1000000001"));
        assert_eq!(order.customer().id(), Some(100001));
    }

    #[test]
    fn test_create_does_not_store() {
        let mut store = Store::default();
        store.create_customer("Eric Meyer").unwrap();
        store.create_article("Tasse", Money::from_cents(299)).unwrap();
        assert_eq!(store.customers_count(), 0);
        assert_eq!(store.articles_count(), 0);
    }

    #[test]
    fn test_invalid_article_is_rejected() {
        let mut store = Store::default();
        let err = store.create_article("  ", Money::from_cents(299)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Blank { .. }))
        ));
        assert!(store.create_article("Tasse", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_create_fails_once_ids_run_out() {
        let mut store = Store {
            ids: IdGenerator::with_customer_span(IdStrategy::Random, 2),
            ..Store::default()
        };
        store.create_customer("Eric Meyer").unwrap();
        store.create_customer("Anne Bayer").unwrap();

        let err = store.create_customer("Tim Schulz-Mueller").unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { entity: "Customer" }));
        assert!(store.create_article("Tasse", Money::from_cents(299)).is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let mut store = Store::default();
        let eric = store.create_customer("Eric Meyer").unwrap();
        let eric = store.add_customer(eric);
        let mut tasse = store.create_article("Tasse", Money::from_cents(299)).unwrap();
        tasse.set_tax_category(TaxCategory::Standard);
        let tasse = store.add_article(tasse);
        let mut order = store.create_order(&eric).unwrap();
        order.add_item(Arc::clone(&tasse), 2).unwrap();
        let order = store.add_order(order);

        assert!(Arc::ptr_eq(&store.find_customer_by_id(100001).unwrap(), &eric));
        assert!(Arc::ptr_eq(&store.find_article_by_id("SKU-100001").unwrap(), &tasse));
        assert!(Arc::ptr_eq(&store.find_order_by_id("1000000001").unwrap(), &order));
        assert!(store.find_customer_by_id(999999).is_none());
        assert!(store.find_article_by_id("SKU-999999").is_none());
        assert!(store.find_order_by_id("").is_none());
    }

    #[test]
    fn test_lookup_not_found() {
        let store = Store::default();
        let err = store.order("1000000001").unwrap_err();
        assert_eq!(err.to_string(), "Order not found: 1000000001");
        assert!(matches!(store.customer(1), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.article("SKU-1"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_lists_keep_insertion_order() {
        let mut store = Store::default();
        for name in ["Eric Meyer", "Anne Bayer", "Tim Schulz-Mueller"] {
            let c = store.create_customer(name).unwrap();
            store.add_customer(c);
        }
        let last_names: Vec<&str> = store.customers().iter().map(|c| c.last_name()).collect();
        assert_eq!(last_names, vec!["Meyer", "Bayer", "Schulz-Mueller"]);
        assert_eq!(store.customers_count(), 3);
    }

    #[test]
    fn test_snapshot_json() {
        let mut store = Store::default();
        let eric = store.create_customer("Eric Meyer").unwrap();
        let eric = store.add_customer(eric);
        let order = store.create_order(&eric).unwrap();
        store.add_order(order);

        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        assert_eq!(json["customers"][0]["id"], 100001);
        assert_eq!(json["customers"][0]["last_name"], "Meyer");
        assert_eq!(json["orders"][0]["id"], "1000000001");
        assert_eq!(json["orders"][0]["customer_id"], 100001);
        assert_eq!(json["articles"].as_array().unwrap().len(), 0);
    }
}
