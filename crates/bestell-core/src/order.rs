//! # Order
//!
//! A purchase transaction owned by exactly one customer.
//!
//! ## Ownership
//! ```text
//! ┌──────────────┐  Arc (read only)  ┌───────────┐
//! │    Order     │──────────────────►│ Customer  │
//! │              │                   └───────────┘
//! │  items: Vec ─┼──► OrderItem ─────► Article (Arc, shared across orders)
//! └──────────────┘    (owned)
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};

use crate::article::Article;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::id::AssignOnce;
use crate::money::Money;
use crate::validation::{validate_string_id, validate_units};

/// Lower bound for creation dates: 2020-01-01T00:00:00Z in milliseconds.
pub const EARLIEST_CREATION_MILLIS: i64 = 1_577_836_800_000;

/// Earliest accepted creation date.
pub fn earliest_creation_date() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(EARLIEST_CREATION_MILLIS)
}

/// Checks `date` against `[2020-01-01, now + 1 day]`.
pub fn validate_creation_date(date: DateTime<Utc>, now: DateTime<Utc>) -> CoreResult<()> {
    let earliest = earliest_creation_date();
    let latest = now + Duration::days(1);
    if date < earliest || date > latest {
        return Err(CoreError::CreationDateOutOfRange {
            date,
            earliest,
            latest,
        });
    }
    Ok(())
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item: an article and the number of units ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    #[serde(rename = "article_id", serialize_with = "serialize_article_id")]
    article: Arc<Article>,
    units_ordered: i64,
}

impl OrderItem {
    pub(crate) fn new(article: Arc<Article>, units_ordered: i64) -> CoreResult<Self> {
        validate_units(units_ordered)?;
        checked_gross(&article, units_ordered)?;
        Ok(OrderItem {
            article,
            units_ordered,
        })
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Shared handle of the referenced article.
    pub fn article_handle(&self) -> &Arc<Article> {
        &self.article
    }

    pub fn units_ordered(&self) -> i64 {
        self.units_ordered
    }

    /// Changes the quantity. Only the item's own gross value is checked for
    /// overflow here; [`Order::add_item`] also checks the order total.
    pub fn set_units_ordered(&mut self, units: i64) -> CoreResult<&mut Self> {
        validate_units(units)?;
        checked_gross(&self.article, units)?;
        self.units_ordered = units;
        Ok(self)
    }

    /// `unit_price * units_ordered`, tax included.
    pub fn gross_value(&self) -> Money {
        self.article.unit_price().multiply_quantity(self.units_ordered)
    }
}

fn checked_gross(article: &Article, units: i64) -> CoreResult<Money> {
    article
        .unit_price()
        .checked_multiply_quantity(units)
        .ok_or_else(|| ValidationError::too_large("units ordered", units).into())
}

// =============================================================================
// Order
// =============================================================================

/// A purchase transaction.
///
/// ## Invariants
/// - the owning customer has a positive id and is never replaced
/// - `creation_date` lies within `[2020-01-01, now + 1 day]`
/// - `id` never changes once assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: AssignOnce<String>,
    #[serde(rename = "customer_id", serialize_with = "serialize_customer_id")]
    customer: Arc<Customer>,
    creation_date: DateTime<Utc>,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an empty order for `customer`, dated now.
    ///
    /// ## Errors
    /// [`CoreError::CustomerWithoutId`] unless the customer's id is positive.
    pub fn new(customer: Arc<Customer>) -> CoreResult<Self> {
        match customer.id() {
            Some(id) if id > 0 => {}
            other => return Err(CoreError::CustomerWithoutId(other)),
        }

        Ok(Order {
            id: AssignOnce::Unassigned,
            customer,
            creation_date: Utc::now(),
            items: Vec::new(),
        })
    }

    /// Order id, `None` while unassigned.
    pub fn id(&self) -> Option<&str> {
        self.id.get().map(String::as_str)
    }

    /// Assigns the id once. Later calls with a valid id are ignored; a blank
    /// id is always rejected.
    pub fn set_id(&mut self, id: &str) -> CoreResult<&mut Self> {
        validate_string_id("order id", id)?;
        self.id.assign(id.to_string());
        Ok(self)
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Shared handle of the owning customer.
    pub fn customer_handle(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Overrides the creation date.
    ///
    /// ## Errors
    /// [`CoreError::CreationDateOutOfRange`] outside `[2020-01-01, now + 1 day]`.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) -> CoreResult<&mut Self> {
        validate_creation_date(date, Utc::now())?;
        self.creation_date = date;
        Ok(self)
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// Mutable access to the item at position `i`.
    pub fn item_mut(&mut self, i: usize) -> Option<&mut OrderItem> {
        self.items.get_mut(i)
    }

    /// Appends a line item.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use bestell_core::{Article, Customer, Money, Order};
    ///
    /// let mut eric = Customer::new("Eric Meyer");
    /// eric.set_id(892474)?;
    /// let teller = Arc::new(Article::new("Teller", Money::from_cents(649))?);
    ///
    /// let mut order = Order::new(Arc::new(eric))?;
    /// order.add_item(teller.clone(), 4)?.add_item(teller, 1)?;
    /// assert_eq!(order.total_value().cents(), 3245);
    /// # Ok::<(), bestell_core::CoreError>(())
    /// ```
    pub fn add_item(&mut self, article: Arc<Article>, units: i64) -> CoreResult<&mut Self> {
        let item = OrderItem::new(article, units)?;
        let total = self.total_value();
        if total.checked_add(item.gross_value()).is_none() {
            return Err(ValidationError::too_large("order total", total.cents()).into());
        }
        self.items.push(item);
        Ok(self)
    }

    /// Deletes the item at position `i`; out-of-range positions are ignored.
    pub fn delete_item(&mut self, i: usize) {
        if i < self.items.len() {
            self.items.remove(i);
        }
    }

    pub fn delete_all_items(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * units_ordered` over all items.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(OrderItem::gross_value).sum()
    }
}

fn serialize_customer_id<S: Serializer>(customer: &Arc<Customer>, s: S) -> Result<S::Ok, S::Error> {
    customer.id().serialize(s)
}

fn serialize_article_id<S: Serializer>(article: &Arc<Article>, s: S) -> Result<S::Ok, S::Error> {
    article.id().serialize(s)
}
