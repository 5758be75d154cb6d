//! # bestell-store: In-Memory Factory
//!
//! Creates customers, articles and orders with generated ids, keeps them in
//! memory and seeds sample data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bestell-report                                                         │
//! │       │  Store::new(IdStrategy) ─► OrderBuilder::build_orders()         │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bestell-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │  IdGenerator  │    │     Store     │    │ OrderBuilder │   │   │
//! │  │   │   (ids.rs)    │◄───│  (store.rs)   │◄───│ (builder.rs) │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bestell-core entities (Customer, Article, Order)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bestell_core::Money;
//! use bestell_store::{IdStrategy, Store};
//!
//! let mut store = Store::new(IdStrategy::Sequential);
//! let mut eric = store.create_customer("Eric Meyer")?;
//! eric.add_contact("eric98@yahoo.com")?;
//! let eric = store.add_customer(eric);
//!
//! let tasse = store.create_article("Tasse", Money::from_cents(299))?;
//! let tasse = store.add_article(tasse);
//!
//! let mut order = store.create_order(&eric)?;
//! order.add_item(tasse, 2)?;
//! let order = store.add_order(order);
//!
//! assert_eq!(store.find_order_by_id("1000000001").map(|o| o.items_count()), Some(1));
//! assert_eq!(order.total_value().cents(), 598);
//! # Ok::<(), bestell_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod ids;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use builder::OrderBuilder;
pub use error::{StoreError, StoreResult};
pub use ids::{IdGenerator, IdStrategy};
pub use store::{Snapshot, Store};
