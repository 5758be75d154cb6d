//! # bestell-core: Sales Domain Logic
//!
//! Customers, articles, orders, VAT calculation and report rendering as pure
//! in-memory code with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       bestell-report (binary)                           │
//! │          config ──► seed store ──► render sections ──► stdout           │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │                     bestell-store (in-memory factory)                   │
//! │        id assignment • find by id • sample data • JSON snapshot         │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │                   ★ bestell-core (THIS CRATE) ★                         │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────────────┐  │
//! │   │ Customer  │  │  Article  │  │   Order    │  │  TaxCalculator    │  │
//! │   │ name      │  │  Money    │  │  OrderItem │  │  Formatter        │  │
//! │   │ contact   │  │  TaxRate  │  │            │  │  Printer / table  │  │
//! │   └───────────┘  └───────────┘  └────────────┘  └───────────────────┘  │
//! │                                                                         │
//! │   NO I/O • NO LOGGING • NO GLOBAL STATE                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`customer`], [`name`], [`contact`] - customers, name parsing, contact sanitizing
//! - [`article`] - sellable articles
//! - [`order`] - orders and their line items
//! - [`calculator`] - included VAT and order totals
//! - [`format`], [`table`], [`printer`] - text rendering of the report tables
//! - [`money`], [`types`] - integer cents, tax rates, currencies
//! - [`error`], [`validation`], [`id`] - errors, field rules, assign-once ids
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use bestell_core::{Article, Customer, Money, Order, TaxCalculator, TaxCategory};
//!
//! let mut customer = Customer::new("Meyer, Eric");
//! customer.set_id(892474).unwrap();
//!
//! let mut book = Article::new("Buch \"Java\"", Money::from_cents(4990)).unwrap();
//! book.set_tax_category(TaxCategory::Reduced);
//!
//! let mut order = Order::new(Arc::new(customer)).unwrap();
//! order.add_item(Arc::new(book), 2).unwrap();
//!
//! let totals = TaxCalculator::default().order_totals(&order);
//! assert_eq!(totals.gross.cents(), 9980);
//! assert_eq!(totals.vat.cents(), 653);
//! ```
//!
//! An order can only be created for a customer that already has an id:
//!
//! ```rust
//! use std::sync::Arc;
//! use bestell_core::{CoreError, Customer, Order};
//!
//! let result = Order::new(Arc::new(Customer::new("Anne Bayer")));
//! assert_eq!(result.unwrap_err(), CoreError::CustomerWithoutId(None));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod article;
pub mod calculator;
pub mod contact;
pub mod customer;
pub mod error;
pub mod format;
pub mod id;
pub mod money;
pub mod name;
pub mod order;
pub mod printer;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use article::Article;
pub use calculator::{TaxCalculator, Totals};
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{DateStyle, Formatter, NameStyle, PriceStyle};
pub use money::Money;
pub use order::{Order, OrderItem};
pub use printer::Printer;
pub use types::*;
