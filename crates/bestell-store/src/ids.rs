//! # Id Generation
//!
//! ```text
//! ┌──────────┬────────────────────┬──────────────────────────────────┐
//! │ Entity   │ Format             │ Sequential        Random         │
//! ├──────────┼────────────────────┼──────────────────────────────────┤
//! │ Customer │ 6 digits           │ 100001, 100002    e.g. 643270    │
//! │ Article  │ "SKU-" + 6 digits  │ SKU-100001        e.g. SKU-458362│
//! │ Order    │ 10 digits          │ 1000000001        e.g. 8592356245│
//! └──────────┴────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Random ids draw their entropy from v4 UUIDs. A generator never hands out
//! the same id twice; once a range is used up it fails with
//! [`StoreError::IdsExhausted`].

use std::collections::HashSet;
use std::str::FromStr;

use bestell_core::ValidationError;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

const SIX_DIGIT_BASE: u64 = 100_000;
const SIX_DIGIT_SPAN: u64 = 900_000;
const TEN_DIGIT_BASE: u64 = 1_000_000_000;
const TEN_DIGIT_SPAN: u64 = 9_000_000_000;

/// Prefix of article ids.
pub const ARTICLE_ID_PREFIX: &str = "SKU-";

/// How ids are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Counting up from the first id of each range.
    #[default]
    Sequential,
    /// Uniformly drawn from each range.
    Random,
}

impl FromStr for IdStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "random" => Ok(IdStrategy::Random),
            other => Err(ValidationError::unknown("id strategy", other)),
        }
    }
}

/// Draws numbers in `[base, base + span)` without repetition.
///
/// Only random draws remember what was issued; counting up cannot repeat
/// before the range is used up.
#[derive(Debug, Clone)]
struct IdRange {
    base: u64,
    span: u64,
    next: u64,
    issued: u64,
    seen: HashSet<u64>,
}

impl IdRange {
    fn new(base: u64, span: u64) -> Self {
        IdRange {
            base,
            span,
            next: 0,
            issued: 0,
            seen: HashSet::new(),
        }
    }

    /// `None` once all `span` ids are out.
    fn draw(&mut self, strategy: IdStrategy) -> Option<u64> {
        if self.issued >= self.span {
            return None;
        }
        let offset = match strategy {
            IdStrategy::Sequential => {
                self.next = (self.next + 1) % self.span;
                self.next
            }
            IdStrategy::Random => loop {
                let offset = (Uuid::new_v4().as_u128() % u128::from(self.span)) as u64;
                if self.seen.insert(offset) {
                    break offset;
                }
            },
        };
        self.issued += 1;
        Some(self.base + offset)
    }
}

/// Generates customer, article and order ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    customers: IdRange,
    articles: IdRange,
    orders: IdRange,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        IdGenerator {
            strategy,
            customers: IdRange::new(SIX_DIGIT_BASE, SIX_DIGIT_SPAN),
            articles: IdRange::new(SIX_DIGIT_BASE, SIX_DIGIT_SPAN),
            orders: IdRange::new(TEN_DIGIT_BASE, TEN_DIGIT_SPAN),
        }
    }

    /// Generator whose customer range holds only `span` ids.
    #[cfg(test)]
    pub(crate) fn with_customer_span(strategy: IdStrategy, span: u64) -> Self {
        IdGenerator {
            customers: IdRange::new(SIX_DIGIT_BASE, span),
            ..IdGenerator::new(strategy)
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Next 6-digit customer id.
    pub fn next_customer_id(&mut self) -> StoreResult<u64> {
        self.customers
            .draw(self.strategy)
            .ok_or(StoreError::IdsExhausted { entity: "Customer" })
    }

    /// Next article id, `SKU-` followed by 6 digits.
    pub fn next_article_id(&mut self) -> StoreResult<String> {
        self.articles
            .draw(self.strategy)
            .map(|n| format!("{ARTICLE_ID_PREFIX}{n}"))
            .ok_or(StoreError::IdsExhausted { entity: "Article" })
    }

    /// Next 10-digit order id.
    pub fn next_order_id(&mut self) -> StoreResult<String> {
        self.orders
            .draw(self.strategy)
            .map(|n| n.to_string())
            .ok_or(StoreError::IdsExhausted { entity: "Order" })
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(IdStrategy::default())
    }
}
