//! # Report Printer
//!
//! Renders customers, articles and orders as fixed-width text.
//!
//! ## Order Report Layout
//! ```text
//! +------------+-------------------------------------+---------+---+------------+------------+------------+
//! | 8592356245 | Eric's Bestellung:                  |         |   |            |            |            |
//! |            |  - 4 Teller, 4x 6.49                |    4.14 |   |     25.96€ |            |            |
//! |            |  - 1 Buch "Java"                    |    3.26 | * |     49.90€ |      7.40€ |     75.86€ |
//! +------------+-------------------------------------+---------+---+------------+------------+------------+
//! |            |                                     |         |   |    Gesamt: |      7.40€ |     75.86€ |
//! +============+=====================================+=========+===+============+============+============+
//! ```
//! Columns: order id, item text, item VAT, reduced-rate marker, item gross,
//! order VAT subtotal and order gross subtotal (last item row only).
//!
//! Every operation only appends to the buffer it is given and never mutates
//! the entities it reads.

use std::cmp::Reverse;

use crate::article::Article;
use crate::calculator::{TaxCalculator, Totals};
use crate::customer::Customer;
use crate::format::{DateStyle, Formatter, NameStyle, PriceStyle};
use crate::order::Order;
use crate::table::{Column, TablePrinter};
use crate::types::TaxCategory;

/// Marker printed next to items charged at the reduced rate.
pub const REDUCED_TAX_MARKER: &str = "*";

/// Label of the grand total row.
pub const GRAND_TOTAL_LABEL: &str = "Gesamt:";

/// Column layout of the order report.
pub const ORDER_REPORT_COLUMNS: [Column; 7] = [
    Column::left(10),
    Column::left(35),
    Column::right(7),
    Column::left(1),
    Column::right(10),
    Column::right(10),
    Column::right(10),
];

/// Renders report tables from a calculator and a formatter.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    calculator: TaxCalculator,
    formatter: Formatter,
    name_style: NameStyle,
}

impl Printer {
    pub fn new(calculator: TaxCalculator, formatter: Formatter) -> Self {
        Printer {
            calculator,
            formatter,
            name_style: NameStyle::default(),
        }
    }

    /// Name style used for customer and order rows.
    pub fn with_name_style(mut self, name_style: NameStyle) -> Self {
        self.name_style = name_style;
        self
    }

    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    fn name_of(&self, customer: &Customer) -> String {
        self.formatter
            .fmt_name(customer.first_name(), customer.last_name(), self.name_style)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Appends `| id | name | contacts |`.
    pub fn print_customer<'b, 'c>(
        &self,
        buf: &'b mut String,
        customer: impl Into<Option<&'c Customer>>,
    ) -> &'b mut String {
        let Some(customer) = customer.into() else {
            return buf;
        };

        let id = customer.id().map(|id| id.to_string()).unwrap_or_default();
        let contacts = customer.contacts().join(", ");
        buf.push_str(&format!(
            "| {:>6} | {:<31} | {:<44} |\n",
            id,
            self.name_of(customer),
            contacts
        ));
        buf
    }

    pub fn print_customers<'b, 'c>(
        &self,
        buf: &'b mut String,
        customers: impl IntoIterator<Item = &'c Customer>,
    ) -> &'b mut String {
        for customer in customers {
            self.print_customer(buf, customer);
        }
        buf
    }

    // =========================================================================
    // Articles
    // =========================================================================

    /// Appends `| id | description | unit price | tax rate MwSt |`.
    pub fn print_article<'b, 'c>(
        &self,
        buf: &'b mut String,
        article: impl Into<Option<&'c Article>>,
    ) -> &'b mut String {
        let Some(article) = article.into() else {
            return buf;
        };

        let price = self.formatter.fmt_price_in(
            article.unit_price(),
            article.currency(),
            PriceStyle::Symbol,
        );
        let rate = self.calculator.tax_rate(article.tax_category());
        buf.push_str(&format!(
            "| {:>10} | {:<27} | {:>9} | {:>4} MwSt |\n",
            article.id().unwrap_or_default(),
            article.description(),
            price,
            rate
        ));
        buf
    }

    pub fn print_articles<'b, 'c>(
        &self,
        buf: &'b mut String,
        articles: impl IntoIterator<Item = &'c Article>,
    ) -> &'b mut String {
        for article in articles {
            self.print_article(buf, article);
        }
        buf
    }

    // =========================================================================
    // Order summaries
    // =========================================================================

    /// Appends `| id | customer | n items | created: date |`.
    pub fn print_order<'b, 'c>(
        &self,
        buf: &'b mut String,
        order: impl Into<Option<&'c Order>>,
    ) -> &'b mut String {
        let Some(order) = order.into() else {
            return buf;
        };

        let created = self
            .formatter
            .fmt_date(order.creation_date(), DateStyle::Date);
        buf.push_str(&format!(
            "| {:>10} | {:<27} | {} items | created: {} |\n",
            order.id().unwrap_or_default(),
            self.name_of(order.customer()),
            order.items_count(),
            created
        ));
        buf
    }

    pub fn print_orders<'b, 'c>(
        &self,
        buf: &'b mut String,
        orders: impl IntoIterator<Item = &'c Order>,
    ) -> &'b mut String {
        for order in orders {
            self.print_order(buf, order);
        }
        buf
    }

    // =========================================================================
    // Order report
    // =========================================================================

    /// Appends the header and item rows of one order and returns the order's
    /// totals.
    ///
    /// The last item row carries the order's VAT and gross subtotals.
    pub fn print_order_details(&self, table: &mut TablePrinter<'_>, order: &Order) -> Totals {
        let customer = order.customer();
        let owner = if customer.first_name().is_empty() {
            customer.last_name()
        } else {
            customer.first_name()
        };
        table.row([
            order.id().unwrap_or_default().to_string(),
            format!("{owner}'s Bestellung:"),
        ]);

        let mut subtotal = Totals::default();
        let count = order.items_count();
        for (i, item) in order.items().iter().enumerate() {
            let article = item.article();
            let units = item.units_ordered();
            let totals = self.calculator.item_totals(item);
            subtotal += totals;

            let mut text = format!(" - {} {}", units, article.description());
            if units > 1 {
                let unit_price = self.formatter.fmt_price(article.unit_price(), PriceStyle::Plain);
                text.push_str(&format!(", {units}x {unit_price}"));
            }
            let marker = if article.tax_category() == TaxCategory::Reduced {
                REDUCED_TAX_MARKER
            } else {
                ""
            };
            let (vat_subtotal, gross_subtotal) = if i + 1 == count {
                (
                    self.formatter.fmt_price(subtotal.vat, PriceStyle::Symbol),
                    self.formatter.fmt_price(subtotal.gross, PriceStyle::Symbol),
                )
            } else {
                (String::new(), String::new())
            };

            table.row([
                String::new(),
                text,
                self.formatter.fmt_price(totals.vat, PriceStyle::Plain),
                marker.to_string(),
                self.formatter.fmt_price(totals.gross, PriceStyle::Symbol),
                vat_subtotal,
                gross_subtotal,
            ]);
        }
        subtotal
    }

    /// Appends the full order report: orders ranked by descending value, a
    /// separator after each order and a closing grand total row. No orders
    /// leave the buffer unchanged.
    ///
    /// Returns the buffer together with the grand totals.
    pub fn print_order_report_totals<'b, 'c>(
        &self,
        buf: &'b mut String,
        orders: impl IntoIterator<Item = &'c Order>,
    ) -> (&'b mut String, Totals) {
        let mut ranked: Vec<&Order> = orders.into_iter().collect();
        if ranked.is_empty() {
            return (buf, Totals::default());
        }
        ranked.sort_by_key(|order| Reverse(order.total_value()));

        let mut table = TablePrinter::new(buf, ORDER_REPORT_COLUMNS);
        table.line();

        let mut grand = Totals::default();
        for order in ranked {
            grand += self.print_order_details(&mut table, order);
            table.line();
        }

        table
            .row([
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                GRAND_TOTAL_LABEL.to_string(),
                self.formatter.fmt_price(grand.vat, PriceStyle::Symbol),
                self.formatter.fmt_price(grand.gross, PriceStyle::Symbol),
            ])
            .double_line();

        (buf, grand)
    }

    /// Appends the full order report, see [`Printer::print_order_report_totals`].
    pub fn print_order_report<'b, 'c>(
        &self,
        buf: &'b mut String,
        orders: impl IntoIterator<Item = &'c Order>,
    ) -> &'b mut String {
        self.print_order_report_totals(buf, orders).0
    }
}
