//! Renders the selected report sections of a seeded store.

use std::sync::Arc;

use bestell_core::Printer;
use bestell_store::Store;

use crate::cli::Section;

/// Renders one section, or all of them separated by blank lines.
pub fn render(printer: &Printer, store: &Store, section: Section) -> String {
    let mut out = String::new();
    for (i, section) in section.expand().into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_into(&mut out, printer, store, section);
    }
    out
}

fn render_into(out: &mut String, printer: &Printer, store: &Store, section: Section) {
    match section {
        Section::Customers => {
            out.push_str(&format!("Kunden ({}):\n", store.customers_count()));
            printer.print_customers(out, store.customers().iter().map(Arc::as_ref));
        }
        Section::Articles => {
            out.push_str(&format!("Artikel ({}):\n", store.articles_count()));
            printer.print_articles(out, store.articles().iter().map(Arc::as_ref));
        }
        Section::Orders => {
            out.push_str(&format!("Bestellungen ({}):\n", store.orders_count()));
            printer.print_orders(out, store.orders().iter().map(Arc::as_ref));
        }
        Section::Report => {
            out.push_str("Bestellungen mit MwSt:\n");
            printer.print_order_report(out, store.orders().iter().map(Arc::as_ref));
        }
        // expanded by the caller
        Section::All => {}
    }
}
