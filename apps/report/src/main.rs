//! # bestell-report
//!
//! Seeds an in-memory store with sample orders and prints the report.
//!
//! ## Usage
//! ```bash
//! # All tables, basic and additional orders
//! cargo run -p bestell-report
//!
//! # Only the VAT order report for the basic orders
//! cargo run -p bestell-report -- --seed basic --section report
//!
//! # JSON export with random ids
//! BESTELL_ID_STRATEGY=random cargo run -p bestell-report -- --json
//! ```

use anyhow::Context;
use bestell_core::{Formatter, Printer, TaxCalculator};
use bestell_store::{OrderBuilder, Store};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod sections;

use cli::Cli;
use config::{ReportConfig, SeedSet};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ReportConfig::load()
        .context("Failed to load configuration")?
        .with_cli(&cli);
    info!(?config, section = ?cli.section, json = cli.json, "Starting bestell-report");

    let mut store = Store::new(config.id_strategy);
    let mut builder = OrderBuilder::new(&mut store);
    builder.build_orders().context("Failed to build orders")?;
    if config.seed == SeedSet::Full {
        builder
            .build_more_orders()
            .context("Failed to build more orders")?;
    }

    if cli.json {
        println!("{}", store.to_json().context("Failed to export store")?);
        return Ok(());
    }

    let printer = Printer::new(TaxCalculator::default(), Formatter::default())
        .with_name_style(config.name_style);
    print!("{}", sections::render(&printer, &store, cli.section));

    info!(orders = store.orders_count(), "Report printed");
    Ok(())
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Something failed
/// - INFO: Seeding and printing milestones
/// - DEBUG: Every created entity
///
/// ## Configuration
/// Set `RUST_LOG` environment variable to control logging:
/// ```bash
/// RUST_LOG=debug cargo run -p bestell-report
/// RUST_LOG=bestell_store=debug cargo run -p bestell-report
/// ```
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bestell=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
