use bestell_store::IdStrategy;
use clap::{Parser, ValueEnum};

use crate::config::SeedSet;

/// Report sections that can be printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Customer table
    Customers,
    /// Article table
    Articles,
    /// Order summary table
    Orders,
    /// Order report with VAT and totals
    Report,
    /// Every section above
    #[default]
    All,
}

impl Section {
    /// The printable sections this selection stands for.
    pub fn expand(self) -> Vec<Section> {
        match self {
            Section::All => vec![
                Section::Customers,
                Section::Articles,
                Section::Orders,
                Section::Report,
            ],
            single => vec![single],
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bestell-report")]
#[command(about = "Prints customers, articles and orders with their VAT report.", version)]
pub struct Cli {
    /// Sample data set, overrides BESTELL_SEED
    #[arg(long, value_enum)]
    pub seed: Option<SeedSet>,

    /// Id generation (sequential or random), overrides BESTELL_ID_STRATEGY
    #[arg(long)]
    pub ids: Option<IdStrategy>,

    /// Print the seeded data as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,
}
