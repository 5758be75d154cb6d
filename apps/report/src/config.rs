//! Report configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what the environment says.

use std::env;
use std::str::FromStr;

use bestell_core::NameStyle;
use bestell_store::IdStrategy;
use clap::ValueEnum;

use crate::cli::Cli;

/// Which sample orders to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SeedSet {
    /// The five basic orders.
    Basic,
    /// Basic orders plus the additional ones.
    #[default]
    Full,
}

impl FromStr for SeedSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <SeedSet as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| ConfigError::InvalidValue(SEED_VAR.to_string()))
    }
}

const SEED_VAR: &str = "BESTELL_SEED";
const ID_STRATEGY_VAR: &str = "BESTELL_ID_STRATEGY";
const NAME_STYLE_VAR: &str = "BESTELL_NAME_STYLE";

/// Report configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Sample data set (`BESTELL_SEED`)
    pub seed: SeedSet,

    /// Id generation (`BESTELL_ID_STRATEGY`)
    pub id_strategy: IdStrategy,

    /// Customer name rendering (`BESTELL_NAME_STYLE`)
    pub name_style: NameStyle,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ReportConfig {
            seed: parse_var(&lookup, SEED_VAR, "full")?,

            id_strategy: parse_var(&lookup, ID_STRATEGY_VAR, "sequential")?,

            name_style: match parse_var(&lookup, NAME_STYLE_VAR, "last-first")? {
                style @ (NameStyle::LastFirst | NameStyle::FirstLast) => style,
                _ => return Err(ConfigError::InvalidValue(NAME_STYLE_VAR.to_string())),
            },
        };

        Ok(config)
    }

    /// Applies the flags given on the command line.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(ids) = cli.ids {
            self.id_strategy = ids;
        }
        self
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: &str,
) -> Result<T, ConfigError> {
    lookup(var)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue(var.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
