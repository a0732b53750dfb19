//! # Configuration
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LANCHONETE_STORE_NAME, LANCHONETE_CURRENCY_SYMBOL,                 │
//! │     LANCHONETE_SEED_DEFAULT_RECIPE, LANCHONETE_LOG                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $LANCHONETE_CONFIG, or                                             │
//! │     ~/.config/lanchonete/config.toml (Linux)                           │
//! │     ~/Library/Application Support/br.lanchonete.lanchonete/... (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Lanchonete da Praça"
//! currency_symbol = "R$"
//! currency_decimals = 2
//! seed_default_recipe = true
//! log_filter = "warn,lanchonete=debug"
//! low_stock_threshold = 5
//! ```
//!
//! A missing file falls back to defaults; a malformed one is an error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use lanchonete_core::Money;

pub const CONFIG_PATH_VAR: &str = "LANCHONETE_CONFIG";
pub const STORE_NAME_VAR: &str = "LANCHONETE_STORE_NAME";
pub const CURRENCY_SYMBOL_VAR: &str = "LANCHONETE_CURRENCY_SYMBOL";
pub const SEED_DEFAULT_RECIPE_VAR: &str = "LANCHONETE_SEED_DEFAULT_RECIPE";
pub const LOG_VAR: &str = "LANCHONETE_LOG";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,lanchonete=info";

const MAX_CURRENCY_DECIMALS: u32 = 6;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown in the menu banner
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u32,

    /// Start with "Sanduíche de Frango" in the recipe book
    pub seed_default_recipe: bool,

    /// tracing `EnvFilter` directives, overridden by `RUST_LOG`
    pub log_filter: String,

    /// Items at or below this quantity are flagged in the stock listing
    pub low_stock_threshold: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Lanchonete".to_string(),
            currency_symbol: "R$".to_string(),
            currency_decimals: 2,
            seed_default_recipe: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            low_stock_threshold: Decimal::from(5),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, file, and defaults.
    pub fn load() -> ConfigResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::load`] with an injectable environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let path = env(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file. A file that does not exist yields defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "Loaded config file");
        Self::from_toml_str(&contents)
    }

    /// Parses TOML; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(name) = env(STORE_NAME_VAR) {
            self.store_name = name;
        }

        if let Some(symbol) = env(CURRENCY_SYMBOL_VAR) {
            self.currency_symbol = symbol;
        }

        if let Some(seed) = env(SEED_DEFAULT_RECIPE_VAR) {
            self.seed_default_recipe = parse_bool(&seed).ok_or_else(|| ConfigError::InvalidValue {
                key: SEED_DEFAULT_RECIPE_VAR.to_string(),
                value: seed.clone(),
            })?;
        }

        if let Some(filter) = env(LOG_VAR) {
            self.log_filter = filter;
        }

        Ok(())
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue {
                key: "currency_decimals".to_string(),
                value: self.currency_decimals.to_string(),
            });
        }
        if self.low_stock_threshold < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                key: "low_stock_threshold".to_string(),
                value: self.low_stock_threshold.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("br", "lanchonete", "lanchonete")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Formats an amount with the configured symbol and decimals.
    ///
    /// ## Example
    /// ```rust
    /// use lanchonete_cli::config::AppConfig;
    /// use lanchonete_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(3000)), "R$ 30.00");
    /// assert_eq!(config.format_currency(Money::from_cents(-400)), "-R$ 4.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount.amount().round_dp_with_strategy(
            self.currency_decimals,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.*}", self.currency_decimals as usize, rounded.abs());

        if self.currency_symbol.is_empty() {
            format!("{sign}{digits}")
        } else {
            format!("{sign}{} {digits}", self.currency_symbol)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
