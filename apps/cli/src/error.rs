//! # CLI Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  Menu option                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Prompter ── bad number? ───── InvalidInput ─────────┐                  │
//! │       │                                              │                  │
//! │       ▼                                              ▼                  │
//! │  Command ── CoreError ─────────► CliError { code, message }             │
//! │       │                                              │                  │
//! │       ▼                                              ▼                  │
//! │  Success                          warn!(code) + "Error: message"        │
//! │                                   then back to the menu                 │
//! │                                                                         │
//! │  EndOfInput ends the session; Io aborts it.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::PathBuf;

use lanchonete_core::CoreError;

/// Error surfaced by a menu command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Stock item, recipe, or customer does not exist
    NotFound,

    /// A sale would drive stock negative
    InsufficientStock,

    /// Recipe unusable for production math
    InvalidRecipe,

    /// Domain validation failed
    ValidationError,

    /// Terminal input could not be parsed
    InvalidInput,

    /// Configuration could not be loaded
    Config,

    /// Reading or writing the terminal failed
    Io,

    /// Standard input closed
    EndOfInput,
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidInput, message)
    }

    pub fn end_of_input() -> Self {
        CliError::new(ErrorCode::EndOfInput, "input closed")
    }

    /// Whether the menu should show the error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.code, ErrorCode::Io | ErrorCode::EndOfInput)
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::StockItemNotFound(_)
            | CoreError::RecipeNotFound(_)
            | CoreError::CustomerNotFound(_) => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::InvalidRecipe { .. } => ErrorCode::InvalidRecipe,
            CoreError::QuantityTooLarge { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
        };
        CliError::new(code, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Io, format!("terminal I/O failed: {err}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::Config, err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
