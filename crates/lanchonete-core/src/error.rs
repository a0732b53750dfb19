//! # Error Types
//!
//! Domain-specific error types for lanchonete-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lanchonete-core errors (this file)                                    │
//! │  ├── CoreError        - Lookup, stock and recipe failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every core operation either succeeds or returns one of these without
//! having changed any state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Stock item has never been registered.
    #[error("Stock item not found: {0}")]
    StockItemNotFound(String),

    /// Recipe has never been registered.
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Customer has never been registered.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// One or more deductions would drive stock below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// record_sale("Sanduíche de Frango", qty: 1)
    ///      │
    ///      ▼
    /// frango: available 0, required 80
    ///      │
    ///      ▼
    /// InsufficientStock { shortages: [frango (short 80)] }
    ///      │
    ///      ▼
    /// No stock item changed, no sale appended
    /// ```
    #[error("Insufficient stock: {}", format_shortages(.shortages))]
    InsufficientStock { shortages: Vec<Shortage> },

    /// Recipe cannot be used for production math.
    #[error("Invalid recipe {recipe}: {reason}")]
    InvalidRecipe { recipe: String, reason: String },

    /// Sale quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for any of the three lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::StockItemNotFound(_)
                | CoreError::RecipeNotFound(_)
                | CoreError::CustomerNotFound(_)
        )
    }

    pub(crate) fn empty_recipe(recipe: &str) -> Self {
        CoreError::InvalidRecipe {
            recipe: recipe.to_string(),
            reason: "recipe has no ingredients".to_string(),
        }
    }
}

/// A single ingredient that cannot cover a requested deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortage {
    /// Display name of the stock item (or the requested name if unknown).
    pub ingredient: String,
    /// Quantity currently in stock (zero when the item does not exist).
    pub available: Decimal,
    /// Quantity the operation needed.
    pub required: Decimal,
}

impl Shortage {
    /// How much more stock would be needed.
    pub fn shortfall(&self) -> Decimal {
        self.required - self.available
    }
}

fn format_shortages(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(|s| {
            format!(
                "{} (available {}, required {})",
                s.ingredient,
                s.available.normalize(),
                s.required.normalize()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is above the accepted ceiling.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// List has more entries than allowed.
    #[error("at most {max} {field} entries are allowed")]
    TooMany { field: String, max: usize },

    /// Duplicate value (e.g., same ingredient listed twice).
    #[error("{field} '{value}' is listed more than once")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
