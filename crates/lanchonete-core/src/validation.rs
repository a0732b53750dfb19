//! # Validation Module
//!
//! Input validation shared by the ledgers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt                                                   │
//! │  └── Parsing text into numbers (rejects "abc", accepts "0,05")         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rules on typed values (non-negative, positive, length)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger operations                                            │
//! │  └── Cross-entity rules (stock covers the sale, recipe exists)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{key_of, Ingredient};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted name for items, recipes and customers.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted unit label ("g", "un", "fatia").
pub const MAX_UNIT_LEN: usize = 20;

/// Largest stock quantity or quantity-per-unit, in the item's own unit.
pub const MAX_QUANTITY: i64 = 10_000_000;

/// Largest unit cost, unit price or expense.
pub const MAX_AMOUNT: i64 = 1_000_000;

/// Most ingredients a single recipe may list.
pub const MAX_INGREDIENTS: usize = 100;

// Together with MAX_SALE_QUANTITY these ceilings keep every product and sum
// the ledgers compute far below Decimal::MAX.

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (stock item, recipe, customer, ingredient).
///
/// ## Example
/// ```rust
/// use lanchonete_core::validation::validate_name;
///
/// assert!(validate_name("name", "frango").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit label. Empty units are allowed (they default to "un").
pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    if unit.trim().chars().count() > MAX_UNIT_LEN {
        return Err(ValidationError::TooLong {
            field: "unit".to_string(),
            max: MAX_UNIT_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity (zero allowed, at most [`MAX_QUANTITY`]).
pub fn validate_stock_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }
    validate_ceiling("quantity", quantity, MAX_QUANTITY)
}

/// Validates a monetary amount that may be zero but never negative.
///
/// ## Example
/// ```rust
/// use lanchonete_core::money::Money;
/// use lanchonete_core::validation::{validate_amount, MAX_AMOUNT};
///
/// assert!(validate_amount("unit price", Money::from_cents(1500)).is_ok());
/// assert!(validate_amount("unit price", Money::from_cents(MAX_AMOUNT * 100 + 1)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    validate_ceiling(field, amount.amount(), MAX_AMOUNT)
}

fn validate_ceiling(field: &str, value: Decimal, max: i64) -> ValidationResult<()> {
    if value > Decimal::from(max) {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a sale quantity (must be at least one unit).
pub fn validate_sale_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Recipe Validators
// =============================================================================

/// Validates a recipe ingredient list.
///
/// ## Rules
/// - Every ingredient name is a valid name
/// - At most [`MAX_INGREDIENTS`] entries
/// - Every quantity-per-unit is strictly positive and at most [`MAX_QUANTITY`]
/// - No ingredient appears twice (compared case-insensitively)
///
/// An empty list passes; production math rejects it later as an invalid
/// recipe.
pub fn validate_ingredients(ingredients: &[Ingredient]) -> ValidationResult<()> {
    if ingredients.len() > MAX_INGREDIENTS {
        return Err(ValidationError::TooMany {
            field: "ingredient".to_string(),
            max: MAX_INGREDIENTS,
        });
    }

    let mut seen = HashSet::new();

    for ingredient in ingredients {
        validate_name("ingredient", &ingredient.name)?;

        if ingredient.quantity_per_unit <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: format!("quantity of {}", ingredient.name.trim()),
            });
        }
        validate_ceiling(
            &format!("quantity of {}", ingredient.name.trim()),
            ingredient.quantity_per_unit,
            MAX_QUANTITY,
        )?;

        if !seen.insert(key_of(&ingredient.name)) {
            return Err(ValidationError::Duplicate {
                field: "ingredient".to_string(),
                value: ingredient.name.trim().to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
