//! # Domain Types
//!
//! Records owned by the ledgers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockItem     │   │     Recipe      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │◄──│  ingredients[]  │◄──│  recipe_name    │       │
//! │  │  quantity ≥ 0   │   │  name → qty/un  │   │  quantity > 0   │       │
//! │  │  unit           │   └─────────────────┘   │  unit_price     │       │
//! │  │  unit_cost      │                         │  customer? ─────┼──┐    │
//! │  └─────────────────┘                         └─────────────────┘  │    │
//! │                                                                    │    │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐  │    │
//! │  │    Expense      │   │  ClosingReport  │   │    Customer     │◄─┘    │
//! │  │  description    │──►│  revenue, cost  │   │  name, contact  │       │
//! │  │  amount         │   │  gross, net     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Keys
//! Every record is looked up by a key derived from its display name:
//! trimmed and lower-cased. "Frango " and "frango" are the same item.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Unit used when a stock item is registered without one.
pub const DEFAULT_UNIT: &str = "un";

/// Lookup key for a display name.
///
/// ## Example
/// ```rust
/// use lanchonete_core::types::key_of;
///
/// assert_eq!(key_of("  Sanduíche de Frango "), "sanduíche de frango");
/// ```
pub fn key_of(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Stock Item
// =============================================================================

/// A tracked raw ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Display name as last registered.
    pub name: String,

    /// Quantity on hand, in `unit`. Never negative.
    pub quantity: Decimal,

    /// Free-form unit label ("g", "un", "fatia").
    pub unit: String,

    /// Cost of one `unit`.
    pub unit_cost: Money,
}

impl StockItem {
    /// Value of everything on hand (quantity × unit cost).
    pub fn stock_value(&self) -> Money {
        self.unit_cost * self.quantity
    }

    /// True when `amount` can be taken without going negative.
    #[inline]
    pub fn covers(&self, amount: Decimal) -> bool {
        self.quantity >= amount
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// One line of a recipe: how much of a stock item one unit consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stock item name (resolved case-insensitively).
    pub name: String,

    /// Amount consumed per produced unit, in the stock item's own unit.
    pub quantity_per_unit: Decimal,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity_per_unit: Decimal) -> Self {
        Ingredient {
            name: name.into(),
            quantity_per_unit,
        }
    }

    /// Amount needed to produce `units` units.
    #[inline]
    pub fn scaled(&self, units: u32) -> Decimal {
        self.quantity_per_unit * Decimal::from(units)
    }
}

/// A named composition of ingredients producing one sellable unit.
///
/// Ingredient order is kept as registered; it decides the order shortages
/// are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Recipe {
            name: name.into(),
            ingredients,
        }
    }

    /// Ingredient requirements for `units` units, in recipe order.
    pub fn requirements(&self, units: u32) -> Vec<(String, Decimal)> {
        self.ingredients
            .iter()
            .map(|i| (i.name.clone(), i.scaled(units)))
            .collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. `name` is the natural lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub contact: String,
}

// =============================================================================
// Sale
// =============================================================================

/// An immutable record of a recipe sold.
///
/// Created only by `SalesLedger::record_sale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Position in the history, starting at 1, without gaps.
    pub sequence: u64,

    /// Recipe display name at time of sale.
    pub recipe_name: String,

    /// Units sold (at least one).
    pub quantity: u32,

    /// Price charged per unit.
    pub unit_price: Money,

    /// Customer display name, when the sale was attributed to one.
    pub customer: Option<String>,

    /// When the sale was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Revenue of this sale (unit price × quantity).
    #[inline]
    pub fn revenue(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Expense
// =============================================================================

/// An operating expense supplied at closing time (gas, packaging, rent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: Money,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Expense {
            description: description.into(),
            amount,
        }
    }
}

// =============================================================================
// Closing Report
// =============================================================================

/// Per-recipe slice of a closing report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeClosingLine {
    pub recipe: String,
    pub units: u64,
    pub revenue: Money,
    pub ingredient_cost: Money,
}

impl RecipeClosingLine {
    pub fn gross_profit(&self) -> Money {
        self.revenue - self.ingredient_cost
    }
}

/// Result of a cash closing. Computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingReport {
    pub sale_count: usize,
    pub units_sold: u64,
    pub total_revenue: Money,
    pub total_ingredient_cost: Money,
    pub gross_profit: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    /// One line per recipe, in order of first sale.
    pub lines: Vec<RecipeClosingLine>,
}

// =============================================================================
// Unit Tests
// =============================================================================
