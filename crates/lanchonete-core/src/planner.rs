//! # Production Planner
//!
//! Read-only capacity queries over a [`Recipe`] and the [`StockLedger`].
//!
//! ## Bottleneck Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sanduíche de Frango                                                    │
//! │                                                                         │
//! │  ingredient   stock   per unit   floor(stock / per unit)                │
//! │  ──────────   ─────   ────────   ───────────────────────                │
//! │  frango        160       80              2                              │
//! │  queijo          5        1              5                              │
//! │  ovo             2        1              2                              │
//! │                                                                         │
//! │  max producible = min(2, 5, 2) = 2   bottlenecks: frango, ovo           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Answers are never cached; they hold until the next stock or recipe
//! change.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::stock::StockLedger;
use crate::types::Recipe;

/// Capacity contributed by one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCapacity {
    pub ingredient: String,
    pub available: Decimal,
    pub quantity_per_unit: Decimal,
    /// Whole units this ingredient alone could supply.
    pub units: u64,
}

/// Full answer to "how many can I make?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionEstimate {
    pub recipe: String,
    pub max_units: u64,
    /// Ingredients whose capacity equals `max_units`, in recipe order.
    pub bottlenecks: Vec<String>,
    /// Per-ingredient capacities, in recipe order.
    pub capacities: Vec<IngredientCapacity>,
}

/// Maximum whole units of `recipe` the current stock can produce.
///
/// ## Errors
/// - `InvalidRecipe` if the recipe has no ingredients
/// - `StockItemNotFound` if any ingredient was never registered
///
/// ## Example
/// ```rust
/// use lanchonete_core::money::Money;
/// use lanchonete_core::planner::max_producible;
/// use lanchonete_core::stock::StockLedger;
/// use lanchonete_core::types::{Ingredient, Recipe};
/// use rust_decimal::Decimal;
///
/// let mut stock = StockLedger::new();
/// stock.register_or_update("pão", Decimal::from(7), "un", Money::zero()).unwrap();
/// let recipe = Recipe::new("Torrada", vec![Ingredient::new("pão", Decimal::from(2))]);
///
/// assert_eq!(max_producible(&recipe, &stock).unwrap(), 3);
/// ```
pub fn max_producible(recipe: &Recipe, stock: &StockLedger) -> CoreResult<u64> {
    estimate(recipe, stock).map(|e| e.max_units)
}

/// Like [`max_producible`], also naming the limiting ingredients.
pub fn estimate(recipe: &Recipe, stock: &StockLedger) -> CoreResult<ProductionEstimate> {
    if recipe.is_empty() {
        return Err(CoreError::empty_recipe(&recipe.name));
    }

    let capacities = recipe
        .ingredients
        .iter()
        .map(|ingredient| -> CoreResult<IngredientCapacity> {
            let item = stock.get(&ingredient.name)?;
            Ok(IngredientCapacity {
                ingredient: item.name.clone(),
                available: item.quantity,
                quantity_per_unit: ingredient.quantity_per_unit,
                units: whole_units(item.quantity, ingredient.quantity_per_unit),
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let max_units = capacities.iter().map(|c| c.units).min().unwrap_or(0);
    let bottlenecks = capacities
        .iter()
        .filter(|c| c.units == max_units)
        .map(|c| c.ingredient.clone())
        .collect();

    Ok(ProductionEstimate {
        recipe: recipe.name.clone(),
        max_units,
        bottlenecks,
        capacities,
    })
}

/// Whether `quantity` units can be produced right now.
///
/// Missing stock items count as zero stock here, so the answer is simply
/// `false`; only an empty recipe is an error.
pub fn can_produce(recipe: &Recipe, stock: &StockLedger, quantity: u32) -> CoreResult<bool> {
    if recipe.is_empty() {
        return Err(CoreError::empty_recipe(&recipe.name));
    }
    Ok(stock.shortages(&recipe.requirements(quantity)).is_empty())
}

/// floor(available / per_unit), saturating at `u64::MAX`.
fn whole_units(available: Decimal, per_unit: Decimal) -> u64 {
    available
        .checked_div(per_unit)
        .map(|ratio| ratio.floor().to_u64().unwrap_or(u64::MAX))
        .unwrap_or(u64::MAX)
}
