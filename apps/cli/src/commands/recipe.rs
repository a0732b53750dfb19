//! # Recipe Commands

use serde::Serialize;
use tracing::{debug, info};

use super::checked;
use crate::error::CliResult;
use lanchonete_core::{Ingredient, Money, ProductionEstimate, Stall};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub name: String,
    pub ingredient_count: usize,
    /// Cost of one unit at current prices; `None` while an ingredient is
    /// not stocked yet.
    pub unit_cost: Option<Money>,
}

/// Registers or replaces a recipe.
pub fn register_recipe(
    stall: &mut Stall,
    name: &str,
    ingredients: Vec<Ingredient>,
) -> CliResult<RecipeSummary> {
    debug!(name, ingredients = ingredients.len(), "register_recipe command");

    let recipe = checked("register_recipe", stall.register_recipe(name, ingredients))?;
    let name = recipe.name.clone();
    let ingredient_count = recipe.ingredients.len();
    let unit_cost = stall.recipe_unit_cost(&name).ok();

    info!(
        recipe = %name,
        ingredients = ingredient_count,
        unit_cost = ?unit_cost.map(|c| c.to_string()),
        "recipe registered"
    );
    Ok(RecipeSummary {
        name,
        ingredient_count,
        unit_cost,
    })
}

/// How many units the current stock supports, and what limits it.
pub fn producible(stall: &Stall, recipe_name: &str) -> CliResult<ProductionEstimate> {
    debug!(recipe = recipe_name, "producible command");

    let estimate = checked("producible", stall.estimate(recipe_name))?;

    info!(
        recipe = %estimate.recipe,
        max_units = estimate.max_units,
        bottlenecks = ?estimate.bottlenecks,
        "production estimated"
    );
    Ok(estimate)
}
