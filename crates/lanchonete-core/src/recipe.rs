//! # Recipe Book
//!
//! Owns every [`Recipe`]. Registering a name that already exists replaces
//! the whole ingredient list, the same way stock registration overwrites.
//!
//! Ingredients are not checked against the stock ledger here: a recipe may
//! name items that are registered later. Resolution happens when the recipe
//! is planned, sold, or costed.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{key_of, Ingredient, Recipe};
use crate::validation::{validate_ingredients, validate_name};

/// Name of the recipe every new stall starts with.
pub const DEFAULT_RECIPE_NAME: &str = "Sanduíche de Frango";

/// The house sandwich: 80 g of chicken plus one of everything else.
///
/// ## Composition
/// ```text
/// frango      80  (grams)
/// presunto     1  (slice)
/// queijo       1  (slice)
/// hambúrguer   1  (patty)
/// ovo          1
/// alface       1  (leaf)
/// tomate       1  (slice)
/// ```
pub fn default_recipe() -> Recipe {
    Recipe::new(
        DEFAULT_RECIPE_NAME,
        vec![
            Ingredient::new("frango", Decimal::from(80)),
            Ingredient::new("presunto", Decimal::ONE),
            Ingredient::new("queijo", Decimal::ONE),
            Ingredient::new("hambúrguer", Decimal::ONE),
            Ingredient::new("ovo", Decimal::ONE),
            Ingredient::new("alface", Decimal::ONE),
            Ingredient::new("tomate", Decimal::ONE),
        ],
    )
}

/// Named recipes, keyed by normalised name.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book holding [`default_recipe`].
    pub fn with_default_recipe() -> Self {
        let mut book = Self::new();
        let recipe = default_recipe();
        book.recipes.insert(key_of(&recipe.name), recipe);
        book
    }

    /// Registers or replaces a recipe.
    ///
    /// Ingredient names are trimmed and lower-cased so they resolve stock
    /// items regardless of how they were typed.
    pub fn register(&mut self, name: &str, ingredients: Vec<Ingredient>) -> CoreResult<&Recipe> {
        validate_name("recipe name", name)?;
        validate_ingredients(&ingredients)?;

        let ingredients = ingredients
            .into_iter()
            .map(|i| Ingredient::new(key_of(&i.name), i.quantity_per_unit))
            .collect();

        let key = key_of(name);
        self.recipes
            .insert(key.clone(), Recipe::new(name.trim(), ingredients));
        Ok(&self.recipes[&key])
    }

    /// Looks up a recipe by name.
    pub fn get(&self, name: &str) -> CoreResult<&Recipe> {
        self.recipes
            .get(&key_of(name))
            .ok_or_else(|| CoreError::RecipeNotFound(name.trim().to_string()))
    }

    /// Recipes sorted by normalised name.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
