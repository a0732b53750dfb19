//! # Stall
//!
//! One explicit context owning every ledger of a single stall. This is the
//! surface external collaborators (the CLI, tests) talk to.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stall                                                                  │
//! │   ├── StockLedger        register_stock, stock()                        │
//! │   ├── RecipeBook         register_recipe, recipe, recipe_unit_cost      │
//! │   ├── SalesLedger        record_sale, history                           │
//! │   └── CustomerDirectory  register_customer, customers()                 │
//! │                                                                         │
//! │  planner::*  and  cash::close  are free functions over borrowed ledgers │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating operations take `&mut self`; a stall is single-writer.

use rust_decimal::Decimal;

use crate::cash;
use crate::customer::CustomerDirectory;
use crate::error::CoreResult;
use crate::money::Money;
use crate::planner::{self, ProductionEstimate};
use crate::recipe::RecipeBook;
use crate::sales::{NewSale, SalesLedger};
use crate::stock::StockLedger;
use crate::types::{ClosingReport, Customer, Expense, Ingredient, Recipe, Sale, StockItem};

#[derive(Debug, Clone, Default)]
pub struct Stall {
    stock: StockLedger,
    recipes: RecipeBook,
    sales: SalesLedger,
    customers: CustomerDirectory,
}

impl Stall {
    /// A stall with no stock, recipes, sales or customers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stall whose recipe book already holds "Sanduíche de Frango".
    pub fn with_default_recipe() -> Self {
        Stall {
            recipes: RecipeBook::with_default_recipe(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Stock
    // =========================================================================

    pub fn register_stock(
        &mut self,
        name: &str,
        quantity: Decimal,
        unit: &str,
        unit_cost: Money,
    ) -> CoreResult<&StockItem> {
        self.stock.register_or_update(name, quantity, unit, unit_cost)
    }

    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    pub fn register_recipe(
        &mut self,
        name: &str,
        ingredients: Vec<Ingredient>,
    ) -> CoreResult<&Recipe> {
        self.recipes.register(name, ingredients)
    }

    pub fn recipe(&self, name: &str) -> CoreResult<&Recipe> {
        self.recipes.get(name)
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Ingredient cost of one unit at current unit costs.
    pub fn recipe_unit_cost(&self, name: &str) -> CoreResult<Money> {
        cash::recipe_unit_cost(self.recipes.get(name)?, &self.stock)
    }

    // =========================================================================
    // Production
    // =========================================================================

    pub fn max_producible(&self, recipe_name: &str) -> CoreResult<u64> {
        planner::max_producible(self.recipes.get(recipe_name)?, &self.stock)
    }

    pub fn estimate(&self, recipe_name: &str) -> CoreResult<ProductionEstimate> {
        planner::estimate(self.recipes.get(recipe_name)?, &self.stock)
    }

    pub fn can_produce(&self, recipe_name: &str, quantity: u32) -> CoreResult<bool> {
        planner::can_produce(self.recipes.get(recipe_name)?, &self.stock, quantity)
    }

    // =========================================================================
    // Sales & Customers
    // =========================================================================

    /// See [`SalesLedger::record_sale`].
    pub fn record_sale(&mut self, new_sale: NewSale) -> CoreResult<&Sale> {
        self.sales
            .record_sale(&mut self.stock, &self.recipes, &self.customers, new_sale)
    }

    pub fn sales(&self) -> &SalesLedger {
        &self.sales
    }

    pub fn history(&self) -> &[Sale] {
        self.sales.history()
    }

    pub fn register_customer(&mut self, name: &str, contact: &str) -> CoreResult<&Customer> {
        self.customers.register(name, contact)
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    // =========================================================================
    // Closing
    // =========================================================================

    /// Closing report over the whole history. Leaves the stall untouched.
    pub fn close(&self, expenses: &[Expense]) -> CoreResult<ClosingReport> {
        cash::close(self.sales.history(), &self.recipes, &self.stock, expenses)
    }
}
