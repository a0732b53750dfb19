//! # Sales Ledger
//!
//! Append-only history of [`Sale`]s. Recording a sale is the only operation
//! that touches two ledgers at once, so it is ordered to fail before it
//! mutates anything.
//!
//! ## record_sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewSale { recipe, quantity, unit_price, customer? }                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate quantity / price ──────────────► Err (nothing changed)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RecipeBook::get ────────────────────────► RecipeNotFound               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CustomerDirectory::find (if given) ─────► CustomerNotFound             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StockLedger::deduct_many(scaled) ───────► InsufficientStock            │
//! │       │              (all lines or none)                                │
//! │       ▼                                                                 │
//! │  append Sale ──► Ok(&Sale)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::customer::CustomerDirectory;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::recipe::RecipeBook;
use crate::stock::StockLedger;
use crate::types::Sale;
use crate::validation::{validate_amount, validate_sale_quantity};
use crate::MAX_SALE_QUANTITY;

/// Input for [`SalesLedger::record_sale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub recipe_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub customer_name: Option<String>,
}

impl NewSale {
    pub fn new(recipe_name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        NewSale {
            recipe_name: recipe_name.into(),
            quantity,
            unit_price,
            customer_name: None,
        }
    }

    /// Attributes the sale to a registered customer.
    pub fn for_customer(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }
}

/// Chronological record of every sale.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    sales: Vec<Sale>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sale and deducts its ingredients from stock.
    ///
    /// On success the stock reflects the full ingredient usage and the
    /// history grew by exactly one entry. On any error neither changed.
    ///
    /// ## Errors
    /// - `Validation` / `QuantityTooLarge` for bad input
    /// - `RecipeNotFound`, `CustomerNotFound`
    /// - `InvalidRecipe` when the recipe has no ingredients
    /// - `InsufficientStock` listing every short ingredient
    pub fn record_sale(
        &mut self,
        stock: &mut StockLedger,
        recipes: &RecipeBook,
        customers: &CustomerDirectory,
        new_sale: NewSale,
    ) -> CoreResult<&Sale> {
        validate_sale_quantity(new_sale.quantity)?;
        if new_sale.quantity > MAX_SALE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: new_sale.quantity,
                max: MAX_SALE_QUANTITY,
            });
        }
        validate_amount("unit price", new_sale.unit_price)?;

        let recipe = recipes.get(&new_sale.recipe_name)?;
        if recipe.is_empty() {
            return Err(CoreError::empty_recipe(&recipe.name));
        }

        let customer = match new_sale.customer_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(customers.find(name)?.name.clone()),
            _ => None,
        };

        stock.deduct_many(&recipe.requirements(new_sale.quantity))?;

        self.sales.push(Sale {
            id: Uuid::new_v4(),
            sequence: self.sales.len() as u64 + 1,
            recipe_name: recipe.name.clone(),
            quantity: new_sale.quantity,
            unit_price: new_sale.unit_price,
            customer,
            recorded_at: Utc::now(),
        });

        // Just pushed.
        Ok(&self.sales[self.sales.len() - 1])
    }

    /// Every sale, oldest first. Borrowing again yields the same slice until
    /// the next successful `record_sale`.
    pub fn history(&self) -> &[Sale] {
        &self.sales
    }

    pub fn last(&self) -> Option<&Sale> {
        self.sales.last()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
