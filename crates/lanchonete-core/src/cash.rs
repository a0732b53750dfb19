//! # Cash Register
//!
//! Turns sales history and period expenses into a [`ClosingReport`].
//!
//! ## Closing Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_revenue          = Σ sale.unit_price × sale.quantity             │
//! │  total_ingredient_cost  = Σ sales Σ ingredients                         │
//! │                             qty_per_unit × sale.quantity × unit_cost    │
//! │  gross_profit           = total_revenue − total_ingredient_cost         │
//! │  net_profit             = gross_profit − Σ expense.amount               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Current-Cost Accounting
//! Ingredient cost is recomputed from the recipe and the unit costs in the
//! stock ledger *at closing time*. Sales do not carry a cost snapshot, so
//! re-registering an item with a new unit cost changes the cost of sales
//! already recorded.
//!
//! Nothing here mutates state; closing twice over the same inputs yields
//! equal reports.

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::money::Money;
use crate::recipe::RecipeBook;
use crate::stock::StockLedger;
use crate::types::{ClosingReport, Expense, Recipe, RecipeClosingLine, Sale};
use crate::validation::{validate_amount, validate_name};

/// Ingredient cost of one unit of `recipe` at current unit costs.
///
/// ## Example
/// ```rust
/// use lanchonete_core::cash::recipe_unit_cost;
/// use lanchonete_core::money::Money;
/// use lanchonete_core::stock::StockLedger;
/// use lanchonete_core::types::{Ingredient, Recipe};
/// use rust_decimal::Decimal;
///
/// let mut stock = StockLedger::new();
/// stock.register_or_update("frango", Decimal::from(500), "g", Money::from_cents(5)).unwrap();
/// let recipe = Recipe::new("Espeto", vec![Ingredient::new("frango", Decimal::from(80))]);
///
/// assert_eq!(recipe_unit_cost(&recipe, &stock).unwrap(), Money::from_cents(400));
/// ```
pub fn recipe_unit_cost(recipe: &Recipe, stock: &StockLedger) -> CoreResult<Money> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| -> CoreResult<Money> {
            let item = stock.get(&ingredient.name)?;
            Ok(item.unit_cost * ingredient.quantity_per_unit)
        })
        .sum()
}

/// Closes the register over `sales` and `expenses`.
///
/// ## Errors
/// - `RecipeNotFound` / `StockItemNotFound` if a sold recipe or one of its
///   ingredients cannot be resolved any more
/// - `Validation` if an expense has a blank description or negative amount
pub fn close(
    sales: &[Sale],
    recipes: &RecipeBook,
    stock: &StockLedger,
    expenses: &[Expense],
) -> CoreResult<ClosingReport> {
    for expense in expenses {
        validate_name("expense description", &expense.description)?;
        validate_amount("expense amount", expense.amount)?;
    }

    let mut lines: Vec<RecipeClosingLine> = Vec::new();
    for sale in sales {
        let recipe = recipes.get(&sale.recipe_name)?;
        let cost = recipe_unit_cost(recipe, stock)? * Decimal::from(sale.quantity);

        match lines.iter_mut().find(|l| l.recipe == recipe.name) {
            Some(line) => {
                line.units += u64::from(sale.quantity);
                line.revenue += sale.revenue();
                line.ingredient_cost += cost;
            }
            None => lines.push(RecipeClosingLine {
                recipe: recipe.name.clone(),
                units: u64::from(sale.quantity),
                revenue: sale.revenue(),
                ingredient_cost: cost,
            }),
        }
    }

    let total_revenue: Money = lines.iter().map(|l| l.revenue).sum();
    let total_ingredient_cost: Money = lines.iter().map(|l| l.ingredient_cost).sum();
    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let gross_profit = total_revenue - total_ingredient_cost;

    Ok(ClosingReport {
        sale_count: sales.len(),
        units_sold: lines.iter().map(|l| l.units).sum(),
        total_revenue,
        total_ingredient_cost,
        gross_profit,
        total_expenses,
        net_profit: gross_profit - total_expenses,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerDirectory;
    use crate::error::CoreError;
    use crate::sales::{NewSale, SalesLedger};
    use crate::types::Ingredient;
    use rust_decimal_macros::dec;

    fn setup() -> (StockLedger, RecipeBook, SalesLedger) {
        let mut stock = StockLedger::new();
        stock
            .register_or_update("pão", dec!(10), "un", Money::from_cents(75))
            .unwrap();
        stock
            .register_or_update("queijo", dec!(300), "g", Money::from_decimal(dec!(0.04)))
            .unwrap();

        let mut recipes = RecipeBook::new();
        recipes
            .register(
                "Pão de Queijo",
                vec![
                    Ingredient::new("pão", dec!(1)),
                    Ingredient::new("queijo", dec!(30)),
                ],
            )
            .unwrap();
        recipes
            .register("Torrada", vec![Ingredient::new("pão", dec!(2))])
            .unwrap();

        (stock, recipes, SalesLedger::new())
    }

    fn sell(
        stock: &mut StockLedger,
        recipes: &RecipeBook,
        sales: &mut SalesLedger,
        recipe: &str,
        qty: u32,
        price_cents: i64,
    ) {
        sales
            .record_sale(
                stock,
                recipes,
                &CustomerDirectory::new(),
                NewSale::new(recipe, qty, Money::from_cents(price_cents)),
            )
            .unwrap();
    }

    #[test]
    fn test_recipe_unit_cost() {
        let (stock, recipes, _) = setup();
        let recipe = recipes.get("pão de queijo").unwrap();
        // 0.75 + 30 × 0.04
        assert_eq!(recipe_unit_cost(recipe, &stock).unwrap(), Money::from_cents(195));
    }

    #[test]
    fn test_empty_period() {
        let (stock, recipes, sales) = setup();
        let report = close(sales.history(), &recipes, &stock, &[]).unwrap();

        assert_eq!(report.sale_count, 0);
        assert!(report.total_revenue.is_zero());
        assert!(report.net_profit.is_zero());
        assert!(report.lines.is_empty());
    }

    #[test]
    fn test_close_aggregates_per_recipe() {
        let (mut stock, recipes, mut sales) = setup();
        sell(&mut stock, &recipes, &mut sales, "Pão de Queijo", 2, 600);
        sell(&mut stock, &recipes, &mut sales, "Torrada", 1, 400);
        sell(&mut stock, &recipes, &mut sales, "pão de queijo", 1, 550);

        let expenses = vec![Expense::new("gás", Money::from_cents(300))];
        let report = close(sales.history(), &recipes, &stock, &expenses).unwrap();

        assert_eq!(report.sale_count, 3);
        assert_eq!(report.units_sold, 4);
        assert_eq!(report.total_revenue, Money::from_cents(2150));
        // 3 × 1.95 + 1 × 1.50
        assert_eq!(report.total_ingredient_cost, Money::from_cents(735));
        assert_eq!(report.gross_profit, Money::from_cents(1415));
        assert_eq!(report.total_expenses, Money::from_cents(300));
        assert_eq!(report.net_profit, Money::from_cents(1115));

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].recipe, "Pão de Queijo");
        assert_eq!(report.lines[0].units, 3);
        assert_eq!(report.lines[0].revenue, Money::from_cents(1750));
        assert_eq!(report.lines[1].recipe, "Torrada");
        assert_eq!(report.lines[1].gross_profit(), Money::from_cents(250));
    }

    #[test]
    fn test_close_is_repeatable() {
        let (mut stock, recipes, mut sales) = setup();
        sell(&mut stock, &recipes, &mut sales, "Torrada", 2, 400);

        let first = close(sales.history(), &recipes, &stock, &[]).unwrap();
        let second = close(sales.history(), &recipes, &stock, &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_close_uses_current_unit_cost() {
        let (mut stock, recipes, mut sales) = setup();
        sell(&mut stock, &recipes, &mut sales, "Torrada", 1, 400);

        let before = close(sales.history(), &recipes, &stock, &[]).unwrap();
        assert_eq!(before.total_ingredient_cost, Money::from_cents(150));

        stock
            .register_or_update("pão", dec!(8), "un", Money::from_cents(100))
            .unwrap();
        let after = close(sales.history(), &recipes, &stock, &[]).unwrap();
        assert_eq!(after.total_ingredient_cost, Money::from_cents(200));
    }

    #[test]
    fn test_losses_are_negative() {
        let (mut stock, recipes, mut sales) = setup();
        sell(&mut stock, &recipes, &mut sales, "Torrada", 1, 100);

        let expenses = vec![Expense::new("aluguel", Money::from_cents(5000))];
        let report = close(sales.history(), &recipes, &stock, &expenses).unwrap();
        assert_eq!(report.gross_profit, Money::from_cents(-50));
        assert_eq!(report.net_profit, Money::from_cents(-5050));
    }

    #[test]
    fn test_negative_expense_rejected() {
        let (stock, recipes, sales) = setup();
        let expenses = vec![Expense::new("estorno", Money::from_cents(-100))];
        assert!(matches!(
            close(sales.history(), &recipes, &stock, &expenses),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_unresolvable_recipe_fails() {
        let (mut stock, recipes, mut sales) = setup();
        sell(&mut stock, &recipes, &mut sales, "Torrada", 1, 400);

        let err = close(sales.history(), &RecipeBook::new(), &stock, &[]).unwrap_err();
        assert_eq!(err, CoreError::RecipeNotFound("Torrada".to_string()));
    }
}
