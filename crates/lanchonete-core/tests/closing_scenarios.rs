//! End-to-end scenarios over a single stall: stock a sandwich's worth of
//! ingredients, plan, sell, fail, and close the register.

use lanchonete_core::validation::{MAX_AMOUNT, MAX_INGREDIENTS, MAX_QUANTITY};
use lanchonete_core::{
    CoreError, Expense, Ingredient, Money, NewSale, Stall, DEFAULT_RECIPE_NAME,
    MAX_SALE_QUANTITY,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// (name, unit cost in cents)
const OTHERS: [(&str, i64); 6] = [
    ("presunto", 40),
    ("queijo", 50),
    ("hambúrguer", 120),
    ("ovo", 60),
    ("alface", 10),
    ("tomate", 20),
];

/// Scenario 1 state: 160 g of chicken at 0.05/g, two of everything else.
fn scenario_stall() -> Stall {
    let mut stall = Stall::with_default_recipe();
    stall
        .register_stock("frango", dec!(160), "g", Money::from_cents(5))
        .unwrap();
    for (name, cents) in OTHERS {
        stall
            .register_stock(name, dec!(2), "un", Money::from_cents(cents))
            .unwrap();
    }
    stall
}

fn quantities(stall: &Stall) -> Vec<(String, Decimal)> {
    stall
        .stock()
        .items()
        .map(|item| (item.name.clone(), item.quantity))
        .collect()
}

fn sandwich(quantity: u32) -> NewSale {
    NewSale::new(DEFAULT_RECIPE_NAME, quantity, Money::from_cents(1500))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_1_capacity_is_two() {
    let stall = scenario_stall();
    assert_eq!(stall.max_producible(DEFAULT_RECIPE_NAME).unwrap(), 2);

    let estimate = stall.estimate(DEFAULT_RECIPE_NAME).unwrap();
    assert_eq!(estimate.bottlenecks.len(), 7);
}

#[test]
fn test_scenario_2_sale_empties_stock() {
    let mut stall = scenario_stall();
    let sale = stall.record_sale(sandwich(2)).unwrap().clone();

    assert_eq!(sale.revenue(), Money::from_cents(3000));
    for (name, quantity) in quantities(&stall) {
        assert!(quantity.is_zero(), "{name} should be empty, has {quantity}");
    }
    assert_eq!(stall.max_producible(DEFAULT_RECIPE_NAME).unwrap(), 0);
}

#[test]
fn test_scenario_3_oversell_changes_nothing() {
    let mut stall = scenario_stall();
    stall.record_sale(sandwich(2)).unwrap();
    let before = quantities(&stall);

    let err = stall.record_sale(sandwich(1)).unwrap_err();

    let CoreError::InsufficientStock { shortages } = err else {
        panic!("expected InsufficientStock, got {err:?}");
    };
    let frango = &shortages[0];
    assert_eq!(frango.ingredient, "frango");
    assert_eq!(frango.available, dec!(0));
    assert_eq!(frango.required, dec!(80));
    assert_eq!(quantities(&stall), before);
    assert_eq!(stall.history().len(), 1);
}

#[test]
fn test_scenario_4_closing_totals() {
    let mut stall = scenario_stall();
    stall.record_sale(sandwich(2)).unwrap();

    let report = stall.close(&[]).unwrap();

    // 2 × (80 × 0.05 + 0.40 + 0.50 + 1.20 + 0.60 + 0.10 + 0.20) = 2 × 7.00
    assert_eq!(report.total_revenue, Money::from_cents(3000));
    assert_eq!(report.total_ingredient_cost, Money::from_cents(1400));
    assert_eq!(report.gross_profit, Money::from_cents(1600));
    assert_eq!(report.net_profit, report.gross_profit);
    assert!(report.total_expenses.is_zero());
}

#[test]
fn test_scenario_5_unknown_recipe_leaves_history() {
    let mut stall = scenario_stall();
    stall.record_sale(sandwich(1)).unwrap();

    let err = stall
        .record_sale(NewSale::new("Pizza", 1, Money::from_cents(1000)))
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err, CoreError::RecipeNotFound("Pizza".to_string()));
    assert_eq!(stall.history().len(), 1);
}

// =============================================================================
// Closing reconciliation
// =============================================================================

#[test]
fn test_reconciliation_per_recipe() {
    let mut stall = scenario_stall();
    stall
        .register_stock("pão", dec!(20), "un", Money::from_cents(75))
        .unwrap();
    stall
        .register_recipe(
            "Misto Quente",
            vec![
                Ingredient::new("Pão", dec!(2)),
                Ingredient::new("presunto", dec!(0.5)),
            ],
        )
        .unwrap();

    stall.record_sale(sandwich(1)).unwrap();
    stall
        .record_sale(NewSale::new("misto quente", 2, Money::from_cents(900)))
        .unwrap();

    let expenses = [
        Expense::new("gás", Money::from_cents(350)),
        Expense::new("embalagens", Money::from_cents(150)),
    ];
    let report = stall.close(&expenses).unwrap();

    let line_revenue: Money = report.lines.iter().map(|l| l.revenue).sum();
    let line_cost: Money = report.lines.iter().map(|l| l.ingredient_cost).sum();
    assert_eq!(line_revenue, report.total_revenue);
    assert_eq!(line_cost, report.total_ingredient_cost);

    // misto: 2 × (2 × 0.75 + 0.5 × 0.40) = 3.40
    assert_eq!(report.lines[1].recipe, "Misto Quente");
    assert_eq!(report.lines[1].ingredient_cost, Money::from_cents(340));
    assert_eq!(report.total_ingredient_cost, Money::from_cents(1040));
    assert_eq!(report.total_revenue, Money::from_cents(3300));
    assert_eq!(report.total_expenses, Money::from_cents(500));
    assert_eq!(report.net_profit, Money::from_cents(1760));
    assert_eq!(report.units_sold, 3);
    assert_eq!(report.sale_count, 2);
}

#[test]
fn test_closing_twice_is_identical() {
    let mut stall = scenario_stall();
    stall.record_sale(sandwich(1)).unwrap();
    let expenses = [Expense::new("gás", Money::from_cents(100))];

    assert_eq!(stall.close(&expenses).unwrap(), stall.close(&expenses).unwrap());
}

#[test]
fn test_report_serializes() {
    let mut stall = scenario_stall();
    stall.record_sale(sandwich(2)).unwrap();
    let report = stall.close(&[]).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["sale_count"], 1);
    assert_eq!(json["lines"][0]["recipe"], DEFAULT_RECIPE_NAME);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_closing_at_value_ceilings() {
    let max_quantity = Decimal::from(MAX_QUANTITY);
    let max_amount = Money::from_decimal(Decimal::from(MAX_AMOUNT));

    let mut stall = Stall::new();
    let ingredients: Vec<Ingredient> = (0..MAX_INGREDIENTS)
        .map(|i| {
            let name = format!("insumo {i}");
            stall
                .register_stock(&name, max_quantity, "g", max_amount)
                .unwrap();
            Ingredient::new(name, Decimal::ONE)
        })
        .collect();
    stall.register_recipe("Banquete", ingredients).unwrap();

    stall
        .record_sale(NewSale::new("Banquete", MAX_SALE_QUANTITY, max_amount))
        .unwrap();
    let report = stall
        .close(&[Expense::new("aluguel", max_amount)])
        .unwrap();

    let units = Decimal::from(MAX_SALE_QUANTITY);
    let per_unit_cost = Decimal::from(MAX_INGREDIENTS as i64 * MAX_AMOUNT);
    assert_eq!(report.total_revenue.amount(), Decimal::from(MAX_AMOUNT) * units);
    assert_eq!(report.total_ingredient_cost.amount(), per_unit_cost * units);
    assert!(report.net_profit.is_negative());
    assert!(stall.stock().total_value().is_positive());
}

proptest! {
    /// Property: whatever sequence of sales is attempted, quantities stay
    /// non-negative and a rejected sale moves nothing.
    #[test]
    fn failed_sales_leave_stock_unchanged(attempts in prop::collection::vec(1u32..4, 1..10)) {
        let mut stall = scenario_stall();

        for quantity in attempts {
            let before = quantities(&stall);
            let history_len = stall.history().len();

            let outcome = stall.record_sale(sandwich(quantity)).map(|_| ());
            match outcome {
                Ok(_) => prop_assert_eq!(stall.history().len(), history_len + 1),
                Err(CoreError::InsufficientStock { .. }) => {
                    prop_assert_eq!(quantities(&stall), before);
                    prop_assert_eq!(stall.history().len(), history_len);
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }

            prop_assert!(quantities(&stall).iter().all(|(_, q)| *q >= Decimal::ZERO));
        }
    }
}
