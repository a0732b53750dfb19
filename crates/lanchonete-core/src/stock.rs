//! # Stock Ledger
//!
//! Owns every [`StockItem`] and is the only place quantities change.
//!
//! ## Registration Overwrites
//! ```text
//! register_or_update("frango", 500, "g", 0.05)   → frango = 500 g
//! register_or_update("frango", 200, "g", 0.06)   → frango = 200 g  (NOT 700)
//! ```
//! Re-registering an item replaces its quantity, unit and unit cost. It is a
//! stock count, not a delivery.
//!
//! ## Atomic Deduction
//! ```text
//! deduct_many([frango 80, queijo 1, ovo 1])
//!      │
//!      ├── phase 1: check every line ──► any short? ──► Err, nothing touched
//!      │
//!      └── phase 2: apply every line (cannot fail)
//! ```

use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CoreError, CoreResult, Shortage};
use crate::money::Money;
use crate::types::{key_of, StockItem, DEFAULT_UNIT};
use crate::validation::{validate_amount, validate_name, validate_stock_quantity, validate_unit};

/// In-memory stock of raw ingredients, keyed by normalised name.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    items: BTreeMap<String, StockItem>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the item or replaces its quantity, unit and unit cost.
    ///
    /// An empty unit falls back to [`DEFAULT_UNIT`].
    pub fn register_or_update(
        &mut self,
        name: &str,
        quantity: Decimal,
        unit: &str,
        unit_cost: Money,
    ) -> CoreResult<&StockItem> {
        validate_name("name", name)?;
        validate_stock_quantity(quantity)?;
        validate_unit(unit)?;
        validate_amount("unit cost", unit_cost)?;

        let unit = match unit.trim() {
            "" => DEFAULT_UNIT,
            u => u,
        };

        let item = StockItem {
            name: name.trim().to_string(),
            quantity,
            unit: unit.to_string(),
            unit_cost,
        };

        let key = key_of(name);
        self.items.insert(key.clone(), item);
        // Just inserted under `key`.
        Ok(&self.items[&key])
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> CoreResult<&StockItem> {
        self.items
            .get(&key_of(name))
            .ok_or_else(|| CoreError::StockItemNotFound(name.trim().to_string()))
    }

    /// True iff the item exists and holds at least `amount`.
    pub fn can_deduct(&self, name: &str, amount: Decimal) -> bool {
        self.items
            .get(&key_of(name))
            .is_some_and(|item| item.covers(amount))
    }

    /// Removes `amount` from one item.
    ///
    /// Fails with `InsufficientStock` when the item is missing or short;
    /// the item is untouched in that case.
    pub fn deduct(&mut self, name: &str, amount: Decimal) -> CoreResult<()> {
        self.deduct_many(&[(name.to_string(), amount)])
    }

    /// Removes every `(name, amount)` pair, or none of them.
    ///
    /// All failing lines are reported, in input order. Amounts for the same
    /// item listed twice are summed before checking.
    pub fn deduct_many(&mut self, lines: &[(String, Decimal)]) -> CoreResult<()> {
        let shortages = self.shortages(lines);
        if !shortages.is_empty() {
            return Err(CoreError::InsufficientStock { shortages });
        }

        for (name, amount) in lines {
            if let Some(item) = self.items.get_mut(&key_of(name)) {
                item.quantity -= *amount;
            }
        }
        Ok(())
    }

    /// Lines of `lines` that the current stock cannot cover.
    pub fn shortages(&self, lines: &[(String, Decimal)]) -> Vec<Shortage> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for (name, amount) in lines {
            *totals.entry(key_of(name)).or_default() += *amount;
        }

        let mut seen = BTreeSet::new();
        let mut shortages = Vec::new();
        for (name, _) in lines {
            let key = key_of(name);
            if !seen.insert(key.clone()) {
                continue;
            }
            let required = totals[&key];
            match self.items.get(&key) {
                Some(item) if item.covers(required) => {}
                Some(item) => shortages.push(Shortage {
                    ingredient: item.name.clone(),
                    available: item.quantity,
                    required,
                }),
                None => shortages.push(Shortage {
                    ingredient: name.trim().to_string(),
                    available: Decimal::ZERO,
                    required,
                }),
            }
        }
        shortages
    }

    /// Items sorted by normalised name.
    pub fn items(&self) -> impl Iterator<Item = &StockItem> {
        self.items.values()
    }

    /// Items whose quantity is at or below `threshold`.
    pub fn low_stock(&self, threshold: Decimal) -> Vec<&StockItem> {
        self.items
            .values()
            .filter(|item| item.quantity <= threshold)
            .collect()
    }

    /// Value of the whole stock at current unit costs.
    pub fn total_value(&self) -> Money {
        self.items.values().map(StockItem::stock_value).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::validation::{MAX_AMOUNT, MAX_QUANTITY};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn ledger() -> StockLedger {
        let mut stock = StockLedger::new();
        stock
            .register_or_update("frango", dec!(160), "g", Money::from_cents(5))
            .unwrap();
        stock
            .register_or_update("queijo", dec!(2), "fatia", Money::from_cents(60))
            .unwrap();
        stock
    }

    fn quantity(stock: &StockLedger, name: &str) -> Decimal {
        stock.get(name).unwrap().quantity
    }

    #[test]
    fn test_register_creates_item() {
        let stock = ledger();
        let frango = stock.get("frango").unwrap();
        assert_eq!(frango.quantity, dec!(160));
        assert_eq!(frango.unit, "g");
        assert_eq!(frango.unit_cost, Money::from_cents(5));
        assert_eq!(stock.len(), 2);
    }

    #[test]
    fn test_register_replaces_instead_of_adding() {
        let mut stock = ledger();
        stock
            .register_or_update("Frango", dec!(40), "kg", Money::from_cents(4500))
            .unwrap();

        let frango = stock.get("frango").unwrap();
        assert_eq!(frango.quantity, dec!(40));
        assert_eq!(frango.unit, "kg");
        assert_eq!(frango.unit_cost, Money::from_cents(4500));
        assert_eq!(frango.name, "Frango");
        assert_eq!(stock.len(), 2);
    }

    #[test]
    fn test_register_defaults_unit() {
        let mut stock = StockLedger::new();
        let item = stock
            .register_or_update("ovo", dec!(12), "  ", Money::from_cents(80))
            .unwrap();
        assert_eq!(item.unit, DEFAULT_UNIT);
    }

    #[test]
    fn test_register_rejects_invalid_input() {
        let mut stock = StockLedger::new();
        let err = stock
            .register_or_update("ovo", dec!(-1), "un", Money::zero())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));

        let err = stock
            .register_or_update("ovo", dec!(1), "un", Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = stock
            .register_or_update("", dec!(1), "un", Money::zero())
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(stock.is_empty());
    }

    #[test]
    fn test_register_rejects_out_of_range_values() {
        let mut stock = ledger();

        let err = stock
            .register_or_update("sal", Decimal::MAX, "g", Money::from_cents(200))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { .. })
        ));

        let err = stock
            .register_or_update("frango", dec!(1), "g", Money::from_decimal(Decimal::MAX))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        // Nothing was stored or overwritten, and valuation still works.
        assert!(stock.get("sal").is_err());
        assert_eq!(quantity(&stock, "frango"), dec!(160));
        assert_eq!(stock.total_value(), Money::from_cents(920));
    }

    #[test]
    fn test_total_value_at_ceilings() {
        let mut stock = StockLedger::new();
        let max_quantity = Decimal::from(MAX_QUANTITY);
        let max_cost = Money::from_decimal(Decimal::from(MAX_AMOUNT));
        for name in ["sal", "açúcar", "farinha"] {
            stock
                .register_or_update(name, max_quantity, "g", max_cost)
                .unwrap();
        }
        assert_eq!(
            stock.total_value().amount(),
            Decimal::from(3 * MAX_QUANTITY * MAX_AMOUNT)
        );
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let stock = ledger();
        assert!(stock.get("FRANGO").is_ok());
        assert_eq!(
            stock.get("sal").unwrap_err(),
            CoreError::StockItemNotFound("sal".to_string())
        );
    }

    #[test]
    fn test_can_deduct() {
        let stock = ledger();
        assert!(stock.can_deduct("frango", dec!(160)));
        assert!(!stock.can_deduct("frango", dec!(160.5)));
        assert!(!stock.can_deduct("sal", dec!(0)));
    }

    #[test]
    fn test_deduct_single() {
        let mut stock = ledger();
        stock.deduct("frango", dec!(80)).unwrap();
        assert_eq!(quantity(&stock, "frango"), dec!(80));
    }

    #[test]
    fn test_deduct_to_exactly_zero() {
        let mut stock = ledger();
        stock.deduct("queijo", dec!(2)).unwrap();
        assert_eq!(quantity(&stock, "queijo"), dec!(0));
    }

    #[test]
    fn test_deduct_insufficient_leaves_item_untouched() {
        let mut stock = ledger();
        let err = stock.deduct("queijo", dec!(3)).unwrap_err();
        match err {
            CoreError::InsufficientStock { shortages } => {
                assert_eq!(shortages.len(), 1);
                assert_eq!(shortages[0].ingredient, "queijo");
                assert_eq!(shortages[0].shortfall(), dec!(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(quantity(&stock, "queijo"), dec!(2));
    }

    #[test]
    fn test_deduct_missing_item_is_insufficient_stock() {
        let mut stock = ledger();
        let err = stock.deduct("sal", dec!(1)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
    }

    #[test]
    fn test_deduct_many_is_all_or_nothing() {
        let mut stock = ledger();
        let lines = vec![
            ("frango".to_string(), dec!(80)),
            ("queijo".to_string(), dec!(5)),
        ];
        let err = stock.deduct_many(&lines).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert_eq!(quantity(&stock, "frango"), dec!(160));
        assert_eq!(quantity(&stock, "queijo"), dec!(2));
    }

    #[test]
    fn test_deduct_many_reports_all_shortages_in_order() {
        let mut stock = ledger();
        let lines = vec![
            ("queijo".to_string(), dec!(3)),
            ("frango".to_string(), dec!(80)),
            ("alface".to_string(), dec!(1)),
        ];
        let Err(CoreError::InsufficientStock { shortages }) = stock.deduct_many(&lines) else {
            panic!("expected insufficient stock");
        };
        let names: Vec<_> = shortages.iter().map(|s| s.ingredient.as_str()).collect();
        assert_eq!(names, vec!["queijo", "alface"]);
    }

    #[test]
    fn test_deduct_many_sums_repeated_lines() {
        let mut stock = ledger();
        let lines = vec![
            ("queijo".to_string(), dec!(1)),
            ("QUEIJO".to_string(), dec!(1.5)),
        ];
        let Err(CoreError::InsufficientStock { shortages }) = stock.deduct_many(&lines) else {
            panic!("expected insufficient stock");
        };
        assert_eq!(shortages.len(), 1);
        assert_eq!(shortages[0].required, dec!(2.5));
        assert_eq!(quantity(&stock, "queijo"), dec!(2));
    }

    #[test]
    fn test_low_stock_and_total_value() {
        let stock = ledger();
        let low: Vec<_> = stock.low_stock(dec!(5)).iter().map(|i| i.name.clone()).collect();
        assert_eq!(low, vec!["queijo".to_string()]);
        // 160 × 0.05 + 2 × 0.60
        assert_eq!(stock.total_value(), Money::from_cents(920));
    }

    #[test]
    fn test_items_sorted_by_name() {
        let mut stock = ledger();
        stock
            .register_or_update("Alface", dec!(10), "folha", Money::from_cents(10))
            .unwrap();
        let names: Vec<_> = stock.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alface", "frango", "queijo"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: no sequence of deductions drives any quantity below zero,
        /// and a rejected deduction changes nothing.
        #[test]
        fn quantities_never_go_negative(
            start in 0u32..500,
            amounts in prop::collection::vec(0u32..200, 1..30)
        ) {
            let mut stock = StockLedger::new();
            stock
                .register_or_update("frango", Decimal::from(start), "g", Money::from_cents(5))
                .unwrap();

            for amount in amounts {
                let before = stock.get("frango").unwrap().quantity;
                let result = stock.deduct("frango", Decimal::from(amount));
                let after = stock.get("frango").unwrap().quantity;

                prop_assert!(after >= Decimal::ZERO);
                match result {
                    Ok(()) => prop_assert_eq!(after, before - Decimal::from(amount)),
                    Err(_) => prop_assert_eq!(after, before),
                }
            }
        }
    }
}
