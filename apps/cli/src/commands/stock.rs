//! # Stock Commands

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use super::checked;
use crate::error::CliResult;
use lanchonete_core::{Money, Stall, StockItem};

/// Arguments for [`register_stock`].
#[derive(Debug, Clone)]
pub struct RegisterStock {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_cost: Money,
}

/// One row of the stock listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLine {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_cost: Money,
    pub value: Money,
    /// At or below the configured low-stock threshold.
    pub low: bool,
}

impl From<&StockItem> for StockLine {
    fn from(item: &StockItem) -> Self {
        StockLine {
            name: item.name.clone(),
            quantity: item.quantity.normalize(),
            unit: item.unit.clone(),
            unit_cost: item.unit_cost,
            value: item.stock_value(),
            low: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    pub lines: Vec<StockLine>,
    pub total_value: Money,
    pub low_count: usize,
}

/// Creates or overwrites a stock item.
pub fn register_stock(stall: &mut Stall, args: RegisterStock) -> CliResult<StockLine> {
    debug!(name = %args.name, "register_stock command");

    let item = checked(
        "register_stock",
        stall.register_stock(&args.name, args.quantity, &args.unit, args.unit_cost),
    )?;

    info!(
        name = %item.name,
        quantity = %item.quantity,
        unit = %item.unit,
        unit_cost = %item.unit_cost,
        "stock item registered"
    );
    Ok(StockLine::from(item))
}

/// Every item sorted by name, flagging those at or below `low_threshold`.
pub fn stock_report(stall: &Stall, low_threshold: Decimal) -> StockReport {
    debug!(%low_threshold, "stock_report command");

    let low: HashSet<&str> = stall
        .stock()
        .low_stock(low_threshold)
        .into_iter()
        .map(|item| item.name.as_str())
        .collect();

    let lines: Vec<StockLine> = stall
        .stock()
        .items()
        .map(|item| StockLine {
            low: low.contains(item.name.as_str()),
            ..StockLine::from(item)
        })
        .collect();

    StockReport {
        lines,
        total_value: stall.stock().total_value(),
        low_count: low.len(),
    }
}
