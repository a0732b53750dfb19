//! # Closing Commands
//!
//! Both commands compute a fresh [`ClosingReport`]; neither changes the
//! stall, so a preview can be taken as often as wanted before the final
//! close.

use tracing::{debug, info};

use super::checked;
use crate::error::CliResult;
use lanchonete_core::{ClosingReport, Expense, Stall};

/// Running totals with no expenses.
pub fn preview(stall: &Stall) -> CliResult<ClosingReport> {
    debug!(sales = stall.history().len(), "preview_closing command");

    let report = checked("preview_closing", stall.close(&[]))?;
    info!(
        sales = report.sale_count,
        revenue = %report.total_revenue,
        gross_profit = %report.gross_profit,
        "closing preview"
    );
    Ok(report)
}

/// Final closing with the period's expenses.
pub fn close_register(stall: &Stall, expenses: &[Expense]) -> CliResult<ClosingReport> {
    debug!(
        sales = stall.history().len(),
        expenses = expenses.len(),
        "close_register command"
    );

    let report = checked("close_register", stall.close(expenses))?;
    info!(
        sales = report.sale_count,
        units = report.units_sold,
        revenue = %report.total_revenue,
        ingredient_cost = %report.total_ingredient_cost,
        expenses = %report.total_expenses,
        net_profit = %report.net_profit,
        "register closed"
    );
    Ok(report)
}
