//! # Sale Commands

use serde::Serialize;
use tracing::{debug, info};

use super::checked;
use crate::error::CliResult;
use lanchonete_core::{Money, NewSale, Sale, Stall};

/// A recorded sale, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleReceipt {
    pub sequence: u64,
    pub recipe: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub revenue: Money,
    pub customer: Option<String>,
    /// Time of the sale, `HH:MM:SS` UTC.
    pub time: String,
}

impl From<&Sale> for SaleReceipt {
    fn from(sale: &Sale) -> Self {
        SaleReceipt {
            sequence: sale.sequence,
            recipe: sale.recipe_name.clone(),
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            revenue: sale.revenue(),
            customer: sale.customer.clone(),
            time: sale.recorded_at.format("%H:%M:%S").to_string(),
        }
    }
}

/// Records a sale and deducts its ingredients.
pub fn record_sale(stall: &mut Stall, new_sale: NewSale) -> CliResult<SaleReceipt> {
    debug!(
        recipe = %new_sale.recipe_name,
        quantity = new_sale.quantity,
        customer = ?new_sale.customer_name,
        "record_sale command"
    );

    let sale = checked("record_sale", stall.record_sale(new_sale))?;

    info!(
        sale_id = %sale.id,
        sequence = sale.sequence,
        recipe = %sale.recipe_name,
        quantity = sale.quantity,
        revenue = %sale.revenue(),
        "sale recorded"
    );
    Ok(SaleReceipt::from(sale))
}

/// Every sale, oldest first.
pub fn history(stall: &Stall) -> Vec<SaleReceipt> {
    debug!(count = stall.history().len(), "history command");
    stall.history().iter().map(SaleReceipt::from).collect()
}
