//! # Customer Commands

use tracing::{debug, info};

use super::checked;
use crate::error::CliResult;
use lanchonete_core::{Customer, Stall};

/// Registers a customer or updates their contact.
pub fn register_customer(stall: &mut Stall, name: &str, contact: &str) -> CliResult<Customer> {
    debug!(name, "register_customer command");

    let customer = checked("register_customer", stall.register_customer(name, contact))?.clone();

    info!(
        customer = %customer.name,
        has_contact = !customer.contact.is_empty(),
        total = stall.customers().len(),
        "customer registered"
    );
    Ok(customer)
}
