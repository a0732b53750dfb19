//! # Customer Directory
//!
//! Name/contact registry. Sales reference customers by name; nothing here is
//! created implicitly by a sale.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{key_of, Customer};
use crate::validation::validate_name;

#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: BTreeMap<String, Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer, replacing the contact of an existing one.
    pub fn register(&mut self, name: &str, contact: &str) -> CoreResult<&Customer> {
        validate_name("customer name", name)?;

        let key = key_of(name);
        self.customers.insert(
            key.clone(),
            Customer {
                name: name.trim().to_string(),
                contact: contact.trim().to_string(),
            },
        );
        Ok(&self.customers[&key])
    }

    pub fn find(&self, name: &str) -> CoreResult<&Customer> {
        self.customers
            .get(&key_of(name))
            .ok_or_else(|| CoreError::CustomerNotFound(name.trim().to_string()))
    }

    /// Customers sorted by normalised name.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
