//! # Menu Commands
//!
//! Typed wrappers around [`Stall`](lanchonete_core::Stall) operations. Each
//! command logs its entry at `debug`, its outcome at `info`, and failures at
//! `warn` with the error code, then hands a plain response back to the menu.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports, failure logging)
//! ├── stock.rs     ◄─── Register stock, stock listing
//! ├── recipe.rs    ◄─── Register recipe, production estimate
//! ├── customer.rs  ◄─── Register customer
//! ├── sale.rs      ◄─── Record sale, history
//! └── closing.rs   ◄─── Preview and close the register
//! ```

pub mod closing;
pub mod customer;
pub mod recipe;
pub mod sale;
pub mod stock;

use tracing::warn;

use crate::error::{CliError, CliResult};
use lanchonete_core::CoreResult;

/// Converts a core result, logging the failure under `command`.
pub(crate) fn checked<T>(command: &'static str, result: CoreResult<T>) -> CliResult<T> {
    result.map_err(|err| {
        let err = CliError::from(err);
        warn!(command, code = ?err.code, error = %err.message, "command failed");
        err
    })
}
