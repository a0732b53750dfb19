//! # lanchonete-core: Accounting Engine for a Snack Stall
//!
//! Stock of raw ingredients, recipes that consume them, sales that deduct
//! them, and the cash closing that turns it all into profit. Pure domain
//! logic with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lanchonete Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (interactive menu)                  │   │
//! │  │    prompt ──► command ──► Stall ──► formatted output            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ lanchonete-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   stock   │  │  recipe   │  │   sales   │  │   cash    │  │   │
//! │  │   │  Ledger   │◄─│   Book    │◄─│  Ledger   │─►│  close()  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │         ▲              ▲                                        │   │
//! │  │         └── planner ───┘        customer      money  validation │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • TYPED ERRORS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stall`] - The context object owning every ledger
//! - [`stock`] - Stock ledger with all-or-nothing deduction
//! - [`recipe`] - Recipe book and the default sandwich
//! - [`planner`] - Production capacity and bottlenecks
//! - [`sales`] - Append-only sales history
//! - [`customer`] - Customer registry
//! - [`cash`] - Cash closing and recipe cost
//! - [`types`] - Domain records
//! - [`money`] - Exact decimal money
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use lanchonete_core::{Money, NewSale, Stall};
//! use rust_decimal::Decimal;
//!
//! let mut stall = Stall::with_default_recipe();
//! stall.register_stock("frango", Decimal::from(160), "g", Money::from_cents(5)).unwrap();
//! for name in ["presunto", "queijo", "hambúrguer", "ovo", "alface", "tomate"] {
//!     stall.register_stock(name, Decimal::from(2), "un", Money::from_cents(50)).unwrap();
//! }
//!
//! assert_eq!(stall.max_producible("Sanduíche de Frango").unwrap(), 2);
//!
//! stall
//!     .record_sale(NewSale::new("Sanduíche de Frango", 2, Money::from_cents(1500)))
//!     .unwrap();
//! let report = stall.close(&[]).unwrap();
//! assert_eq!(report.total_revenue, Money::from_cents(3000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cash;
pub mod customer;
pub mod error;
pub mod money;
pub mod planner;
pub mod recipe;
pub mod sales;
pub mod stall;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, Shortage, ValidationError};
pub use money::Money;
pub use planner::ProductionEstimate;
pub use recipe::DEFAULT_RECIPE_NAME;
pub use sales::NewSale;
pub use stall::Stall;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum units in a single sale.
///
/// Catches typos like 1000 for 10 before they drain the stock.
pub const MAX_SALE_QUANTITY: u32 = 999;
