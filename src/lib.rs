//! # godown
//!
//! Billing and stock rules for a fireworks-distribution back office:
//! cart totals with GST, tax bills and bills of supply, godown stock,
//! delivery challans, customer ledgers, and spreadsheet export.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Form input arrives as loosely typed text and is coerced, never rejected;
//! see [`core::LenientNumber`].
//!
//! ## Quick Start
//!
//! ```rust
//! use godown::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItemBuilder::new("p-101", "Flower Pot Deluxe", 2, 12, dec!(100)).build(),
//! ];
//! let charges = ChargeConfig {
//!     additional_discount_percent: dec!(5),
//!     apply_processing_fee: true,
//!     tax_mode: TaxMode::CgstSgst,
//!     ..ChargeConfig::default()
//! };
//!
//! let totals = calculate_totals(&items, &charges);
//! assert_eq!(totals.subtotal, dec!(2400.00));
//! assert_eq!(totals.cgst, dec!(211.36));
//! assert_eq!(totals.grand_total, dec!(2771));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Cart totals, bookings, GSTIN validation, numbering, text conventions |
//! | `stock` | Godown stock book, delivery challans, dispatch log |
//! | `ledger` | Customer ledgers, payments, balances |
//! | `export` | Multi-sheet spreadsheet export (CSV per sheet) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "stock")]
pub mod stock;

#[cfg(feature = "ledger")]
pub mod ledger;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
