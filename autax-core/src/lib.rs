//! Australian personal income tax calculation engine.
//!
//! A pure, synchronous library that computes income tax, Medicare levy,
//! Medicare levy surcharge, the low income tax offset, HELP/HECS repayments
//! and superannuation tax effects from a plain input record and an immutable
//! per-financial-year constants table. No I/O, no storage, no globals.

pub mod calculations;
pub mod models;
pub mod validation;

pub use calculations::{CalculationError, FederalTaxCalculator};
pub use models::*;
pub use validation::{ValidationError, validate_input};
