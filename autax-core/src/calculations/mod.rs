//! Tax component calculators and the federal orchestration.
//!
//! Each component (base tax, Medicare levy and surcharge, low income tax
//! offset, HELP repayment, superannuation) is a pure function over the
//! relevant slice of [`TaxYearConstants`](crate::models::TaxYearConstants);
//! [`FederalTaxCalculator`] composes them into a full result.

pub mod base_tax;
pub mod common;
pub mod federal;
pub mod help;
pub mod medicare;
pub mod offsets;
pub mod superannuation;

pub use federal::{CalculationError, FederalTaxCalculator};
