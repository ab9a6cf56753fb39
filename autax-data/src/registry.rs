use std::collections::HashMap;

use autax_core::TaxYearConstants;

use crate::tables;

/// Registry of constant tables keyed by tax year (the calendar year the
/// financial year ends in).
///
/// Typical lifetime:
/// 1. Create with [`ConstantsRegistry::builtin`] at process start.
/// 2. Optionally overlay CSV schedules via
///    [`ScheduleLoader`](crate::ScheduleLoader).
/// 3. Hand `get(year)` results to
///    [`FederalTaxCalculator`](autax_core::FederalTaxCalculator) by
///    reference; nothing mutates the tables after startup.
#[derive(Debug, Clone, Default)]
pub struct ConstantsRegistry {
    years: HashMap<i32, TaxYearConstants>,
}

impl ConstantsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with every built-in financial year.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(tables::financial_year_2024_25());
        registry
    }

    /// Registers a year's constants, replacing any existing entry for the
    /// same `tax_year`.
    pub fn insert(&mut self, constants: TaxYearConstants) {
        self.years.insert(constants.tax_year, constants);
    }

    /// Constants for `year`, if registered.
    pub fn get(&self, year: i32) -> Option<&TaxYearConstants> {
        self.years.get(&year)
    }

    /// Mutable access for loaders that overlay bracket schedules.
    pub fn get_mut(&mut self, year: i32) -> Option<&mut TaxYearConstants> {
        self.years.get_mut(&year)
    }

    /// Every registered year, sorted ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<_> = self.years.keys().copied().collect();
        years.sort_unstable();
        years
    }
}
