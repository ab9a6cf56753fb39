use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FamilyStatus, Residency};

/// Input to a federal tax calculation, built fresh per request.
///
/// All monetary fields must be non-negative; run
/// [`validate_input`](crate::validation::validate_input) before handing the
/// input to the calculator. Optional attributes carry explicit defaults via
/// [`TaxCalculationInput::new`] rather than implicit absent-vs-false
/// ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    /// Gross annual income before deductions and salary sacrifice.
    pub annual_income: Decimal,

    /// Residency status; drives schedule selection and levy/offset gating.
    pub residency: Residency,

    /// Exempts the Medicare levy surcharge when `true`. Default `false`.
    pub has_private_health_insurance: bool,

    /// Medicare levy threshold family. Default [`FamilyStatus::Single`].
    pub family_status: FamilyStatus,

    /// Dependent children; raises the family Medicare thresholds. Default 0.
    pub number_of_dependents: u32,

    /// Selects the senior/pensioner Medicare thresholds. Default `false`.
    pub is_senior: bool,

    /// Voluntary (post-tax pool) concessional super contribution. Default 0.
    pub super_contribution: Decimal,

    /// Pre-tax salary diverted to super; reduces taxable income. Default 0.
    pub salary_sacrifice: Decimal,

    /// Outstanding HELP/HECS debt balance. Default 0.
    pub help_debt: Decimal,

    /// Work-related deductions; reduce taxable income. Default 0.
    pub work_deductions: Decimal,
}

impl TaxCalculationInput {
    /// Creates an input with the documented defaults for every optional
    /// attribute: no insurance, single, no dependents, not senior, and all
    /// other amounts zero.
    pub fn new(annual_income: Decimal, residency: Residency) -> Self {
        Self {
            annual_income,
            residency,
            has_private_health_insurance: false,
            family_status: FamilyStatus::Single,
            number_of_dependents: 0,
            is_senior: false,
            super_contribution: Decimal::ZERO,
            salary_sacrifice: Decimal::ZERO,
            help_debt: Decimal::ZERO,
            work_deductions: Decimal::ZERO,
        }
    }
}
