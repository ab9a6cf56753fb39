//! Federal tax orchestration: composes the component calculators into a
//! full [`TaxCalculationResult`].
//!
//! Composition order matters and follows the published calculator:
//!
//! 1. Taxable income = gross − salary sacrifice − work deductions (≥ 0)
//! 2. Base tax from the residency bracket schedule
//! 3. Medicare levy (residents only)
//! 4. Medicare levy surcharge (residents only)
//! 5. Low income tax offset (residents only)
//! 6. HELP repayment (residents and non-residents)
//! 7. Total tax = base + levies + HELP − offset, floored at zero
//! 8. Super contributions tax on voluntary + salary-sacrificed amounts
//! 9. Net income, effective and marginal rates
//! 10. Take-home pay at four periodicities
//! 11. Bracket introspection and super tax saving
//!
//! The offset is subtracted before the zero floor, so an offset larger than
//! the combined levies can never produce negative tax.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::{base_tax, help, medicare, offsets, superannuation};
use crate::models::{
    TakeHomePay, TaxBracket, TaxCalculationInput, TaxCalculationResult, TaxYearConstants,
};

/// Errors that can occur during a federal tax calculation.
///
/// Given a constants table that passes
/// [`TaxYearConstants::validate`](crate::models::TaxYearConstants::validate),
/// the calculation is total and never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The bracket schedule for the selected residency has no entries.
    #[error("no tax brackets for {residency} schedule")]
    EmptyBracketTable { residency: &'static str },
}

/// Scale applied to computed rates (effective/marginal are quotients, not
/// money, so they keep four decimal places).
const RATE_DECIMALS: u32 = 4;

fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(
        RATE_DECIMALS,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Federal tax calculator for one financial year.
///
/// Borrows an immutable [`TaxYearConstants`] table; concurrent calculations
/// over the same table are safe because nothing here mutates shared state.
#[derive(Debug, Clone)]
pub struct FederalTaxCalculator<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> FederalTaxCalculator<'a> {
    /// Creates a calculator over the given year's constants.
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    /// The constants table this calculator reads from.
    pub fn constants(&self) -> &TaxYearConstants {
        self.constants
    }

    /// Runs the full calculation for one input record.
    ///
    /// Inputs are assumed to already satisfy the invariants checked by
    /// [`validate_input`](crate::validation::validate_input); the calculator
    /// does not re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::EmptyBracketTable`] if the bracket
    /// schedule for the input's residency is empty.
    pub fn calculate(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<TaxCalculationResult, CalculationError> {
        let brackets = self.schedule_for(input)?;

        let taxable_income = self.taxable_income(input);

        let base_tax = base_tax::calculate_base_tax(brackets, taxable_income);

        let is_resident = input.residency.is_resident();
        let medicare_levy = if is_resident {
            medicare::calculate_medicare_levy(
                &self.constants.medicare,
                taxable_income,
                input.family_status,
                input.number_of_dependents,
                input.is_senior,
            )
        } else {
            Decimal::ZERO
        };
        let medicare_levy_surcharge = if is_resident {
            medicare::calculate_levy_surcharge(
                &self.constants.surcharge_tiers,
                taxable_income,
                input.has_private_health_insurance,
            )
        } else {
            Decimal::ZERO
        };
        let low_income_tax_offset = if is_resident {
            offsets::calculate_low_income_offset(&self.constants.lito, taxable_income)
        } else {
            Decimal::ZERO
        };

        // HELP debt follows the loan, not residency.
        let help_repayment =
            help::calculate_help_repayment(&self.constants.help_schedule, taxable_income, input.help_debt);

        let total_tax = self.total_tax(
            base_tax,
            medicare_levy,
            medicare_levy_surcharge,
            low_income_tax_offset,
            help_repayment,
        );

        let total_super_contribution = input.super_contribution + input.salary_sacrifice;
        let super_contributions_tax =
            superannuation::contribution_tax(&self.constants.superannuation, total_super_contribution);
        let total_tax_with_super = round_half_up(total_tax + super_contributions_tax);

        let net_income = round_half_up(input.annual_income - total_tax - total_super_contribution);

        let effective_rate = self.effective_rate(total_tax, taxable_income);
        let marginal_rate = base_tax::marginal_rate(brackets, taxable_income);

        let take_home = self.take_home(net_income);
        let bracket_info = base_tax::bracket_info(brackets, taxable_income);
        let super_tax_saving = superannuation::tax_benefit(
            &self.constants.superannuation,
            total_super_contribution,
            marginal_rate,
        );

        Ok(TaxCalculationResult {
            gross_income: input.annual_income,
            taxable_income,
            base_tax,
            medicare_levy,
            medicare_levy_surcharge,
            low_income_tax_offset,
            help_repayment,
            total_tax,
            total_super_contribution,
            super_contributions_tax,
            total_tax_with_super,
            net_income,
            effective_rate,
            marginal_rate,
            take_home,
            bracket_info,
            super_tax_saving,
        })
    }

    fn schedule_for(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<&[TaxBracket], CalculationError> {
        let (brackets, residency) = if input.residency.is_resident() {
            (&self.constants.resident_brackets, "resident")
        } else {
            (&self.constants.non_resident_brackets, "non-resident")
        };
        if brackets.is_empty() {
            return Err(CalculationError::EmptyBracketTable { residency });
        }
        Ok(brackets)
    }

    /// Gross income less pre-tax super and work deductions, floored at zero.
    fn taxable_income(
        &self,
        input: &TaxCalculationInput,
    ) -> Decimal {
        max(
            round_half_up(input.annual_income - input.salary_sacrifice - input.work_deductions),
            Decimal::ZERO,
        )
    }

    /// Base tax plus levies plus HELP, less the offset, floored at zero.
    fn total_tax(
        &self,
        base_tax: Decimal,
        medicare_levy: Decimal,
        surcharge: Decimal,
        offset: Decimal,
        help_repayment: Decimal,
    ) -> Decimal {
        max(
            round_half_up(base_tax + medicare_levy + surcharge - offset + help_repayment),
            Decimal::ZERO,
        )
    }

    fn effective_rate(
        &self,
        total_tax: Decimal,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_rate(total_tax / taxable_income)
    }

    fn take_home(
        &self,
        net_income: Decimal,
    ) -> TakeHomePay {
        TakeHomePay {
            monthly: round_half_up(net_income / Decimal::from(12)),
            fortnightly: round_half_up(net_income / Decimal::from(26)),
            weekly: round_half_up(net_income / Decimal::from(52)),
            daily: round_half_up(net_income / Decimal::from(365)),
        }
    }
}
