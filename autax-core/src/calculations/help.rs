//! HELP/HECS compulsory repayment.
//!
//! Repayment is a flat percentage of income set by the band containing that
//! income, clamped to the remaining debt balance. The repayment is tied to
//! the loan, not to residency, so the orchestrator applies it to residents
//! and non-residents alike.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::HelpBracket;

/// Calculates the compulsory HELP repayment for the year.
///
/// Returns zero when there is no debt or no income. Otherwise the rate of
/// the band containing `income` applies to the whole income, and the result
/// is capped at `help_debt` — a repayment can never exceed the balance owed.
pub fn calculate_help_repayment(
    schedule: &[HelpBracket],
    income: Decimal,
    help_debt: Decimal,
) -> Decimal {
    if help_debt <= Decimal::ZERO || income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let band = schedule
        .iter()
        .find(|b| income > b.min_income && b.max_income.is_none_or(|max| income <= max))
        .or_else(|| {
            if !schedule.is_empty() {
                warn!(income = %income, "no HELP band contains income; using the top band");
            }
            schedule.last()
        });

    match band {
        // Round before clamping: rounding a clamped value could push a
        // sub-cent balance past itself, and the repayment must never
        // exceed the debt.
        Some(band) => round_half_up(income * band.rate).min(help_debt),
        None => Decimal::ZERO,
    }
}
