//! Low income tax offset (LITO).
//!
//! The offset is granted in full up to a threshold, then phased out at a
//! cents-per-dollar rate until it reaches the configured floor. It reduces
//! tax payable but can never push total tax below zero; that clamp lives in
//! the orchestrator.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::LitoParams;

/// Calculates the low income tax offset for an individual's income.
///
/// At or below `full_offset_threshold` the full `max_offset` applies; at or
/// above `phase_out_end` the offset is nil. In between, the offset reduces
/// by `phase_out_rate` per dollar over `phase_out_start`, clamped to
/// `min_offset`. The phase-out counts dollars starting at one past the
/// start, reproducing the published calculator's arithmetic exactly.
///
/// Residency gating (residents only) is the orchestrator's job.
pub fn calculate_low_income_offset(
    params: &LitoParams,
    income: Decimal,
) -> Decimal {
    if income <= params.full_offset_threshold {
        return params.max_offset;
    }
    if income >= params.phase_out_end {
        return Decimal::ZERO;
    }

    let reduction = (income - params.phase_out_start + Decimal::ONE) * params.phase_out_rate;
    round_half_up(max(params.min_offset, params.max_offset - reduction))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn lito_params() -> LitoParams {
        LitoParams {
            max_offset: dec!(700),
            full_offset_threshold: dec!(37500),
            phase_out_start: dec!(37500),
            phase_out_end: dec!(66667),
            phase_out_rate: dec!(0.05),
            min_offset: dec!(0),
        }
    }

    #[test]
    fn full_offset_below_threshold() {
        let result = calculate_low_income_offset(&lito_params(), dec!(35000));

        assert_eq!(result, dec!(700));
    }

    #[test]
    fn full_offset_at_threshold() {
        let result = calculate_low_income_offset(&lito_params(), dec!(37500));

        assert_eq!(result, dec!(700));
    }

    #[test]
    fn offset_phases_out_above_threshold() {
        let result = calculate_low_income_offset(&lito_params(), dec!(40000));

        // 700 - (40000 - 37500 + 1) * 0.05 = 700 - 125.05 = 574.95
        assert_eq!(result, dec!(574.95));
    }

    #[test]
    fn offset_clamps_to_floor_late_in_phase_out() {
        // The 5c/$ rate exhausts the offset at 51,500, well before
        // phase_out_end; the clamp keeps it at the floor.
        let result = calculate_low_income_offset(&lito_params(), dec!(60000));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn offset_is_zero_at_phase_out_end() {
        let result = calculate_low_income_offset(&lito_params(), dec!(66667));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn offset_is_zero_above_phase_out_end() {
        let result = calculate_low_income_offset(&lito_params(), dec!(150000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn zero_income_gets_full_offset() {
        let result = calculate_low_income_offset(&lito_params(), dec!(0));

        assert_eq!(result, dec!(700));
    }
}
