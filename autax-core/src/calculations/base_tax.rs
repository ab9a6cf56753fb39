//! Progressive income tax from a bracket schedule, plus bracket
//! introspection (marginal rate, distance to the next threshold).
//!
//! Each bracket carries the cumulative tax owed at its lower bound, so the
//! tax at any income is `base_tax + (income - min_income) * tax_rate` for
//! the bracket containing that income.
//!
//! Lookups never fail: an income that matches no bracket (which can only
//! happen with a mis-authored schedule, since validated schedules cover
//! `[0, ∞)`) falls back to the top bracket instead of panicking.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{TaxBracket, TaxBracketInfo};

/// Index of the bracket containing `income`, with top-bracket fallback.
///
/// Returns `None` only for an empty schedule.
fn bracket_index(
    brackets: &[TaxBracket],
    income: Decimal,
) -> Option<usize> {
    if brackets.is_empty() {
        return None;
    }
    if income <= brackets[0].min_income {
        return Some(0);
    }
    match brackets.iter().position(|b| b.contains(income)) {
        Some(index) => Some(index),
        None => {
            warn!(
                income = %income,
                "no bracket contains income; falling back to the top bracket"
            );
            Some(brackets.len() - 1)
        }
    }
}

/// Calculates progressive income tax on `taxable_income`.
///
/// Returns zero for zero or negative income and for an empty schedule.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use autax_core::TaxBracket;
/// use autax_core::calculations::base_tax::calculate_base_tax;
///
/// let brackets = vec![
///     TaxBracket {
///         min_income: dec!(0),
///         max_income: Some(dec!(18200)),
///         tax_rate: dec!(0),
///         base_tax: dec!(0),
///     },
///     TaxBracket {
///         min_income: dec!(18200),
///         max_income: None,
///         tax_rate: dec!(0.19),
///         base_tax: dec!(0),
///     },
/// ];
///
/// assert_eq!(calculate_base_tax(&brackets, dec!(30000)), dec!(2242.00));
/// ```
pub fn calculate_base_tax(
    brackets: &[TaxBracket],
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let Some(index) = bracket_index(brackets, taxable_income) else {
        return Decimal::ZERO;
    };
    let bracket = &brackets[index];

    if taxable_income <= bracket.min_income {
        return bracket.base_tax;
    }

    let marginal_income = taxable_income - bracket.min_income;
    round_half_up(bracket.base_tax + marginal_income * bracket.tax_rate)
}

/// Rate applied to the next dollar of income.
///
/// Returns zero for an empty schedule.
pub fn marginal_rate(
    brackets: &[TaxBracket],
    income: Decimal,
) -> Decimal {
    match bracket_index(brackets, income) {
        Some(index) => brackets[index].tax_rate,
        None => Decimal::ZERO,
    }
}

/// Position of `income` within the schedule.
///
/// In the top (unbounded) bracket both `next_threshold` and
/// `distance_to_next` are zero, signalling "no next bracket".
pub fn bracket_info(
    brackets: &[TaxBracket],
    income: Decimal,
) -> TaxBracketInfo {
    let Some(index) = bracket_index(brackets, income) else {
        return TaxBracketInfo {
            bracket_index: 0,
            current_bracket_max: None,
            next_threshold: Decimal::ZERO,
            distance_to_next: Decimal::ZERO,
        };
    };

    let bracket = &brackets[index];
    let (next_threshold, distance_to_next) = match bracket.max_income {
        Some(max) => (max, round_half_up(max - income)),
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    TaxBracketInfo {
        bracket_index: index,
        current_bracket_max: bracket.max_income,
        next_threshold,
        distance_to_next,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn resident_brackets() -> Vec<TaxBracket> {
        vec![
            TaxBracket {
                min_income: dec!(0),
                max_income: Some(dec!(18200)),
                tax_rate: dec!(0),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(18200),
                max_income: Some(dec!(45000)),
                tax_rate: dec!(0.19),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(45000),
                max_income: Some(dec!(120000)),
                tax_rate: dec!(0.325),
                base_tax: dec!(5092),
            },
            TaxBracket {
                min_income: dec!(120000),
                max_income: Some(dec!(180000)),
                tax_rate: dec!(0.37),
                base_tax: dec!(29467),
            },
            TaxBracket {
                min_income: dec!(180000),
                max_income: None,
                tax_rate: dec!(0.45),
                base_tax: dec!(51667),
            },
        ]
    }

    // =========================================================================
    // calculate_base_tax tests
    // =========================================================================

    #[test]
    fn base_tax_is_zero_at_zero_income() {
        let result = calculate_base_tax(&resident_brackets(), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn base_tax_is_zero_inside_tax_free_threshold() {
        let result = calculate_base_tax(&resident_brackets(), dec!(18200));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn base_tax_second_bracket() {
        let result = calculate_base_tax(&resident_brackets(), dec!(30000));

        // (30000 - 18200) * 0.19 = 2242
        assert_eq!(result, dec!(2242.00));
    }

    #[test]
    fn base_tax_third_bracket() {
        let result = calculate_base_tax(&resident_brackets(), dec!(80000));

        // 5092 + (80000 - 45000) * 0.325 = 16467
        assert_eq!(result, dec!(16467.00));
    }

    #[test]
    fn base_tax_top_bracket() {
        let result = calculate_base_tax(&resident_brackets(), dec!(250000));

        // 51667 + (250000 - 180000) * 0.45 = 83167
        assert_eq!(result, dec!(83167.00));
    }

    #[test]
    fn base_tax_continuous_at_bracket_boundary() {
        let brackets = resident_brackets();

        let below = calculate_base_tax(&brackets, dec!(45000));
        let above = calculate_base_tax(&brackets, dec!(45000.01));

        // (45000 - 18200) * 0.19 = 5092, matching the next bracket's base.
        assert_eq!(below, dec!(5092.00));
        assert_eq!(above, dec!(5092.00));
    }

    #[test]
    fn base_tax_is_zero_for_empty_schedule() {
        let result = calculate_base_tax(&[], dec!(50000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn base_tax_falls_back_to_top_bracket_on_schedule_gap() {
        // Mis-authored schedule with a hole between 18200 and 20000.
        let brackets = vec![
            TaxBracket {
                min_income: dec!(0),
                max_income: Some(dec!(18200)),
                tax_rate: dec!(0),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(20000),
                max_income: None,
                tax_rate: dec!(0.19),
                base_tax: dec!(0),
            },
        ];

        let result = calculate_base_tax(&brackets, dec!(19000));

        // Falls into the top bracket: (19000 - 20000) is negative, so the
        // threshold guard returns that bracket's base tax.
        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // marginal_rate tests
    // =========================================================================

    #[test]
    fn marginal_rate_zero_income_uses_first_bracket() {
        let result = marginal_rate(&resident_brackets(), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn marginal_rate_middle_bracket() {
        let result = marginal_rate(&resident_brackets(), dec!(80000));

        assert_eq!(result, dec!(0.325));
    }

    #[test]
    fn marginal_rate_top_bracket() {
        let result = marginal_rate(&resident_brackets(), dec!(500000));

        assert_eq!(result, dec!(0.45));
    }

    // =========================================================================
    // bracket_info tests
    // =========================================================================

    #[test]
    fn bracket_info_reports_distance_to_next_threshold() {
        let info = bracket_info(&resident_brackets(), dec!(80000));

        assert_eq!(
            info,
            TaxBracketInfo {
                bracket_index: 2,
                current_bracket_max: Some(dec!(120000)),
                next_threshold: dec!(120000),
                distance_to_next: dec!(40000.00),
            }
        );
    }

    #[test]
    fn bracket_info_top_bracket_signals_no_next() {
        let info = bracket_info(&resident_brackets(), dec!(500000));

        assert_eq!(
            info,
            TaxBracketInfo {
                bracket_index: 4,
                current_bracket_max: None,
                next_threshold: dec!(0),
                distance_to_next: dec!(0),
            }
        );
    }
}
