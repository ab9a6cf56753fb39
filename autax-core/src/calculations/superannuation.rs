//! Superannuation tax effects.
//!
//! Concessional contributions are taxed at a flat rate inside the fund
//! instead of at the contributor's marginal rate; the difference is the tax
//! benefit of contributing. Contribution caps are carried in
//! [`SuperannuationParams`](crate::models::SuperannuationParams) but not
//! enforced here — excess-contributions tax is not modelled.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::SuperannuationParams;

/// Flat contributions tax charged inside the fund.
pub fn contribution_tax(
    params: &SuperannuationParams,
    total_contribution: Decimal,
) -> Decimal {
    if total_contribution <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(total_contribution * params.contribution_tax_rate)
}

/// Tax saved by diverting `contribution` into super instead of paying the
/// marginal rate on it.
///
/// Returns zero when the marginal rate is at or below the contributions tax
/// rate — the benefit is never negative.
pub fn tax_benefit(
    params: &SuperannuationParams,
    contribution: Decimal,
    marginal_rate: Decimal,
) -> Decimal {
    if contribution <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let rate_advantage = max(Decimal::ZERO, marginal_rate - params.contribution_tax_rate);
    round_half_up(contribution * rate_advantage)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn super_params() -> SuperannuationParams {
        SuperannuationParams {
            contribution_tax_rate: dec!(0.15),
            concessional_cap: dec!(27500),
            non_concessional_cap: dec!(110000),
        }
    }

    #[test]
    fn contribution_tax_applies_flat_rate() {
        let result = contribution_tax(&super_params(), dec!(10000));

        assert_eq!(result, dec!(1500.00));
    }

    #[test]
    fn contribution_tax_is_zero_without_contribution() {
        let result = contribution_tax(&super_params(), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn benefit_is_marginal_rate_minus_super_rate() {
        let result = tax_benefit(&super_params(), dec!(10000), dec!(0.325));

        // 10000 * (0.325 - 0.15) = 1750
        assert_eq!(result, dec!(1750.00));
    }

    #[test]
    fn benefit_is_zero_at_equal_rates() {
        let result = tax_benefit(&super_params(), dec!(10000), dec!(0.15));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn benefit_never_negative_below_super_rate() {
        let result = tax_benefit(&super_params(), dec!(10000), dec!(0));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn benefit_is_zero_without_contribution() {
        let result = tax_benefit(&super_params(), dec!(0), dec!(0.45));

        assert_eq!(result, dec!(0));
    }
}
