//! Medicare levy and Medicare levy surcharge.
//!
//! The levy is a flat-rate charge phased in above a low-income threshold;
//! the surcharge is a tiered extra charge on higher earners without private
//! health insurance. Both are computed on the individual's income only —
//! combined family income is not modelled, even for family thresholds. That
//! reproduces the published calculator this engine mirrors and is a known
//! limitation, not an oversight.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{FamilyStatus, MedicareLevyParams, SurchargeTier};

/// Phase-in ceiling multiplier: the levy reaches its flat rate at
/// 1.25 × the low-income threshold.
const PHASE_IN_CEILING_FACTOR: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Selects the low-income threshold for the taxpayer's situation.
///
/// Family thresholds grow by the per-dependent increment; single thresholds
/// do not.
fn levy_threshold(
    params: &MedicareLevyParams,
    family_status: FamilyStatus,
    number_of_dependents: u32,
    is_senior: bool,
) -> Decimal {
    let base = match (is_senior, family_status) {
        (false, FamilyStatus::Single) => params.single_threshold,
        (false, FamilyStatus::Family) => params.family_threshold,
        (true, FamilyStatus::Single) => params.senior_single_threshold,
        (true, FamilyStatus::Family) => params.senior_family_threshold,
    };

    match family_status {
        FamilyStatus::Single => base,
        FamilyStatus::Family => {
            base + params.dependent_threshold_increment * Decimal::from(number_of_dependents)
        }
    }
}

/// Calculates the Medicare levy on an individual's income.
///
/// Below the threshold the levy is nil; between the threshold and
/// 1.25 × threshold it phases in at `phase_in_rate` on the excess, capped at
/// the flat-rate levy so the phase-in can never exceed it; above the ceiling
/// the flat rate applies to the whole income.
///
/// Residency gating is the orchestrator's job: this function is pure over
/// its arguments and does not know about residency.
pub fn calculate_medicare_levy(
    params: &MedicareLevyParams,
    income: Decimal,
    family_status: FamilyStatus,
    number_of_dependents: u32,
    is_senior: bool,
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let threshold = levy_threshold(params, family_status, number_of_dependents, is_senior);
    if income <= threshold {
        return Decimal::ZERO;
    }

    let flat_levy = income * params.rate;
    let ceiling = threshold * PHASE_IN_CEILING_FACTOR;

    if income <= ceiling {
        // Round the phased amount before clamping so rounding can never
        // lift it above the flat-rate levy it is capped by.
        let phased = round_half_up((income - threshold) * params.phase_in_rate);
        return phased.min(flat_levy);
    }

    round_half_up(flat_levy)
}

/// Calculates the Medicare levy surcharge.
///
/// Private health insurance exempts the surcharge unconditionally. Otherwise
/// the tier containing `income` sets the rate applied to the whole income;
/// the base tier carries a zero rate. Tiers are keyed by individual income
/// regardless of family status (documented limitation, see module docs).
pub fn calculate_levy_surcharge(
    tiers: &[SurchargeTier],
    income: Decimal,
    has_private_health_insurance: bool,
) -> Decimal {
    if has_private_health_insurance || income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let tier = tiers
        .iter()
        .find(|t| income > t.min_income && t.max_income.is_none_or(|max| income <= max))
        .or_else(|| {
            if !tiers.is_empty() {
                warn!(income = %income, "no surcharge tier contains income; using the top tier");
            }
            tiers.last()
        });

    match tier {
        Some(tier) => round_half_up(income * tier.rate),
        None => Decimal::ZERO,
    }
}
