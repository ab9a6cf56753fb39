use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net income broken down across pay periodicities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeHomePay {
    /// Net income / 12.
    pub monthly: Decimal,

    /// Net income / 26.
    pub fortnightly: Decimal,

    /// Net income / 52.
    pub weekly: Decimal,

    /// Net income / 365.
    pub daily: Decimal,
}

/// Position of an income within the progressive bracket schedule.
///
/// In the top (unbounded) bracket, `current_bracket_max` is `None` and both
/// `next_threshold` and `distance_to_next` are zero, signalling "no next
/// bracket" rather than a negative or missing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketInfo {
    /// Zero-based index into the schedule.
    pub bracket_index: usize,

    /// Upper bound of the current bracket, `None` when unbounded.
    pub current_bracket_max: Option<Decimal>,

    /// Income at which the next bracket begins (0 in the top bracket).
    pub next_threshold: Decimal,

    /// Dollars of headroom before the next bracket (0 in the top bracket).
    pub distance_to_next: Decimal,
}

/// Full breakdown produced by one federal tax calculation.
///
/// All amounts are annual and rounded half-up to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Gross annual income as supplied.
    pub gross_income: Decimal,

    /// Gross income less salary sacrifice and work deductions, floored at 0.
    pub taxable_income: Decimal,

    /// Progressive income tax from the residency schedule.
    pub base_tax: Decimal,

    /// Medicare levy (zero for non-residents).
    pub medicare_levy: Decimal,

    /// Medicare levy surcharge (zero for non-residents or the insured).
    pub medicare_levy_surcharge: Decimal,

    /// Low income tax offset (zero for non-residents).
    pub low_income_tax_offset: Decimal,

    /// Compulsory HELP/HECS repayment, capped at the remaining debt.
    pub help_repayment: Decimal,

    /// Base tax + levies + HELP − offset, floored at zero.
    pub total_tax: Decimal,

    /// Voluntary contribution plus salary sacrifice.
    pub total_super_contribution: Decimal,

    /// Contributions tax paid inside the super fund.
    pub super_contributions_tax: Decimal,

    /// `total_tax` plus the super contributions tax.
    pub total_tax_with_super: Decimal,

    /// Gross income minus total tax and super contributions.
    pub net_income: Decimal,

    /// `total_tax / taxable_income` (zero when taxable income is zero).
    pub effective_rate: Decimal,

    /// Rate of the bracket containing the taxable income.
    pub marginal_rate: Decimal,

    /// Net income split across pay periodicities.
    pub take_home: TakeHomePay,

    /// Bracket position of the taxable income.
    pub bracket_info: TaxBracketInfo,

    /// Estimated tax saved by the super contributions versus paying the
    /// marginal rate on the same dollars.
    pub super_tax_saving: Decimal,
}
