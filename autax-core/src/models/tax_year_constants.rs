use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors raised when a constants table fails authoring validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstantsError {
    /// A bracket schedule has no entries at all.
    #[error("{schedule} bracket schedule is empty")]
    EmptySchedule { schedule: &'static str },

    /// The first bracket of a schedule does not start at zero.
    #[error("{schedule} schedule must start at 0, first bracket starts at {min}")]
    ScheduleDoesNotStartAtZero { schedule: &'static str, min: Decimal },

    /// Two adjacent brackets leave a gap or overlap.
    #[error("{schedule} schedule is not contiguous at index {index}: previous max {previous_max}, next min {next_min}")]
    ScheduleNotContiguous {
        schedule: &'static str,
        index: usize,
        previous_max: Decimal,
        next_min: Decimal,
    },

    /// A non-final bracket has an unbounded max, or the final bracket is bounded.
    #[error("{schedule} schedule must have exactly one unbounded top bracket")]
    ScheduleNotCapped { schedule: &'static str },

    /// A bracket's base tax disagrees with the cumulative tax at its min.
    #[error("{schedule} schedule base tax discontinuity at index {index}: expected {expected}, got {actual}")]
    BaseTaxDiscontinuity {
        schedule: &'static str,
        index: usize,
        expected: Decimal,
        actual: Decimal,
    },

    /// A rate is outside `[0, 1]`.
    #[error("{schedule} rate at index {index} must be between 0 and 1, got {rate}")]
    RateOutOfRange {
        schedule: &'static str,
        index: usize,
        rate: Decimal,
    },

    /// HELP or surcharge rates must not decrease with income.
    #[error("{schedule} rate decreases at index {index}")]
    RateDecreases { schedule: &'static str, index: usize },
}

/// Medicare levy parameters: flat rate, low-income thresholds and the
/// phase-in rate applied between a threshold and 1.25× that threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareLevyParams {
    /// Flat levy rate applied above the phase-in ceiling (0.02 for 2%).
    pub rate: Decimal,

    /// Low-income threshold for singles.
    pub single_threshold: Decimal,

    /// Low-income threshold for families (before dependent increments).
    pub family_threshold: Decimal,

    /// Low-income threshold for senior/pensioner singles.
    pub senior_single_threshold: Decimal,

    /// Low-income threshold for senior/pensioner families.
    pub senior_family_threshold: Decimal,

    /// Added to the family thresholds for each dependent child.
    pub dependent_threshold_increment: Decimal,

    /// Rate applied to income above the threshold inside the phase-in band.
    pub phase_in_rate: Decimal,
}

/// One Medicare levy surcharge tier. The base tier carries a zero rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeTier {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// Low income tax offset parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitoParams {
    /// Offset granted in full at or below `full_offset_threshold`.
    pub max_offset: Decimal,

    /// Income at or below which the full offset applies.
    pub full_offset_threshold: Decimal,

    /// Income at which the phase-out begins.
    pub phase_out_start: Decimal,

    /// Income at or above which the offset is nil.
    pub phase_out_end: Decimal,

    /// Cents-per-dollar reduction across the phase-out band.
    pub phase_out_rate: Decimal,

    /// Floor the phased-out offset is clamped to (zero in published tables).
    pub min_offset: Decimal,
}

/// One income band of the HELP/HECS repayment-rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// Superannuation parameters.
///
/// The contribution caps are carried for reference but are not enforced by
/// the engine: excess-contributions tax is not modelled, matching the
/// published calculator this engine reproduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperannuationParams {
    /// Flat tax rate on concessional contributions (0.15 for 15%).
    pub contribution_tax_rate: Decimal,

    /// Annual concessional contributions cap.
    pub concessional_cap: Decimal,

    /// Annual non-concessional contributions cap.
    pub non_concessional_cap: Decimal,
}

/// Immutable bracket, threshold and rate tables for one financial year.
///
/// `tax_year` is the calendar year the financial year ends in, so 2025
/// means FY 2024-25 (ending 30 June 2025). Tables are constructed once at
/// startup and passed by reference to
/// [`FederalTaxCalculator`](crate::calculations::FederalTaxCalculator);
/// nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConstants {
    pub tax_year: i32,
    pub resident_brackets: Vec<TaxBracket>,
    pub non_resident_brackets: Vec<TaxBracket>,
    pub medicare: MedicareLevyParams,
    pub surcharge_tiers: Vec<SurchargeTier>,
    pub lito: LitoParams,
    pub help_schedule: Vec<HelpBracket>,
    pub superannuation: SuperannuationParams,
}

impl TaxYearConstants {
    /// Validates the table against its structural invariants.
    ///
    /// Checks that each bracket schedule is non-empty, starts at zero, is
    /// contiguous, ends in a single unbounded top bracket, carries rates in
    /// `[0, 1]`, and (for the income tax schedules) that each bracket's
    /// `base_tax` equals the cumulative tax at its `min_income`. HELP and
    /// surcharge schedules must also have non-decreasing rates.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConstantsError`] found.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        validate_tax_schedule("resident", &self.resident_brackets)?;
        validate_tax_schedule("non-resident", &self.non_resident_brackets)?;
        validate_rate_schedule(
            "surcharge",
            &self
                .surcharge_tiers
                .iter()
                .map(|t| (t.min_income, t.max_income, t.rate))
                .collect::<Vec<_>>(),
        )?;
        validate_rate_schedule(
            "HELP",
            &self
                .help_schedule
                .iter()
                .map(|b| (b.min_income, b.max_income, b.rate))
                .collect::<Vec<_>>(),
        )?;
        Ok(())
    }
}

fn validate_coverage(
    schedule: &'static str,
    bounds: &[(Decimal, Option<Decimal>)],
) -> Result<(), ConstantsError> {
    if bounds.is_empty() {
        return Err(ConstantsError::EmptySchedule { schedule });
    }

    let first_min = bounds[0].0;
    if first_min != Decimal::ZERO {
        return Err(ConstantsError::ScheduleDoesNotStartAtZero {
            schedule,
            min: first_min,
        });
    }

    for (index, window) in bounds.windows(2).enumerate() {
        let (_, prev_max) = window[0];
        let (next_min, _) = window[1];
        match prev_max {
            None => return Err(ConstantsError::ScheduleNotCapped { schedule }),
            Some(prev_max) if prev_max != next_min => {
                return Err(ConstantsError::ScheduleNotContiguous {
                    schedule,
                    index: index + 1,
                    previous_max: prev_max,
                    next_min,
                });
            }
            Some(_) => {}
        }
    }

    if bounds[bounds.len() - 1].1.is_some() {
        return Err(ConstantsError::ScheduleNotCapped { schedule });
    }

    Ok(())
}

fn validate_tax_schedule(
    schedule: &'static str,
    brackets: &[TaxBracket],
) -> Result<(), ConstantsError> {
    let bounds: Vec<_> = brackets.iter().map(|b| (b.min_income, b.max_income)).collect();
    validate_coverage(schedule, &bounds)?;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
            return Err(ConstantsError::RateOutOfRange {
                schedule,
                index,
                rate: bracket.tax_rate,
            });
        }
    }

    // base_tax of bracket i must equal the cumulative tax at its min, i.e.
    // the previous bracket taken to its max.
    for (index, window) in brackets.windows(2).enumerate() {
        let prev = &window[0];
        let next = &window[1];
        let expected = prev.base_tax + (next.min_income - prev.min_income) * prev.tax_rate;
        if expected != next.base_tax {
            return Err(ConstantsError::BaseTaxDiscontinuity {
                schedule,
                index: index + 1,
                expected,
                actual: next.base_tax,
            });
        }
    }

    Ok(())
}

fn validate_rate_schedule(
    schedule: &'static str,
    bands: &[(Decimal, Option<Decimal>, Decimal)],
) -> Result<(), ConstantsError> {
    let bounds: Vec<_> = bands.iter().map(|&(min, max, _)| (min, max)).collect();
    validate_coverage(schedule, &bounds)?;

    for (index, &(_, _, rate)) in bands.iter().enumerate() {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ConstantsError::RateOutOfRange {
                schedule,
                index,
                rate,
            });
        }
        if index > 0 && rate < bands[index - 1].2 {
            return Err(ConstantsError::RateDecreases { schedule, index });
        }
    }

    Ok(())
}
