//! Input validation for [`TaxCalculationInput`].
//!
//! The calculator assumes well-formed input and does not defensively
//! re-validate; callers run [`validate_input`] first and surface the
//! returned error (which names the offending field) to the user.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TaxCalculationInput;

/// Sane ceiling on annual income: one billion dollars. Anything above this
/// is treated as an entry error rather than a calculation request.
pub const MAX_ANNUAL_INCOME: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Sane ceiling on dependent children.
pub const MAX_DEPENDENTS: u32 = 20;

/// Errors raised when an input record violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A monetary field is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// Annual income exceeds [`MAX_ANNUAL_INCOME`].
    #[error("annual income {value} exceeds the supported ceiling of {ceiling}")]
    IncomeAboveCeiling { value: Decimal, ceiling: Decimal },

    /// Dependent count exceeds [`MAX_DEPENDENTS`].
    #[error("number of dependents {value} exceeds the supported maximum of {maximum}")]
    TooManyDependents { value: u32, maximum: u32 },
}

/// Checks every invariant on the input record.
///
/// # Errors
///
/// Returns the first violation found, naming the offending field.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use autax_core::{Residency, TaxCalculationInput, validate_input};
///
/// let mut input = TaxCalculationInput::new(dec!(80000), Residency::Resident);
/// assert!(validate_input(&input).is_ok());
///
/// input.help_debt = dec!(-1);
/// assert!(validate_input(&input).is_err());
/// ```
pub fn validate_input(input: &TaxCalculationInput) -> Result<(), ValidationError> {
    let monetary_fields = [
        ("annual_income", input.annual_income),
        ("super_contribution", input.super_contribution),
        ("salary_sacrifice", input.salary_sacrifice),
        ("help_debt", input.help_debt),
        ("work_deductions", input.work_deductions),
    ];

    for (field, value) in monetary_fields {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount { field, value });
        }
    }

    if input.annual_income > MAX_ANNUAL_INCOME {
        return Err(ValidationError::IncomeAboveCeiling {
            value: input.annual_income,
            ceiling: MAX_ANNUAL_INCOME,
        });
    }

    if input.number_of_dependents > MAX_DEPENDENTS {
        return Err(ValidationError::TooManyDependents {
            value: input.number_of_dependents,
            maximum: MAX_DEPENDENTS,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Residency;

    #[test]
    fn accepts_defaulted_input() {
        let input = TaxCalculationInput::new(dec!(80000), Residency::Resident);

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn accepts_zero_income() {
        let input = TaxCalculationInput::new(dec!(0), Residency::Resident);

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn rejects_negative_income_naming_the_field() {
        let input = TaxCalculationInput::new(dec!(-5), Residency::Resident);

        assert_eq!(
            validate_input(&input),
            Err(ValidationError::NegativeAmount {
                field: "annual_income",
                value: dec!(-5),
            })
        );
    }

    #[test]
    fn rejects_negative_help_debt() {
        let mut input = TaxCalculationInput::new(dec!(50000), Residency::Resident);
        input.help_debt = dec!(-100);

        assert_eq!(
            validate_input(&input),
            Err(ValidationError::NegativeAmount {
                field: "help_debt",
                value: dec!(-100),
            })
        );
    }

    #[test]
    fn rejects_income_above_ceiling() {
        let input = TaxCalculationInput::new(dec!(2000000000), Residency::Resident);

        assert_eq!(
            validate_input(&input),
            Err(ValidationError::IncomeAboveCeiling {
                value: dec!(2000000000),
                ceiling: MAX_ANNUAL_INCOME,
            })
        );
    }

    #[test]
    fn accepts_income_at_ceiling() {
        let input = TaxCalculationInput::new(dec!(1000000000), Residency::Resident);

        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn rejects_absurd_dependent_count() {
        let mut input = TaxCalculationInput::new(dec!(50000), Residency::Resident);
        input.number_of_dependents = 99;

        assert_eq!(
            validate_input(&input),
            Err(ValidationError::TooManyDependents {
                value: 99,
                maximum: MAX_DEPENDENTS,
            })
        );
    }
}
