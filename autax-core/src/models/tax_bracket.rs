use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of a progressive income tax schedule.
///
/// Brackets are contiguous and non-overlapping; the top bracket has
/// `max_income: None` (unbounded). `base_tax` is the cumulative tax owed at
/// `min_income` under the full schedule, so the tax at any income inside the
/// bracket is `base_tax + (income - min_income) * tax_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Whether `income` falls inside this bracket's `(min, max]` range.
    ///
    /// The lower bound is exclusive except for the first bracket, which is
    /// handled by callers starting the scan at `min_income == 0`.
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(min: Decimal, max: Option<Decimal>) -> TaxBracket {
        TaxBracket {
            min_income: min,
            max_income: max,
            tax_rate: dec!(0.19),
            base_tax: dec!(0),
        }
    }

    #[test]
    fn contains_income_inside_bounded_bracket() {
        let b = bracket(dec!(18200), Some(dec!(45000)));

        assert_eq!(b.contains(dec!(30000)), true);
    }

    #[test]
    fn contains_is_inclusive_at_max() {
        let b = bracket(dec!(18200), Some(dec!(45000)));

        assert_eq!(b.contains(dec!(45000)), true);
    }

    #[test]
    fn contains_is_exclusive_at_min() {
        let b = bracket(dec!(18200), Some(dec!(45000)));

        assert_eq!(b.contains(dec!(18200)), false);
    }

    #[test]
    fn unbounded_bracket_contains_any_higher_income() {
        let b = bracket(dec!(180000), None);

        assert_eq!(b.contains(dec!(10000000)), true);
    }
}
