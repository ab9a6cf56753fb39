//! Built-in constant tables, one constructor per supported financial year.
//!
//! Values reproduce the published tables the product ships for each year;
//! every table passes [`TaxYearConstants::validate`].

use autax_core::{
    HelpBracket, LitoParams, MedicareLevyParams, SuperannuationParams, SurchargeTier, TaxBracket,
    TaxYearConstants,
};
use rust_decimal_macros::dec;

/// Constants for FY 2024-25 (year ending 30 June 2025).
pub fn financial_year_2024_25() -> TaxYearConstants {
    TaxYearConstants {
        tax_year: 2025,
        resident_brackets: vec![
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
        ],
        non_resident_brackets: vec![
            TaxBracket {
                min_income: dec!(0),
                max_income: Some(dec!(120000)),
                tax_rate: dec!(0.325),
                base_tax: dec!(0),
            },
            TaxBracket {
                min_income: dec!(120000),
                max_income: Some(dec!(180000)),
                tax_rate: dec!(0.37),
                base_tax: dec!(39000),
            },
            TaxBracket {
                min_income: dec!(180000),
                max_income: None,
                tax_rate: dec!(0.45),
                base_tax: dec!(61200),
            },
        ],
        medicare: MedicareLevyParams {
            rate: dec!(0.02),
            single_threshold: dec!(26000),
            family_threshold: dec!(43846),
            senior_single_threshold: dec!(41089),
            senior_family_threshold: dec!(57198),
            dependent_threshold_increment: dec!(4027),
            phase_in_rate: dec!(0.10),
        },
        surcharge_tiers: vec![
            SurchargeTier {
                min_income: dec!(0),
                max_income: Some(dec!(93000)),
                rate: dec!(0),
            },
            SurchargeTier {
                min_income: dec!(93000),
                max_income: Some(dec!(108000)),
                rate: dec!(0.01),
            },
            SurchargeTier {
                min_income: dec!(108000),
                max_income: Some(dec!(144000)),
                rate: dec!(0.0125),
            },
            SurchargeTier {
                min_income: dec!(144000),
                max_income: None,
                rate: dec!(0.015),
            },
        ],
        lito: LitoParams {
            max_offset: dec!(700),
            full_offset_threshold: dec!(37500),
            phase_out_start: dec!(37500),
            phase_out_end: dec!(66667),
            phase_out_rate: dec!(0.05),
            min_offset: dec!(0),
        },
        help_schedule: help_schedule_2024_25(),
        superannuation: SuperannuationParams {
            contribution_tax_rate: dec!(0.15),
            concessional_cap: dec!(27500),
            non_concessional_cap: dec!(110000),
        },
    }
}

fn help_schedule_2024_25() -> Vec<HelpBracket> {
    // (min, max, rate); the nil band runs to the first repayment threshold.
    let bands = [
        (dec!(0), Some(dec!(51550)), dec!(0)),
        (dec!(51550), Some(dec!(59518)), dec!(0.01)),
        (dec!(59518), Some(dec!(63089)), dec!(0.02)),
        (dec!(63089), Some(dec!(66875)), dec!(0.025)),
        (dec!(66875), Some(dec!(70888)), dec!(0.03)),
        (dec!(70888), Some(dec!(75140)), dec!(0.035)),
        (dec!(75140), Some(dec!(79649)), dec!(0.04)),
        (dec!(79649), Some(dec!(84429)), dec!(0.045)),
        (dec!(84429), Some(dec!(89494)), dec!(0.05)),
        (dec!(89494), Some(dec!(94865)), dec!(0.055)),
        (dec!(94865), Some(dec!(100557)), dec!(0.06)),
        (dec!(100557), Some(dec!(106590)), dec!(0.065)),
        (dec!(106590), Some(dec!(112985)), dec!(0.07)),
        (dec!(112985), Some(dec!(119764)), dec!(0.075)),
        (dec!(119764), Some(dec!(126950)), dec!(0.08)),
        (dec!(126950), Some(dec!(134568)), dec!(0.085)),
        (dec!(134568), Some(dec!(142642)), dec!(0.09)),
        (dec!(142642), Some(dec!(151200)), dec!(0.095)),
        (dec!(151200), None, dec!(0.10)),
    ];

    bands
        .into_iter()
        .map(|(min_income, max_income, rate)| HelpBracket {
            min_income,
            max_income,
            rate,
        })
        .collect()
}
