use std::collections::HashMap;
use std::io::Read;

use autax_core::{Residency, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::ConstantsRegistry;

/// Errors that can occur when loading bracket schedule data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid schedule code '{0}' (expected R or N)")]
    InvalidSchedule(String),

    #[error("Tax year {0} is not registered (register its constants first)")]
    UnknownTaxYear(i32),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket schedule CSV file.
///
/// Columns:
/// - `tax_year`: calendar year the financial year ends in (e.g., 2025)
/// - `schedule`: residency code, `R` (resident) or `N` (non-resident)
/// - `min_income`: lower bound of the bracket
/// - `max_income`: upper bound (empty for the unbounded top bracket)
/// - `base_tax`: cumulative tax at `min_income`
/// - `rate`: marginal rate as a decimal (e.g., 0.19 for 19%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleRecord {
    pub tax_year: i32,
    pub schedule: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedule data from CSV files.
///
/// Parsed records overlay the bracket schedules of already-registered years
/// in a [`ConstantsRegistry`]; every other table of the year (Medicare,
/// LITO, HELP, super) is left untouched. Loading the same file twice
/// produces the same registry, since each (year, schedule) group replaces
/// the previous schedule wholesale.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Apply schedule records to the registry.
    ///
    /// Records are grouped by `(tax_year, schedule)`, sorted by
    /// `min_income`, and installed as that year's resident or non-resident
    /// schedule. Returns the number of brackets installed.
    ///
    /// # Errors
    ///
    /// Fails on an unknown schedule code or a tax year with no registered
    /// constants. The registry is checked before any group is applied, so a
    /// failed load leaves it unchanged.
    pub fn load(
        registry: &mut ConstantsRegistry,
        records: &[ScheduleRecord],
    ) -> Result<usize, ScheduleLoaderError> {
        let mut groups: HashMap<(i32, Residency), Vec<&ScheduleRecord>> = HashMap::new();

        for record in records {
            let residency = Residency::parse(&record.schedule)
                .ok_or_else(|| ScheduleLoaderError::InvalidSchedule(record.schedule.clone()))?;
            groups
                .entry((record.tax_year, residency))
                .or_default()
                .push(record);
        }

        for &(tax_year, _) in groups.keys() {
            if registry.get(tax_year).is_none() {
                return Err(ScheduleLoaderError::UnknownTaxYear(tax_year));
            }
        }

        let mut installed = 0;

        for ((tax_year, residency), mut group_records) in groups {
            group_records.sort_by(|a, b| a.min_income.cmp(&b.min_income));

            let brackets: Vec<TaxBracket> = group_records
                .iter()
                .map(|record| TaxBracket {
                    min_income: record.min_income,
                    max_income: record.max_income,
                    tax_rate: record.rate,
                    base_tax: record.base_tax,
                })
                .collect();
            installed += brackets.len();

            // Presence was checked above.
            if let Some(constants) = registry.get_mut(tax_year) {
                match residency {
                    Residency::Resident => constants.resident_brackets = brackets,
                    Residency::NonResident => constants.non_resident_brackets = brackets,
                }
            }
        }

        Ok(installed)
    }
}
