use std::collections::BTreeSet;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use autax_data::{ConstantsRegistry, ScheduleLoader};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Load bracket schedule data from a CSV file over the built-in constant
/// tables and validate the result.
///
/// The CSV file should have the following columns:
/// - tax_year: calendar year the financial year ends in (e.g., 2025)
/// - schedule: residency code, R (resident) or N (non-resident)
/// - min_income: lower bound of the bracket
/// - max_income: upper bound (empty for the unbounded top bracket)
/// - base_tax: cumulative tax at min_income
/// - rate: marginal rate as a decimal (e.g., 0.19)
#[derive(Parser, Debug)]
#[command(name = "autax-tables")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket schedule data
    #[arg(short, long)]
    file: PathBuf,

    /// Only load rows for this tax year
    #[arg(short, long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Loading bracket schedules from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let mut records = ScheduleLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    if let Some(year) = args.year {
        records.retain(|r| r.tax_year == year);
        if records.is_empty() {
            bail!("No records for tax year {} in {}", year, args.file.display());
        }
    }

    println!("Parsed {} records from CSV", records.len());

    let touched_years: BTreeSet<i32> = records.iter().map(|r| r.tax_year).collect();

    let mut registry = ConstantsRegistry::builtin();
    let installed = ScheduleLoader::load(&mut registry, &records)
        .context("Failed to apply bracket schedules")?;

    println!("Installed {} brackets.", installed);

    for year in touched_years {
        let constants = registry
            .get(year)
            .with_context(|| format!("Tax year {year} missing after load"))?;
        constants
            .validate()
            .with_context(|| format!("Tax year {year} failed validation"))?;
        println!(
            "Tax year {}: {} resident brackets, {} non-resident brackets — OK",
            year,
            constants.resident_brackets.len(),
            constants.non_resident_brackets.len(),
        );
    }

    Ok(())
}
