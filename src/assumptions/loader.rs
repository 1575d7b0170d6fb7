//! CSV-based assumption loader
//!
//! Loads banded assumption tables from CSV files in data/assumptions/

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load age-banded rates from a three-column CSV (min_age, max_age, rate)
fn load_age_bands(path: &Path, file_name: &str) -> Result<Vec<(u8, u8, f64)>, Box<dyn Error>> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bands = Vec::new();
    for result in reader.records() {
        let record = result?;
        let min_age: u8 = record[0].parse()?;
        let max_age: u8 = record[1].parse()?;
        let rate: f64 = record[2].parse()?;
        bands.push((min_age, max_age, rate));
    }

    if bands.is_empty() {
        return Err(format!("{} contains no bands", file_name).into());
    }

    Ok(bands)
}

/// Load surrender charges from CSV
/// Returns Vec<f64> indexed by policy year (1-indexed in file, 0-indexed in vec)
pub fn load_surrender_charges(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path.join("surrender_charges.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut charges = vec![0.0; 15]; // Support up to 15 years
    for result in reader.records() {
        let record = result?;
        let year: usize = record[0].parse()?;
        let charge: f64 = record[1].parse()?;

        if year > 0 && year <= charges.len() {
            charges[year - 1] = charge;
        }
    }

    Ok(charges)
}

/// All table-driven assumptions loaded from CSV files
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    /// COI bands from coi_rates.csv
    pub coi_bands: Vec<(u8, u8, f64)>,

    /// Surrender charges by policy year from surrender_charges.csv
    pub surrender_charges: Vec<f64>,

    /// MEC 7-pay limit bands from seven_pay_limits.csv
    pub seven_pay_bands: Vec<(u8, u8, f64)>,

    /// Savings benchmark bands from savings_benchmarks.csv
    pub benchmark_bands: Vec<(u8, u8, f64)>,
}

impl LoadedAssumptions {
    /// Load every assumption file from a directory
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            coi_bands: load_age_bands(path, "coi_rates.csv")?,
            surrender_charges: load_surrender_charges(path)?,
            seven_pay_bands: load_age_bands(path, "seven_pay_limits.csv")?,
            benchmark_bands: load_age_bands(path, "savings_benchmarks.csv")?,
        })
    }
}
