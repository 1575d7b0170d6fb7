//! Load assessments from intake JSON and household batch CSV files

use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;
use serde::Deserialize;

use super::{
    AssessmentInput, MaritalStatus, PortfolioSnapshot, PreferenceFlags, PriceSensitivity,
};

/// Raw intake record as uploaded by the collaborating intake layer
///
/// Age may be given directly or derived from `date_of_birth` as of the
/// `as_of` valuation date. Whole completed years; the derivation is
/// deterministic for a fixed `as_of`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRecord {
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    pub marital_status: MaritalStatus,
    pub dependents: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub mortgage_balance: f64,
    #[serde(default)]
    pub other_debt: f64,
    #[serde(default)]
    pub education_cost_per_child: f64,
    #[serde(default)]
    pub education_years_remaining: u32,
    #[serde(default)]
    pub legacy_amount: f64,
    #[serde(default)]
    pub funeral_estimate: f64,
    #[serde(default)]
    pub liquid_savings: f64,
    #[serde(default)]
    pub investment_value: f64,
    #[serde(default)]
    pub existing_face_amount: f64,
    pub wants_cash_value_growth: bool,
    pub price_sensitivity: PriceSensitivity,
    #[serde(default)]
    pub inflation_rate: Option<f64>,
}

impl AssessmentRecord {
    /// Convert a raw record into an engine input
    pub fn into_input(self) -> Result<AssessmentInput, Box<dyn Error>> {
        let age = match (self.age, self.date_of_birth, self.as_of) {
            (Some(age), _, _) => age,
            (None, Some(dob), Some(as_of)) => {
                let years = as_of
                    .years_since(dob)
                    .ok_or("date_of_birth is after the as_of date")?;
                u8::try_from(years)?
            }
            (None, Some(_), None) => {
                return Err("date_of_birth given without an as_of date".into());
            }
            (None, None, _) => return Err("record has neither age nor date_of_birth".into()),
        };

        Ok(AssessmentInput {
            age,
            marital_status: self.marital_status,
            dependents: self.dependents,
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            mortgage_balance: self.mortgage_balance,
            other_debt: self.other_debt,
            education_cost_per_child: self.education_cost_per_child,
            education_years_remaining: self.education_years_remaining,
            legacy_amount: self.legacy_amount,
            funeral_estimate: self.funeral_estimate,
            liquid_savings: self.liquid_savings,
            investment_value: self.investment_value,
            existing_face_amount: self.existing_face_amount,
            preferences: PreferenceFlags {
                wants_cash_value_growth: self.wants_cash_value_growth,
                price_sensitivity: self.price_sensitivity,
            },
            inflation_rate: self.inflation_rate.unwrap_or(0.03),
        })
    }
}

/// Load a single assessment from an intake JSON file
pub fn load_assessment(path: &Path) -> Result<AssessmentInput, Box<dyn Error>> {
    let file = File::open(path)?;
    let record: AssessmentRecord = serde_json::from_reader(file)?;
    record.into_input()
}

/// Raw CSV row for batch household files
#[derive(Debug, Deserialize)]
struct HouseholdRow {
    age: u8,
    marital_status: String,
    dependents: u32,
    monthly_income: f64,
    monthly_expenses: f64,
    mortgage_balance: f64,
    other_debt: f64,
    education_cost_per_child: f64,
    education_years_remaining: u32,
    legacy_amount: f64,
    funeral_estimate: f64,
    liquid_savings: f64,
    investment_value: f64,
    existing_face_amount: f64,
    wants_cash_value_growth: bool,
    price_sensitivity: String,
    stocks: f64,
    bonds: f64,
    cash: f64,
    real_estate: f64,
    alternatives: f64,
}

impl HouseholdRow {
    fn into_household(self) -> Result<(AssessmentInput, PortfolioSnapshot), Box<dyn Error>> {
        let marital_status = match self.marital_status.as_str() {
            "single" => MaritalStatus::Single,
            "married" => MaritalStatus::Married,
            "partnered" => MaritalStatus::Partnered,
            other => return Err(format!("Unknown marital_status: {}", other).into()),
        };

        let price_sensitivity = match self.price_sensitivity.as_str() {
            "low" => PriceSensitivity::Low,
            "medium" => PriceSensitivity::Medium,
            "high" => PriceSensitivity::High,
            other => return Err(format!("Unknown price_sensitivity: {}", other).into()),
        };

        let input = AssessmentInput {
            age: self.age,
            marital_status,
            dependents: self.dependents,
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            mortgage_balance: self.mortgage_balance,
            other_debt: self.other_debt,
            education_cost_per_child: self.education_cost_per_child,
            education_years_remaining: self.education_years_remaining,
            legacy_amount: self.legacy_amount,
            funeral_estimate: self.funeral_estimate,
            liquid_savings: self.liquid_savings,
            investment_value: self.investment_value,
            existing_face_amount: self.existing_face_amount,
            preferences: PreferenceFlags {
                wants_cash_value_growth: self.wants_cash_value_growth,
                price_sensitivity,
            },
            inflation_rate: 0.03,
        };

        let snapshot = PortfolioSnapshot {
            stocks: self.stocks,
            bonds: self.bonds,
            cash: self.cash,
            real_estate: self.real_estate,
            alternatives: self.alternatives,
        };

        Ok((input, snapshot))
    }
}

/// Load a batch of households from CSV
pub fn load_households(
    path: &Path,
) -> Result<Vec<(AssessmentInput, PortfolioSnapshot)>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(file);

    let mut households = Vec::new();
    for result in reader.deserialize() {
        let row: HouseholdRow = result?;
        households.push(row.into_household()?);
    }

    Ok(households)
}
