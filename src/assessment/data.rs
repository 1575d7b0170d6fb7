//! Assessment input structures matching the intake questionnaire format

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default inflation adjustment: 3% per year
fn default_inflation_rate() -> f64 {
    0.03
}

/// Marital status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Partnered,
}

/// How strongly premium cost drives the applicant's product choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSensitivity {
    Low,
    Medium,
    High,
}

/// Product preference flags collected during intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    /// Whether the applicant wants a policy that accumulates cash value
    pub wants_cash_value_growth: bool,

    /// Premium cost sensitivity
    pub price_sensitivity: PriceSensitivity,
}

/// A single household assessment record
///
/// All currency and count fields must be non-negative; age bounds the
/// projection horizon. `validate` is called at the pipeline boundary
/// before any component runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Current age of the applicant (18-99)
    pub age: u8,

    /// Marital status
    pub marital_status: MaritalStatus,

    /// Number of dependents
    pub dependents: u32,

    /// Monthly gross income
    pub monthly_income: f64,

    /// Monthly living expenses
    pub monthly_expenses: f64,

    /// Outstanding mortgage balance
    pub mortgage_balance: f64,

    /// Other outstanding debt
    pub other_debt: f64,

    /// Annual education cost per child
    pub education_cost_per_child: f64,

    /// Remaining years of education funding per child
    pub education_years_remaining: u32,

    /// Desired legacy amount
    pub legacy_amount: f64,

    /// Funeral / final-expense estimate
    pub funeral_estimate: f64,

    /// Existing liquid savings
    pub liquid_savings: f64,

    /// Existing investment value
    pub investment_value: f64,

    /// Face amount of in-force life insurance
    pub existing_face_amount: f64,

    /// Product preference flags
    pub preferences: PreferenceFlags,

    /// Annual inflation adjustment for education costs
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,
}

impl AssessmentInput {
    /// Minimum supported issue age
    pub const MIN_AGE: u8 = 18;

    /// Maximum supported issue age
    pub const MAX_AGE: u8 = 99;

    /// Check every field against its documented bound
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age < Self::MIN_AGE || self.age > Self::MAX_AGE {
            return Err(ValidationError::AgeOutOfRange {
                value: self.age,
                min: Self::MIN_AGE,
                max: Self::MAX_AGE,
            });
        }

        let currency_fields = [
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("mortgage_balance", self.mortgage_balance),
            ("other_debt", self.other_debt),
            ("education_cost_per_child", self.education_cost_per_child),
            ("legacy_amount", self.legacy_amount),
            ("funeral_estimate", self.funeral_estimate),
            ("liquid_savings", self.liquid_savings),
            ("investment_value", self.investment_value),
            ("existing_face_amount", self.existing_face_amount),
        ];
        for (field, value) in currency_fields {
            if value < 0.0 || !value.is_finite() {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }

        if self.inflation_rate < 0.0 || self.inflation_rate >= 1.0 {
            return Err(ValidationError::RateOutOfRange {
                field: "inflation_rate",
                value: self.inflation_rate,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }

    /// Annual gross income
    pub fn annual_income(&self) -> f64 {
        self.monthly_income * 12.0
    }

    /// Assets that offset the gross coverage need
    pub fn offsettable_assets(&self) -> f64 {
        self.liquid_savings + self.investment_value + self.existing_face_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            age: 35,
            marital_status: MaritalStatus::Married,
            dependents: 2,
            monthly_income: 6_000.0,
            monthly_expenses: 4_000.0,
            mortgage_balance: 250_000.0,
            other_debt: 15_000.0,
            education_cost_per_child: 8_000.0,
            education_years_remaining: 10,
            legacy_amount: 50_000.0,
            funeral_estimate: 12_000.0,
            liquid_savings: 30_000.0,
            investment_value: 80_000.0,
            existing_face_amount: 100_000.0,
            preferences: PreferenceFlags {
                wants_cash_value_growth: false,
                price_sensitivity: PriceSensitivity::Medium,
            },
            inflation_rate: 0.03,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        let mut input = sample_input();
        input.age = 17;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::AgeOutOfRange { value: 17, .. })
        ));

        input.age = 99;
        assert!(input.validate().is_ok());

        input.age = 100;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_currency_rejected() {
        let mut input = sample_input();
        input.mortgage_balance = -1.0;
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "mortgage_balance");
    }

    #[test]
    fn test_inflation_rate_bounds() {
        let mut input = sample_input();
        input.inflation_rate = 1.5;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_offsettable_assets() {
        let input = sample_input();
        assert_eq!(input.offsettable_assets(), 210_000.0);
    }
}
