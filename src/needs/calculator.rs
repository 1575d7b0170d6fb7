//! Coverage-needs calculator

use log::debug;

use crate::assessment::AssessmentInput;
use crate::assumptions::{Assumptions, PlanningRules};
use crate::error::ValidationError;

use super::CoverageNeedsResult;

/// Computes total coverage need and the funding gap
///
/// Pure function of its input; never fails for in-range input and fails
/// with a field-level `ValidationError` otherwise.
#[derive(Debug, Clone)]
pub struct NeedsCalculator {
    planning: PlanningRules,
}

impl NeedsCalculator {
    /// Create a calculator using the given assumptions
    pub fn new(assumptions: &Assumptions) -> Self {
        Self {
            planning: assumptions.planning.clone(),
        }
    }

    /// Compute the coverage-needs result for a validated input
    pub fn calculate(&self, input: &AssessmentInput) -> Result<CoverageNeedsResult, ValidationError> {
        input.validate()?;

        let income_replacement = self.income_replacement(input);
        let debt_coverage = input.mortgage_balance + input.other_debt;
        let education_funding = self.education_funding(input);
        let final_expenses = input.funeral_estimate + input.legacy_amount;

        let result = CoverageNeedsResult::from_components(
            income_replacement,
            debt_coverage,
            education_funding,
            final_expenses,
            input.offsettable_assets(),
        );

        debug!(
            "needs: gross {:.2}, offsets {:.2}, gap {:.2}",
            result.gross_need, result.offsettable_assets, result.net_gap
        );

        Ok(result)
    }

    /// Income replacement = annual income * replacement years * ratio
    ///
    /// Replacement years span to the retirement-age proxy, floored so
    /// near-retirement applicants keep a minimum span and capped so young
    /// applicants are not quoted an unrealistic payout.
    fn income_replacement(&self, input: &AssessmentInput) -> f64 {
        let years = self.planning.replacement_years(input.age);
        input.annual_income() * years as f64 * self.planning.income_replacement_ratio
    }

    /// Education funding compounds each remaining year at the given
    /// inflation rate, summed across the horizon, per dependent
    fn education_funding(&self, input: &AssessmentInput) -> f64 {
        if input.dependents == 0 || input.education_years_remaining == 0 {
            return 0.0;
        }

        let per_child: f64 = (0..input.education_years_remaining)
            .map(|t| input.education_cost_per_child * (1.0 + input.inflation_rate).powi(t as i32))
            .sum();

        per_child * input.dependents as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::assessment::{MaritalStatus, PreferenceFlags, PriceSensitivity};

    fn calculator() -> NeedsCalculator {
        NeedsCalculator::new(&Assumptions::default_pricing())
    }

    fn bare_input(age: u8, monthly_income: f64) -> AssessmentInput {
        AssessmentInput {
            age,
            marital_status: MaritalStatus::Single,
            dependents: 0,
            monthly_income,
            monthly_expenses: 0.0,
            mortgage_balance: 0.0,
            other_debt: 0.0,
            education_cost_per_child: 0.0,
            education_years_remaining: 0,
            legacy_amount: 0.0,
            funeral_estimate: 0.0,
            liquid_savings: 0.0,
            investment_value: 0.0,
            existing_face_amount: 0.0,
            preferences: PreferenceFlags {
                wants_cash_value_growth: false,
                price_sensitivity: PriceSensitivity::Medium,
            },
            inflation_rate: 0.03,
        }
    }

    #[test]
    fn test_scenario_income_replacement_only() {
        // Age 35, $6,000/mo, nothing else: gross need is income
        // replacement alone and the gap equals the gross need
        let result = calculator().calculate(&bare_input(35, 6_000.0)).unwrap();

        // 6000 * 12 * 30 * 0.75
        assert_eq!(result.income_replacement, 1_620_000.0);
        assert_eq!(result.gross_need, result.income_replacement);
        assert_eq!(result.net_gap, result.gross_need);
    }

    #[test]
    fn test_zero_income_is_valid() {
        let result = calculator().calculate(&bare_input(35, 0.0)).unwrap();
        assert_eq!(result.income_replacement, 0.0);
        assert_eq!(result.gross_need, 0.0);
    }

    #[test]
    fn test_education_zero_without_dependents() {
        let mut input = bare_input(35, 5_000.0);
        input.education_cost_per_child = 10_000.0;
        input.education_years_remaining = 10;
        // dependents still 0
        let result = calculator().calculate(&input).unwrap();
        assert_eq!(result.education_funding, 0.0);
    }

    #[test]
    fn test_education_compounds_at_inflation() {
        let mut input = bare_input(35, 0.0);
        input.dependents = 2;
        input.education_cost_per_child = 10_000.0;
        input.education_years_remaining = 3;

        let result = calculator().calculate(&input).unwrap();

        // Per child: 10000 * (1 + 1.03 + 1.03^2)
        let per_child = 10_000.0 * (1.0 + 1.03 + 1.03_f64.powi(2));
        assert_relative_eq!(result.education_funding, 2.0 * per_child, epsilon = 0.01);
    }

    #[test]
    fn test_offsets_clamp_gap_to_zero() {
        let mut input = bare_input(60, 2_000.0);
        input.liquid_savings = 500_000.0;
        let result = calculator().calculate(&input).unwrap();
        // 2000 * 12 * 5 * 0.75 = 90,000 gross, fully offset
        assert_eq!(result.gross_need, 90_000.0);
        assert_eq!(result.net_gap, 0.0);
    }

    #[test]
    fn test_income_monotonicity() {
        let low = calculator().calculate(&bare_input(40, 4_000.0)).unwrap();
        let high = calculator().calculate(&bare_input(40, 4_500.0)).unwrap();
        assert!(high.income_replacement > low.income_replacement);
    }

    #[test]
    fn test_dependents_monotonicity() {
        let mut input = bare_input(40, 0.0);
        input.education_cost_per_child = 5_000.0;
        input.education_years_remaining = 8;

        input.dependents = 1;
        let one = calculator().calculate(&input).unwrap();
        input.dependents = 3;
        let three = calculator().calculate(&input).unwrap();
        assert!(three.education_funding > one.education_funding);
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let mut input = bare_input(40, 5_000.0);
        input.other_debt = -1.0;
        assert!(calculator().calculate(&input).is_err());
    }
}
