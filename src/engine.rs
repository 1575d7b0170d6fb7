//! Assessment engine facade
//!
//! Pre-loads assumptions once, then composes the four calculation
//! components for each request. Components are pure and share nothing
//! mutable, so one engine can serve many concurrent evaluations.

use std::error::Error;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentInput, PortfolioSnapshot};
use crate::assumptions::Assumptions;
use crate::error::ValidationError;
use crate::needs::{CoverageNeedsResult, NeedsCalculator};
use crate::projection::{CashValueProjection, CashValueProjector, PolicyIllustration};
use crate::recommend::{DecisionContext, ProductRecommendation, RecommendationEngine, Track};
use crate::scoring::{HealthScore, PortfolioHealthScorer, ScoringContext};

/// Everything one evaluation produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub needs: CoverageNeedsResult,
    pub health: Option<HealthScore>,
    pub recommendation: ProductRecommendation,
    pub projection: Option<CashValueProjection>,
}

/// Pre-loaded engine for running assessments
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    assumptions: Assumptions,
    needs: NeedsCalculator,
    scorer: PortfolioHealthScorer,
    recommender: RecommendationEngine,
    projector: CashValueProjector,
}

impl AssessmentEngine {
    /// Create an engine with the default pricing assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_pricing())
    }

    /// Create an engine with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            needs: NeedsCalculator::new(&assumptions),
            scorer: PortfolioHealthScorer::new(&assumptions),
            recommender: RecommendationEngine::new(&assumptions),
            projector: CashValueProjector::new(&assumptions),
            assumptions,
        }
    }

    /// Create an engine from a CSV assumptions directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the full pipeline for one assessment request
    ///
    /// Needs analysis runs first; the scorer runs when a snapshot is
    /// supplied; the recommendation consumes both; the projector runs
    /// only when the IUL branch is chosen with a positive face amount.
    /// The pipeline fails fast: a validation failure in any stage stops
    /// the chain with no partial result.
    pub fn evaluate(
        &self,
        input: &AssessmentInput,
        snapshot: Option<&PortfolioSnapshot>,
    ) -> Result<AssessmentOutcome, ValidationError> {
        let needs = self.needs.calculate(input)?;

        let health = match snapshot {
            Some(snapshot) => {
                snapshot.validate()?;
                let ctx = ScoringContext {
                    age: input.age,
                    annual_income: input.annual_income(),
                    monthly_expenses: input.monthly_expenses,
                    liquid_savings: input.liquid_savings,
                    existing_face_amount: input.existing_face_amount,
                    net_gap: needs.net_gap,
                };
                Some(self.scorer.score(snapshot, &ctx))
            }
            None => None,
        };

        let recommendation = self.recommender.recommend(&DecisionContext {
            needs: &needs,
            health: health.as_ref(),
            preferences: &input.preferences,
            age: input.age,
        });

        let projection = if recommendation.track == Track::Iul && recommendation.face_amount > 0.0
        {
            let illustration = self.illustration_for(input.age, recommendation.face_amount);
            Some(self.projector.project(&illustration)?)
        } else {
            None
        };

        debug!(
            "evaluated: gap {:.2}, track {:?}",
            needs.net_gap, recommendation.track
        );

        Ok(AssessmentOutcome {
            needs,
            health,
            recommendation,
            projection,
        })
    }

    /// Build the pipeline's own illustration for a recommended face
    fn illustration_for(&self, age: u8, face_amount: f64) -> PolicyIllustration {
        let product = &self.assumptions.product;
        PolicyIllustration {
            face_amount,
            annual_premium: face_amount / 1_000.0 * product.illustrative_premium_per_1000,
            crediting_rate: product.default_crediting_rate,
            horizon_years: product.illustrative_horizon_years,
            issue_age: age,
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{MaritalStatus, PreferenceFlags, PriceSensitivity};

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

    fn sample_snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            stocks: 50_000.0,
            bonds: 20_000.0,
            cash: 10_000.0,
            real_estate: 0.0,
            alternatives: 0.0,
        }
    }

    #[test]
    fn test_pipeline_without_snapshot() {
        let engine = AssessmentEngine::new();
        let outcome = engine.evaluate(&sample_input(), None).unwrap();

        assert!(outcome.needs.has_gap());
        assert!(outcome.health.is_none());
        assert_eq!(outcome.recommendation.track, Track::Term);
        assert!(outcome.projection.is_none());
    }

    #[test]
    fn test_pipeline_iul_branch_runs_projector() {
        let engine = AssessmentEngine::new();
        let mut input = sample_input();
        input.preferences.wants_cash_value_growth = true;
        input.preferences.price_sensitivity = PriceSensitivity::Low;

        let outcome = engine.evaluate(&input, Some(&sample_snapshot())).unwrap();

        assert_eq!(outcome.recommendation.track, Track::Iul);
        let projection = outcome.projection.expect("IUL branch projects");
        assert_eq!(
            projection.horizon_years(),
            engine.assumptions().product.illustrative_horizon_years
        );
        assert!(outcome.health.is_some());
    }

    #[test]
    fn test_sufficient_coverage_skips_projection() {
        let engine = AssessmentEngine::new();
        let mut input = sample_input();
        input.monthly_income = 0.0;
        input.mortgage_balance = 0.0;
        input.other_debt = 0.0;
        input.education_cost_per_child = 0.0;
        input.legacy_amount = 0.0;
        input.funeral_estimate = 0.0;
        input.liquid_savings = 50_000.0;

        let outcome = engine.evaluate(&input, None).unwrap();
        assert_eq!(outcome.needs.net_gap, 0.0);
        assert_eq!(outcome.recommendation.face_amount, 0.0);
        assert!(outcome.projection.is_none());
    }

    #[test]
    fn test_validation_failure_stops_pipeline() {
        let engine = AssessmentEngine::new();
        let mut input = sample_input();
        input.monthly_income = -1.0;
        assert!(engine.evaluate(&input, None).is_err());

        let bad_snapshot = PortfolioSnapshot {
            stocks: -5.0,
            ..Default::default()
        };
        assert!(engine.evaluate(&sample_input(), Some(&bad_snapshot)).is_err());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let engine = AssessmentEngine::new();
        let input = sample_input();
        let snapshot = sample_snapshot();

        let first = engine.evaluate(&input, Some(&snapshot)).unwrap();
        let second = engine.evaluate(&input, Some(&snapshot)).unwrap();

        assert_eq!(first, second);
        // Byte-identical serialized output, no hidden state
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_offset_monotonicity_through_pipeline() {
        let engine = AssessmentEngine::new();
        let mut input = sample_input();

        let base = engine.evaluate(&input, None).unwrap();
        input.investment_value += 100_000.0;
        let richer = engine.evaluate(&input, None).unwrap();

        assert!(richer.needs.net_gap <= base.needs.net_gap);
    }
}
