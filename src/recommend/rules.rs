//! Ordered decision rules for Term vs. IUL selection
//!
//! The branching logic is a fixed, ordered list of tagged
//! predicate+action pairs evaluated in sequence; the first matching rule
//! wins. Keeping each rule a pure pair makes the table auditable and
//! testable rule by rule.

use log::debug;

use crate::assessment::{PreferenceFlags, PriceSensitivity};
use crate::assumptions::{Assumptions, IulProductRules, PlanningRules};
use crate::money::round_up_to;
use crate::needs::CoverageNeedsResult;
use crate::scoring::HealthScore;

use super::types::{ProductRecommendation, RationaleTag, Track};

/// Everything a rule may inspect
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub needs: &'a CoverageNeedsResult,
    pub health: Option<&'a HealthScore>,
    pub preferences: &'a PreferenceFlags,
    pub age: u8,
}

/// A single decision rule: a predicate plus the recommendation it makes
struct DecisionRule {
    tag: RationaleTag,
    applies: fn(&DecisionContext, &PlanningRules) -> bool,
    decide: fn(&DecisionContext, &PlanningRules, &IulProductRules) -> ProductRecommendation,
}

/// Rule table in evaluation order; the last rule always applies
const RULES: &[DecisionRule] = &[
    // Cost-driven applicants who do not want cash value get term
    DecisionRule {
        tag: RationaleTag::PriceSensitive,
        applies: |ctx, _| {
            ctx.preferences.price_sensitivity == PriceSensitivity::High
                && !ctx.preferences.wants_cash_value_growth
        },
        decide: |ctx, planning, _| ProductRecommendation {
            track: Track::Term,
            face_amount: rounded_face(ctx, planning),
            duration_years: planning.term_duration(ctx.age),
            rationale: vec![RationaleTag::PriceSensitive],
        },
    },
    // Cash-value preference within the supported issue-age range
    DecisionRule {
        tag: RationaleTag::CashValueGrowth,
        applies: |ctx, planning| {
            ctx.preferences.wants_cash_value_growth && ctx.age <= planning.iul_max_issue_age
        },
        decide: |ctx, planning, product| ProductRecommendation {
            track: Track::Iul,
            face_amount: rounded_face(ctx, planning),
            duration_years: product.illustrative_horizon_years,
            rationale: vec![RationaleTag::CashValueGrowth],
        },
    },
    // Nothing to cover: no new coverage
    DecisionRule {
        tag: RationaleTag::ExistingCoverageSufficient,
        applies: |ctx, _| !ctx.needs.has_gap(),
        decide: |ctx, planning, _| ProductRecommendation {
            track: Track::Term,
            face_amount: 0.0,
            duration_years: planning.term_duration(ctx.age),
            rationale: vec![RationaleTag::ExistingCoverageSufficient],
        },
    },
    // Fallback
    DecisionRule {
        tag: RationaleTag::DefaultTerm,
        applies: |_, _| true,
        decide: |ctx, planning, _| ProductRecommendation {
            track: Track::Term,
            face_amount: rounded_face(ctx, planning),
            duration_years: planning.term_duration(ctx.age),
            rationale: vec![RationaleTag::DefaultTerm],
        },
    },
];

fn rounded_face(ctx: &DecisionContext, planning: &PlanningRules) -> f64 {
    round_up_to(ctx.needs.net_gap, planning.face_rounding)
}

/// Chooses Term vs. IUL and a duration from the needs gap, scorer
/// output, and preference flags
///
/// Pure decision table; never fails.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    planning: PlanningRules,
    product: IulProductRules,
}

impl RecommendationEngine {
    /// Create an engine using the given assumptions
    pub fn new(assumptions: &Assumptions) -> Self {
        Self {
            planning: assumptions.planning.clone(),
            product: assumptions.product.clone(),
        }
    }

    /// Evaluate the rule table; the first matching rule wins
    pub fn recommend(&self, ctx: &DecisionContext) -> ProductRecommendation {
        let rule = RULES
            .iter()
            .find(|rule| (rule.applies)(ctx, &self.planning))
            .expect("rule table ends with a catch-all");

        let mut recommendation = (rule.decide)(ctx, &self.planning, &self.product);
        debug!("rule {:?} fired: {:?}", rule.tag, recommendation.track);

        // Informational: a weak portfolio is worth the advisor's
        // attention regardless of which rule fired
        if let Some(health) = ctx.health {
            if health.score < 50 {
                recommendation.rationale.push(RationaleTag::WeakPortfolioHealth);
            }
        }

        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreBreakdown;

    fn needs_with_gap(net_gap: f64) -> CoverageNeedsResult {
        CoverageNeedsResult::from_components(net_gap, 0.0, 0.0, 0.0, 0.0)
    }

    fn prefs(wants_cash_value: bool, sensitivity: PriceSensitivity) -> PreferenceFlags {
        PreferenceFlags {
            wants_cash_value_growth: wants_cash_value,
            price_sensitivity: sensitivity,
        }
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(&Assumptions::default_pricing())
    }

    #[test]
    fn test_price_sensitive_senior_gets_floored_term() {
        // Age 60: 65 - 60 = 5, floored to 10
        let needs = needs_with_gap(123_000.0);
        let preferences = prefs(false, PriceSensitivity::High);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 60,
        });

        assert_eq!(rec.track, Track::Term);
        assert_eq!(rec.duration_years, 10);
        assert_eq!(rec.face_amount, 130_000.0);
        assert_eq!(rec.rationale, vec![RationaleTag::PriceSensitive]);
    }

    #[test]
    fn test_cash_value_preference_within_age_range_gets_iul() {
        let needs = needs_with_gap(400_000.0);
        let preferences = prefs(true, PriceSensitivity::Low);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 45,
        });

        assert_eq!(rec.track, Track::Iul);
        assert_eq!(rec.duration_years, 20);
        assert_eq!(rec.face_amount, 400_000.0);
    }

    #[test]
    fn test_cash_value_preference_past_age_cutoff_falls_through() {
        let needs = needs_with_gap(400_000.0);
        let preferences = prefs(true, PriceSensitivity::Low);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 56,
        });

        assert_eq!(rec.track, Track::Term);
        assert_eq!(rec.rationale, vec![RationaleTag::DefaultTerm]);
    }

    #[test]
    fn test_zero_gap_recommends_no_new_coverage() {
        let needs = needs_with_gap(0.0);
        let preferences = prefs(false, PriceSensitivity::Low);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 40,
        });

        assert_eq!(rec.track, Track::Term);
        assert_eq!(rec.face_amount, 0.0);
        assert_eq!(
            rec.rationale,
            vec![RationaleTag::ExistingCoverageSufficient]
        );
    }

    #[test]
    fn test_rule_order_price_sensitivity_beats_zero_gap() {
        // Price-sensitive applicant with no gap: rule 1 still fires
        // first, quoting a zero face term policy
        let needs = needs_with_gap(0.0);
        let preferences = prefs(false, PriceSensitivity::High);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 40,
        });

        assert_eq!(rec.rationale, vec![RationaleTag::PriceSensitive]);
        assert_eq!(rec.face_amount, 0.0);
    }

    #[test]
    fn test_default_rule_duration_clamps() {
        let needs = needs_with_gap(200_000.0);
        let preferences = prefs(false, PriceSensitivity::Low);

        // Age 25: 65 - 25 = 40, capped at 30
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 25,
        });
        assert_eq!(rec.duration_years, 30);

        // Age 50: 65 - 50 = 15, within bounds
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 50,
        });
        assert_eq!(rec.duration_years, 15);
    }

    #[test]
    fn test_face_amount_rounds_up_to_ten_thousand() {
        let needs = needs_with_gap(123_456.78);
        let preferences = prefs(false, PriceSensitivity::Low);
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: None,
            preferences: &preferences,
            age: 40,
        });
        assert_eq!(rec.face_amount, 130_000.0);
    }

    #[test]
    fn test_weak_health_score_noted() {
        let needs = needs_with_gap(100_000.0);
        let preferences = prefs(false, PriceSensitivity::Low);
        let health = HealthScore {
            score: 35,
            breakdown: ScoreBreakdown::default(),
            concerns: Vec::new(),
        };
        let rec = engine().recommend(&DecisionContext {
            needs: &needs,
            health: Some(&health),
            preferences: &preferences,
            age: 40,
        });

        assert!(rec.rationale.contains(&RationaleTag::WeakPortfolioHealth));
        // Informational only: the track is unchanged
        assert_eq!(rec.track, Track::Term);
    }
}
