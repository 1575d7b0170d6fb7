//! Core projection engine for annual cash-value illustrations

use log::debug;

use crate::assumptions::{Assumptions, CoiTable, IulProductRules, SurrenderChargeSchedule};
use crate::error::ValidationError;
use crate::money::round_cents;

use super::rows::{CashValueProjection, ProjectionYear};
use super::state::YearState;

/// Policy parameters for a single illustration
#[derive(Debug, Clone, Copy)]
pub struct PolicyIllustration {
    /// Initial face amount
    pub face_amount: f64,

    /// Level annual premium
    pub annual_premium: f64,

    /// Assumed annual crediting rate
    pub crediting_rate: f64,

    /// Projection horizon in years
    pub horizon_years: u32,

    /// Age of the insured at issue
    pub issue_age: u8,
}

impl PolicyIllustration {
    /// Attained age in a given policy year
    pub fn attained_age(&self, policy_year: u32) -> u8 {
        self.issue_age
            .saturating_add(policy_year.saturating_sub(1).min(u8::MAX as u32) as u8)
    }
}

/// Main cash-value projection engine
///
/// Pure and deterministic: identical illustrations always produce the
/// identical year-by-year sequence.
#[derive(Debug, Clone)]
pub struct CashValueProjector {
    coi: CoiTable,
    surrender: SurrenderChargeSchedule,
    product: IulProductRules,
}

impl CashValueProjector {
    /// Create a projector using the given assumptions
    pub fn new(assumptions: &Assumptions) -> Self {
        Self {
            coi: assumptions.coi.clone(),
            surrender: assumptions.surrender.clone(),
            product: assumptions.product.clone(),
        }
    }

    /// Validate an illustration against the supported bounds
    pub fn validate(&self, illustration: &PolicyIllustration) -> Result<(), ValidationError> {
        let rules = &self.product;

        if illustration.crediting_rate < rules.min_crediting_rate
            || illustration.crediting_rate > rules.max_crediting_rate
        {
            return Err(ValidationError::RateOutOfRange {
                field: "crediting_rate",
                value: illustration.crediting_rate,
                min: rules.min_crediting_rate,
                max: rules.max_crediting_rate,
            });
        }

        if illustration.horizon_years < rules.min_horizon_years
            || illustration.horizon_years > rules.max_horizon_years
        {
            return Err(ValidationError::HorizonOutOfRange {
                value: illustration.horizon_years,
                min: rules.min_horizon_years,
                max: rules.max_horizon_years,
            });
        }

        if illustration.face_amount < 0.0 || !illustration.face_amount.is_finite() {
            return Err(ValidationError::NegativeAmount {
                field: "face_amount",
                value: illustration.face_amount,
            });
        }

        if illustration.annual_premium < 0.0 || !illustration.annual_premium.is_finite() {
            return Err(ValidationError::NegativeAmount {
                field: "annual_premium",
                value: illustration.annual_premium,
            });
        }

        Ok(())
    }

    /// Lazily iterate the year-by-year sequence
    ///
    /// Callers needing only summary figures can stop early; the sequence
    /// is finite and regenerable from the same illustration.
    pub fn years(
        &self,
        illustration: &PolicyIllustration,
    ) -> Result<ProjectionYears<'_>, ValidationError> {
        self.validate(illustration)?;
        Ok(ProjectionYears {
            projector: self,
            illustration: *illustration,
            state: YearState::initial(),
        })
    }

    /// Run the full projection, materializing every year
    pub fn project(
        &self,
        illustration: &PolicyIllustration,
    ) -> Result<CashValueProjection, ValidationError> {
        let years: Vec<ProjectionYear> = self.years(illustration)?.collect();
        debug!(
            "projected {} years, final cash value {:.2}",
            years.len(),
            years.last().map(|y| y.cumulative_cash_value).unwrap_or(0.0)
        );
        Ok(CashValueProjection::new(years))
    }

    /// Calculate a single policy year from the running state
    fn calculate_year(&self, illustration: &PolicyIllustration, state: &YearState) -> ProjectionYear {
        let year = state.year;
        let attained_age = illustration.attained_age(year);

        // Front-loaded policy fees: smaller allocation in year 1
        let allocation_rate = if year == 1 {
            self.product.first_year_allocation
        } else {
            self.product.renewal_allocation
        };
        let premium_paid = illustration.annual_premium;
        let allocated_premium = premium_paid * allocation_rate;

        // COI deducted from the allocation before crediting
        let coi_charge = self.coi.annual_charge(attained_age, illustration.face_amount);
        let net_allocated = allocated_premium - coi_charge;

        // Annual compounding: one credit per year on prior value plus
        // the year's net allocation
        let credited_growth =
            (state.cumulative_cash_value + net_allocated) * illustration.crediting_rate;
        let cumulative_cash_value = state.cumulative_cash_value + net_allocated + credited_growth;

        let surrender_rate = self.surrender.get_rate(year);
        let surrender_charge = cumulative_cash_value.max(0.0) * surrender_rate;
        let net_surrender_value = cumulative_cash_value - surrender_charge;

        // 7-pay MEC check is informational; it never alters the math.
        // The test window is the first seven policy years.
        let cumulative_premiums = state.cumulative_premiums + premium_paid;
        let mec_limit = self.product.seven_pay.cumulative_limit(
            illustration.issue_age,
            illustration.face_amount,
            year,
        );
        let mec_risk =
            year <= 7 && illustration.face_amount > 0.0 && cumulative_premiums > mec_limit;

        ProjectionYear {
            year,
            attained_age,
            premium_paid: round_cents(premium_paid),
            allocated_premium: round_cents(allocated_premium),
            coi_charge: round_cents(coi_charge),
            credited_growth: round_cents(credited_growth),
            cumulative_cash_value: round_cents(cumulative_cash_value),
            surrender_charge: round_cents(surrender_charge),
            net_surrender_value: round_cents(net_surrender_value),
            cumulative_premiums: round_cents(cumulative_premiums),
            mec_risk,
        }
    }
}

/// Lazy, finite iterator over projection years
#[derive(Debug, Clone)]
pub struct ProjectionYears<'a> {
    projector: &'a CashValueProjector,
    illustration: PolicyIllustration,
    state: YearState,
}

impl Iterator for ProjectionYears<'_> {
    type Item = ProjectionYear;

    fn next(&mut self) -> Option<ProjectionYear> {
        if self.state.year > self.illustration.horizon_years {
            return None;
        }

        let row = self.projector.calculate_year(&self.illustration, &self.state);
        self.state.advance(row.cumulative_cash_value, row.premium_paid);
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .illustration
            .horizon_years
            .saturating_sub(self.state.year - 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionYears<'_> {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn projector() -> CashValueProjector {
        CashValueProjector::new(&Assumptions::default_pricing())
    }

    fn test_illustration() -> PolicyIllustration {
        PolicyIllustration {
            face_amount: 500_000.0,
            annual_premium: 6_000.0,
            crediting_rate: 0.065,
            horizon_years: 20,
            issue_age: 40,
        }
    }

    #[test]
    fn test_projection_length_equals_horizon() {
        let projection = projector().project(&test_illustration()).unwrap();
        assert_eq!(projection.horizon_years(), 20);

        let mut illustration = test_illustration();
        illustration.horizon_years = 40;
        let projection = projector().project(&illustration).unwrap();
        assert_eq!(projection.horizon_years(), 40);
    }

    #[test]
    fn test_year_index_monotonic() {
        let projection = projector().project(&test_illustration()).unwrap();
        for (idx, year) in projection.years.iter().enumerate() {
            assert_eq!(year.year, idx as u32 + 1);
        }
    }

    #[test]
    fn test_first_year_allocation_is_front_loaded() {
        let projection = projector().project(&test_illustration()).unwrap();
        assert_relative_eq!(projection.years[0].allocated_premium, 6_000.0 * 0.85);
        assert_relative_eq!(projection.years[1].allocated_premium, 6_000.0 * 0.95);
    }

    #[test]
    fn test_first_year_math() {
        let projection = projector().project(&test_illustration()).unwrap();
        let year1 = &projection.years[0];

        // Age 40, $500k face: COI = 500 * 2.10 = $1,050
        assert_relative_eq!(year1.coi_charge, 1_050.0);

        let net = 6_000.0 * 0.85 - 1_050.0;
        let growth = net * 0.065;
        assert_relative_eq!(year1.credited_growth, round_cents(growth), epsilon = 0.01);
        assert_relative_eq!(
            year1.cumulative_cash_value,
            round_cents(net + growth),
            epsilon = 0.01
        );
    }

    #[test]
    fn test_cash_value_non_decreasing_under_positive_crediting() {
        let projection = projector().project(&test_illustration()).unwrap();
        let mut prev = 0.0;
        for year in &projection.years {
            assert!(
                year.cumulative_cash_value >= prev,
                "cash value decreased in year {}",
                year.year
            );
            prev = year.cumulative_cash_value;
        }
    }

    #[test]
    fn test_coi_increases_with_attained_age() {
        let mut illustration = test_illustration();
        illustration.horizon_years = 40;
        let projection = projector().project(&illustration).unwrap();

        let mut prev = 0.0;
        for year in &projection.years {
            assert!(year.coi_charge >= prev);
            prev = year.coi_charge;
        }
        // Ages span 40-79, so the charge must actually grow
        assert!(projection.years.last().unwrap().coi_charge > projection.years[0].coi_charge);
    }

    #[test]
    fn test_surrender_charge_tapers_off() {
        let projection = projector().project(&test_illustration()).unwrap();

        assert!(projection.years[0].surrender_charge > 0.0);
        assert!(projection.years[0].net_surrender_value < projection.years[0].cumulative_cash_value);

        // Year 11+: schedule exhausted
        let year11 = &projection.years[10];
        assert_eq!(year11.surrender_charge, 0.0);
        assert_eq!(year11.net_surrender_value, year11.cumulative_cash_value);
    }

    #[test]
    fn test_determinism() {
        let a = projector().project(&test_illustration()).unwrap();
        let b = projector().project(&test_illustration()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lazy_iterator_matches_collected() {
        let p = projector();
        let illustration = test_illustration();

        let eager = p.project(&illustration).unwrap();
        let lazy_final = p.years(&illustration).unwrap().last().unwrap();
        assert_eq!(eager.years.last().unwrap(), &lazy_final);

        let iter = p.years(&illustration).unwrap();
        assert_eq!(iter.len(), 20);
    }

    #[test]
    fn test_crediting_rate_bounds_enforced() {
        let mut illustration = test_illustration();
        illustration.crediting_rate = 0.09;
        assert!(matches!(
            projector().project(&illustration),
            Err(ValidationError::RateOutOfRange { .. })
        ));

        illustration.crediting_rate = 0.05;
        assert!(projector().project(&illustration).is_err());
    }

    #[test]
    fn test_horizon_bounds_enforced() {
        let mut illustration = test_illustration();
        illustration.horizon_years = 19;
        assert!(matches!(
            projector().project(&illustration),
            Err(ValidationError::HorizonOutOfRange { .. })
        ));

        illustration.horizon_years = 41;
        assert!(projector().project(&illustration).is_err());
    }

    #[test]
    fn test_mec_flag_on_overfunded_policy() {
        // $100k face at age 40: 7-pay limit is 100 * 33 = $3,300/yr.
        // A $10,000 premium breaches it in year 1.
        let illustration = PolicyIllustration {
            face_amount: 100_000.0,
            annual_premium: 10_000.0,
            crediting_rate: 0.065,
            horizon_years: 20,
            issue_age: 40,
        };
        let projection = projector().project(&illustration).unwrap();
        assert!(projection.years[0].mec_risk);
        assert!(projection.mec_risk);
    }

    #[test]
    fn test_no_mec_flag_on_modest_funding() {
        let projection = projector().project(&test_illustration()).unwrap();
        // $500k face at age 40: annual limit $16,500; $6,000/yr stays
        // under min(t,7) * 16,500 every year
        assert!(!projection.mec_risk);
    }
}
