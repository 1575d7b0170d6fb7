//! Portfolio health scorer
//!
//! Five independently computed categories: four positive-weight
//! categories summed, then the real-estate concentration penalty
//! subtracted, then the result clamped to [0, 100].

use log::debug;

use crate::assessment::{AssetClass, PortfolioSnapshot};
use crate::assumptions::{Assumptions, SavingsBenchmark, ScoringWeights};

use super::{Concern, HealthScore, ScoreBreakdown};

/// Household figures the scorer needs beyond the snapshot itself
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    pub age: u8,
    pub annual_income: f64,
    pub monthly_expenses: f64,
    pub liquid_savings: f64,
    pub existing_face_amount: f64,
    /// Net coverage gap from the needs analysis
    pub net_gap: f64,
}

/// Scores an asset allocation 0-100 against age-indexed benchmarks
#[derive(Debug, Clone)]
pub struct PortfolioHealthScorer {
    benchmark: SavingsBenchmark,
    weights: ScoringWeights,
}

impl PortfolioHealthScorer {
    /// Create a scorer using the given assumptions
    pub fn new(assumptions: &Assumptions) -> Self {
        Self {
            benchmark: assumptions.benchmark.clone(),
            weights: assumptions.weights.clone(),
        }
    }

    /// Score a snapshot
    ///
    /// An empty portfolio is a valid real-world state: it scores 0 with
    /// an `EmptyPortfolio` concern rather than failing on the undefined
    /// allocation ratios.
    pub fn score(&self, snapshot: &PortfolioSnapshot, ctx: &ScoringContext) -> HealthScore {
        if snapshot.total() <= 0.0 {
            return HealthScore {
                score: 0,
                breakdown: ScoreBreakdown::default(),
                concerns: vec![Concern::EmptyPortfolio],
            };
        }

        let breakdown = ScoreBreakdown {
            diversification: self.diversification_points(snapshot),
            size_adequacy: self.size_adequacy_points(snapshot, ctx),
            liquidity: self.liquidity_points(ctx),
            insurance_coverage: self.insurance_points(ctx),
            concentration_penalty: self.concentration_penalty(snapshot),
        };

        let raw = breakdown.diversification
            + breakdown.size_adequacy
            + breakdown.liquidity
            + breakdown.insurance_coverage
            - breakdown.concentration_penalty;
        let score = raw.clamp(0.0, 100.0).round() as u8;

        let concerns = self.concerns_for(&breakdown);
        debug!("health score {} ({:?})", score, breakdown);

        HealthScore {
            score,
            breakdown,
            concerns,
        }
    }

    /// Diversity on a diminishing-returns curve over the number of
    /// classes holding at least the significant share
    ///
    /// 1 class earns nothing; each additional class earns half the
    /// remaining headroom, reaching full points at 4+.
    fn diversification_points(&self, snapshot: &PortfolioSnapshot) -> f64 {
        let classes = snapshot.classes_at_or_above(self.weights.significant_share);
        let fraction = match classes {
            0 | 1 => 0.0,
            2 => 0.5,
            3 => 0.8,
            _ => 1.0,
        };
        self.weights.diversification * fraction
    }

    /// Size vs. the age-indexed income-multiple benchmark, linear below
    ///
    /// With no income the benchmark target is zero and the ratio is
    /// undefined; any assets at all earn full points in that case.
    fn size_adequacy_points(&self, snapshot: &PortfolioSnapshot, ctx: &ScoringContext) -> f64 {
        let target = self.benchmark.target_assets(ctx.age, ctx.annual_income);
        if target <= 0.0 {
            return self.weights.size_adequacy;
        }
        let ratio = (snapshot.total() / target).min(1.0);
        self.weights.size_adequacy * ratio
    }

    /// Liquidity runway, full points at the target months of expenses
    fn liquidity_points(&self, ctx: &ScoringContext) -> f64 {
        if ctx.monthly_expenses <= 0.0 {
            return self.weights.liquidity;
        }
        let months = ctx.liquid_savings / ctx.monthly_expenses;
        let ratio = (months / self.weights.liquidity_target_months).min(1.0);
        self.weights.liquidity * ratio
    }

    /// Coverage of the net gap by in-force insurance, capped at full
    fn insurance_points(&self, ctx: &ScoringContext) -> f64 {
        if ctx.net_gap <= 0.0 {
            return self.weights.insurance_coverage;
        }
        let ratio = (ctx.existing_face_amount / ctx.net_gap).min(1.0);
        self.weights.insurance_coverage * ratio
    }

    /// Penalty once real estate exceeds the threshold share, scaling
    /// linearly with the excess up to the full penalty at 100% real estate
    fn concentration_penalty(&self, snapshot: &PortfolioSnapshot) -> f64 {
        let share = snapshot.share(AssetClass::RealEstate);
        let threshold = self.weights.real_estate_threshold;
        if share <= threshold {
            return 0.0;
        }
        let excess_fraction = ((share - threshold) / (1.0 - threshold)).min(1.0);
        self.weights.concentration_penalty * excess_fraction
    }

    fn concerns_for(&self, breakdown: &ScoreBreakdown) -> Vec<Concern> {
        let mut concerns = Vec::new();
        if breakdown.diversification < self.weights.diversification * 0.5 {
            concerns.push(Concern::LowDiversification);
        }
        if breakdown.size_adequacy < self.weights.size_adequacy * 0.5 {
            concerns.push(Concern::BelowSizeBenchmark);
        }
        if breakdown.liquidity < self.weights.liquidity * 0.5 {
            concerns.push(Concern::ThinLiquidity);
        }
        if breakdown.insurance_coverage < self.weights.insurance_coverage * 0.5 {
            concerns.push(Concern::CoverageShortfall);
        }
        if breakdown.concentration_penalty > 0.0 {
            concerns.push(Concern::RealEstateConcentration);
        }
        concerns
    }
}
